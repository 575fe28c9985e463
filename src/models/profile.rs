use crate::models::segment::SegmentKind;

/// Per-segment power-split schedule: hybridization fraction Hp and
/// whether the blown-lift system runs. Values are stored as given;
/// the sizing entry points reject Hp outside [0, 1].
#[derive(Debug, Clone)]
pub struct HybridizationProfile {
    hybridization: [f64; SegmentKind::COUNT],
    blown_lift: [bool; SegmentKind::COUNT],
}

impl HybridizationProfile {
    /// Zero hybridization everywhere; blowers on for the low-speed
    /// phases (takeoff, climb, landing), off elsewhere.
    pub fn new() -> Self {
        let mut profile = HybridizationProfile {
            hybridization: [0.0; SegmentKind::COUNT],
            blown_lift: [false; SegmentKind::COUNT],
        };
        for kind in [SegmentKind::Takeoff, SegmentKind::Climb, SegmentKind::Landing] {
            profile.blown_lift[kind.index()] = true;
        }
        profile
    }

    /// Design-point default: Hp applied on takeoff, climb, and landing,
    /// pure turbine for cruise, descent, and loiter.
    pub fn default_for(hp_design: f64) -> Self {
        let mut profile = HybridizationProfile::new();
        for kind in [SegmentKind::Takeoff, SegmentKind::Climb, SegmentKind::Landing] {
            profile.hybridization[kind.index()] = hp_design;
        }
        profile
    }

    pub fn hybridization_for(&self, kind: SegmentKind) -> f64 {
        self.hybridization[kind.index()]
    }

    pub fn blown_lift_for(&self, kind: SegmentKind) -> bool {
        self.blown_lift[kind.index()]
    }

    pub fn set_hybridization(&mut self, kind: SegmentKind, hp: f64) {
        self.hybridization[kind.index()] = hp;
    }

    pub fn set_blown_lift(&mut self, kind: SegmentKind, active: bool) {
        self.blown_lift[kind.index()] = active;
    }

    /// Largest Hp over the mission; the motor is sized for this.
    pub fn max_hybridization(&self) -> f64 {
        self.hybridization.iter().cloned().fold(0.0, f64::max)
    }
}

impl Default for HybridizationProfile {
    fn default() -> Self {
        HybridizationProfile::new()
    }
}
