use std::fmt;

/// The six phases of the design mission, in flight order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SegmentKind {
    Takeoff,
    Climb,
    Cruise,
    Descent,
    Loiter,
    Landing,
}

impl SegmentKind {
    pub const COUNT: usize = 6;

    /// Canonical mission order; the simulator walks this exactly once.
    pub const ORDER: [SegmentKind; SegmentKind::COUNT] = [
        SegmentKind::Takeoff,
        SegmentKind::Climb,
        SegmentKind::Cruise,
        SegmentKind::Descent,
        SegmentKind::Loiter,
        SegmentKind::Landing,
    ];

    pub fn index(self) -> usize {
        match self {
            SegmentKind::Takeoff => 0,
            SegmentKind::Climb => 1,
            SegmentKind::Cruise => 2,
            SegmentKind::Descent => 3,
            SegmentKind::Loiter => 4,
            SegmentKind::Landing => 5,
        }
    }

    pub fn from_name(name: &str) -> Option<SegmentKind> {
        match name.to_ascii_lowercase().as_str() {
            "takeoff" => Some(SegmentKind::Takeoff),
            "climb" => Some(SegmentKind::Climb),
            "cruise" => Some(SegmentKind::Cruise),
            "descent" => Some(SegmentKind::Descent),
            "loiter" => Some(SegmentKind::Loiter),
            "landing" => Some(SegmentKind::Landing),
            _ => None,
        }
    }
}

impl fmt::Display for SegmentKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SegmentKind::Takeoff => write!(f, "takeoff"),
            SegmentKind::Climb => write!(f, "climb"),
            SegmentKind::Cruise => write!(f, "cruise"),
            SegmentKind::Descent => write!(f, "descent"),
            SegmentKind::Loiter => write!(f, "loiter"),
            SegmentKind::Landing => write!(f, "landing"),
        }
    }
}

/// One mission leg: the inputs fixed when the profile is built plus the
/// outputs the simulator fills in. Rebuilt fresh every sizing iteration.
#[derive(Debug, Clone)]
pub struct MissionSegment {
    pub kind: SegmentKind,
    pub start_altitude_ft: f64,
    pub end_altitude_ft: f64,
    pub hybridization: f64,
    pub blown_lift_active: bool,

    // Filled by the mission simulator
    pub duration_s: f64,
    pub fuel_burned_lb: f64,
    pub battery_energy_wh: f64,
    pub distance_nm: f64,
}

impl MissionSegment {
    pub fn new(
        kind: SegmentKind,
        start_altitude_ft: f64,
        end_altitude_ft: f64,
        hybridization: f64,
        blown_lift_active: bool,
    ) -> Self {
        MissionSegment {
            kind,
            start_altitude_ft,
            end_altitude_ft,
            hybridization,
            blown_lift_active,
            duration_s: 0.0,
            fuel_burned_lb: 0.0,
            battery_energy_wh: 0.0,
            distance_nm: 0.0,
        }
    }
}
