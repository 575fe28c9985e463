/// Distributed-electric-propulsion blown-lift system: high-lift motors
/// ahead of the wing that raise usable CLmax over the blown span.
#[derive(Debug, Clone)]
pub struct DepSystem {
    pub enabled: bool,
    pub lift_augmentation_factor_max: f64,
    pub blown_span_fraction: f64,
    pub number_of_highlift_motors: usize,
    pub motor_power_kw: f64,
    /// When set, the constraint analyzer sizes the wing with blown CLmax.
    pub use_for_wing_sizing: bool,
}

impl DepSystem {
    pub fn disabled() -> Self {
        DepSystem {
            enabled: false,
            lift_augmentation_factor_max: 1.0,
            blown_span_fraction: 0.0,
            number_of_highlift_motors: 0,
            motor_power_kw: 0.0,
            use_for_wing_sizing: false,
        }
    }

    /// Span-weighted lift augmentation. Exactly 1.0 whenever the system
    /// is disabled or the blowers are off this phase.
    pub fn lift_augmentation_factor(&self, active: bool) -> f64 {
        if self.enabled && active {
            1.0 + (self.lift_augmentation_factor_max - 1.0) * self.blown_span_fraction
        } else {
            1.0
        }
    }

    /// Total high-lift motor draw while blowing, kW.
    pub fn highlift_power_kw(&self, active: bool) -> f64 {
        if self.enabled && active {
            self.number_of_highlift_motors as f64 * self.motor_power_kw
        } else {
            0.0
        }
    }
}
