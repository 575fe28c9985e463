use crate::constants::PI;

/// Clean-configuration drag polar and lift limits.
#[derive(Debug, Clone)]
pub struct AerodynamicSpec {
    pub aspect_ratio: f64,
    pub oswald_efficiency: f64,
    pub cd0: f64,
    /// Induced-drag factor 1/(π·AR·e), fixed at construction.
    pub k1: f64,
    pub cl_max_clean: f64,
    pub cl_max_takeoff: f64,
    pub cl_max_landing: f64,
}

impl AerodynamicSpec {
    pub fn new(
        aspect_ratio: f64,
        oswald_efficiency: f64,
        cd0: f64,
        cl_max_clean: f64,
        cl_max_takeoff: f64,
        cl_max_landing: f64,
    ) -> Self {
        AerodynamicSpec {
            aspect_ratio,
            oswald_efficiency,
            cd0,
            k1: 1.0 / (PI * aspect_ratio * oswald_efficiency),
            cl_max_clean,
            cl_max_takeoff,
            cl_max_landing,
        }
    }

    /// Parabolic polar CD = CD0 + K1·CL².
    pub fn drag_coefficient(&self, cl: f64) -> f64 {
        self.cd0 + self.k1 * cl * cl
    }
}
