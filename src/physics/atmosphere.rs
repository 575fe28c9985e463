use crate::constants::*;

/// Static atmosphere state at a geometric altitude.
pub struct Atmosphere {
    pub temperature_k: f64,
    pub pressure_pa: f64,
    pub density_kg_m3: f64,
    pub speed_of_sound_m_s: f64,
}

/// International Standard Atmosphere: linear-lapse troposphere up to
/// 11 km, isothermal stratosphere above.
pub fn atmosisa(altitude_m: f64) -> Atmosphere {
    let (temperature, pressure) = if altitude_m <= 11_000.0 {
        let lapse = -0.0065; // K/m
        let t = T_SL + lapse * altitude_m;
        let p = P_SL * (t / T_SL).powf(-G_0 / (lapse * R_AIR));
        (t, p)
    } else {
        let t = 216.65; // K
        let p_tropopause = 22632.1; // Pa
        let p = p_tropopause * (-G_0 * (altitude_m - 11_000.0) / (R_AIR * t)).exp();
        (t, p)
    };

    let density = pressure / (R_AIR * temperature);
    let speed_of_sound = (1.4 * R_AIR * temperature).sqrt();

    Atmosphere {
        temperature_k: temperature,
        pressure_pa: pressure,
        density_kg_m3: density,
        speed_of_sound_m_s: speed_of_sound,
    }
}

/// Air density in slug/ft³ at an altitude given in feet.
pub fn density_slug_ft3(altitude_ft: f64) -> f64 {
    atmosisa(altitude_ft * FT_TO_M).density_kg_m3 * KG_M3_TO_SLUG_FT3
}

/// Density ratio σ = ρ/ρ_SL at an altitude given in feet.
pub fn sigma(altitude_ft: f64) -> f64 {
    density_slug_ft3(altitude_ft) / RHO_SL_SLUG
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use test_case::test_case;

    #[test]
    fn sea_level_state() {
        let atmo = atmosisa(0.0);
        assert_relative_eq!(atmo.temperature_k, 288.15, epsilon = 1e-10);
        assert_relative_eq!(atmo.pressure_pa, 101325.0, epsilon = 1e-6);
        assert_relative_eq!(atmo.density_kg_m3, 1.225, epsilon = 1e-3);
        assert_relative_eq!(atmo.speed_of_sound_m_s, 340.29, epsilon = 0.01);
    }

    #[test_case(2438.4, 272.30, 0.9629; "8000 ft cruise")]
    #[test_case(5000.0, 255.65, 0.7364; "5 km")]
    #[test_case(11000.0, 216.65, 0.3639; "tropopause")]
    fn troposphere_profile(altitude_m: f64, t_expected: f64, rho_expected: f64) {
        let atmo = atmosisa(altitude_m);
        assert_relative_eq!(atmo.temperature_k, t_expected, epsilon = 0.01);
        assert_relative_eq!(atmo.density_kg_m3, rho_expected, epsilon = 1e-3);
    }

    #[test]
    fn stratosphere_is_isothermal() {
        let lower = atmosisa(12_000.0);
        let upper = atmosisa(18_000.0);
        assert_relative_eq!(lower.temperature_k, 216.65, epsilon = 1e-10);
        assert_relative_eq!(upper.temperature_k, 216.65, epsilon = 1e-10);
        assert!(upper.pressure_pa < lower.pressure_pa);
    }

    #[test]
    fn pressure_continuous_across_tropopause() {
        let below = atmosisa(10_999.9);
        let above = atmosisa(11_000.1);
        assert_relative_eq!(below.pressure_pa, above.pressure_pa, epsilon = 5.0);
    }

    #[test]
    fn sea_level_density_matches_imperial_constant() {
        assert_relative_eq!(density_slug_ft3(0.0), RHO_SL_SLUG, epsilon = 1e-5);
        assert_relative_eq!(sigma(0.0), 1.0, epsilon = 1e-2);
    }
}
