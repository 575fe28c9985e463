use crate::models::result::WeightBreakdown;

/// Empty-weight buildup from regressions on light twins, plus the
/// already-sized propulsion system. Ultimate load factor 3.75.
pub fn empty_weight_buildup(
    togw_lb: f64,
    s_wing_ft2: f64,
    aspect_ratio: f64,
    propulsion_lb: f64,
) -> WeightBreakdown {
    let n_ult: f64 = 3.75;

    let wing_lb = 0.04674
        * togw_lb.powf(0.397)
        * s_wing_ft2.powf(0.360)
        * n_ult.powf(0.397)
        * aspect_ratio.powf(1.712);
    let fuselage_lb = 0.23 * togw_lb.sqrt() * 100.0;
    let empennage_lb = 0.04 * togw_lb;
    let landing_gear_lb = 0.02 * togw_lb;
    let systems_lb = 0.2 * togw_lb;

    WeightBreakdown {
        wing_lb,
        fuselage_lb,
        empennage_lb,
        landing_gear_lb,
        propulsion_lb,
        systems_lb,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn buildup_matches_hand_calculation() {
        let breakdown = empty_weight_buildup(6000.0, 200.0, 10.0, 700.0);

        // 0.04674 * 6000^0.397 * 200^0.360 * 3.75^0.397 * 10^1.712
        assert_relative_eq!(breakdown.wing_lb, 866.7, epsilon = 1.0);
        assert_relative_eq!(breakdown.fuselage_lb, 23.0 * 6000.0_f64.sqrt(), epsilon = 1e-9);
        assert_eq!(breakdown.empennage_lb, 240.0);
        assert_eq!(breakdown.landing_gear_lb, 120.0);
        assert_eq!(breakdown.systems_lb, 1200.0);
        assert_eq!(breakdown.propulsion_lb, 700.0);

        let expected_total = breakdown.wing_lb
            + breakdown.fuselage_lb
            + 240.0
            + 120.0
            + 1200.0
            + 700.0;
        assert_relative_eq!(breakdown.total_lb(), expected_total, epsilon = 1e-9);
    }

    #[test]
    fn fractions_scale_with_gross_weight() {
        let light = empty_weight_buildup(4000.0, 150.0, 8.0, 500.0);
        let heavy = empty_weight_buildup(8000.0, 150.0, 8.0, 500.0);

        assert_eq!(heavy.empennage_lb, 2.0 * light.empennage_lb);
        assert_eq!(heavy.landing_gear_lb, 2.0 * light.landing_gear_lb);
        assert_eq!(heavy.systems_lb, 2.0 * light.systems_lb);
        // Wing regression grows sublinearly in weight
        assert!(heavy.wing_lb < 2.0 * light.wing_lb);
    }
}
