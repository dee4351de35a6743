//! Analytic mean lunar node, used as the estimate when the provider cannot
//! compute the node.
//!
//! Mean longitude of the Moon's ascending node from Meeus, *Astronomical
//! Algorithms* (2nd ed.), eq. 47.7. Good to well under a degree across the
//! range of historical birth dates.

use crate::time::julian::julian_centuries_since_j2000;

/// Mean daily motion of the node in degrees per day (retrograde).
pub const MEAN_NODE_DAILY_MOTION: f64 = -0.052_953_8;

/// Mean North Node ecliptic longitude in degrees [0, 360).
pub fn mean_north_node_deg(jd_ut: f64) -> f64 {
    let t = julian_centuries_since_j2000(jd_ut);
    let omega = 125.044_547_9 - 1_934.136_289_1 * t + 0.002_075_4 * t * t + t * t * t / 467_441.0
        - t * t * t * t / 60_616_000.0;
    omega.rem_euclid(360.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_node_at_j2000() {
        // Omega at J2000.0 is 125.0445 deg.
        assert!((mean_north_node_deg(2_451_545.0) - 125.044_547_9).abs() < 1e-9);
    }

    #[test]
    fn mean_node_regresses_about_19_degrees_a_year() {
        let a = mean_north_node_deg(2_451_545.0);
        let b = mean_north_node_deg(2_451_545.0 + 365.25);
        let moved = (a - b).rem_euclid(360.0);
        assert!((moved - 19.34).abs() < 0.05, "moved {moved}");
    }

    #[test]
    fn daily_motion_matches_polynomial() {
        let a = mean_north_node_deg(2_451_545.0);
        let b = mean_north_node_deg(2_451_546.0);
        assert!(((b - a) - MEAN_NODE_DAILY_MOTION).abs() < 1e-6);
    }
}
