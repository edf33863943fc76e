//! Star perspective.
//!
//! Stars slide along the ray from their own screen position toward the
//! vanishing point, reaching it at `z == universe_depth`. Their radius shrinks
//! with `depth / (depth + z)`: full size at `z == 0`, half at the far end, and
//! growing without bound as `z` approaches `-depth`.

use crate::config::SceneConfig;
use crate::geometry::Point3;

/// Screen placement and size of one star.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ProjectedStar {
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub radius: f64,
}

/// Projects a star onto the canvas.
///
/// Returns `None` when the star is at or behind `-universe_depth` (the scale
/// denominator vanishes there) or when the result is not a finite, positive
/// radius. Such stars are simply not drawn for the frame.
pub fn project_star(star: &Point3, config: &SceneConfig) -> Option<ProjectedStar> {
    let depth = config.universe_depth;
    let vanishing = config.vanishing_point();

    let denom = depth + star.z;
    if !(denom > 0.0) {
        return None;
    }

    let scale = depth / denom;
    let radius = config.star_radius * scale;
    if !scale.is_finite() || !radius.is_finite() || !(radius > 0.0) {
        return None;
    }

    Some(ProjectedStar {
        x: star.x + ((vanishing.x - star.x) / vanishing.z) * star.z,
        y: star.y + ((vanishing.y - star.y) / vanishing.z) * star.z,
        scale,
        radius,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> SceneConfig {
        SceneConfig::default()
    }

    #[test]
    fn zero_depth_is_identity_at_full_size() {
        let c = config();
        let p = project_star(&Point3::new(123.0, 456.0, 0.0), &c).expect("visible");
        assert_eq!((p.x, p.y), (123.0, 456.0));
        assert_eq!(p.scale, 1.0);
        assert_eq!(p.radius, c.star_radius);
    }

    #[test]
    fn far_end_is_half_size_at_vanishing_point() {
        let c = config();
        let p = project_star(&Point3::new(100.0, 50.0, c.universe_depth), &c).expect("visible");
        assert_eq!(p.scale, 0.5);
        assert_eq!(p.radius, c.star_radius / 2.0);
        assert!((p.x - 400.0).abs() < 1e-9);
        assert!((p.y - 300.0).abs() < 1e-9);
    }

    #[test]
    fn halfway_is_halfway_toward_center() {
        let c = config();
        let p = project_star(&Point3::new(0.0, 0.0, c.universe_depth / 2.0), &c).expect("visible");
        assert!((p.x - 200.0).abs() < 1e-9);
        assert!((p.y - 150.0).abs() < 1e-9);
    }

    #[test]
    fn near_side_grows_and_moves_outward() {
        let c = config();
        let p = project_star(&Point3::new(200.0, 300.0, -1000.0), &c).expect("visible");
        assert_eq!(p.scale, 2.0);
        assert_eq!(p.radius, 8.0);
        // Away from the vanishing point (400, 300).
        assert!((p.x - 100.0).abs() < 1e-9);
        assert_eq!(p.y, 300.0);
    }

    #[test]
    fn exactly_minus_depth_is_skipped() {
        let c = config();
        assert!(project_star(&Point3::new(1.0, 1.0, -c.universe_depth), &c).is_none());
    }

    #[test]
    fn behind_minus_depth_is_skipped() {
        let c = config();
        assert!(project_star(&Point3::new(1.0, 1.0, -c.universe_depth - 5.0), &c).is_none());
    }

    #[test]
    fn zero_radius_config_draws_nothing() {
        let c = SceneConfig { star_radius: 0.0, ..config() };
        assert!(project_star(&Point3::new(1.0, 1.0, 0.0), &c).is_none());
    }

    #[test]
    fn just_inside_minus_depth_is_large_but_finite() {
        let c = config();
        let p = project_star(&Point3::new(1.0, 1.0, -c.universe_depth + 0.5), &c).expect("visible");
        assert!(p.radius.is_finite());
        assert_eq!(p.scale, 4000.0);
    }
}
