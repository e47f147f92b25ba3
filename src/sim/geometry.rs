//! Planar geometry helpers shared by movement, targeting and placement

use glam::Vec2;

/// Distance from `p` to the closest point on segment `a`-`b`
///
/// A degenerate segment (a == b) is treated as the point `a`.
pub fn distance_point_to_segment(p: Vec2, a: Vec2, b: Vec2) -> f32 {
    let ab = b - a;
    let ab_len_sq = ab.length_squared();
    if ab_len_sq == 0.0 {
        return p.distance(a);
    }

    let t = ((p - a).dot(ab) / ab_len_sq).clamp(0.0, 1.0);
    let closest = a + ab * t;
    p.distance(closest)
}

/// Unit vector pointing from `from` to `to`, or `None` when the points coincide
#[inline]
pub fn direction(from: Vec2, to: Vec2) -> Option<Vec2> {
    (to - from).try_normalize()
}

/// Check whether `p` lies inside the axis-aligned box `[min, max]`
#[inline]
pub fn inside_rect(p: Vec2, min: Vec2, max: Vec2) -> bool {
    p.x >= min.x && p.y >= min.y && p.x <= max.x && p.y <= max.y
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_distance_perpendicular() {
        let d = distance_point_to_segment(
            Vec2::new(50.0, 30.0),
            Vec2::new(0.0, 0.0),
            Vec2::new(100.0, 0.0),
        );
        assert!((d - 30.0).abs() < 1e-5);
    }

    #[test]
    fn test_segment_distance_past_endpoint() {
        // Beyond the end, distance is to the endpoint itself
        let d = distance_point_to_segment(
            Vec2::new(103.0, 4.0),
            Vec2::new(0.0, 0.0),
            Vec2::new(100.0, 0.0),
        );
        assert!((d - 5.0).abs() < 1e-5);
    }

    #[test]
    fn test_segment_distance_degenerate() {
        let a = Vec2::new(10.0, 10.0);
        let d = distance_point_to_segment(Vec2::new(13.0, 14.0), a, a);
        assert!((d - 5.0).abs() < 1e-5);
        assert!(d.is_finite());
    }

    #[test]
    fn test_direction_coincident_points() {
        let p = Vec2::new(3.0, 4.0);
        assert!(direction(p, p).is_none());

        let dir = direction(Vec2::ZERO, Vec2::new(3.0, 4.0)).unwrap();
        assert!((dir.length() - 1.0).abs() < 1e-5);
        assert!((dir.x - 0.6).abs() < 1e-5);
    }

    #[test]
    fn test_inside_rect() {
        let min = Vec2::new(0.0, 0.0);
        let max = Vec2::new(10.0, 5.0);
        assert!(inside_rect(Vec2::new(10.0, 5.0), min, max));
        assert!(!inside_rect(Vec2::new(10.1, 2.0), min, max));
        assert!(!inside_rect(Vec2::new(2.0, -0.1), min, max));
    }
}
