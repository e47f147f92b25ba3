//! The authored enemy road
//!
//! A path is a polyline of waypoints. Enemies only store how far along it they
//! have travelled (arclength); their 2D position is derived from that scalar.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::error::SetupError;
use super::geometry::distance_point_to_segment;

/// Polyline with precomputed segment lengths
///
/// Serialized as its bare waypoint list; lengths are rebuilt on load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec2>", into = "Vec<Vec2>")]
pub struct Path {
    waypoints: Vec<Vec2>,
    /// Length of segment i (waypoint i to i+1)
    segment_lengths: Vec<f32>,
    total_length: f32,
}

impl Path {
    /// Build a path, precomputing segment lengths once
    pub fn new(waypoints: Vec<Vec2>) -> Result<Self, SetupError> {
        if waypoints.len() < 2 {
            return Err(SetupError::TooFewWaypoints {
                count: waypoints.len(),
            });
        }

        let segment_lengths: Vec<f32> =
            waypoints.windows(2).map(|w| w[0].distance(w[1])).collect();
        let total_length = segment_lengths.iter().sum();

        Ok(Self {
            waypoints,
            segment_lengths,
            total_length,
        })
    }

    /// The default serpentine road, entering above the playfield and exiting below it
    pub fn standard() -> Self {
        let waypoints = [
            (100.0, -40.0),
            (100.0, 160.0),
            (260.0, 160.0),
            (260.0, 340.0),
            (500.0, 340.0),
            (500.0, 160.0),
            (720.0, 160.0),
            (720.0, 520.0),
            (880.0, 520.0),
            (880.0, 820.0),
        ]
        .into_iter()
        .map(|(x, y)| Vec2::new(x, y))
        .collect();

        Self::new(waypoints).expect("standard path has more than one waypoint")
    }

    #[inline]
    pub fn waypoints(&self) -> &[Vec2] {
        &self.waypoints
    }

    #[inline]
    pub fn segment_lengths(&self) -> &[f32] {
        &self.segment_lengths
    }

    #[inline]
    pub fn total_length(&self) -> f32 {
        self.total_length
    }

    /// Iterate over segments as (start, end) pairs
    pub fn segments(&self) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
        self.waypoints.windows(2).map(|w| (w[0], w[1]))
    }

    /// Position after travelling `arclength` along the path
    ///
    /// Clamped to the first waypoint below zero and to the last waypoint past
    /// the end. Zero-length segments are skipped without dividing by zero.
    pub fn position_at(&self, arclength: f32) -> Vec2 {
        if arclength <= 0.0 {
            return self.waypoints[0];
        }

        let mut remaining = arclength;
        for (i, &seg_len) in self.segment_lengths.iter().enumerate() {
            if remaining <= seg_len {
                let start = self.waypoints[i];
                let end = self.waypoints[i + 1];
                // Exact at segment boundaries
                if remaining == seg_len {
                    return end;
                }
                let ratio = remaining / seg_len;
                return start + (end - start) * ratio;
            }
            remaining -= seg_len;
        }

        self.waypoints[self.waypoints.len() - 1]
    }

    /// Shortest distance from `p` to any segment of the path
    pub fn distance_to(&self, p: Vec2) -> f32 {
        self.segments()
            .map(|(a, b)| distance_point_to_segment(p, a, b))
            .fold(f32::INFINITY, f32::min)
    }
}

impl TryFrom<Vec<Vec2>> for Path {
    type Error = SetupError;

    fn try_from(waypoints: Vec<Vec2>) -> Result<Self, Self::Error> {
        Self::new(waypoints)
    }
}

impl From<Path> for Vec<Vec2> {
    fn from(path: Path) -> Self {
        path.waypoints
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn l_path() -> Path {
        Path::new(vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(100.0, 0.0),
            Vec2::new(100.0, 50.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_rejects_short_path() {
        assert_eq!(
            Path::new(vec![Vec2::ZERO]),
            Err(SetupError::TooFewWaypoints { count: 1 })
        );
        assert!(Path::new(Vec::new()).is_err());
    }

    #[test]
    fn test_lengths() {
        let path = l_path();
        assert_eq!(path.segment_lengths(), &[100.0, 50.0]);
        assert_eq!(path.total_length(), 150.0);
    }

    #[test]
    fn test_position_at_boundaries() {
        let path = l_path();
        assert_eq!(path.position_at(0.0), Vec2::new(0.0, 0.0));
        assert_eq!(path.position_at(-5.0), Vec2::new(0.0, 0.0));
        assert_eq!(path.position_at(100.0), Vec2::new(100.0, 0.0));
        assert_eq!(path.position_at(150.0), Vec2::new(100.0, 50.0));
        assert_eq!(path.position_at(1000.0), Vec2::new(100.0, 50.0));
    }

    #[test]
    fn test_position_at_interpolates() {
        let path = l_path();
        assert_eq!(path.position_at(25.0), Vec2::new(25.0, 0.0));
        assert_eq!(path.position_at(125.0), Vec2::new(100.0, 25.0));
    }

    #[test]
    fn test_zero_length_segment() {
        let path = Path::new(vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(10.0, 10.0),
        ])
        .unwrap();
        assert_eq!(path.total_length(), 20.0);
        for a in [0.0, 5.0, 10.0, 15.0, 20.0] {
            let p = path.position_at(a);
            assert!(p.is_finite(), "non-finite position at {a}");
        }
        assert_eq!(path.position_at(15.0), Vec2::new(10.0, 5.0));
    }

    #[test]
    fn test_distance_to() {
        let path = l_path();
        assert!((path.distance_to(Vec2::new(50.0, 20.0)) - 20.0).abs() < 1e-5);
        assert!((path.distance_to(Vec2::new(130.0, 25.0)) - 30.0).abs() < 1e-5);
    }

    #[test]
    fn test_standard_path() {
        let path = Path::standard();
        assert_eq!(path.waypoints().len(), 10);
        let sum: f32 = path.segment_lengths().iter().sum();
        assert_eq!(sum, path.total_length());
        // 200+160+180+240+180+220+360+160+300
        assert!((path.total_length() - 2000.0).abs() < 1e-3);
    }

    #[test]
    fn test_serde_rebuilds_lengths() {
        let json = serde_json::to_string(&l_path()).unwrap();
        assert_eq!(json, "[[0.0,0.0],[100.0,0.0],[100.0,50.0]]");
        let path: Path = serde_json::from_str(&json).unwrap();
        assert_eq!(path, l_path());
        assert_eq!(path.total_length(), 150.0);

        // Loading goes through the same validation as construction
        assert!(serde_json::from_str::<Path>("[[0.0, 0.0]]").is_err());
    }
}
