use geo::{GeodesicDistance, Point};
use serde::Deserialize;

const METERS_PER_MILE: f64 = 1609.344;

/// A WGS-84 position in degrees
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    fn to_point(self) -> Point<f64> {
        Point::new(self.longitude, self.latitude)
    }
}

/// Geodesic (ellipsoidal) distance in statute miles.
pub fn distance_miles(from: Coordinate, to: Coordinate) -> f64 {
    from.to_point().geodesic_distance(&to.to_point()) / METERS_PER_MILE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_point_is_zero() {
        let p = Coordinate::new(37.40758515947319, -121.9368054864926);
        assert!(distance_miles(p, p).abs() < 1e-9);
    }

    #[test]
    fn test_san_francisco_to_los_angeles() {
        let sf = Coordinate::new(37.7749, -122.4194);
        let la = Coordinate::new(34.0522, -118.2437);
        let d = distance_miles(sf, la);
        assert!((345.0..350.0).contains(&d), "got {}", d);
        assert!((distance_miles(la, sf) - d).abs() < 1e-6);
    }

    #[test]
    fn test_one_degree_latitude_at_equator() {
        // Ellipsoidal: shorter than the 69.09 mi a sphere of mean radius gives
        let d = distance_miles(Coordinate::new(0.0, 0.0), Coordinate::new(1.0, 0.0));
        assert!((68.6..68.8).contains(&d), "got {}", d);
    }
}
