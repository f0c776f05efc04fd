use serde::{Deserialize, Serialize};

/// A WGS84 coordinate as exchanged with the map widgets
///
/// Degrees, no range validation beyond finiteness checks. Map SDKs
/// disagree on axis order, so the fields are named rather than a tuple.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_finite() {
        assert!(GeoPoint::new(37.7749, -122.4194).is_finite());
        assert!(!GeoPoint::new(f64::NAN, -122.4194).is_finite());
        assert!(!GeoPoint::new(37.7749, f64::INFINITY).is_finite());
    }
}
