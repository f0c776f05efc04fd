use crate::domain::GeoPoint;

/// Feet spanned by one degree of latitude (effectively constant on WGS84)
pub const FEET_PER_DEGREE_LAT: f64 = 364_000.0;

/// Square feet per square meter
pub const SQFT_PER_SQM: f64 = 10.7639;

/// Square meters per square foot
pub const SQM_PER_SQFT: f64 = 0.092903;

/// Local foot-offset frame anchored at a footprint center
///
/// Simple equirectangular approximation from WGS84 to local feet:
/// - dlat = north_ft / 364000
/// - dlng = east_ft / (364000 * cos(lat))
///
/// The cosine term accounts for longitude compression away from the
/// equator. Accurate enough for parcel-scale footprints; this is not
/// a survey-grade projection.
#[derive(Debug, Clone)]
pub struct FootprintFrame {
    center_lat: f64,
    center_lng: f64,
    feet_per_degree_lng: f64,
}

impl FootprintFrame {
    /// Create a frame anchored at the given coordinate
    pub fn new(lat: f64, lng: f64) -> Self {
        let feet_per_degree_lng = FEET_PER_DEGREE_LAT * lat.to_radians().cos();
        Self {
            center_lat: lat,
            center_lng: lng,
            // Near the poles the compression factor collapses; degrade
            // to the equatorial factor rather than divide by ~zero.
            feet_per_degree_lng: if feet_per_degree_lng.abs() < 1.0 {
                FEET_PER_DEGREE_LAT
            } else {
                feet_per_degree_lng
            },
        }
    }

    /// Resolve an offset in feet from the anchor to a coordinate
    pub fn point_at(&self, north_ft: f64, east_ft: f64) -> GeoPoint {
        GeoPoint::new(
            self.center_lat + north_ft / FEET_PER_DEGREE_LAT,
            self.center_lng + east_ft / self.feet_per_degree_lng,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_anchor() {
        let frame = FootprintFrame::new(37.7749, -122.4194);
        let pt = frame.point_at(0.0, 0.0);
        assert!((pt.lat - 37.7749).abs() < 1e-12);
        assert!((pt.lng + 122.4194).abs() < 1e-12);
    }

    #[test]
    fn test_frame_degree_north() {
        let frame = FootprintFrame::new(0.0, 0.0);
        let pt = frame.point_at(FEET_PER_DEGREE_LAT, 0.0);
        assert!((pt.lat - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_frame_longitude_compression() {
        // At 60N one degree of longitude spans half as many feet,
        // so the same eastward offset covers twice the degrees.
        let equator = FootprintFrame::new(0.0, 0.0);
        let north = FootprintFrame::new(60.0, 0.0);
        let d_eq = equator.point_at(0.0, 1000.0).lng;
        let d_60 = north.point_at(0.0, 1000.0).lng;
        assert!((d_60 / d_eq - 2.0).abs() < 0.01);
    }

    #[test]
    fn test_unit_constants_are_inverses() {
        assert!((SQFT_PER_SQM * SQM_PER_SQFT - 1.0).abs() < 1e-5);
    }
}
