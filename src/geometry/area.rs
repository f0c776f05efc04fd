use geo::{GeodesicArea, LineString, Polygon};

use super::projection::SQFT_PER_SQM;
use crate::domain::GeoPoint;

/// Close a vertex ring if the first and last points differ
///
/// Drawing tools and the synthesizer disagree on whether rings carry
/// an explicit closing point; area math always works on closed rings.
pub fn close_ring(points: &[GeoPoint]) -> Vec<GeoPoint> {
    let mut ring = points.to_vec();
    if let (Some(&first), Some(&last)) = (ring.first(), ring.last())
        && (first.lat != last.lat || first.lng != last.lng)
    {
        ring.push(first);
    }
    ring
}

/// Geodesic area of a lat/lng ring in square meters
///
/// Uses the geo crate's ellipsoidal algorithm on WGS84. The signed
/// area has its sign dropped, so winding order does not matter: the
/// unsigned variant would instead treat a clockwise exterior as
/// enclosing the rest of the ellipsoid, and drawing tools produce
/// both windings.
pub fn geodesic_area_sqm(ring: &[GeoPoint]) -> f64 {
    let line: LineString<f64> = ring
        .iter()
        .map(|p| geo::coord! { x: p.lng, y: p.lat })
        .collect();
    Polygon::new(line, vec![]).geodesic_area_signed().abs()
}

/// Geodesic area of a lat/lng ring in square feet
pub fn ring_area_sqft(ring: &[GeoPoint]) -> f64 {
    geodesic_area_sqm(ring) * SQFT_PER_SQM
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square_milli() -> Vec<GeoPoint> {
        // 0.001 x 0.001 degrees at the equator, roughly 110m x 111m
        vec![
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(0.0, 0.001),
            GeoPoint::new(0.001, 0.001),
            GeoPoint::new(0.001, 0.0),
        ]
    }

    #[test]
    fn test_close_ring_appends_first_point() {
        let ring = close_ring(&unit_square_milli());
        assert_eq!(ring.len(), 5);
        assert_eq!(ring.first().unwrap(), ring.last().unwrap());
    }

    #[test]
    fn test_close_ring_idempotent() {
        let once = close_ring(&unit_square_milli());
        let twice = close_ring(&once);
        assert_eq!(once.len(), twice.len());
    }

    #[test]
    fn test_geodesic_area_equator_square() {
        // 0.001 deg of latitude ~ 110.57m, 0.001 deg of longitude
        // ~ 111.32m at the equator, so ~12309 square meters.
        let area = geodesic_area_sqm(&close_ring(&unit_square_milli()));
        assert!((area - 12309.0).abs() < 100.0, "area = {}", area);
    }

    #[test]
    fn test_geodesic_area_winding_insensitive() {
        let mut reversed = unit_square_milli();
        reversed.reverse();
        let a = geodesic_area_sqm(&close_ring(&unit_square_milli()));
        let b = geodesic_area_sqm(&close_ring(&reversed));
        assert!(((a - b) / a).abs() < 1e-9, "ccw = {}, cw = {}", a, b);
    }

    #[test]
    fn test_degenerate_ring_has_no_area() {
        let collinear = vec![
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(0.0, 0.001),
            GeoPoint::new(0.0, 0.002),
        ];
        let area = geodesic_area_sqm(&close_ring(&collinear));
        assert!(area.abs() < 1.0);
    }
}
