use crate::domain::GeoPoint;
use crate::geometry::FootprintFrame;

// Geocoded anchors tend to sit at the street side of a parcel, so the
// footprint center is biased slightly north of the marker by this
// fraction of its north-south half extent.
const NORTH_BIAS: f64 = 0.15;

/// Half extents in feet of a rectangle with the given area and aspect
/// ratio. The long side runs east-west; returns (half_north, half_east).
fn half_extents(area_sqft: f64, ratio: f64) -> (f64, f64) {
    let width = (area_sqft / ratio).sqrt();
    let length = width * ratio;
    (width / 2.0, length / 2.0)
}

fn to_ring(frame: &FootprintFrame, shift: f64, corners: &[(f64, f64)]) -> Vec<GeoPoint> {
    corners
        .iter()
        .map(|&(north, east)| frame.point_at(shift + north, east))
        .collect()
}

/// Plain 4-corner rectangle, counter-clockwise from bottom-left
pub(crate) fn rectangle(frame: &FootprintFrame, area_sqft: f64, ratio: f64) -> Vec<GeoPoint> {
    let (hn, he) = half_extents(area_sqft, ratio);
    let shift = NORTH_BIAS * hn;
    to_ring(
        frame,
        shift,
        &[(-hn, -he), (-hn, he), (hn, he), (hn, -he)],
    )
}

/// L-shaped footprint: 6 corners plus an explicit closing point
///
/// The outer rectangle carries a third more area than the target; the
/// quarter notch cut at the variant's corner brings it back to the
/// target exactly. Variants 0..4 notch NE, NW, SW, SE.
pub(crate) fn l_shape(
    frame: &FootprintFrame,
    area_sqft: f64,
    ratio: f64,
    variant: u8,
) -> Vec<GeoPoint> {
    let (hn, he) = half_extents(area_sqft * 4.0 / 3.0, ratio);
    let shift = NORTH_BIAS * hn;

    // Counter-clockwise walks starting at the bottom-left corner, or
    // at the first surviving corner when bottom-left is notched away.
    let corners: [(f64, f64); 6] = match variant % 4 {
        0 => [
            (-hn, -he),
            (-hn, he),
            (0.0, he),
            (0.0, 0.0),
            (hn, 0.0),
            (hn, -he),
        ],
        1 => [
            (-hn, -he),
            (-hn, he),
            (hn, he),
            (hn, 0.0),
            (0.0, 0.0),
            (0.0, -he),
        ],
        2 => [
            (0.0, -he),
            (0.0, 0.0),
            (-hn, 0.0),
            (-hn, he),
            (hn, he),
            (hn, -he),
        ],
        _ => [
            (-hn, -he),
            (-hn, 0.0),
            (0.0, 0.0),
            (0.0, he),
            (hn, he),
            (hn, -he),
        ],
    };

    let mut ring = to_ring(frame, shift, &corners);
    let first = ring[0];
    ring.push(first);
    ring
}

/// U-shaped footprint: 8 corners plus an explicit closing point
///
/// Two wings joined by a south connector: the outer rectangle carries
/// a fifth more area than the target, and the middle third of the
/// north edge is notched down to the center line.
pub(crate) fn u_shape(frame: &FootprintFrame, area_sqft: f64, ratio: f64) -> Vec<GeoPoint> {
    let (hn, he) = half_extents(area_sqft * 6.0 / 5.0, ratio);
    let shift = NORTH_BIAS * hn;
    let notch = he / 3.0;

    let corners: [(f64, f64); 8] = [
        (-hn, -he),
        (-hn, he),
        (hn, he),
        (hn, notch),
        (0.0, notch),
        (0.0, -notch),
        (hn, -notch),
        (hn, -he),
    ];

    let mut ring = to_ring(frame, shift, &corners);
    let first = ring[0];
    ring.push(first);
    ring
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame() -> FootprintFrame {
        FootprintFrame::new(30.2672, -97.7431)
    }

    #[test]
    fn test_rectangle_is_open_ring() {
        let ring = rectangle(&frame(), 4000.0, 1.5);
        assert_eq!(ring.len(), 4);
        assert_ne!(ring.first().unwrap(), ring.last().unwrap());
    }

    #[test]
    fn test_l_shape_is_closed_ring() {
        for variant in 0..4 {
            let ring = l_shape(&frame(), 6000.0, 1.6, variant);
            assert_eq!(ring.len(), 7);
            assert_eq!(ring.first().unwrap(), ring.last().unwrap());
        }
    }

    #[test]
    fn test_l_shape_variants_differ() {
        let a = l_shape(&frame(), 6000.0, 1.6, 0);
        let b = l_shape(&frame(), 6000.0, 1.6, 1);
        assert_ne!(a, b);
    }

    #[test]
    fn test_u_shape_is_closed_ring() {
        let ring = u_shape(&frame(), 14000.0, 1.2);
        assert_eq!(ring.len(), 9);
        assert_eq!(ring.first().unwrap(), ring.last().unwrap());
    }

    #[test]
    fn test_rectangle_sits_north_of_anchor() {
        let ring = rectangle(&frame(), 4000.0, 1.5);
        let center_lat = (ring[0].lat + ring[2].lat) / 2.0;
        assert!(center_lat > 30.2672);
    }
}
