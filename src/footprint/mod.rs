//! Roof footprint polygon synthesis
//!
//! Given an anchor coordinate, a nominal size, and optional property
//! record data, produces a believable closed footprint ring so the map
//! widget has something to draw before the user edits it.

mod shapes;

use crate::config::defaults::{DEFAULT_AREA_SQFT, DEFAULT_ASPECT_RATIO, DEFAULT_SCALE_FACTOR};
use crate::domain::{BuildingClass, GeoPoint, PropertyData};
use crate::geometry::FootprintFrame;

/// Nominal size over which multi-family parcels get an L-shape
const L_SHAPE_MIN_SQFT: f64 = 3000.0;

/// Nominal size over which commercial parcels get a U-shape
const U_SHAPE_MIN_SQFT: f64 = 8000.0;

/// Synthesize a roof footprint polygon around an anchor coordinate
///
/// `size` is the nominal square footage reported for the property; the
/// drawn footprint is scaled up from it by a per-profile factor.
/// Missing or nonsensical inputs degrade to a stock rectangle rather
/// than failing; this function never panics and never returns fewer
/// than 3 vertices.
pub fn generate_polygon(
    lat: f64,
    lng: f64,
    size: f64,
    property: Option<&PropertyData>,
) -> Vec<GeoPoint> {
    let coords_ok = lat.is_finite() && lng.is_finite() && lat != 0.0 && lng != 0.0;
    if !coords_ok || !size.is_finite() || size <= 0.0 {
        let lat = if lat.is_finite() { lat } else { 0.0 };
        let lng = if lng.is_finite() { lng } else { 0.0 };
        let frame = FootprintFrame::new(lat, lng);
        return shapes::rectangle(
            &frame,
            DEFAULT_AREA_SQFT * DEFAULT_SCALE_FACTOR,
            DEFAULT_ASPECT_RATIO,
        );
    }

    let stories = property.map(PropertyData::story_count).unwrap_or(1);
    let class = property.and_then(PropertyData::building_class);
    let (scale, ratio) = match property {
        Some(_) => class
            .map(BuildingClass::footprint_profile)
            .unwrap_or((DEFAULT_SCALE_FACTOR, DEFAULT_ASPECT_RATIO)),
        None => size_profile(size),
    };

    // Taller buildings have disproportionately smaller footprints.
    let effective_size = if stories > 1 {
        size / (stories as f64).sqrt()
    } else {
        size
    };
    let area_sqft = effective_size * scale;
    let frame = FootprintFrame::new(lat, lng);

    // Complex shapes are reserved for large single-story parcels;
    // multi-story always renders as a plain rectangle.
    if stories == 1 {
        match class {
            Some(BuildingClass::MultiFamily) if size > L_SHAPE_MIN_SQFT => {
                return shapes::l_shape(&frame, area_sqft, ratio, orientation_variant(lat, lng));
            }
            Some(BuildingClass::Commercial) if size > U_SHAPE_MIN_SQFT => {
                return shapes::u_shape(&frame, area_sqft, ratio);
            }
            _ => {}
        }
    }

    shapes::rectangle(&frame, area_sqft, ratio)
}

/// (scale factor, aspect ratio) by nominal size band, for parcels
/// with no property record
pub(crate) fn size_profile(sqft: f64) -> (f64, f64) {
    if sqft < 1200.0 {
        (2.0, 1.3)
    } else if sqft < 3000.0 {
        (1.9, 1.5)
    } else if sqft < 5000.0 {
        (1.8, 1.5)
    } else {
        (1.7, 1.7)
    }
}

/// Deterministic L-shape orientation derived from the anchor coordinate
///
/// Deliberately not an RNG: the same address must come back with the
/// same footprint on every call, so the variant is a pure hash of the
/// coordinate pair.
pub(crate) fn orientation_variant(lat: f64, lng: f64) -> u8 {
    let h = (lat * 1000.0 + lng * 1000.0).rem_euclid(4.0);
    (h.round() as u8) % 4
}
