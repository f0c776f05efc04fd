//! Roof area estimation with layered fallback
//!
//! Building records beat hand-drawn or synthesized polygons: when a
//! record carries a size, the polygon is not consulted at all. The
//! geometric path only accepts results inside a plausibility band;
//! everything else lands on the caller's fallback. No input, however
//! malformed, ever surfaces an error to the form.

use thiserror::Error;

use crate::config::defaults::{DEFAULT_AREA_SQFT, MAX_PLAUSIBLE_SQFT, MIN_PLAUSIBLE_SQFT};
use crate::domain::{DEFAULT_PITCH_FACTOR, GeoPoint, PropertyData};
use crate::geometry::{close_ring, ring_area_sqft};

/// Why an estimate path could not produce a usable number
///
/// Internal taxonomy only: both variants are recovered into fallback
/// values before the public boundary.
#[derive(Debug, Error)]
pub enum EstimateError {
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),
    #[error("calculation unavailable: {0:.0} sq ft is outside the plausible range")]
    CalculationUnavailable(f64),
}

/// Estimate a roof area in square feet
///
/// Tries, in order: the property record's reported size adjusted for
/// stories and roof pitch, then the geodesic area of the polygon, then
/// `fallback_size` (or the stock 2500 sq ft default). Always returns a
/// positive finite number.
pub fn estimate_area(
    polygon: Option<&[GeoPoint]>,
    property: Option<&PropertyData>,
    fallback_size: Option<f64>,
) -> f64 {
    if let Some(property) = property
        && let Some(building_size) = property.building_size
        && building_size.is_finite()
        && building_size > 0.0
    {
        return record_area(building_size, property);
    }

    let fallback = fallback_size
        .filter(|s| s.is_finite() && *s > 0.0)
        .unwrap_or(DEFAULT_AREA_SQFT);

    match polygon {
        Some(ring) => geometric_area(ring).unwrap_or(fallback),
        None => fallback,
    }
}

/// Roof area derived from the property record's reported size
fn record_area(building_size: f64, property: &PropertyData) -> f64 {
    let stories = property.story_count();
    let mut footprint = building_size / stories as f64;
    if stories > 1 {
        // Stacked floor plates carry extra common area per story.
        footprint *= 1.0 + (stories - 1) as f64 * 0.05;
    }

    let pitch_factor = property
        .roof_style()
        .map(|s| s.pitch_factor())
        .unwrap_or(DEFAULT_PITCH_FACTOR);

    (footprint * pitch_factor).round()
}

/// Geodesic area of a drawn or synthesized ring, bounds-checked
fn geometric_area(ring: &[GeoPoint]) -> Result<f64, EstimateError> {
    if ring.len() < 3 {
        return Err(EstimateError::InvalidInput("fewer than 3 vertices"));
    }
    if ring.iter().any(|p| !p.is_finite()) {
        return Err(EstimateError::InvalidInput("non-finite coordinate"));
    }

    let area_sqft = ring_area_sqft(&close_ring(ring)).round();
    if !(MIN_PLAUSIBLE_SQFT..=MAX_PLAUSIBLE_SQFT).contains(&area_sqft) {
        return Err(EstimateError::CalculationUnavailable(area_sqft));
    }
    Ok(area_sqft)
}
