//! roofprint - Synthesize roof footprint polygons and estimate roof areas
//!
//! The computation core behind a roofing-estimate form: map widgets
//! hand over a coordinate and optional property record data, and get
//! back a drawable footprint ring and a validated square footage.

pub mod config;
pub mod domain;
pub mod estimate;
pub mod footprint;
pub mod geometry;
pub mod output;

pub use domain::{GeoPoint, PropertyData};
pub use estimate::estimate_area;
pub use footprint::generate_polygon;
