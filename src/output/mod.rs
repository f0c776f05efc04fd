pub mod geojson;

pub use geojson::{footprint_feature, write_geojson};
