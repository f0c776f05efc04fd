pub mod point;
pub mod property;

pub use point::GeoPoint;
pub use property::{BuildingClass, DEFAULT_PITCH_FACTOR, PropertyData, RoofStyle};
