pub mod area;
pub mod projection;

pub use area::{close_ring, geodesic_area_sqm, ring_area_sqft};
pub use projection::{FEET_PER_DEGREE_LAT, FootprintFrame, SQFT_PER_SQM, SQM_PER_SQFT};
