use anyhow::{Context, Result};
use serde_json::{Value, json};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::domain::GeoPoint;
use crate::geometry::close_ring;

/// Build a GeoJSON Feature for a footprint ring
///
/// GeoJSON wants [lng, lat] axis order and an explicitly closed
/// exterior ring, so the ring is closed here regardless of input.
pub fn footprint_feature(polygon: &[GeoPoint], area_sqft: f64) -> Value {
    let ring: Vec<[f64; 2]> = close_ring(polygon)
        .iter()
        .map(|p| [p.lng, p.lat])
        .collect();

    json!({
        "type": "Feature",
        "properties": {
            "area_sqft": area_sqft,
            "vertices": polygon.len(),
        },
        "geometry": {
            "type": "Polygon",
            "coordinates": [ring],
        },
    })
}

/// Write a footprint ring to a GeoJSON file
///
/// # Arguments
/// * `path` - Output file path
/// * `polygon` - Footprint ring in WGS84
/// * `area_sqft` - Estimated roof area attached as a property
pub fn write_geojson(path: &Path, polygon: &[GeoPoint], area_sqft: f64) -> Result<()> {
    let feature = footprint_feature(polygon, area_sqft);

    let file = File::create(path)
        .with_context(|| format!("Failed to create GeoJSON file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &feature).context("Failed to serialize GeoJSON")?;
    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn square() -> Vec<GeoPoint> {
        vec![
            GeoPoint::new(30.0, -97.0),
            GeoPoint::new(30.0, -96.999),
            GeoPoint::new(30.001, -96.999),
            GeoPoint::new(30.001, -97.0),
        ]
    }

    #[test]
    fn test_feature_closes_ring() {
        let feature = footprint_feature(&square(), 3800.0);
        assert_eq!(feature["type"], "Feature");
        assert_eq!(feature["properties"]["area_sqft"], 3800.0);

        let ring = feature["geometry"]["coordinates"][0].as_array().unwrap();
        assert_eq!(ring.len(), 5);
        assert_eq!(ring.first().unwrap(), ring.last().unwrap());
        // Axis order is [lng, lat]
        assert_eq!(ring[0][0], -97.0);
        assert_eq!(ring[0][1], 30.0);
    }

    #[test]
    fn test_write_geojson() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("footprint.geojson");

        write_geojson(&path, &square(), 3800.0).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        let parsed: Value = serde_json::from_str(&contents).unwrap();
        assert_eq!(parsed["geometry"]["type"], "Polygon");
    }
}
