use anyhow::{Context, Result, bail};
use clap::Parser;
use std::path::PathBuf;

use roofprint::config::{FileConfig, defaults};
use roofprint::domain::PropertyData;
use roofprint::output::write_geojson;
use roofprint::{estimate_area, generate_polygon};

/// Synthesize a roof footprint polygon and estimate its area
///
/// Examples:
///   # Estimate for a 2000 sq ft single-family home in Austin
///   roofprint --lat 30.2672 --lng -97.7431 --size 2000 --property-type "single family"
///
///   # Large multi-family parcel (gets an L-shaped footprint)
///   roofprint --lat 32.7157 --lng -117.1611 --size 4000 --property-type multi-family
///
///   # Use the county record instead of geometry
///   roofprint --lat 30.2672 --lng -97.7431 --size 2400 --building-size 2400 --stories 2 --roof-type hip
///
///   # Write the footprint as GeoJSON for a map viewer
///   roofprint --lat 30.2672 --lng -97.7431 --size 2000 -o footprint.geojson
#[derive(Parser, Debug)]
#[command(name = "roofprint")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to config file (optional, auto-searches roofprint.toml if not provided)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Latitude of the property anchor in WGS84 degrees
    #[arg(long, allow_hyphen_values = true)]
    lat: Option<f64>,

    /// Longitude of the property anchor in WGS84 degrees
    #[arg(long, allow_hyphen_values = true)]
    lng: Option<f64>,

    /// Nominal property size in square feet
    #[arg(short = 's', long, default_value = "2500.0")]
    size: f64,

    /// Free-form property type, e.g. "single family" or "multi-family"
    #[arg(long)]
    property_type: Option<String>,

    /// Total finished area from the county record, in square feet
    #[arg(long)]
    building_size: Option<f64>,

    /// Number of stories
    #[arg(long)]
    stories: Option<u32>,

    /// Roof type: flat, gable, hip, mansard, gambrel, or shed
    #[arg(long)]
    roof_type: Option<String>,

    /// Pitch category, e.g. "moderate" (informational only)
    #[arg(long)]
    roof_pitch: Option<String>,

    /// Area returned when the estimate cannot be computed
    #[arg(long, default_value = "2500.0")]
    fallback_size: f64,

    /// Output GeoJSON file path (skipped if not provided)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let file_config = if let Some(ref config_path) = args.config {
        if config_path.exists() {
            let contents = std::fs::read_to_string(config_path)
                .context(format!("Failed to read config file: {:?}", config_path))?;
            Some(toml::from_str(&contents).context("Failed to parse config file")?)
        } else {
            bail!("Config file not found: {:?}", config_path);
        }
    } else {
        FileConfig::load()
    };

    let lat = args
        .lat
        .or_else(|| file_config.as_ref().and_then(|c| c.lat));
    let lng = args
        .lng
        .or_else(|| file_config.as_ref().and_then(|c| c.lng));
    let size = if (args.size - defaults::DEFAULT_AREA_SQFT).abs() > 0.01 {
        args.size
    } else {
        file_config
            .as_ref()
            .map(|c| c.size)
            .unwrap_or(defaults::DEFAULT_AREA_SQFT)
    };
    let fallback_size = if (args.fallback_size - defaults::DEFAULT_AREA_SQFT).abs() > 0.01 {
        args.fallback_size
    } else {
        file_config
            .as_ref()
            .map(|c| c.fallback_size)
            .unwrap_or(defaults::DEFAULT_AREA_SQFT)
    };
    let property_type = args
        .property_type
        .clone()
        .or_else(|| file_config.as_ref().and_then(|c| c.property_type.clone()));
    let building_size = args
        .building_size
        .or_else(|| file_config.as_ref().and_then(|c| c.building_size));
    let stories = args
        .stories
        .or_else(|| file_config.as_ref().and_then(|c| c.stories));
    let roof_type = args
        .roof_type
        .clone()
        .or_else(|| file_config.as_ref().and_then(|c| c.roof_type.clone()));
    let roof_pitch = args
        .roof_pitch
        .clone()
        .or_else(|| file_config.as_ref().and_then(|c| c.roof_pitch.clone()));
    let output = args
        .output
        .clone()
        .or_else(|| file_config.as_ref().and_then(|c| c.output.clone()));
    let verbose = args.verbose || file_config.as_ref().map(|c| c.verbose).unwrap_or(false);

    let (Some(lat), Some(lng)) = (lat, lng) else {
        bail!("Must provide --lat and --lng (or set them in roofprint.toml)");
    };

    let property = if property_type.is_some()
        || building_size.is_some()
        || stories.is_some()
        || roof_type.is_some()
        || roof_pitch.is_some()
    {
        Some(PropertyData {
            property_type,
            building_size,
            stories,
            roof_type,
            roof_pitch,
        })
    } else {
        None
    };

    println!("roofprint - Roof Footprint & Area Estimator");
    println!("===========================================");
    println!();

    if verbose {
        println!("Configuration:");
        println!("  Anchor: ({:.4}, {:.4})", lat, lng);
        println!("  Nominal size: {} sq ft", size);
        println!("  Fallback size: {} sq ft", fallback_size);
        if let Some(ref p) = property {
            println!("  Property record: {:?}", p);
        }
        if let Some(ref path) = output {
            println!("  Output: {}", path.display());
        }
        println!();
    }

    let polygon = generate_polygon(lat, lng, size, property.as_ref());
    let shape = match polygon.len() {
        7 => "L-shape",
        9 => "U-shape",
        _ => "rectangle",
    };
    println!("Footprint: {} ({} vertices)", shape, polygon.len());
    if verbose {
        for (i, pt) in polygon.iter().enumerate() {
            println!("  [{}] ({:.6}, {:.6})", i, pt.lat, pt.lng);
        }
    }

    let area = estimate_area(Some(&polygon), property.as_ref(), Some(fallback_size));
    let source = match &property {
        Some(p) if p.building_size.is_some() => "property record",
        _ => "polygon geometry",
    };
    println!("Estimated roof area: {:.0} sq ft (from {})", area, source);

    if let Some(path) = output {
        write_geojson(&path, &polygon, area).context("Failed to write GeoJSON output")?;
        println!();
        println!("Output: {}", path.display());
    }

    Ok(())
}
