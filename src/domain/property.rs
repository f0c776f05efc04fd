use serde::Deserialize;

/// Property record metadata supplied by the enclosing estimate form
///
/// All fields are optional; absent fields use documented defaults
/// (one story, unknown roof type, moderate pitch).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PropertyData {
    /// Free-form listing type, e.g. "Single Family Residence"
    #[serde(default)]
    pub property_type: Option<String>,
    /// Total finished area across all stories, in square feet
    #[serde(default)]
    pub building_size: Option<f64>,
    #[serde(default)]
    pub stories: Option<u32>,
    /// Roof construction style, e.g. "gable" or "hip"
    #[serde(default)]
    pub roof_type: Option<String>,
    /// Pitch category, e.g. "moderate" (informational only)
    #[serde(default)]
    pub roof_pitch: Option<String>,
}

impl PropertyData {
    /// Story count with the single-story default applied
    pub fn story_count(&self) -> u32 {
        self.stories.filter(|&s| s >= 1).unwrap_or(1)
    }

    pub fn building_class(&self) -> Option<BuildingClass> {
        self.property_type
            .as_deref()
            .and_then(BuildingClass::from_property_type)
    }

    pub fn roof_style(&self) -> Option<RoofStyle> {
        self.roof_type.as_deref().and_then(RoofStyle::from_roof_type)
    }
}

/// Building classification based on listing property-type strings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildingClass {
    SingleFamily,
    MultiFamily,
    Townhouse,
    Commercial,
    Warehouse,
}

impl BuildingClass {
    /// Classify a free-form property type by keyword
    ///
    /// Listing feeds are inconsistent ("Single Family Residence",
    /// "single-family", "Townhome"), so matching is case-insensitive
    /// substring; first matching keyword wins.
    pub fn from_property_type(raw: &str) -> Option<BuildingClass> {
        let t = raw.to_lowercase();
        if t.contains("single") {
            Some(BuildingClass::SingleFamily)
        } else if t.contains("multi") {
            Some(BuildingClass::MultiFamily)
        } else if t.contains("town") {
            Some(BuildingClass::Townhouse)
        } else if t.contains("apart") {
            Some(BuildingClass::MultiFamily)
        } else if t.contains("commercial") || t.contains("industrial") {
            Some(BuildingClass::Commercial)
        } else if t.contains("warehouse") || t.contains("storage") {
            Some(BuildingClass::Warehouse)
        } else {
            None
        }
    }

    /// (scale factor, aspect ratio) for synthesized footprints
    ///
    /// Scale compensates for the gap between reported square footage
    /// and the drawn footprint; ratio is long side over short side.
    pub fn footprint_profile(self) -> (f64, f64) {
        match self {
            BuildingClass::SingleFamily => (1.8, 1.4),
            BuildingClass::Townhouse => (1.75, 2.2),
            BuildingClass::MultiFamily => (1.9, 1.6),
            BuildingClass::Commercial => (1.6, 1.2),
            BuildingClass::Warehouse => (1.5, 2.5),
        }
    }
}

/// Roof construction style, used to pick a pitch factor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoofStyle {
    Flat,
    Gable,
    Hip,
    Mansard,
    Gambrel,
    Shed,
}

impl RoofStyle {
    pub fn from_roof_type(tag: &str) -> Option<RoofStyle> {
        match tag.to_lowercase().as_str() {
            "flat" => Some(RoofStyle::Flat),
            "gable" => Some(RoofStyle::Gable),
            "hip" => Some(RoofStyle::Hip),
            "mansard" => Some(RoofStyle::Mansard),
            "gambrel" => Some(RoofStyle::Gambrel),
            "shed" => Some(RoofStyle::Shed),
            _ => None,
        }
    }

    /// Multiplier from footprint area to roof surface area
    pub fn pitch_factor(self) -> f64 {
        match self {
            RoofStyle::Flat => 1.05,
            RoofStyle::Gable => 1.15,
            RoofStyle::Hip => 1.18,
            RoofStyle::Mansard => 1.35,
            RoofStyle::Gambrel => 1.20,
            RoofStyle::Shed => 1.08,
        }
    }
}

/// Pitch factor applied when the roof type is missing or unrecognized
pub const DEFAULT_PITCH_FACTOR: f64 = 1.12;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_building_class_from_type() {
        assert_eq!(
            BuildingClass::from_property_type("Single Family Residence"),
            Some(BuildingClass::SingleFamily)
        );
        assert_eq!(
            BuildingClass::from_property_type("multi-family"),
            Some(BuildingClass::MultiFamily)
        );
        assert_eq!(
            BuildingClass::from_property_type("Apartment Complex"),
            Some(BuildingClass::MultiFamily)
        );
        assert_eq!(
            BuildingClass::from_property_type("TOWNHOUSE"),
            Some(BuildingClass::Townhouse)
        );
        assert_eq!(
            BuildingClass::from_property_type("Light Industrial"),
            Some(BuildingClass::Commercial)
        );
        assert_eq!(
            BuildingClass::from_property_type("Self Storage"),
            Some(BuildingClass::Warehouse)
        );
        assert_eq!(BuildingClass::from_property_type("houseboat"), None);
    }

    #[test]
    fn test_roof_style_lookup() {
        assert_eq!(RoofStyle::from_roof_type("Hip"), Some(RoofStyle::Hip));
        assert_eq!(RoofStyle::from_roof_type("GABLE"), Some(RoofStyle::Gable));
        assert_eq!(RoofStyle::from_roof_type("thatched"), None);
    }

    #[test]
    fn test_pitch_factors() {
        assert_eq!(RoofStyle::Flat.pitch_factor(), 1.05);
        assert_eq!(RoofStyle::Mansard.pitch_factor(), 1.35);
    }

    #[test]
    fn test_story_count_default() {
        assert_eq!(PropertyData::default().story_count(), 1);
        let p = PropertyData {
            stories: Some(0),
            ..Default::default()
        };
        assert_eq!(p.story_count(), 1);
        let p = PropertyData {
            stories: Some(3),
            ..Default::default()
        };
        assert_eq!(p.story_count(), 3);
    }
}
