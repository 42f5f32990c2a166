use crate::error::{ListingError, Result};
use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Model year as returned by the extractor
///
/// The generation schema asks for an integer, but hand-written records and
/// some model responses carry it as text, so both shapes are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum ModelYear {
    Number(i64),
    Text(String),
}

impl fmt::Display for ModelYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelYear::Number(year) => write!(f, "{}", year),
            ModelYear::Text(year) => f.write_str(year),
        }
    }
}

impl From<i64> for ModelYear {
    fn from(year: i64) -> Self {
        ModelYear::Number(year)
    }
}

impl From<&str> for ModelYear {
    fn from(year: &str) -> Self {
        ModelYear::Text(year.to_string())
    }
}

/// Structured vehicle attributes extracted from one listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct VehicleRecord {
    /// Listing headline
    pub title: String,

    /// Model year
    pub year: ModelYear,

    /// Manufacturer
    pub make: String,

    /// Model name
    pub model: String,

    /// Asking price, possibly with currency symbols and separators
    pub price: String,

    /// Odometer reading, possibly with units
    #[serde(default)]
    pub mileage: String,

    /// Vehicle identification number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vin: Option<String>,

    #[serde(default)]
    pub transmission: String,

    #[serde(default)]
    pub fuel_type: String,

    #[serde(default)]
    pub exterior_color: String,

    #[serde(default)]
    pub interior_color: String,

    #[serde(default)]
    pub engine: String,

    /// Body category (Sedan, SUV, Truck, ...)
    pub body_style: String,

    /// Free-form description; replaced by the dealer template on normalization
    #[serde(default)]
    pub description: String,

    /// Listed equipment, in listing order
    #[serde(default)]
    pub features: Vec<String>,
}

/// Values the generated script always forces, shown next to the extracted fields
pub const FORCED_SPECS: [(&str, &str); 3] = [
    ("Fuel Type", "Gasoline"),
    ("Condition", "Excellent"),
    ("Clean Title", "Checked"),
];

impl VehicleRecord {
    /// Create a record with the mandatory fields set and everything else empty
    pub fn new(
        title: impl Into<String>,
        year: impl Into<ModelYear>,
        make: impl Into<String>,
        model: impl Into<String>,
        price: impl Into<String>,
        body_style: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            year: year.into(),
            make: make.into(),
            model: model.into(),
            price: price.into(),
            mileage: String::new(),
            vin: None,
            transmission: String::new(),
            fuel_type: String::new(),
            exterior_color: String::new(),
            interior_color: String::new(),
            engine: String::new(),
            body_style: body_style.into(),
            description: String::new(),
            features: Vec::new(),
        }
    }

    /// Builder method: set mileage
    pub fn with_mileage(mut self, mileage: impl Into<String>) -> Self {
        self.mileage = mileage.into();
        self
    }

    /// Builder method: set VIN
    pub fn with_vin(mut self, vin: impl Into<String>) -> Self {
        self.vin = Some(vin.into());
        self
    }

    /// Builder method: set exterior and interior colors
    pub fn with_colors(mut self, exterior: impl Into<String>, interior: impl Into<String>) -> Self {
        self.exterior_color = exterior.into();
        self.interior_color = interior.into();
        self
    }

    /// Builder method: set description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Load a record saved as JSON (camelCase keys)
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        serde_json::from_str(&text).map_err(|e| ListingError::MalformedOutput(e.to_string()))
    }

    /// VIN or an empty string when the listing has none
    pub fn vin_or_empty(&self) -> &str {
        self.vin.as_deref().unwrap_or("")
    }

    /// Ordered label/value pairs offered for per-field copying
    pub fn display_fields(&self) -> IndexMap<&'static str, String> {
        let mut fields = IndexMap::new();
        fields.insert("Year", self.year.to_string());
        fields.insert("Make", self.make.clone());
        fields.insert("Model", self.model.clone());
        fields.insert("Price", self.price.clone());
        fields.insert("Body Style", self.body_style.clone());
        fields.insert("Mileage", self.mileage.clone());
        fields.insert("Exterior", self.exterior_color.clone());
        fields.insert("Interior", self.interior_color.clone());
        fields.insert("Fixed Description", self.description.clone());
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_minimal_record() {
        let json = serde_json::json!({
            "title": "2020 Honda Civic",
            "year": 2020,
            "make": "Honda",
            "model": "Civic",
            "price": "$15,000",
            "bodyStyle": "Sedan"
        });

        let record: VehicleRecord = serde_json::from_value(json).unwrap();
        assert_eq!(record.year, ModelYear::Number(2020));
        assert_eq!(record.body_style, "Sedan");
        assert!(record.mileage.is_empty());
        assert!(record.vin.is_none());
        assert!(record.features.is_empty());
    }

    #[test]
    fn test_deserialize_text_year_and_optional_fields() {
        let json = serde_json::json!({
            "title": "Ford F-150 XLT",
            "year": "2018",
            "make": "Ford",
            "model": "F-150",
            "price": "28500",
            "mileage": "71,204 miles",
            "vin": "1FTEW1EP5JFA12345",
            "fuelType": "Gasoline",
            "exteriorColor": "Blue",
            "interiorColor": "Gray",
            "bodyStyle": "Truck",
            "features": ["Tow package", "Bed liner"]
        });

        let record: VehicleRecord = serde_json::from_value(json).unwrap();
        assert_eq!(record.year, ModelYear::Text("2018".to_string()));
        assert_eq!(record.vin_or_empty(), "1FTEW1EP5JFA12345");
        assert_eq!(record.exterior_color, "Blue");
        assert_eq!(record.features, vec!["Tow package", "Bed liner"]);
    }

    #[test]
    fn test_missing_mandatory_field_is_rejected() {
        let json = serde_json::json!({
            "title": "Something",
            "year": 2020,
            "make": "Honda",
            "model": "Civic",
            "price": "1"
        });

        assert!(serde_json::from_value::<VehicleRecord>(json).is_err());
    }

    #[test]
    fn test_serialize_uses_camel_case() {
        let record = VehicleRecord::new("t", 2021, "Mazda", "3", "1", "Hatchback")
            .with_colors("Red", "Black");
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["bodyStyle"], "Hatchback");
        assert_eq!(json["exteriorColor"], "Red");
        assert!(json.get("vin").is_none());
    }

    #[test]
    fn test_from_json_file() {
        let path = std::env::temp_dir()
            .join(format!("autolisting-record-{}.json", std::process::id()));
        std::fs::write(
            &path,
            r#"{"title":"t","year":2017,"make":"Audi","model":"A4","price":"$20,500","bodyStyle":"Sedan"}"#,
        )
        .unwrap();

        let record = VehicleRecord::from_json_file(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(record.make, "Audi");

        let missing = VehicleRecord::from_json_file(path.with_extension("missing"));
        assert!(matches!(missing, Err(ListingError::Io(_))));
    }

    #[test]
    fn test_year_display() {
        assert_eq!(ModelYear::Number(2019).to_string(), "2019");
        assert_eq!(ModelYear::from("2019").to_string(), "2019");
    }

    #[test]
    fn test_display_fields_order() {
        let record = VehicleRecord::new("t", 2020, "Honda", "Civic", "15000", "Sedan")
            .with_mileage("32000");
        let labels: Vec<_> = record.display_fields().keys().copied().collect();

        assert_eq!(
            labels,
            vec![
                "Year",
                "Make",
                "Model",
                "Price",
                "Body Style",
                "Mileage",
                "Exterior",
                "Interior",
                "Fixed Description"
            ]
        );
        assert_eq!(record.display_fields()["Mileage"], "32000");
    }
}
