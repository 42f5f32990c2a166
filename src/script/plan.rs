/// Marketplace category the vehicle type dropdown is always set to
pub const VEHICLE_TYPE: &str = "Car/Truck";

/// Condition the listing is always given
pub const CONDITION: &str = "Excellent";

/// Fuel type the listing is always given
pub const FUEL_TYPE: &str = "Gasoline";

/// Pause after choosing the vehicle type, while the form re-renders its fields
pub const VEHICLE_TYPE_SETTLE_MS: u64 = 1500;

/// A key of the embedded `vehicle` object
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VehicleField {
    Title,
    Price,
    Year,
    Make,
    Model,
    Mileage,
    Vin,
    BodyStyle,
    ExteriorColor,
    InteriorColor,
    Description,
}

impl VehicleField {
    /// Property name in the embedded object
    pub fn key(&self) -> &'static str {
        match self {
            VehicleField::Title => "title",
            VehicleField::Price => "price",
            VehicleField::Year => "year",
            VehicleField::Make => "make",
            VehicleField::Model => "model",
            VehicleField::Mileage => "mileage",
            VehicleField::Vin => "vin",
            VehicleField::BodyStyle => "bodyStyle",
            VehicleField::ExteriorColor => "exteriorColor",
            VehicleField::InteriorColor => "interiorColor",
            VehicleField::Description => "description",
        }
    }
}

/// Value a step writes: a fixed string or a field of the embedded vehicle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FillValue {
    Literal(&'static str),
    Field(VehicleField),
}

impl FillValue {
    fn to_js(&self) -> String {
        match self {
            FillValue::Literal(text) => js_string(text),
            FillValue::Field(field) => format!("vehicle.{}", field.key()),
        }
    }
}

/// One statement of the generated automation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FillStep {
    /// Open the dropdown next to `label` and pick the matching option
    Dropdown { label: &'static str, value: FillValue },
    /// Type into the input next to `label`
    Text { label: &'static str, value: FillValue },
    /// Sleep for the given milliseconds
    Pause(u64),
    /// Console progress line
    Log(&'static str),
    /// Tick the clean title checkbox or "Yes" control
    CleanTitle,
}

impl FillStep {
    fn dropdown(label: &'static str, value: FillValue) -> Self {
        FillStep::Dropdown { label, value }
    }

    fn text(label: &'static str, field: VehicleField) -> Self {
        FillStep::Text {
            label,
            value: FillValue::Field(field),
        }
    }

    /// Render the step as one JavaScript statement
    pub fn to_js(&self) -> String {
        match self {
            FillStep::Dropdown { label, value } => {
                format!("await fillDropdown({}, {});", js_string(label), value.to_js())
            }
            FillStep::Text { label, value } => {
                format!("await fillTextField({}, {});", js_string(label), value.to_js())
            }
            FillStep::Pause(ms) => format!("await sleep({});", ms),
            FillStep::Log(message) => format!("console.log({});", js_string(message)),
            FillStep::CleanTitle => "await checkCleanTitle();".to_string(),
        }
    }
}

/// The fixed fill order
///
/// type, condition (two label variants), mandatory dropdowns, text fields,
/// colors, clean title.
pub fn default_plan() -> Vec<FillStep> {
    use FillValue::{Field, Literal};
    use VehicleField::*;

    vec![
        FillStep::dropdown("vehicle type", Literal(VEHICLE_TYPE)),
        FillStep::Pause(VEHICLE_TYPE_SETTLE_MS),
        FillStep::Log("Setting condition to Excellent..."),
        FillStep::dropdown("vehicle condition", Literal(CONDITION)),
        FillStep::dropdown("condition", Literal(CONDITION)),
        FillStep::dropdown("year", Field(Year)),
        FillStep::dropdown("make", Field(Make)),
        FillStep::dropdown("body style", Field(BodyStyle)),
        FillStep::dropdown("fuel type", Literal(FUEL_TYPE)),
        FillStep::text("title", Title),
        FillStep::text("price", Price),
        FillStep::text("model", Model),
        FillStep::text("mileage", Mileage),
        FillStep::text("vin", Vin),
        FillStep::text("description", Description),
        FillStep::dropdown("exterior color", Field(ExteriorColor)),
        FillStep::dropdown("interior color", Field(InteriorColor)),
        FillStep::Log("Checking clean title..."),
        FillStep::CleanTitle,
    ]
}

/// Quote text as a JavaScript string literal
fn js_string(text: &str) -> String {
    // A JSON string is a valid JS string literal.
    serde_json::Value::from(text).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(plan: &[FillStep]) -> Vec<&'static str> {
        plan.iter()
            .filter_map(|step| match step {
                FillStep::Dropdown { label, .. } | FillStep::Text { label, .. } => Some(*label),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_default_plan_order() {
        assert_eq!(
            labels(&default_plan()),
            vec![
                "vehicle type",
                "vehicle condition",
                "condition",
                "year",
                "make",
                "body style",
                "fuel type",
                "title",
                "price",
                "model",
                "mileage",
                "vin",
                "description",
                "exterior color",
                "interior color",
            ]
        );
    }

    #[test]
    fn test_default_plan_business_rules() {
        let plan = default_plan();
        assert_eq!(plan[0], FillStep::dropdown("vehicle type", FillValue::Literal("Car/Truck")));
        assert_eq!(plan[1], FillStep::Pause(1500));
        assert!(plan.contains(&FillStep::dropdown("condition", FillValue::Literal("Excellent"))));
        assert!(plan.contains(&FillStep::dropdown("fuel type", FillValue::Literal("Gasoline"))));
        assert_eq!(plan.last(), Some(&FillStep::CleanTitle));
    }

    #[test]
    fn test_step_rendering() {
        assert_eq!(
            FillStep::dropdown("year", FillValue::Field(VehicleField::Year)).to_js(),
            r#"await fillDropdown("year", vehicle.year);"#
        );
        assert_eq!(
            FillStep::text("body style", VehicleField::BodyStyle).to_js(),
            r#"await fillTextField("body style", vehicle.bodyStyle);"#
        );
        assert_eq!(FillStep::Pause(250).to_js(), "await sleep(250);");
        assert_eq!(FillStep::CleanTitle.to_js(), "await checkCleanTitle();");
    }

    #[test]
    fn test_literals_are_escaped() {
        assert_eq!(js_string(r#"say "hi""#), r#""say \"hi\"""#);
        assert_eq!(
            FillStep::Log("it's done").to_js(),
            r#"console.log("it's done");"#
        );
    }
}
