use crate::script::plan::{CONDITION, FUEL_TYPE, FillStep, default_plan};
use crate::vehicle::{VehicleRecord, digits_only};
use serde::Serialize;

const TEMPLATE: &str = include_str!("autofill.js");

/// Tuning knobs baked into the generated script
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptOptions {
    /// How much longer than the label a near-match element's text may be
    pub label_slack: usize,

    /// Ancestor levels searched for a text input
    pub text_field_depth: usize,

    /// Ancestor levels searched for a dropdown trigger
    pub dropdown_depth: usize,

    /// Ancestor levels searched around a "clean title" label
    pub clean_title_depth: usize,

    /// Times the open menu is polled for a matching option
    pub poll_attempts: u32,

    /// Delay between option polls (milliseconds)
    pub poll_interval_ms: u64,

    /// Delay after scrolling a trigger into view (milliseconds)
    pub scroll_settle_ms: u64,

    /// Delay after clicking an option (milliseconds)
    pub option_settle_ms: u64,
}

impl Default for ScriptOptions {
    fn default() -> Self {
        Self {
            label_slack: 15,
            text_field_depth: 7,
            dropdown_depth: 8,
            clean_title_depth: 5,
            poll_attempts: 25,
            poll_interval_ms: 150,
            scroll_settle_ms: 400,
            option_settle_ms: 800,
        }
    }
}

impl ScriptOptions {
    /// Create options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set option polling budget
    pub fn polling(mut self, attempts: u32, interval_ms: u64) -> Self {
        self.poll_attempts = attempts;
        self.poll_interval_ms = interval_ms;
        self
    }

    /// Builder method: set ancestor search depths for text fields and dropdowns
    pub fn search_depth(mut self, text_field: usize, dropdown: usize) -> Self {
        self.text_field_depth = text_field;
        self.dropdown_depth = dropdown;
        self
    }

    /// Builder method: set label near-match slack
    pub fn label_slack(mut self, slack: usize) -> Self {
        self.label_slack = slack;
        self
    }
}

/// The object embedded as `vehicle` in the script
///
/// Field order is the serialization order.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptVehicle<'a> {
    pub title: &'a str,
    pub price: String,
    pub year: String,
    pub make: &'a str,
    pub model: &'a str,
    pub mileage: String,
    pub vin: &'a str,
    pub body_style: &'a str,
    pub exterior_color: &'a str,
    pub interior_color: &'a str,
    pub description: &'a str,
    pub condition: &'static str,
    pub fuel_type: &'static str,
}

impl<'a> From<&'a VehicleRecord> for ScriptVehicle<'a> {
    fn from(record: &'a VehicleRecord) -> Self {
        Self {
            title: &record.title,
            price: digits_only(&record.price),
            year: record.year.to_string(),
            make: &record.make,
            model: &record.model,
            mileage: digits_only(&record.mileage),
            vin: record.vin_or_empty(),
            body_style: &record.body_style,
            exterior_color: &record.exterior_color,
            interior_color: &record.interior_color,
            description: &record.description,
            condition: CONDITION,
            fuel_type: FUEL_TYPE,
        }
    }
}

/// Renders the console auto-fill script for a record
#[derive(Debug, Clone)]
pub struct ScriptGenerator {
    options: ScriptOptions,
    plan: Vec<FillStep>,
}

impl Default for ScriptGenerator {
    fn default() -> Self {
        Self::new(ScriptOptions::default())
    }
}

impl ScriptGenerator {
    /// Create a generator with the fixed fill plan
    pub fn new(options: ScriptOptions) -> Self {
        Self {
            options,
            plan: default_plan(),
        }
    }

    /// Get the options
    pub fn options(&self) -> &ScriptOptions {
        &self.options
    }

    /// Get the fill plan
    pub fn plan(&self) -> &[FillStep] {
        &self.plan
    }

    /// Render the script; the same record always yields the same text
    pub fn generate(&self, record: &VehicleRecord) -> String {
        let vehicle = ScriptVehicle::from(record);
        // Serializing plain strings cannot fail.
        let vehicle_json = serde_json::to_string(&vehicle).unwrap_or_else(|_| "{}".to_string());

        let steps = self
            .plan
            .iter()
            .map(|step| format!("  {}", step.to_js()))
            .collect::<Vec<_>>()
            .join("\n");

        let options = &self.options;
        // Vehicle data goes in last so its text is never scanned for placeholders.
        TEMPLATE
            .replace("__LABEL_SLACK__", &options.label_slack.to_string())
            .replace("__TEXT_FIELD_DEPTH__", &options.text_field_depth.to_string())
            .replace("__DROPDOWN_DEPTH__", &options.dropdown_depth.to_string())
            .replace("__CLEAN_TITLE_DEPTH__", &options.clean_title_depth.to_string())
            .replace("__POLL_ATTEMPTS__", &options.poll_attempts.to_string())
            .replace("__POLL_INTERVAL_MS__", &options.poll_interval_ms.to_string())
            .replace("__SCROLL_SETTLE_MS__", &options.scroll_settle_ms.to_string())
            .replace("__OPTION_SETTLE_MS__", &options.option_settle_ms.to_string())
            .replace("__STEPS__", &steps)
            .replace("__VEHICLE_JSON__", &vehicle_json)
            .trim()
            .to_string()
    }
}

/// Render the script with default options
pub fn generate_script(record: &VehicleRecord) -> String {
    ScriptGenerator::default().generate(record)
}
