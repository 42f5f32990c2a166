use serde_json::{Value, json};

/// Fields the model must always return
pub const REQUIRED_FIELDS: [&str; 6] = ["title", "year", "make", "model", "price", "bodyStyle"];

/// Build the extraction prompt for one listing URL
pub fn extraction_prompt(url: &str) -> String {
    format!(
        "Analyze this vehicle listing URL and extract all available technical details.
If you cannot access the real-time page content, use your search capabilities to find the specific listing details for: {url}.

Marketplace form compatibility rules:
- exteriorColor/interiorColor: must be a standard color (e.g., Black, White, Silver, Gray, Red, Blue, Brown, Beige).
- bodyStyle: use standard categories (e.g., Sedan, SUV, Coupe, Hatchback, Truck, Van, Convertible).
- mileage: provide just the number.
- price: provide just the number.

Provide a structured JSON response."
    )
}

/// Response schema in the Gemini OpenAPI subset
///
/// `year` is an integer and `features` a list of strings; everything else is
/// a string.
pub fn response_schema() -> Value {
    let string = || json!({ "type": "STRING" });

    json!({
        "type": "OBJECT",
        "properties": {
            "title": string(),
            "year": { "type": "INTEGER" },
            "make": string(),
            "model": string(),
            "price": string(),
            "mileage": string(),
            "vin": string(),
            "transmission": string(),
            "fuelType": string(),
            "exteriorColor": string(),
            "interiorColor": string(),
            "engine": string(),
            "bodyStyle": string(),
            "description": string(),
            "features": {
                "type": "ARRAY",
                "items": string()
            }
        },
        "required": REQUIRED_FIELDS
    })
}
