use crate::vehicle::record::VehicleRecord;

/// Dealer description that replaces whatever the extractor produced
pub const FIXED_DESCRIPTION: &str = "📍 DEALER LOCATION:
🏢 25350 Pleasant Valley Rd, Suite 138
Chantilly, VA 20152

📞 Call / Text:
📲 7️⃣0️⃣3️⃣-7️⃣7️⃣5️⃣-8️⃣5️⃣8️⃣5️⃣

📄 Clean title
🚘 Ready for a test drive
💬 Serious buyers only — message now before it’s gone!";

/// Keep only ASCII decimal digits, in their original order
///
/// Lossy on purpose: `"45.5k"` becomes `"455"`.
pub fn digits_only(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Normalize a freshly extracted record
///
/// Price and mileage are reduced to digits, the description is replaced by
/// [`FIXED_DESCRIPTION`]. Every other field is left alone. Applying this twice
/// yields the same record.
pub fn normalize(mut record: VehicleRecord) -> VehicleRecord {
    record.price = digits_only(&record.price);
    record.mileage = digits_only(&record.mileage);
    record.description = FIXED_DESCRIPTION.to_string();
    record
}
