//! Console auto-fill script generation
//!
//! The generated text is meant to be pasted into the developer console of a
//! marketplace listing form. It finds form controls by their visible label
//! text, opens dropdowns and polls for options, types into inputs through the
//! native value setter, and ticks the clean title control. Nothing it does is
//! observed by this crate once the text is handed over.
//!
//! - [`plan`]: the fixed, typed fill order ([`FillStep`])
//! - [`generator`]: template rendering ([`ScriptGenerator`], [`ScriptOptions`])

pub mod generator;
pub mod plan;

pub use generator::{ScriptGenerator, ScriptOptions, ScriptVehicle, generate_script};
pub use plan::{CONDITION, FUEL_TYPE, FillStep, FillValue, VEHICLE_TYPE, VehicleField, default_plan};
