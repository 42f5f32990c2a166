//! Vehicle listing data and its normalization
//!
//! - VehicleRecord: the structured result of one extraction
//! - normalize: price/mileage digit stripping and the fixed dealer description

pub mod normalize;
pub mod record;

pub use normalize::{FIXED_DESCRIPTION, digits_only, normalize};
pub use record::{FORCED_SPECS, ModelYear, VehicleRecord};
