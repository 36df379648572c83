//! Public types for the idunn API.

mod file;
mod prediction;
mod status;

pub use file::SelectedFile;
pub use prediction::{Nutrition, Prediction};
pub use status::ServiceStatus;
