//! Idunn - client for the Smart Grocery Assistant prediction service
//!
//! This crate wraps the Prediction Service's HTTP API in a typed client and
//! a small session state machine: select one grocery image, upload it, and
//! render the returned label, confidence score, and optional nutrition facts.
//!
//! # Example
//!
//! ```rust,no_run
//! use idunn::{PredictClient, Session, render};
//!
//! #[tokio::main]
//! async fn main() -> idunn::Result<()> {
//!     let mut session = Session::new(PredictClient::new());
//!
//!     session.select_file("photos/apple.jpg");
//!     let prediction = session.submit().await?;
//!
//!     println!("{}", render::prediction_text(prediction));
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod render;
pub mod session;
pub mod telemetry;
pub mod types;
pub mod version;

// Re-export main types at crate root
pub use client::{DEFAULT_BASE_URL, PredictClient};
pub use config::{Config, ServiceConfig};
pub use error::{IdunnError, Result};
pub use session::Session;
pub use version::PKG_VERSION;

// Re-export all types
pub use types::{Nutrition, Prediction, SelectedFile, ServiceStatus};
