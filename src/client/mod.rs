//! Client for the Prediction Service.
//!
//! Provides [`PredictClient`], a thin typed wrapper over the service's two
//! HTTP endpoints: the multipart upload at `POST /predict/` and the status
//! banner at `GET /`.

mod predict;

pub use predict::{DEFAULT_BASE_URL, PredictClient};
