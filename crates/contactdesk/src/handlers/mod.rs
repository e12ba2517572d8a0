//! HTTP request handlers.

mod analyze;
mod health;
mod landing;

pub use analyze::{AnalysisResult, analyze};
pub use health::{livez, readyz};
pub use landing::index;
