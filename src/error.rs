//! Error types for the Pressmark application.

use thiserror::Error;

/// Errors that can occur while acquiring the web-vitals measurement library.
///
/// These never propagate out of the reporter: acquisition failures are
/// logged and the registration pass is skipped for that render.
#[derive(Debug, Clone, Error)]
pub enum VitalsError {
    /// The measurement library could not be loaded at all
    #[error("Failed to load web-vitals library: {0}")]
    LibraryLoad(String),
    /// The library loaded but one of the five measurement functions is missing
    #[error("Measurement function unavailable: {0}")]
    MissingMetric(&'static str),
}
