//! Error handling
//!
//! Generation is infallible once parameters are in range, so the crate keeps
//! anyhow's flexible errors instead of a bespoke error enum: preconditions
//! fail fast with a descriptive message and everything else bubbles up with
//! context attached.

#[allow(unused_imports)]
pub use anyhow::{anyhow, bail, ensure, Error};
use anyhow::{Context, Result};

/// Result type alias used throughout the crate
pub type ScrawlResult<T> = Result<T>;

/// Helper for attaching file context to I/O errors
pub trait ScrawlContext<T> {
    /// Add file operation context to an error
    fn with_file_context<P: AsRef<std::path::Path>>(
        self,
        operation: &str,
        path: P,
    ) -> ScrawlResult<T>;
}

impl<T, E> ScrawlContext<T> for Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn with_file_context<P: AsRef<std::path::Path>>(
        self,
        operation: &str,
        path: P,
    ) -> ScrawlResult<T> {
        self.with_context(|| {
            format!("Failed to {} file: {}", operation, path.as_ref().display())
        })
    }
}

/// Validation helper shared by the contour generators
pub fn validate_half_extents(a: f64, b: f64) -> ScrawlResult<()> {
    ensure!(
        a.is_finite() && a > 0.0,
        "Horizontal half-extent must be positive and finite, got: {}",
        a
    );
    ensure!(
        b.is_finite() && b > 0.0,
        "Vertical half-extent must be positive and finite, got: {}",
        b
    );
    Ok(())
}
