//! The interceptor contract
//!
//! An [`Interceptor`] is one synchronous step the host runs against a
//! record mutation before it is committed. `execute` either succeeds, having
//! possibly changed the target in place, or returns an [`InterceptorError`].
//! A failure tells the host to reject the whole operation.

use std::panic::{self, AssertUnwindSafe};

use recordgate_config::Registration;

use crate::context::InterceptorContext;
use crate::error::InterceptorError;

/// A registered step in the host pipeline.
pub trait Interceptor: Send + Sync {
    /// Name used in logs and error reports
    fn name(&self) -> &str;

    /// Deployment constants, including when the host should invoke the step
    fn registration(&self) -> &Registration;

    /// Run the step. Every failure, panics included, comes back as an
    /// [`InterceptorError`].
    fn execute(&self, ctx: &mut InterceptorContext<'_>) -> Result<(), InterceptorError>;
}

/// Run `f`, normalizing its error and any panic into [`InterceptorError`].
///
/// Implementations wrap their body in this so nothing but the normalized
/// error crosses the execute boundary.
pub fn guard<T, E, F>(f: F) -> Result<T, InterceptorError>
where
    F: FnOnce() -> Result<T, E>,
    E: Into<InterceptorError>,
{
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(result) => result.map_err(Into::into),
        Err(payload) => Err(InterceptorError::from_panic(payload)),
    }
}
