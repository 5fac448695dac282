//! Interceptor execution for recordgate
//!
//! This crate defines the contract between a host pipeline and the steps it
//! runs before committing a record mutation:
//!
//! - [`InterceptorContext`]: what one invocation can see and change
//! - [`Interceptor`]: the `execute(context)` contract
//! - [`InterceptorError`]: the only error that crosses that contract
//! - [`PhoneFormatInterceptor`]: the phone normalization step
//!
//! # Example
//!
//! ```ignore
//! use recordgate_executor::{InterceptorContext, Interceptor, PhoneFormatInterceptor};
//!
//! let interceptor = PhoneFormatInterceptor::new(Registration::default());
//! let mut ctx = InterceptorContext::builder(&mut params, &pre_images, &mut shared)
//!     .trace_sink(&sink)
//!     .build();
//! interceptor.execute(&mut ctx)?;
//! ```

mod context;
mod error;
mod interceptor;
mod metadata;
mod phone;
mod render;
mod transform;

pub use context::{ContextBuilder, InterceptorContext};
pub use error::{ErrorKind, InterceptorError, WireError};
pub use interceptor::{guard, Interceptor};
pub use metadata::{InvocationMetadata, OperationInfo};
pub use phone::PhoneFormatInterceptor;
pub use render::{describe, pair_line, NULL_MARKER};
pub use transform::{AttributeTransform, TransformFailure, UppercaseText};
