//! Phone-format interceptor
//!
//! Pre-operation step for Create and Update. When the target carries the
//! trigger attribute, the transform attribute is normalized in place (upper
//! case by default). Along the way the step traces its inputs, the resulting
//! attributes, invocation metadata, the prior value from the pre-image, and
//! the state of its shared variable.
//!
//! Step order:
//!
//! 1. validate the target (fail fast, nothing traced)
//! 2. trace input parameters
//! 3. return early without the trigger attribute
//! 4. transform the attribute
//! 5. trace target attributes
//! 6. trace operation and invocation metadata
//! 7. trace the prior value from the pre-image, or note it is missing
//! 8. read or seed the shared variable

use recordgate_config::Registration;
use recordgate_core::{RecordError, RecordView, Result};
use recordgate_primitives::{SharedVariableStore, SnapshotStore, Tracer};
use tracing::{debug, warn};

use crate::context::InterceptorContext;
use crate::error::InterceptorError;
use crate::interceptor::{guard, Interceptor};
use crate::render::{describe, pair_line};
use crate::transform::{AttributeTransform, UppercaseText};

/// Normalizes a phone-like attribute on records carrying a trigger attribute.
pub struct PhoneFormatInterceptor {
    registration: Registration,
    transform: Box<dyn AttributeTransform>,
}

impl PhoneFormatInterceptor {
    /// Interceptor with the upper-case transform
    pub fn new(registration: Registration) -> Self {
        Self {
            registration,
            transform: Box::new(UppercaseText),
        }
    }

    /// Replace the transform applied in step 4
    pub fn with_transform(mut self, transform: impl AttributeTransform + 'static) -> Self {
        self.transform = Box::new(transform);
        self
    }

    fn run(&self, ctx: &mut InterceptorContext<'_>) -> Result<()> {
        let reg = &self.registration;
        let tracer = ctx.tracer();

        ctx.parameters().target()?;

        for (name, value) in ctx.parameters().iter() {
            tracer.trace(pair_line(name, value));
        }

        let mut target = ctx.target()?;
        if !target.has(&reg.trigger_attribute) {
            debug!(
                interceptor = %reg.name,
                trigger = %reg.trigger_attribute,
                "trigger attribute absent, skipping"
            );
            return Ok(());
        }

        self.transform_attribute(&mut target)?;

        for (name, value) in target.iter() {
            tracer.trace(pair_line(name, value));
        }

        tracer.trace(ctx.operation().trace_line());
        for line in ctx.metadata().trace_lines() {
            tracer.trace(line);
        }

        self.trace_prior_value(ctx.snapshots(), tracer)?;
        self.share_variable(ctx.shared_variables_mut(), tracer)?;
        Ok(())
    }

    /// The new value is computed before anything is written, so a failed
    /// transform leaves the target as it was.
    fn transform_attribute(&self, target: &mut RecordView<'_>) -> Result<()> {
        let attribute = &self.registration.transform_attribute;
        if !target.has(attribute) {
            if self.registration.require_transform_attribute {
                return Err(RecordError::Transformation {
                    attribute: attribute.clone(),
                    reason: format!("attribute is not present on {}", target.logical_name()),
                });
            }
            return Ok(());
        }

        let normalized = self
            .transform
            .apply(target.get(attribute)?)
            .map_err(|e| RecordError::Transformation {
                attribute: attribute.clone(),
                reason: e.to_string(),
            })?;
        target.set(attribute, normalized)
    }

    fn trace_prior_value(&self, snapshots: &SnapshotStore, tracer: Tracer<'_>) -> Result<()> {
        let name = &self.registration.snapshot_name;
        if !snapshots.has_snapshot(name) {
            tracer.trace(format!("missing snapshot: {}", name));
            return Ok(());
        }

        let image = snapshots.snapshot(name)?;
        let attribute = &self.registration.transform_attribute;
        if image.has(attribute) {
            tracer.trace(format!(
                "{} prior value of {}: {}",
                name,
                attribute,
                describe(image.get(attribute)?)
            ));
        }
        Ok(())
    }

    /// First stage to run seeds the default; later stages see its value.
    fn share_variable(&self, vars: &mut SharedVariableStore, tracer: Tracer<'_>) -> Result<()> {
        let key = &self.registration.shared_variable_key;
        if vars.has(key) {
            tracer.trace(format!(
                "retrieving existing shared variable. key: {} value: {}",
                key,
                describe(vars.get(key)?)
            ));
        } else {
            let value = self.registration.shared_variable_default.clone();
            tracer.trace(format!(
                "adding new shared variable. key: {} value: {}",
                key, value
            ));
            vars.put(key.clone(), value);
        }
        Ok(())
    }
}

impl Interceptor for PhoneFormatInterceptor {
    fn name(&self) -> &str {
        &self.registration.name
    }

    fn registration(&self) -> &Registration {
        &self.registration
    }

    fn execute(&self, ctx: &mut InterceptorContext<'_>) -> std::result::Result<(), InterceptorError> {
        debug!(
            interceptor = %self.registration.name,
            operation = %ctx.operation().id,
            transform = self.transform.name(),
            "executing"
        );
        guard(|| self.run(ctx)).map_err(|e| {
            warn!(
                interceptor = %self.registration.name,
                code = e.code(),
                error = %e,
                "interceptor failed"
            );
            e
        })
    }
}

impl std::fmt::Debug for PhoneFormatInterceptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PhoneFormatInterceptor")
            .field("registration", &self.registration)
            .field("transform", &self.transform.name())
            .finish()
    }
}
