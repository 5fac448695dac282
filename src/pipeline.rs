//! Host pipeline for recordgate.
//!
//! A [`Pipeline`] plays the host's part: it takes one record mutation
//! ([`Operation`]), invokes every registered interceptor that applies to it in
//! stage order, and either returns the mutated target or rejects the whole
//! operation. Stages run one after another on the calling thread and share a
//! single [`SharedVariableStore`] created for the operation.

use std::sync::Arc;
use std::time::{Duration, Instant};

use recordgate_config::Registration;
use recordgate_core::{MessageName, OperationId, Parameters, Record, Stage, Value};
use recordgate_executor::{
    Interceptor, InterceptorContext, InvocationMetadata, PhoneFormatInterceptor,
};
use recordgate_primitives::{SharedVariableStore, SnapshotStore, TraceSink};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{Error, Result};

/// Default wall-clock limit for one interceptor invocation
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

/// Stages the pipeline dispatches, in order
const DISPATCHED_STAGES: [Stage; 2] = [Stage::PreValidation, Stage::PreOperation];

/// One record mutation submitted to the pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    pub message: MessageName,
    /// Input parameters; the target goes under `Target`
    pub parameters: Parameters,
    /// Pre-images; ignored for `Create`
    #[serde(default)]
    pub pre_images: SnapshotStore,
    #[serde(default = "default_depth")]
    pub depth: u32,
}

fn default_depth() -> u32 {
    1
}

impl Operation {
    pub fn new(message: MessageName, target: Record) -> Self {
        Self {
            message,
            parameters: Parameters::for_target(target),
            pre_images: SnapshotStore::new(),
            depth: 1,
        }
    }

    pub fn with_pre_image(mut self, name: impl Into<String>, image: Record) -> Self {
        self.pre_images.insert(name, image);
        self
    }

    pub fn with_parameter(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.parameters.insert(name, value);
        self
    }

    /// Parse an operation from its JSON form.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

/// A committed operation.
#[derive(Debug, Clone)]
pub struct Outcome {
    pub operation_id: OperationId,
    /// Target after every stage ran
    pub target: Record,
    /// Shared variables as left by the last stage
    pub shared_variables: SharedVariableStore,
    /// Interceptors that ran, in order
    pub stages_run: Vec<String>,
}

/// Ordered set of interceptors plus the host limits they run under.
///
/// # Example
///
/// ```ignore
/// let pipeline = Pipeline::builder()
///     .register(PhoneFormatInterceptor::new(Registration::default()))
///     .timeout(Duration::from_secs(30))
///     .build()?;
///
/// let outcome = pipeline.run(Operation::new(MessageName::Update, contact))?;
/// ```
pub struct Pipeline {
    interceptors: Vec<Arc<dyn Interceptor>>,
    timeout: Duration,
    sink: Option<Arc<dyn TraceSink>>,
}

impl Pipeline {
    pub fn builder() -> PipelineBuilder {
        PipelineBuilder::new()
    }

    /// Pipeline running the phone-format interceptor under `registration`.
    pub fn from_registration(registration: Registration) -> Result<Self> {
        Self::builder()
            .register(PhoneFormatInterceptor::new(registration))
            .build()
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Registered interceptor names, in execution order
    pub fn interceptor_names(&self) -> Vec<&str> {
        self.interceptors.iter().map(|i| i.name()).collect()
    }

    /// Run every applicable interceptor against `operation`.
    ///
    /// The first failure rejects the operation and the partially mutated
    /// target is dropped. Each invocation is timed on its own; one that runs
    /// past the limit aborts the operation even if it succeeded.
    pub fn run(&self, operation: Operation) -> Result<Outcome> {
        let Operation {
            message,
            mut parameters,
            pre_images,
            depth,
        } = operation;

        let pre_images = if message.has_prior_state() {
            pre_images
        } else {
            if !pre_images.is_empty() {
                debug!(message = %message, "ignoring pre-images supplied with a create");
            }
            SnapshotStore::new()
        };

        let entity = parameters
            .target()
            .map(|r| r.logical_name().to_string())
            .unwrap_or_default();
        let mut shared = SharedVariableStore::new(OperationId::new());
        let operation_id = shared.operation_id();
        let mut stages_run = Vec::new();

        info!(operation = %operation_id, message = %message, entity = %entity, "operation started");

        for stage in DISPATCHED_STAGES {
            for interceptor in &self.interceptors {
                if !interceptor.registration().applies_to(message, stage, &entity) {
                    continue;
                }

                let mut builder =
                    InterceptorContext::builder(&mut parameters, &pre_images, &mut shared)
                        .message(message)
                        .stage(stage)
                        .depth(depth)
                        .metadata(InvocationMetadata::capture());
                if let Some(sink) = self.sink.as_deref() {
                    builder = builder.trace_sink(sink);
                }
                let mut ctx = builder.build();

                let started = Instant::now();
                let result = interceptor.execute(&mut ctx);
                let elapsed = started.elapsed();

                result.map_err(|source| {
                    warn!(
                        operation = %operation_id,
                        interceptor = interceptor.name(),
                        error = %source,
                        "operation rejected, discarding changes"
                    );
                    Error::Rejected {
                        interceptor: interceptor.name().to_string(),
                        stage,
                        source,
                    }
                })?;
                stages_run.push(interceptor.name().to_string());

                if elapsed > self.timeout {
                    warn!(
                        operation = %operation_id,
                        interceptor = interceptor.name(),
                        elapsed = ?elapsed,
                        "invocation timed out"
                    );
                    return Err(Error::Timeout {
                        interceptor: interceptor.name().to_string(),
                        elapsed,
                        limit: self.timeout,
                    });
                }
            }
        }

        let target = parameters.take_target()?;
        info!(operation = %operation_id, stages = stages_run.len(), "operation committed");
        Ok(Outcome {
            operation_id,
            target,
            shared_variables: shared,
            stages_run,
        })
    }
}

impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline")
            .field("interceptors", &self.interceptor_names())
            .field("timeout", &self.timeout)
            .field("traced", &self.sink.is_some())
            .finish()
    }
}

/// Builder for [`Pipeline`].
pub struct PipelineBuilder {
    interceptors: Vec<Arc<dyn Interceptor>>,
    timeout: Duration,
    sink: Option<Arc<dyn TraceSink>>,
}

impl PipelineBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            interceptors: Vec::new(),
            timeout: DEFAULT_TIMEOUT,
            sink: None,
        }
    }

    /// Add an interceptor. Within a stage, interceptors run in the order
    /// they were registered.
    pub fn register(mut self, interceptor: impl Interceptor + 'static) -> Self {
        self.interceptors.push(Arc::new(interceptor));
        self
    }

    /// Add an interceptor shared with other pipelines.
    pub fn register_shared(mut self, interceptor: Arc<dyn Interceptor>) -> Self {
        self.interceptors.push(interceptor);
        self
    }

    /// Wall-clock limit for each interceptor invocation.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sink receiving every interceptor's trace lines.
    pub fn trace_sink(mut self, sink: Arc<dyn TraceSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Validate every registration and fix the execution order.
    pub fn build(mut self) -> Result<Pipeline> {
        for interceptor in &self.interceptors {
            interceptor.registration().validate()?;
        }
        self.interceptors.sort_by_key(|i| i.registration().stage);
        Ok(Pipeline {
            interceptors: self.interceptors,
            timeout: self.timeout,
            sink: self.sink,
        })
    }
}

impl Default for PipelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
