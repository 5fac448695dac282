//! Per-invocation context
//!
//! The host assembles an [`InterceptorContext`] for every step it invokes.
//! The context borrows the operation's input parameters (mutably, so the
//! target can be changed), the pre-image store (shared, never written), the
//! operation's shared variables (mutably), and an optional trace sink.
//! Nothing in it outlives the invocation.
//!
//! ```ignore
//! let mut ctx = InterceptorContext::builder(&mut params, &pre_images, &mut shared)
//!     .message(MessageName::Update)
//!     .trace_sink(&sink)
//!     .metadata(InvocationMetadata::capture())
//!     .build();
//! interceptor.execute(&mut ctx)?;
//! ```

use recordgate_core::{MessageName, Parameters, RecordView, Result, Stage};
use recordgate_primitives::{SharedVariableStore, SnapshotStore, TraceSink, Tracer};

use crate::metadata::{InvocationMetadata, OperationInfo};

/// Everything one interceptor invocation can see.
#[derive(Debug)]
pub struct InterceptorContext<'a> {
    operation: OperationInfo,
    parameters: &'a mut Parameters,
    pre_images: &'a SnapshotStore,
    shared_variables: &'a mut SharedVariableStore,
    tracer: Tracer<'a>,
    metadata: InvocationMetadata,
}

impl<'a> InterceptorContext<'a> {
    pub fn builder(
        parameters: &'a mut Parameters,
        pre_images: &'a SnapshotStore,
        shared_variables: &'a mut SharedVariableStore,
    ) -> ContextBuilder<'a> {
        ContextBuilder {
            parameters,
            pre_images,
            shared_variables,
            sink: None,
            metadata: InvocationMetadata::default(),
            message: MessageName::Update,
            stage: Stage::PreOperation,
            depth: 1,
        }
    }

    pub fn operation(&self) -> &OperationInfo {
        &self.operation
    }

    pub fn metadata(&self) -> &InvocationMetadata {
        &self.metadata
    }

    /// Input parameters, including the target
    pub fn parameters(&self) -> &Parameters {
        self.parameters
    }

    /// Writable view of the target record
    ///
    /// Fails with `InvalidTarget` when the target is absent or not a record.
    pub fn target(&mut self) -> Result<RecordView<'_>> {
        self.parameters.target_mut().map(RecordView::writable)
    }

    /// Pre-images. The returned borrow is independent of the context.
    pub fn snapshots(&self) -> &'a SnapshotStore {
        self.pre_images
    }

    pub fn shared_variables(&self) -> &SharedVariableStore {
        self.shared_variables
    }

    pub fn shared_variables_mut(&mut self) -> &mut SharedVariableStore {
        self.shared_variables
    }

    /// Trace handle. Copyable, so it can be held across target borrows.
    pub fn tracer(&self) -> Tracer<'a> {
        self.tracer
    }

    /// Best-effort trace write
    pub fn trace(&self, line: impl AsRef<str>) {
        self.tracer.trace(line);
    }
}

/// Builder for [`InterceptorContext`].
pub struct ContextBuilder<'a> {
    parameters: &'a mut Parameters,
    pre_images: &'a SnapshotStore,
    shared_variables: &'a mut SharedVariableStore,
    sink: Option<&'a dyn TraceSink>,
    metadata: InvocationMetadata,
    message: MessageName,
    stage: Stage,
    depth: u32,
}

impl<'a> ContextBuilder<'a> {
    pub fn trace_sink(mut self, sink: &'a dyn TraceSink) -> Self {
        self.sink = Some(sink);
        self
    }

    pub fn metadata(mut self, metadata: InvocationMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    pub fn message(mut self, message: MessageName) -> Self {
        self.message = message;
        self
    }

    pub fn stage(mut self, stage: Stage) -> Self {
        self.stage = stage;
        self
    }

    pub fn depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    /// Build the context. Never fails: an invalid target is reported by the
    /// interceptor, not here.
    pub fn build(self) -> InterceptorContext<'a> {
        let primary_entity = self
            .parameters
            .target()
            .map(|r| r.logical_name().to_string())
            .unwrap_or_default();
        InterceptorContext {
            operation: OperationInfo {
                id: self.shared_variables.operation_id(),
                message: self.message,
                stage: self.stage,
                depth: self.depth,
                primary_entity,
            },
            parameters: self.parameters,
            pre_images: self.pre_images,
            shared_variables: self.shared_variables,
            tracer: Tracer::new(self.sink),
            metadata: self.metadata,
        }
    }
}
