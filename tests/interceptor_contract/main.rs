//! Interceptor Contract Test Suite
//!
//! Drives `PhoneFormatInterceptor::execute` directly, the way a host does:
//! build a context over parameters, pre-images and shared variables, call
//! execute once, then inspect the target, the stores and the trace.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test interceptor_contract
//!
//! # Snapshot tests only
//! cargo test --test interceptor_contract snapshots::
//! ```

use recordgate::{
    Interceptor, InterceptorContext, InterceptorError, InvocationMetadata, MemoryTraceSink,
    Parameters, PhoneFormatInterceptor, Record, Registration, SharedVariableStore,
    SnapshotStore, Value,
};

// Test modules
pub mod errors;
pub mod shared_variables;
pub mod snapshots;
pub mod target;
pub mod tracing_output;
pub mod transformation;

// =============================================================================
// SHARED TEST UTILITIES
// =============================================================================

/// Everything a host hands one invocation
pub struct Harness {
    pub params: Parameters,
    pub images: SnapshotStore,
    pub shared: SharedVariableStore,
    pub sink: MemoryTraceSink,
    pub metadata: InvocationMetadata,
}

impl Harness {
    pub fn new(params: Parameters) -> Self {
        Self {
            params,
            images: SnapshotStore::new(),
            shared: SharedVariableStore::default(),
            sink: MemoryTraceSink::new(),
            metadata: InvocationMetadata::default(),
        }
    }

    /// Harness whose target is `record`
    pub fn for_target(record: Record) -> Self {
        Self::new(Parameters::for_target(record))
    }

    pub fn with_pre_image(mut self, name: &str, image: Record) -> Self {
        self.images.insert(name, image);
        self
    }

    pub fn execute(&mut self, interceptor: &dyn Interceptor) -> Result<(), InterceptorError> {
        let mut ctx = InterceptorContext::builder(&mut self.params, &self.images, &mut self.shared)
            .trace_sink(&self.sink)
            .metadata(self.metadata.clone())
            .build();
        interceptor.execute(&mut ctx)
    }

    pub fn target(&self) -> &Record {
        self.params.target().expect("harness target")
    }

    pub fn attribute(&self, name: &str) -> Option<&Value> {
        self.target().attribute(name)
    }
}

/// Interceptor with the built-in registration
pub fn default_interceptor() -> PhoneFormatInterceptor {
    PhoneFormatInterceptor::new(Registration::default())
}

/// Contact carrying the trigger and a phone number
pub fn contact(phone: impl Into<Value>) -> Record {
    Record::new("contact")
        .with_attribute("firstname", "Ada")
        .with_attribute("lastname", "Lovelace")
        .with_attribute("telephone1", phone)
}

/// Contact without the trigger attribute
pub fn contact_without_trigger(phone: impl Into<Value>) -> Record {
    Record::new("contact")
        .with_attribute("lastname", "Lovelace")
        .with_attribute("telephone1", phone)
}
