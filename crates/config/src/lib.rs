//! Registration configuration for recordgate interceptors.
//!
//! A [`Registration`] holds the named constants agreed when an interceptor is
//! deployed: which messages and stage it runs on, the snapshot name the host
//! supplies pre-images under, the shared-variable key and default, and the
//! trigger and transform attribute names. None of these are computed at run
//! time.
//!
//! ```ignore
//! use recordgate_config::Registration;
//!
//! let reg = Registration::new()
//!     .snapshot_name("PreImage")
//!     .transform_attribute("mobilephone");
//!
//! let reg = Registration::load("registration.toml")?;
//! ```

use std::path::{Path, PathBuf};

use recordgate_core::{MessageName, Stage};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors loading or validating a registration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse registration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid registration: {0}")]
    Invalid(String),
}

/// Deployment-time constants for one interceptor step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Registration {
    pub name: String,
    /// Primary entity the step is registered on; `None` matches any
    pub entity: Option<String>,
    pub messages: Vec<MessageName>,
    pub stage: Stage,
    pub snapshot_name: String,
    pub shared_variable_key: String,
    pub shared_variable_default: String,
    pub trigger_attribute: String,
    pub transform_attribute: String,
    /// Fail the operation when the trigger is present but the transform
    /// attribute is not
    pub require_transform_attribute: bool,
}

impl Registration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn entity(mut self, entity: impl Into<String>) -> Self {
        self.entity = Some(entity.into());
        self
    }

    pub fn messages(mut self, messages: impl IntoIterator<Item = MessageName>) -> Self {
        self.messages = messages.into_iter().collect();
        self
    }

    pub fn stage(mut self, stage: Stage) -> Self {
        self.stage = stage;
        self
    }

    pub fn snapshot_name(mut self, name: impl Into<String>) -> Self {
        self.snapshot_name = name.into();
        self
    }

    pub fn shared_variable(mut self, key: impl Into<String>, default: impl Into<String>) -> Self {
        self.shared_variable_key = key.into();
        self.shared_variable_default = default.into();
        self
    }

    pub fn trigger_attribute(mut self, name: impl Into<String>) -> Self {
        self.trigger_attribute = name.into();
        self
    }

    pub fn transform_attribute(mut self, name: impl Into<String>) -> Self {
        self.transform_attribute = name.into();
        self
    }

    pub fn require_transform_attribute(mut self, required: bool) -> Self {
        self.require_transform_attribute = required;
        self
    }

    /// Whether the host should invoke this step for an operation.
    pub fn applies_to(&self, message: MessageName, stage: Stage, entity: &str) -> bool {
        self.stage == stage
            && self.messages.contains(&message)
            && self.entity.as_deref().map_or(true, |e| e == entity)
    }

    /// Reject registrations the host could never satisfy.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let required = [
            ("name", &self.name),
            ("snapshot_name", &self.snapshot_name),
            ("shared_variable_key", &self.shared_variable_key),
            ("trigger_attribute", &self.trigger_attribute),
            ("transform_attribute", &self.transform_attribute),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ConfigError::Invalid(format!("{} must not be empty", field)));
            }
        }
        if self.messages.is_empty() {
            return Err(ConfigError::Invalid(
                "at least one message is required".to_string(),
            ));
        }
        if !self.stage.is_pre_commit() {
            return Err(ConfigError::Invalid(format!(
                "stage {} runs after commit; record changes would be lost",
                self.stage
            )));
        }
        Ok(())
    }

    /// Parse and validate a TOML registration. Missing fields keep defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let registration: Registration = toml::from_str(text)?;
        registration.validate()?;
        Ok(registration)
    }

    /// Read, parse and validate a TOML registration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}

impl Default for Registration {
    fn default() -> Self {
        Self {
            name: "PreOperationFormatPhoneCreateUpdate".to_string(),
            entity: None,
            messages: vec![MessageName::Create, MessageName::Update],
            stage: Stage::PreOperation,
            snapshot_name: "PreImageDemo".to_string(),
            shared_variable_key: "SharedVariableKey".to_string(),
            shared_variable_default: "Demo value".to_string(),
            trigger_attribute: "firstname".to_string(),
            transform_attribute: "telephone1".to_string(),
            require_transform_attribute: true,
        }
    }
}
