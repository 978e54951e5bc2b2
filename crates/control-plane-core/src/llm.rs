//! Local LLM runtime configuration
//!
//! This module defines the configuration record for a locally hosted
//! language model runtime: the runtime executable, the on-disk model
//! format, and the flags controlling how the runtime is used.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::{ControlPlaneError, Result};
use crate::types::Tags;

/// Default context window in tokens for newly registered runtimes
pub const DEFAULT_CONTEXT_WINDOW: u32 = 4096;

/// Supported on-disk model formats for local runtimes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelFormat {
    /// GGUF (llama.cpp and derivatives)
    Gguf,
    /// Legacy GGML checkpoints
    Ggml,
    /// Safetensors checkpoint
    Safetensors,
    /// ONNX graph
    Onnx,
}

impl Default for ModelFormat {
    fn default() -> Self {
        ModelFormat::Gguf
    }
}

impl fmt::Display for ModelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelFormat::Gguf => write!(f, "gguf"),
            ModelFormat::Ggml => write!(f, "ggml"),
            ModelFormat::Safetensors => write!(f, "safetensors"),
            ModelFormat::Onnx => write!(f, "onnx"),
        }
    }
}

impl FromStr for ModelFormat {
    type Err = ControlPlaneError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "gguf" => Ok(ModelFormat::Gguf),
            "ggml" => Ok(ModelFormat::Ggml),
            "safetensors" => Ok(ModelFormat::Safetensors),
            "onnx" => Ok(ModelFormat::Onnx),
            _ => Err(ControlPlaneError::ValidationError(format!(
                "Invalid model format: {}",
                s
            ))),
        }
    }
}

/// Configuration for a local language model runtime
///
/// Identified by `name`; registering a second configuration with the same
/// name replaces the first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocalLlmConfig {
    /// Unique name identifying the runtime
    pub name: String,

    /// Path to the runtime executable
    pub binary_path: PathBuf,

    /// On-disk model format
    #[serde(default)]
    pub model_type: ModelFormat,

    /// Maximum context window in tokens
    pub context_window: u32,

    /// Free-text description
    #[serde(default)]
    pub description: String,

    /// User-defined tags for categorization
    #[serde(default)]
    pub tags: Tags,

    /// Whether GPU offload is enabled
    pub gpu_enabled: bool,

    /// Whether the runtime is currently enabled
    pub enabled: bool,
}

impl LocalLlmConfig {
    /// Create a runtime configuration with default settings
    pub fn new(name: impl Into<String>, binary_path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            binary_path: binary_path.into(),
            model_type: ModelFormat::default(),
            context_window: DEFAULT_CONTEXT_WINDOW,
            description: String::new(),
            tags: Vec::new(),
            gpu_enabled: true,
            enabled: true,
        }
    }

    /// Create a builder for constructing runtime configurations
    pub fn builder(
        name: impl Into<String>,
        binary_path: impl Into<PathBuf>,
    ) -> LocalLlmConfigBuilder {
        LocalLlmConfigBuilder::new(name, binary_path)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(ControlPlaneError::ValidationError(
                "Runtime name cannot be empty".to_string(),
            ));
        }

        if self.binary_path.as_os_str().is_empty() {
            return Err(ControlPlaneError::ValidationError(
                "Runtime binary path cannot be empty".to_string(),
            ));
        }

        if self.context_window == 0 {
            return Err(ControlPlaneError::ValidationError(
                "Context window must be a positive number of tokens".to_string(),
            ));
        }

        Ok(())
    }

    /// Check whether the runtime carries a specific tag
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

impl fmt::Display for LocalLlmConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "LocalLlm({}, {}, ctx={})",
            self.name, self.model_type, self.context_window
        )
    }
}

/// Builder for LocalLlmConfig
pub struct LocalLlmConfigBuilder {
    config: LocalLlmConfig,
}

impl LocalLlmConfigBuilder {
    /// Create a new builder
    pub fn new(name: impl Into<String>, binary_path: impl Into<PathBuf>) -> Self {
        Self {
            config: LocalLlmConfig::new(name, binary_path),
        }
    }

    /// Set the model format
    pub fn model_type(mut self, format: ModelFormat) -> Self {
        self.config.model_type = format;
        self
    }

    /// Set the context window size in tokens
    pub fn context_window(mut self, tokens: u32) -> Self {
        self.config.context_window = tokens;
        self
    }

    /// Set the description
    pub fn description(mut self, desc: impl Into<String>) -> Self {
        self.config.description = desc.into();
        self
    }

    /// Add a tag
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.config.tags.push(tag.into());
        self
    }

    /// Add multiple tags
    pub fn tags(mut self, tags: Tags) -> Self {
        self.config.tags.extend(tags);
        self
    }

    /// Enable or disable GPU offload
    pub fn gpu_enabled(mut self, enabled: bool) -> Self {
        self.config.gpu_enabled = enabled;
        self
    }

    /// Enable or disable the runtime
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.config.enabled = enabled;
        self
    }

    /// Build the configuration with validation
    pub fn build(self) -> Result<LocalLlmConfig> {
        self.config.validate()?;
        Ok(self.config)
    }

    /// Build without validation
    pub fn build_unchecked(self) -> LocalLlmConfig {
        self.config
    }
}
