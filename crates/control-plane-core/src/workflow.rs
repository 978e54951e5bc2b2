//! Workflow stage definitions
//!
//! A workflow is an ordered sequence of stages; order represents execution
//! sequence and is entirely caller-controlled. Stage titles are not
//! enforced unique, and the referenced runtime and tool names are not
//! checked against the registered collections.

use serde::{Deserialize, Serialize};

use crate::error::{ControlPlaneError, Result};

/// A structured phase in the agentic execution sequence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowStage {
    /// Stage title; duplicates may coexist
    pub title: String,

    /// What the stage is expected to produce
    #[serde(default)]
    pub expected_outcome: String,

    /// Free-text description
    #[serde(default)]
    pub description: String,

    /// Name of the runtime driving the stage, if any
    #[serde(default)]
    pub llm_name: Option<String>,

    /// Names of the tools the stage invokes, in order
    #[serde(default)]
    pub tool_names: Vec<String>,
}

impl WorkflowStage {
    /// Create a stage with the given title and no other details
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            expected_outcome: String::new(),
            description: String::new(),
            llm_name: None,
            tool_names: Vec::new(),
        }
    }

    /// Set the expected outcome
    pub fn with_expected_outcome(mut self, outcome: impl Into<String>) -> Self {
        self.expected_outcome = outcome.into();
        self
    }

    /// Set the description
    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = desc.into();
        self
    }

    /// Set the runtime driving the stage
    pub fn with_llm(mut self, name: impl Into<String>) -> Self {
        self.llm_name = Some(name.into());
        self
    }

    /// Add a tool reference
    pub fn with_tool(mut self, name: impl Into<String>) -> Self {
        self.tool_names.push(name.into());
        self
    }

    /// Add multiple tool references
    pub fn with_tools(mut self, names: Vec<String>) -> Self {
        self.tool_names.extend(names);
        self
    }

    /// Validate the stage
    pub fn validate(&self) -> Result<()> {
        if self.title.is_empty() {
            return Err(ControlPlaneError::ValidationError(
                "Stage title cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}
