//! External tool integration configuration
//!
//! Declarative definitions for the security tooling the control plane can
//! drive: the command to invoke, its default arguments, and how much of the
//! invocation may be automated.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{ControlPlaneError, Result};
use crate::types::Tags;

/// How much of a tool invocation may proceed without operator review
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AutomationLevel {
    /// Every invocation is operator-driven
    Manual,
    /// Invocations are prepared automatically but require confirmation
    SemiAutomated,
    /// Invocations run without confirmation
    Automated,
}

impl Default for AutomationLevel {
    fn default() -> Self {
        AutomationLevel::SemiAutomated
    }
}

impl fmt::Display for AutomationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AutomationLevel::Manual => write!(f, "manual"),
            AutomationLevel::SemiAutomated => write!(f, "semi-automated"),
            AutomationLevel::Automated => write!(f, "automated"),
        }
    }
}

impl FromStr for AutomationLevel {
    type Err = ControlPlaneError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "manual" => Ok(AutomationLevel::Manual),
            "semi-automated" | "semi_automated" => Ok(AutomationLevel::SemiAutomated),
            "automated" => Ok(AutomationLevel::Automated),
            _ => Err(ControlPlaneError::ValidationError(format!(
                "Invalid automation level: {}",
                s
            ))),
        }
    }
}

/// Declarative definition for an external tool integration
///
/// Identified by `name`; registering a second configuration with the same
/// name replaces the first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolConfig {
    /// Unique name identifying the integration
    pub name: String,

    /// Command invoked to run the tool
    pub command: String,

    /// Default arguments appended to every invocation
    #[serde(default)]
    pub default_args: String,

    /// Free-text description
    #[serde(default)]
    pub description: String,

    /// Automation level applied to invocations
    #[serde(default)]
    pub automation_level: AutomationLevel,

    /// Whether invocations need elevated privileges
    pub requires_sudo: bool,

    /// Whether the integration is currently enabled
    pub enabled: bool,

    /// User-defined tags for categorization
    #[serde(default)]
    pub tags: Tags,
}

impl ToolConfig {
    /// Create a tool configuration with default settings
    pub fn new(name: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            command: command.into(),
            default_args: String::new(),
            description: String::new(),
            automation_level: AutomationLevel::default(),
            requires_sudo: false,
            enabled: true,
            tags: Vec::new(),
        }
    }

    /// Create a builder for constructing tool configurations
    pub fn builder(name: impl Into<String>, command: impl Into<String>) -> ToolConfigBuilder {
        ToolConfigBuilder::new(name, command)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(ControlPlaneError::ValidationError(
                "Tool name cannot be empty".to_string(),
            ));
        }

        if self.command.is_empty() {
            return Err(ControlPlaneError::ValidationError(
                "Tool command cannot be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Check whether the tool carries a specific tag
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

impl fmt::Display for ToolConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tool({}, {})", self.name, self.automation_level)
    }
}

/// Builder for ToolConfig
pub struct ToolConfigBuilder {
    config: ToolConfig,
}

impl ToolConfigBuilder {
    /// Create a new builder
    pub fn new(name: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            config: ToolConfig::new(name, command),
        }
    }

    /// Set the default arguments
    pub fn default_args(mut self, args: impl Into<String>) -> Self {
        self.config.default_args = args.into();
        self
    }

    /// Set the description
    pub fn description(mut self, desc: impl Into<String>) -> Self {
        self.config.description = desc.into();
        self
    }

    /// Set the automation level
    pub fn automation_level(mut self, level: AutomationLevel) -> Self {
        self.config.automation_level = level;
        self
    }

    /// Mark the tool as needing elevated privileges
    pub fn requires_sudo(mut self, required: bool) -> Self {
        self.config.requires_sudo = required;
        self
    }

    /// Enable or disable the integration
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.config.enabled = enabled;
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

    /// Build the configuration with validation
    pub fn build(self) -> Result<ToolConfig> {
        self.config.validate()?;
        Ok(self.config)
    }

    /// Build without validation
    pub fn build_unchecked(self) -> ToolConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_defaults() {
        let config = ToolConfig::new("nmap", "nmap");

        assert_eq!(config.name, "nmap");
        assert_eq!(config.command, "nmap");
        assert!(config.default_args.is_empty());
        assert_eq!(config.automation_level, AutomationLevel::SemiAutomated);
        assert!(!config.requires_sudo);
        assert!(config.enabled);
        assert!(config.tags.is_empty());
    }

    #[test]
    fn test_builder() {
        let config = ToolConfig::builder("masscan", "masscan")
            .default_args("--rate 1000")
            .description("Fast port scanner")
            .automation_level(AutomationLevel::Manual)
            .requires_sudo(true)
            .tag("network")
            .build()
            .unwrap();

        assert_eq!(config.default_args, "--rate 1000");
        assert_eq!(config.automation_level, AutomationLevel::Manual);
        assert!(config.requires_sudo);
        assert!(config.has_tag("network"));
    }

    #[test]
    fn test_validation_empty_name() {
        assert!(ToolConfig::builder("", "nmap").build().is_err());
    }

    #[test]
    fn test_validation_empty_command() {
        assert!(ToolConfig::builder("nmap", "").build().is_err());
    }

    #[test]
    fn test_automation_level_round_trip() {
        for level in [
            AutomationLevel::Manual,
            AutomationLevel::SemiAutomated,
            AutomationLevel::Automated,
        ] {
            let parsed: AutomationLevel = level.to_string().parse().unwrap();
            assert_eq!(parsed, level);
        }
    }

    #[test]
    fn test_automation_level_serializes_kebab_case() {
        let config = ToolConfig::new("nmap", "nmap");
        let value = serde_json::to_value(&config).unwrap();

        assert_eq!(value["automation_level"], "semi-automated");
    }

    #[test]
    fn test_automation_level_invalid() {
        assert!("full-auto".parse::<AutomationLevel>().is_err());
    }
}
