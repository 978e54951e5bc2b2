//! Test fixtures
//!
//! This module provides test data fixtures for integration tests.

use control_plane_core::{
    ApiCredential, AutomationLevel, LocalLlmConfig, ModelFormat, ToolConfig, WorkflowStage,
};
use control_plane_registry::ControlPlane;

/// Create a test runtime configuration with default values
pub fn create_test_llm(name: &str) -> LocalLlmConfig {
    LocalLlmConfig::builder(name, format!("/opt/llm/bin/{}", name))
        .model_type(ModelFormat::Gguf)
        .context_window(4096)
        .description(format!("Test runtime: {}", name))
        .tag("test")
        .build()
        .expect("test runtime config should validate")
}

/// Create a test tool configuration
pub fn create_test_tool(name: &str) -> ToolConfig {
    ToolConfig::builder(name, name)
        .default_args("-v")
        .description(format!("Test tool: {}", name))
        .automation_level(AutomationLevel::SemiAutomated)
        .tag("test")
        .build()
        .expect("test tool config should validate")
}

/// Create a test credential for a provider
pub fn create_test_credential(provider: &str, api_key: &str) -> ApiCredential {
    ApiCredential::new(provider, api_key)
        .with_scope("chat")
        .with_description(format!("Test credential: {}", provider))
}

/// Create a test workflow stage referencing a single tool
pub fn create_test_stage(title: &str, tool: &str) -> WorkflowStage {
    WorkflowStage::new(title)
        .with_expected_outcome(format!("Outcome of {}", title))
        .with_tool(tool)
}

/// Build a control plane populated with one entry per collection
pub fn populated_control_plane() -> ControlPlane {
    let mut plane = ControlPlane::new();
    plane.register_llm(create_test_llm("local-7b"));
    plane.register_tool(create_test_tool("nmap"));
    plane.store_credential(create_test_credential("openai", "sk-12345678"));
    plane.append_stage(create_test_stage("recon", "nmap"));
    plane
}
