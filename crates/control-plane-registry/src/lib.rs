//! In-memory registry for the agentic control plane
//!
//! This crate provides the stateful registry that sits above the core
//! entity definitions. It tracks local LLM runtimes, tool integrations,
//! stored credentials, and the ordered workflow, and can snapshot the
//! aggregate state for JSON export.
//!
//! # Example
//!
//! ```rust
//! use control_plane_core::{LocalLlmConfig, ToolConfig, WorkflowStage};
//! use control_plane_registry::ControlPlane;
//!
//! let mut plane = ControlPlane::new();
//! plane.register_llm(LocalLlmConfig::new("local-7b", "/opt/llm/bin/llama-server"));
//! plane.register_tool(ToolConfig::new("nmap", "nmap"));
//! plane.append_stage(WorkflowStage::new("recon").with_tool("nmap"));
//!
//! let json = plane.snapshot().to_json(true).unwrap();
//! assert!(json.contains("local-7b"));
//! ```

mod ordered;

pub mod registry;
pub mod snapshot;

// Re-exports for convenience
pub use registry::ControlPlane;
pub use snapshot::Snapshot;
