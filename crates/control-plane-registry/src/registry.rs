//! Stateful registry holding all control plane collections
//!
//! The registry is a single steady-state object: every operation is
//! independently applicable at any time, keyed collections silently
//! overwrite on duplicate identity, and removal or toggling of an absent
//! key is a no-op rather than an error. It is synchronous and not designed
//! for concurrent access; callers needing shared mutation must wrap it in
//! their own mutual exclusion.

use std::path::Path;

use control_plane_core::{ApiCredential, LocalLlmConfig, Result, ToolConfig, WorkflowStage};
use tracing::{debug, info};

use crate::ordered::OrderedMap;
use crate::snapshot::Snapshot;

/// In-memory registry tracking runtimes, tools, credentials, and workflow
#[derive(Debug, Clone, Default)]
pub struct ControlPlane {
    llms: OrderedMap<LocalLlmConfig>,
    tools: OrderedMap<ToolConfig>,
    credentials: OrderedMap<ApiCredential>,
    workflow: Vec<WorkflowStage>,
}

impl ControlPlane {
    /// Create an empty control plane
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a runtime, replacing any existing entry with the same name
    pub fn register_llm(&mut self, config: LocalLlmConfig) {
        debug!("Registering LLM runtime: {}", config.name);
        self.llms.insert(config.name.clone(), config);
    }

    /// Remove a runtime by name; silently ignored if absent
    pub fn remove_llm(&mut self, name: &str) {
        if self.llms.remove(name).is_some() {
            debug!("Removed LLM runtime: {}", name);
        }
    }

    /// Set the enabled flag on a runtime; no-op if the name is unknown
    pub fn enable_llm(&mut self, name: &str, enabled: bool) {
        if let Some(config) = self.llms.get_mut(name) {
            config.enabled = enabled;
            debug!("LLM runtime {} enabled={}", name, enabled);
        }
    }

    /// Look up a runtime by name
    pub fn get_llm(&self, name: &str) -> Option<&LocalLlmConfig> {
        self.llms.get(name)
    }

    /// Current runtimes as a defensive copy, in registration order
    pub fn list_llms(&self) -> Vec<LocalLlmConfig> {
        self.llms.values().cloned().collect()
    }

    /// Number of registered runtimes
    pub fn llm_count(&self) -> usize {
        self.llms.len()
    }

    /// Register a tool, replacing any existing entry with the same name
    pub fn register_tool(&mut self, config: ToolConfig) {
        debug!("Registering tool: {}", config.name);
        self.tools.insert(config.name.clone(), config);
    }

    /// Remove a tool by name; silently ignored if absent
    pub fn remove_tool(&mut self, name: &str) {
        if self.tools.remove(name).is_some() {
            debug!("Removed tool: {}", name);
        }
    }

    /// Set the enabled flag on a tool; no-op if the name is unknown
    pub fn toggle_tool(&mut self, name: &str, enabled: bool) {
        if let Some(config) = self.tools.get_mut(name) {
            config.enabled = enabled;
            debug!("Tool {} enabled={}", name, enabled);
        }
    }

    /// Look up a tool by name
    pub fn get_tool(&self, name: &str) -> Option<&ToolConfig> {
        self.tools.get(name)
    }

    /// Current tools as a defensive copy, in registration order
    pub fn list_tools(&self) -> Vec<ToolConfig> {
        self.tools.values().cloned().collect()
    }

    /// Number of registered tools
    pub fn tool_count(&self) -> usize {
        self.tools.len()
    }

    /// Store a credential, replacing any existing entry for the provider
    pub fn store_credential(&mut self, credential: ApiCredential) {
        debug!("Storing credential for provider: {}", credential.provider);
        self.credentials
            .insert(credential.provider.clone(), credential);
    }

    /// Remove a credential by provider; silently ignored if absent
    pub fn remove_credential(&mut self, provider: &str) {
        if self.credentials.remove(provider).is_some() {
            debug!("Removed credential for provider: {}", provider);
        }
    }

    /// Look up a credential by provider
    pub fn get_credential(&self, provider: &str) -> Option<&ApiCredential> {
        self.credentials.get(provider)
    }

    /// Current credentials as a defensive copy, in storage order
    pub fn list_credentials(&self) -> Vec<ApiCredential> {
        self.credentials.values().cloned().collect()
    }

    /// Number of stored credentials
    pub fn credential_count(&self) -> usize {
        self.credentials.len()
    }

    /// Replace the entire workflow with the given stage sequence
    pub fn define_workflow<I>(&mut self, stages: I)
    where
        I: IntoIterator<Item = WorkflowStage>,
    {
        self.workflow = stages.into_iter().collect();
        debug!("Workflow defined with {} stages", self.workflow.len());
    }

    /// Add a stage to the end of the workflow
    pub fn append_stage(&mut self, stage: WorkflowStage) {
        debug!("Appending workflow stage: {}", stage.title);
        self.workflow.push(stage);
    }

    /// Remove every stage whose title matches; no-op if none do
    pub fn purge_stage(&mut self, title: &str) {
        self.workflow.retain(|stage| stage.title != title);
    }

    /// Current workflow as a defensive copy, in execution order
    pub fn list_workflow(&self) -> Vec<WorkflowStage> {
        self.workflow.clone()
    }

    /// Number of workflow stages
    pub fn stage_count(&self) -> usize {
        self.workflow.len()
    }

    /// Capture a point-in-time copy of all collections
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(
            self.list_llms(),
            self.list_tools(),
            self.list_credentials(),
            self.list_workflow(),
        )
    }

    /// Export the current state as pretty-printed JSON to `path`
    ///
    /// Overwrites any existing file; I/O failures propagate to the caller
    /// and no partial-file cleanup is attempted.
    pub fn export(&self, path: &Path) -> Result<()> {
        info!("Exporting control plane state to {}", path.display());
        self.snapshot().write(path)
    }
}
