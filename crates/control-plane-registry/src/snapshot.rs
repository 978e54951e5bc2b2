//! Point-in-time snapshot of the control plane state
//!
//! A snapshot is a copy, not a live view; mutating the registry after
//! taking one leaves the snapshot untouched. Credentials appear with their
//! full, unmasked keys in the serialized output.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use control_plane_core::{ApiCredential, LocalLlmConfig, Result, ToolConfig, WorkflowStage};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Serializable aggregate of all control plane collections
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Registered runtimes in registration order
    pub llms: Vec<LocalLlmConfig>,

    /// Registered tools in registration order
    pub tools: Vec<ToolConfig>,

    /// Stored credentials in storage order
    pub credentials: Vec<ApiCredential>,

    /// Workflow stages in execution order
    pub workflow: Vec<WorkflowStage>,

    /// When the snapshot was generated
    pub generated_at: DateTime<Utc>,
}

impl Snapshot {
    /// Build a snapshot from collection copies, stamped with the current time
    pub fn new(
        llms: Vec<LocalLlmConfig>,
        tools: Vec<ToolConfig>,
        credentials: Vec<ApiCredential>,
        workflow: Vec<WorkflowStage>,
    ) -> Self {
        Self {
            llms,
            tools,
            credentials,
            workflow,
            generated_at: Utc::now(),
        }
    }

    /// Serialize the snapshot to JSON
    ///
    /// Pretty output is indented by two spaces with object keys sorted
    /// lexicographically; compact output is a single line in declaration
    /// order.
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        if pretty {
            // serde_json::Value objects are BTree-backed, so re-serializing
            // through Value yields lexicographically sorted keys.
            let value = serde_json::to_value(self)?;
            Ok(serde_json::to_string_pretty(&value)?)
        } else {
            Ok(serde_json::to_string(self)?)
        }
    }

    /// Write the pretty JSON form to `path`, creating or truncating the file
    pub fn write(&self, path: &Path) -> Result<()> {
        let json = self.to_json(true)?;
        fs::write(path, json)?;
        debug!("Snapshot written to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_snapshot() -> Snapshot {
        Snapshot::new(
            vec![LocalLlmConfig::new("local-7b", "/opt/llm/bin/llama-server")],
            vec![ToolConfig::new("nmap", "nmap")],
            vec![ApiCredential::new("openai", "sk-12345678")],
            vec![WorkflowStage::new("recon").with_tool("nmap")],
        )
    }

    #[test]
    fn test_pretty_output_sorts_keys() {
        let json = sample_snapshot().to_json(true).unwrap();

        let credentials_pos = json.find("\"credentials\"").unwrap();
        let generated_pos = json.find("\"generated_at\"").unwrap();
        let llms_pos = json.find("\"llms\"").unwrap();
        let tools_pos = json.find("\"tools\"").unwrap();
        let workflow_pos = json.find("\"workflow\"").unwrap();

        assert!(credentials_pos < generated_pos);
        assert!(generated_pos < llms_pos);
        assert!(llms_pos < tools_pos);
        assert!(tools_pos < workflow_pos);
    }

    #[test]
    fn test_pretty_output_uses_two_space_indent() {
        let json = sample_snapshot().to_json(true).unwrap();
        assert!(json.contains("\n  \"credentials\""));
    }

    #[test]
    fn test_compact_output_is_single_line() {
        let json = sample_snapshot().to_json(false).unwrap();
        assert!(!json.contains('\n'));
    }

    #[test]
    fn test_round_trip_preserves_collections() {
        let snapshot = sample_snapshot();
        let json = snapshot.to_json(true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["llms"].as_array().unwrap().len(), 1);
        assert_eq!(value["llms"][0]["name"], "local-7b");
        assert_eq!(value["tools"][0]["name"], "nmap");
        assert_eq!(value["credentials"][0]["api_key"], "sk-12345678");
        assert_eq!(value["workflow"][0]["tool_names"][0], "nmap");
    }

    #[test]
    fn test_generated_at_is_iso8601() {
        let json = sample_snapshot().to_json(true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        let raw = value["generated_at"].as_str().unwrap();
        assert!(DateTime::parse_from_rfc3339(raw).is_ok());
    }

    #[test]
    fn test_write_creates_readable_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("snapshot.json");

        let snapshot = sample_snapshot();
        snapshot.write(&path).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, snapshot.to_json(true).unwrap());
    }

    #[test]
    fn test_write_truncates_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("snapshot.json");
        fs::write(&path, "stale contents that should disappear").unwrap();

        sample_snapshot().write(&path).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert!(!contents.contains("stale"));
        assert!(contents.starts_with('{'));
    }

    #[test]
    fn test_write_unwritable_path_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("snapshot.json");

        assert!(sample_snapshot().write(&path).is_err());
    }
}
