//! Stored API credentials for remote integrations
//!
//! Credentials are keyed by provider and are immutable once stored apart
//! from whole-record replacement. The raw key is retained in memory and
//! appears unmasked in snapshot exports; `masked_key` is a display aid
//! only, not secret protection. Exported files must be handled with the
//! same care as the raw keys themselves.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ControlPlaneError, Result};
use crate::types::Scopes;

/// Stored API key metadata for a remote provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiCredential {
    /// Provider name identifying the credential
    pub provider: String,

    /// Raw API key material
    pub api_key: String,

    /// Scopes granted to the key
    #[serde(default)]
    pub scopes: Scopes,

    /// Free-text description
    #[serde(default)]
    pub description: String,

    /// When the credential record was created
    pub created_at: DateTime<Utc>,
}

impl ApiCredential {
    /// Create a credential record, stamped with the current time
    pub fn new(provider: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            api_key: api_key.into(),
            scopes: Vec::new(),
            description: String::new(),
            created_at: Utc::now(),
        }
    }

    /// Add a scope
    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scopes.push(scope.into());
        self
    }

    /// Add multiple scopes
    pub fn with_scopes(mut self, scopes: Scopes) -> Self {
        self.scopes.extend(scopes);
        self
    }

    /// Set the description
    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = desc.into();
        self
    }

    /// Validate the credential
    pub fn validate(&self) -> Result<()> {
        if self.provider.is_empty() {
            return Err(ControlPlaneError::ValidationError(
                "Credential provider cannot be empty".to_string(),
            ));
        }

        if self.api_key.is_empty() {
            return Err(ControlPlaneError::ValidationError(
                "Credential API key cannot be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Masked form of the key for display purposes
    ///
    /// Shows the first and last three characters with the middle elided,
    /// or all asterisks when the key is six characters or fewer.
    pub fn masked_key(&self) -> String {
        let len = self.api_key.chars().count();
        if len <= 6 {
            return "*".repeat(len);
        }

        let head: String = self.api_key.chars().take(3).collect();
        let tail: String = self.api_key.chars().skip(len - 3).collect();
        format!("{}***{}", head, tail)
    }
}
