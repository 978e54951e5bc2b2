//! Shared type aliases

/// Type alias for tags (user-defined labels)
pub type Tags = Vec<String>;

/// Type alias for credential scope strings
pub type Scopes = Vec<String>;
