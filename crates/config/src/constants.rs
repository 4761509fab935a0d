//! Centralized constants for the es-manager workspace.
//!
//! Defaults shared by the config loader, the client, and both binaries.

// =============================================================================
// Connection Defaults
// =============================================================================

/// Cluster address used when `ES_HOST` is unset.
pub const DEFAULT_ES_HOST: &str = "http://localhost:9200";

/// Username for basic authentication. Only the password is configurable.
pub const ELASTIC_USERNAME: &str = "elastic";

/// Maximum allowed `ES_TIMEOUT` in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// Default maximum number of HTTP redirects to follow.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

// =============================================================================
// Query Defaults
// =============================================================================

/// Index pattern used by `es-manager indices` and `es-manager logs`.
pub const DEFAULT_INDEX_PATTERN: &str = "fastapi-logs-*";

/// Index pattern used by the standalone `es-logs` binary.
pub const DEFAULT_LOGS_INDEX_PATTERN: &str = "fastapi-logs-rag-chat-*";

/// Number of log documents fetched when no size is given.
pub const DEFAULT_LOG_COUNT: usize = 10;

/// Field the log search sorts on, newest first.
pub const LOG_TIMESTAMP_FIELD: &str = "asctime";

/// Substring that marks an index template as application-defined.
pub const CUSTOM_TEMPLATE_MARKER: &str = "fastapi";
