// Project-wide constants
//
// Centralised here so model names and other magic values have one
// source of truth.

/// Default bind address for the HTTP server.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3001";

/// Model used for every upstream call.
pub const DEFAULT_MODEL: &str = "claude-sonnet-4-20250514";

/// Maximum tokens for a single dragon evaluation.
pub const EVALUATION_MAX_TOKENS: u32 = 1024;

/// Maximum tokens for the improved-pitch synthesis call.
pub const IMPROVEMENT_MAX_TOKENS: u32 = 2048;
