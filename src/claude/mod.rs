// Anthropic Messages API client
//
// The whole system talks to exactly one upstream: the hosted Messages API.
// This module owns the wire types and the HTTP call; everything above it
// works with plain request/response structs.

mod client;
pub mod types;

pub use client::ClaudeClient;
pub use types::{ContentBlock, Message, MessageRequest, MessageResponse};
