//! MCP (Model Context Protocol) Server for upgrade-notes
//!
//! Exposes the extraction to LLM clients generating upgrade risk reports.
//!
//! ## Tools
//! - `get_release_notes` - Release notes between a source and a target version
//! - `get_k8s_changelog` - Kubernetes changelog trimmed to its changes

pub mod server;
pub mod tools;

pub use server::McpServer;
