//! server CLI subcommand
//!
//! Starts the MCP server exposing the release notes tools.
//! The server communicates via JSON-RPC 2.0 over stdio.

use crate::mcp::McpServer;
use crate::models::NotesConfig;
use crate::Result;

/// Run the MCP server
pub fn run(config: NotesConfig) -> Result<()> {
    let server = McpServer::new(config)?;
    server.run()
}
