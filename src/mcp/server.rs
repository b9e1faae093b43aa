//! MCP Server implementation using JSON-RPC 2.0 over stdio
//!
//! Implements the minimal MCP protocol:
//! - `initialize` - Return server info and capabilities
//! - `tools/list` - Return available tool definitions
//! - `tools/call` - Execute a tool and return result

use crate::models::NotesConfig;
use crate::Result;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::io::{BufRead, Write};

use super::tools::{ToolContext, ToolRegistry};

/// MCP Server for handling JSON-RPC requests over stdio
pub struct McpServer {
    tool_registry: ToolRegistry,
    context: ToolContext,
}

/// JSON-RPC 2.0 Request
#[derive(Debug, Deserialize)]
struct JsonRpcRequest {
    jsonrpc: String,
    id: Option<Value>,
    method: String,
    #[serde(default)]
    params: Option<Value>,
}

/// JSON-RPC 2.0 Response
#[derive(Debug, Serialize)]
struct JsonRpcResponse {
    jsonrpc: String,
    id: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<JsonRpcError>,
}

/// JSON-RPC 2.0 Error
#[derive(Debug, Serialize)]
struct JsonRpcError {
    code: i32,
    message: String,
}

// JSON-RPC error codes
const PARSE_ERROR: i32 = -32700;
const INVALID_REQUEST: i32 = -32600;
const METHOD_NOT_FOUND: i32 = -32601;
const INVALID_PARAMS: i32 = -32602;

type HandlerResult = std::result::Result<Value, (i32, String)>;

impl McpServer {
    /// Create a server resolving relative paths against the working directory
    pub fn new(config: NotesConfig) -> Result<Self> {
        let root = std::env::current_dir()?;
        Ok(Self::with_root(config, root))
    }

    pub fn with_root(config: NotesConfig, root: std::path::PathBuf) -> Self {
        Self {
            tool_registry: ToolRegistry::new(),
            context: ToolContext { config, root },
        }
    }

    /// Run the MCP server, reading from stdin and writing to stdout
    pub fn run(&self) -> Result<()> {
        let stdin = std::io::stdin();
        let stdout = std::io::stdout();
        self.serve(stdin.lock(), stdout.lock())
    }

    /// Serve newline-delimited requests from `reader` until it is exhausted
    pub fn serve<R: BufRead, W: Write>(&self, reader: R, mut writer: W) -> Result<()> {
        log::info!("Server started, waiting for requests...");

        for line in reader.lines() {
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    log::error!("Read error: {}", e);
                    break;
                }
            };

            if line.trim().is_empty() {
                continue;
            }

            let Some(response) = self.handle_request(&line) else {
                continue;
            };

            let response_json = serde_json::to_string(&response)?;
            writeln!(writer, "{}", response_json)?;
            writer.flush()?;
        }

        log::info!("Server stopped");
        Ok(())
    }

    /// Handle a single JSON-RPC request; notifications get no response
    fn handle_request(&self, line: &str) -> Option<JsonRpcResponse> {
        let request: JsonRpcRequest = match serde_json::from_str(line) {
            Ok(r) => r,
            Err(e) => {
                return Some(error_response(
                    Value::Null,
                    PARSE_ERROR,
                    format!("Parse error: {}", e),
                ));
            }
        };

        if request.jsonrpc != "2.0" {
            return Some(error_response(
                request.id.unwrap_or(Value::Null),
                INVALID_REQUEST,
                "Invalid JSON-RPC version".to_string(),
            ));
        }

        // requests without an id are notifications
        let id = request.id.clone()?;

        let result = match request.method.as_str() {
            "initialize" => self.handle_initialize(),
            "initialized" => Ok(json!({})),
            "tools/list" => self.handle_tools_list(),
            "tools/call" => self.handle_tools_call(&request.params),
            "shutdown" => {
                log::info!("Shutdown requested");
                Ok(json!({}))
            }
            _ => Err((
                METHOD_NOT_FOUND,
                format!("Method not found: {}", request.method),
            )),
        };

        Some(match result {
            Ok(value) => JsonRpcResponse {
                jsonrpc: "2.0".to_string(),
                id,
                result: Some(value),
                error: None,
            },
            Err((code, message)) => error_response(id, code, message),
        })
    }

    /// Handle `initialize` request
    fn handle_initialize(&self) -> HandlerResult {
        Ok(json!({
            "protocolVersion": "2024-11-05",
            "serverInfo": {
                "name": "upgrade-notes",
                "version": env!("CARGO_PKG_VERSION")
            },
            "capabilities": {
                "tools": {}
            }
        }))
    }

    /// Handle `tools/list` request
    fn handle_tools_list(&self) -> HandlerResult {
        let tools = self.tool_registry.list_tools();
        Ok(json!({ "tools": tools }))
    }

    /// Handle `tools/call` request
    fn handle_tools_call(&self, params: &Option<Value>) -> HandlerResult {
        let params = params
            .as_ref()
            .ok_or((INVALID_PARAMS, "Missing params".to_string()))?;

        let name = params
            .get("name")
            .and_then(|v| v.as_str())
            .ok_or((INVALID_PARAMS, "Missing tool name".to_string()))?;

        let arguments = params.get("arguments").cloned().unwrap_or(json!({}));

        log::info!("Calling tool: {} with args: {}", name, arguments);

        match self.tool_registry.call_tool(name, &arguments, &self.context) {
            Ok(result) => Ok(json!({
                "content": [{
                    "type": "text",
                    "text": result
                }]
            })),
            Err(e) => {
                log::warn!("Tool {} failed: {:#}", name, e);
                Ok(json!({
                    "content": [{
                        "type": "text",
                        "text": format!("Error: {}", e)
                    }],
                    "isError": true
                }))
            }
        }
    }
}

fn error_response(id: Value, code: i32, message: String) -> JsonRpcResponse {
    JsonRpcResponse {
        jsonrpc: "2.0".to_string(),
        id,
        result: None,
        error: Some(JsonRpcError { code, message }),
    }
}
