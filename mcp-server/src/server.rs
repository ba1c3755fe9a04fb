//! Nova MCP Server implementation
//!
//! Exposes the transcript analyzers as MCP tools. Each tool forwards to the
//! Nova HTTP API and returns its plain-text report.

use crate::client::NovaClient;
use anyhow::Result;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::{
    handler::server::tool::ToolRouter,
    model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler,
};
use schemars::JsonSchema;
use serde::Deserialize;

/// Nova MCP Server
#[derive(Clone)]
pub struct NovaServer {
    client: NovaClient,
    tool_router: ToolRouter<Self>,
}

impl NovaServer {
    pub fn from_env() -> Result<Self> {
        let client = NovaClient::from_env()?;
        Ok(Self::new(client))
    }

    pub fn new(client: NovaClient) -> Self {
        Self {
            client,
            tool_router: Self::tool_router(),
        }
    }
}

// --- Tool Parameter Types ---

#[derive(Debug, Deserialize, JsonSchema)]
pub struct TranscriptParams {
    /// Meeting transcript, French or English
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct CeremonyParams {
    /// Ceremony label ("Daily Scrum", "Sprint Review", ...) or id ("daily_scrum")
    pub ceremony: String,
}

fn to_result(outcome: Result<String>) -> Result<CallToolResult, McpError> {
    match outcome {
        Ok(content) => Ok(CallToolResult::success(vec![Content::text(content)])),
        Err(e) => Ok(CallToolResult::error(vec![Content::text(e.to_string())])),
    }
}

#[tool_router]
impl NovaServer {
    #[tool(
        description = "Check whether a transcript is about agile project work. Flags sports, entertainment, personal or general small talk."
    )]
    async fn detect_context(
        &self,
        params: Parameters<TranscriptParams>,
    ) -> Result<CallToolResult, McpError> {
        to_result(self.client.detect_context(&params.0.text).await)
    }

    #[tool(
        description = "Identify the agile ceremony held in a transcript (Daily Scrum, Sprint Planning, Sprint Review, Retrospective, Kanban, SAFe) with confidence and justifications."
    )]
    async fn detect_workshop(
        &self,
        params: Parameters<TranscriptParams>,
    ) -> Result<CallToolResult, McpError> {
        to_result(self.client.detect_workshop(&params.0.text).await)
    }

    #[tool(
        description = "Full coaching analysis: context check, ceremony, and the anti-patterns observed in the transcript. Call this first."
    )]
    async fn analyze_transcript(
        &self,
        params: Parameters<TranscriptParams>,
    ) -> Result<CallToolResult, McpError> {
        to_result(self.client.analyze(&params.0.text).await)
    }

    #[tool(description = "List the known anti-patterns of a ceremony with coaching suggestions.")]
    async fn anti_patterns(
        &self,
        params: Parameters<CeremonyParams>,
    ) -> Result<CallToolResult, McpError> {
        to_result(self.client.anti_patterns(&params.0.ceremony).await)
    }

    #[tool(description = "List the ceremonies Nova can recognize.")]
    async fn list_ceremonies(&self) -> Result<CallToolResult, McpError> {
        to_result(self.client.ceremonies().await)
    }
}

#[tool_handler]
impl ServerHandler for NovaServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "nova".into(),
                title: Some("Nova Agile Coach".into()),
                version: env!("CARGO_PKG_VERSION").into(),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                r#"Nova - agile ceremony analysis

WORKFLOW:
1. 'analyze_transcript' - Context check, ceremony and anti-patterns in one call
2. 'detect_context' / 'detect_workshop' - Run a single analyzer
3. 'anti_patterns' - Coaching catalog for a ceremony
4. 'list_ceremonies' - Labels accepted by 'anti_patterns'

NOTES:
- Off-topic transcripts (sports, entertainment, personal life) are flagged and not coached
- Speaker first names are replaced by 'Participant N' in echoed text
- Very short fragments (under 20 characters) are never judged"#
                    .into(),
            ),
        }
    }
}
