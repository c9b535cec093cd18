//! MCP server exposing verse search over stdio.

use crate::tools::{
    ReadChapterRequest, SearchRequest, handle_export, handle_list_books, handle_read_chapter,
    handle_search,
};
use crate::worker::CorpusState;
use rmcp::{
    ServerHandler,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::*,
    tool, tool_handler, tool_router,
};
use std::sync::Arc;

/// MCP server for verse search and chapter reading.
#[derive(Clone)]
pub struct VerseServer {
    /// Shared corpus state (loaded in the background)
    state: Arc<CorpusState>,

    /// Tool router for handling MCP tool calls
    tool_router: ToolRouter<Self>,
}

impl std::fmt::Debug for VerseServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VerseServer")
            .field("state", &self.state)
            .finish()
    }
}

#[tool_router]
impl VerseServer {
    pub fn new(state: Arc<CorpusState>) -> Self {
        Self {
            state,
            tool_router: Self::tool_router(),
        }
    }

    pub fn state(&self) -> &Arc<CorpusState> {
        &self.state
    }

    #[tool(
        description = "Search verse text across Jubilees, Jasher and Enoch. Case-insensitive substring match by default; set whole_word for letter-only queries. Matches are highlighted with <mark> tags and capped (500 by default)."
    )]
    async fn search_verses(
        &self,
        Parameters(request): Parameters<SearchRequest>,
    ) -> std::result::Result<String, String> {
        Ok(handle_search(&self.state, &request))
    }

    #[tool(
        description = "Read one chapter of a book, verses in order, with editorial notes and duplicated verse numbers cleaned out. Optionally emphasize one verse and highlight a query."
    )]
    async fn read_chapter(
        &self,
        Parameters(request): Parameters<ReadChapterRequest>,
    ) -> std::result::Result<String, String> {
        Ok(handle_read_chapter(&self.state, request))
    }

    #[tool(description = "List the loaded books and how many verses each has.")]
    async fn list_books(&self) -> std::result::Result<String, String> {
        Ok(handle_list_books(&self.state))
    }

    #[tool(
        description = "Run a search and return the matches as plain text, one verse per line prefixed with its 'Book chapter:verse' reference."
    )]
    async fn export_results(
        &self,
        Parameters(request): Parameters<SearchRequest>,
    ) -> std::result::Result<String, String> {
        Ok(handle_export(&self.state, &request))
    }
}

#[tool_handler]
impl ServerHandler for VerseServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo::new(ServerCapabilities::builder().enable_tools().build())
            .with_protocol_version(ProtocolVersion::V_2024_11_05)
            .with_server_info(Implementation::from_build_env())
            .with_instructions(
                "verse-search: search and read Jubilees, Jasher and Enoch. \
                 Books load in the background on startup; until then tools answer 'Loading books…'. \
                 Use list_books to see what is available, search_verses to find passages, \
                 and read_chapter to read a passage in context.",
            )
    }
}
