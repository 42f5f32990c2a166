use crate::extract::{Extractor, ExtractorConfig, GeminiExtractor};
use crate::script::ScriptGenerator;
use rmcp::{
    ServerHandler,
    handler::server::router::tool::ToolRouter,
    model::{ServerCapabilities, ServerInfo},
    tool_handler,
};
use std::sync::Arc;

/// MCP server exposing listing extraction and script generation
#[derive(Clone)]
pub struct ListingServer {
    pub(crate) extractor: Arc<dyn Extractor>,
    pub(crate) generator: ScriptGenerator,
    tool_router: ToolRouter<Self>,
}

impl ListingServer {
    /// Create a server around any extractor
    pub fn new(extractor: Arc<dyn Extractor>) -> Self {
        Self::with_generator(extractor, ScriptGenerator::default())
    }

    /// Create a server with a custom script generator
    pub fn with_generator(extractor: Arc<dyn Extractor>, generator: ScriptGenerator) -> Self {
        Self {
            extractor,
            generator,
            tool_router: Self::tool_router(),
        }
    }

    /// Create a server backed by Gemini with the given configuration
    pub fn with_config(config: ExtractorConfig) -> crate::Result<Self> {
        let extractor = GeminiExtractor::new(config)?;
        Ok(Self::new(Arc::new(extractor)))
    }
}

#[tool_handler]
impl ServerHandler for ListingServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            instructions: Some(
                "Extract vehicle details from a listing URL and generate a console script that \
                 auto-fills a marketplace listing form. Paste the script into the browser console \
                 on the listing form page."
                    .to_string(),
            ),
            ..Default::default()
        }
    }
}
