use std::collections::HashMap;
use std::path::PathBuf;

use clap::Parser;
use ropey::Rope;
use tokio::sync::RwLock;
use tower_lsp::jsonrpc::Result;
use tower_lsp::lsp_types::{
    CompletionOptions, CompletionParams, CompletionResponse, DidChangeTextDocumentParams,
    DidCloseTextDocumentParams, DidOpenTextDocumentParams, Hover, HoverParams,
    HoverProviderCapability, InitializeParams, InitializeResult, InitializedParams, MessageType,
    ServerCapabilities, ServerInfo, TextDocumentSyncCapability, TextDocumentSyncKind, Url,
};
use tower_lsp::{Client, LanguageServer, LspService, Server};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use camelk_modeline::completion::get_completions;
use camelk_modeline::config::Settings;
use camelk_modeline::hover;

/// Language server for Camel K modeline options
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Log filter used when RUST_LOG is not set (e.g. "debug", "camelk_modeline=trace")
    #[arg(long, default_value = "info")]
    log_level: String,
}

struct Backend {
    client: Client,
    documents: RwLock<HashMap<Url, Rope>>,
    settings: RwLock<Settings>,
}

fn workspace_root(params: &InitializeParams) -> Option<PathBuf> {
    let folder = params
        .workspace_folders
        .as_ref()
        .and_then(|folders| folders.first())
        .map(|folder| folder.uri.clone());

    #[allow(deprecated)]
    let uri = folder.or_else(|| params.root_uri.clone())?;
    uri.to_file_path().ok()
}

#[tower_lsp::async_trait]
impl LanguageServer for Backend {
    async fn initialize(&self, params: InitializeParams) -> Result<InitializeResult> {
        if let Some(root) = workspace_root(&params) {
            match Settings::new(&root) {
                Ok(settings) => {
                    debug!(?settings, root = %root.display(), "loaded settings");
                    *self.settings.write().await = settings;
                }
                Err(err) => warn!("falling back to default settings: {err:#}"),
            }
        }

        Ok(InitializeResult {
            capabilities: ServerCapabilities {
                text_document_sync: Some(TextDocumentSyncCapability::Kind(
                    TextDocumentSyncKind::FULL,
                )),
                completion_provider: Some(CompletionOptions {
                    trigger_characters: Some(vec![":".to_string(), " ".to_string()]),
                    ..Default::default()
                }),
                hover_provider: Some(HoverProviderCapability::Simple(true)),
                ..Default::default()
            },
            server_info: Some(ServerInfo {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: Some(env!("CARGO_PKG_VERSION").to_string()),
            }),
        })
    }

    async fn initialized(&self, _: InitializedParams) {
        info!("server initialized");
        self.client
            .log_message(MessageType::INFO, "camelk-modeline initialized")
            .await;
    }

    async fn shutdown(&self) -> Result<()> {
        info!("shutting down");
        Ok(())
    }

    async fn did_open(&self, params: DidOpenTextDocumentParams) {
        let uri = params.text_document.uri;
        debug!(%uri, "opened");
        self.documents
            .write()
            .await
            .insert(uri, Rope::from_str(&params.text_document.text));
    }

    async fn did_change(&self, params: DidChangeTextDocumentParams) {
        // Full sync: the last change carries the whole document
        let Some(change) = params.content_changes.into_iter().last() else {
            return;
        };
        self.documents
            .write()
            .await
            .insert(params.text_document.uri, Rope::from_str(&change.text));
    }

    async fn did_close(&self, params: DidCloseTextDocumentParams) {
        debug!(uri = %params.text_document.uri, "closed");
        self.documents.write().await.remove(&params.text_document.uri);
    }

    async fn completion(&self, params: CompletionParams) -> Result<Option<CompletionResponse>> {
        let uri = &params.text_document_position.text_document.uri;
        let documents = self.documents.read().await;
        let Some(document) = documents.get(uri) else {
            warn!(%uri, "completion requested for unknown document");
            return Ok(None);
        };

        let settings = self.settings.read().await;
        Ok(get_completions(document, &params, &settings))
    }

    async fn hover(&self, params: HoverParams) -> Result<Option<Hover>> {
        let position = params.text_document_position_params;
        let documents = self.documents.read().await;
        let Some(document) = documents.get(&position.text_document.uri) else {
            return Ok(None);
        };

        let settings = self.settings.read().await;
        Ok(hover::hover(document, position.position, &settings))
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // stdout belongs to the protocol
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let stdin = tokio::io::stdin();
    let stdout = tokio::io::stdout();

    let (service, socket) = LspService::new(|client| Backend {
        client,
        documents: RwLock::new(HashMap::new()),
        settings: RwLock::new(Settings::default()),
    });

    Server::new(stdin, stdout, socket).serve(service).await;
}
