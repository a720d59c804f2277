use ropey::Rope;
use tower_lsp::jsonrpc::Result;
use tower_lsp::lsp_types::*;
use tower_lsp::LanguageServer;
use tracing::info;

use gremlin_core::catalog::{self, Kind};
use gremlin_core::navigate;
use gremlin_core::parse::CancelToken;

use super::{
    docs, semantic,
    state::{Document, GremlinLanguageServer},
    symbols,
    text::{apply_incremental_change_rope, position_to_byte, span_to_range},
};

#[tower_lsp::async_trait]
impl LanguageServer for GremlinLanguageServer {
    async fn initialize(&self, params: InitializeParams) -> Result<InitializeResult> {
        info!("Gremlin Language Server initializing with root: {:?}", params.root_uri);

        Ok(InitializeResult {
            capabilities: ServerCapabilities {
                text_document_sync: Some(TextDocumentSyncCapability::Kind(
                    TextDocumentSyncKind::INCREMENTAL,
                )),
                hover_provider: Some(HoverProviderCapability::Simple(true)),
                completion_provider: Some(CompletionOptions {
                    resolve_provider: Some(false),
                    trigger_characters: Some(vec![".".to_string()]),
                    work_done_progress_options: Default::default(),
                    all_commit_characters: None,
                    completion_item: None,
                }),
                signature_help_provider: Some(SignatureHelpOptions {
                    trigger_characters: Some(vec!["(".to_string(), ",".to_string()]),
                    retrigger_characters: None,
                    work_done_progress_options: Default::default(),
                }),
                document_symbol_provider: Some(OneOf::Left(true)),
                semantic_tokens_provider: Some(
                    SemanticTokensServerCapabilities::SemanticTokensOptions(SemanticTokensOptions {
                        work_done_progress_options: Default::default(),
                        legend: SemanticTokensLegend {
                            token_types: semantic::legend_types(),
                            token_modifiers: vec![],
                        },
                        range: Some(false),
                        full: Some(SemanticTokensFullOptions::Bool(true)),
                    }),
                ),
                ..Default::default()
            },
            server_info: Some(ServerInfo {
                name: "Gremlin Language Server".to_string(),
                version: Some(env!("CARGO_PKG_VERSION").to_string()),
            }),
        })
    }

    async fn initialized(&self, _: InitializedParams) {
        info!("Gremlin Language Server initialized");
        let _ = self
            .client
            .log_message(MessageType::INFO, "Gremlin Language Server started")
            .await;
        self.load_config().await;
    }

    async fn shutdown(&self) -> Result<()> {
        info!("Gremlin Language Server shutting down");
        Ok(())
    }

    async fn did_change_configuration(&self, _params: DidChangeConfigurationParams) {
        self.load_config().await;
    }

    async fn did_open(&self, params: DidOpenTextDocumentParams) {
        let uri = params.text_document.uri;
        let document = Document {
            content: Rope::from_str(&params.text_document.text),
            version: params.text_document.version,
            parse: None,
            cancel: CancelToken::new(),
        };

        self.documents.insert(uri.clone(), document);
        self.update_parse(&uri);
    }

    async fn did_change(&self, params: DidChangeTextDocumentParams) {
        let uri = params.text_document.uri;
        {
            let mut entry = self.documents.entry(uri.clone()).or_default();
            entry.version = params.text_document.version;

            // Stop any parse still running against the previous content.
            entry.cancel.cancel();
            entry.cancel = CancelToken::new();
            entry.parse = None;

            for change in &params.content_changes {
                apply_incremental_change_rope(&mut entry.content, change);
            }
        }

        self.update_parse(&uri);
    }

    async fn did_close(&self, params: DidCloseTextDocumentParams) {
        self.documents.remove(&params.text_document.uri);
    }

    async fn hover(&self, params: HoverParams) -> Result<Option<Hover>> {
        let uri = &params.text_document_position_params.text_document.uri;
        let position = params.text_document_position_params.position;

        let (Some(rope), Some(parsed)) = (self.rope_of(uri), self.parse_of(uri)) else {
            return Ok(None);
        };

        let offset = position_to_byte(&rope, position);
        let Some(id) = navigate::find_enclosing(&parsed.arena, &parsed.roots, offset) else {
            return Ok(None);
        };
        let token = &parsed.arena[id];

        let resolved = token.signature_index.and_then(|index| match token.kind {
            Kind::Traversal => catalog::step(&token.label).and_then(|s| s.get(index)),
            Kind::Predicate => catalog::predicate(&token.label).and_then(|s| s.get(index)),
            _ => None,
        });

        let value = match resolved {
            Some(signature) => docs::hover_markdown(&token.label, token.kind, signature),
            None => token.label.clone(),
        };

        Ok(Some(Hover {
            contents: HoverContents::Markup(MarkupContent {
                kind: MarkupKind::Markdown,
                value,
            }),
            range: Some(span_to_range(&rope, token.range)),
        }))
    }

    async fn completion(&self, _params: CompletionParams) -> Result<Option<CompletionResponse>> {
        let mut items = Vec::new();

        for (namespace, entries) in [
            ("traversal", catalog::steps().collect::<Vec<_>>()),
            ("predicate", catalog::predicates().collect::<Vec<_>>()),
        ] {
            for (name, overloads) in entries {
                let signature = &overloads[0];
                items.push(CompletionItem {
                    label: name.to_string(),
                    kind: Some(CompletionItemKind::METHOD),
                    detail: Some(docs::completion_detail(namespace, name, signature)),
                    documentation: Some(Documentation::MarkupContent(MarkupContent {
                        kind: MarkupKind::Markdown,
                        value: signature.description.to_string(),
                    })),
                    ..Default::default()
                });
            }
        }

        Ok(Some(CompletionResponse::Array(items)))
    }

    async fn signature_help(&self, params: SignatureHelpParams) -> Result<Option<SignatureHelp>> {
        let uri = &params.text_document_position_params.text_document.uri;
        let position = params.text_document_position_params.position;

        let (Some(rope), Some(parsed)) = (self.rope_of(uri), self.parse_of(uri)) else {
            return Ok(None);
        };

        let offset = position_to_byte(&rope, position);
        let Some(id) = navigate::find_at_offset(&parsed.arena, &parsed.roots, offset) else {
            return Ok(None);
        };
        let token = &parsed.arena[id];

        let overloads = match token.kind {
            Kind::Traversal => catalog::step(&token.label),
            Kind::Predicate => catalog::predicate(&token.label),
            _ => None,
        };
        let Some(overloads) = overloads else {
            return Ok(None);
        };

        let with_documentation = self.config.lock().unwrap().signature_documentation;
        let active_parameter =
            navigate::active_parameter(&parsed.arena, token, offset).map(|i| i as u32);

        let signatures = overloads
            .iter()
            .map(|signature| SignatureInformation {
                label: docs::signature_label(&token.label, signature),
                documentation: with_documentation.then(|| {
                    Documentation::MarkupContent(MarkupContent {
                        kind: MarkupKind::Markdown,
                        value: docs::signature_markdown(signature),
                    })
                }),
                parameters: Some(
                    signature
                        .parameters
                        .iter()
                        .map(|p| ParameterInformation {
                            label: ParameterLabel::Simple(p.name.to_string()),
                            documentation: p
                                .description
                                .map(|d| Documentation::String(d.to_string())),
                        })
                        .collect(),
                ),
                active_parameter,
            })
            .collect();

        Ok(Some(SignatureHelp {
            signatures,
            active_signature: token.signature_index.map(|i| i as u32),
            active_parameter,
        }))
    }

    async fn document_symbol(
        &self,
        params: DocumentSymbolParams,
    ) -> Result<Option<DocumentSymbolResponse>> {
        let uri = &params.text_document.uri;

        let (Some(rope), Some(parsed)) = (self.rope_of(uri), self.parse_of(uri)) else {
            return Ok(None);
        };

        Ok(Some(DocumentSymbolResponse::Nested(symbols::collect(
            &rope, &parsed,
        ))))
    }

    async fn semantic_tokens_full(
        &self,
        params: SemanticTokensParams,
    ) -> Result<Option<SemanticTokensResult>> {
        let uri = &params.text_document.uri;

        let (Some(rope), Some(parsed)) = (self.rope_of(uri), self.parse_of(uri)) else {
            return Ok(None);
        };

        let cap = self.config.lock().unwrap().max_semantic_tokens;
        let data = semantic::encode(&rope, &parsed, cap);

        Ok(Some(SemanticTokensResult::Tokens(SemanticTokens {
            result_id: None,
            data,
        })))
    }
}
