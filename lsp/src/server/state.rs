use std::sync::{Arc, Mutex};

use dashmap::DashMap;
use ropey::Rope;
use tower_lsp::lsp_types::Url;
use tower_lsp::Client;
use tracing::warn;

use gremlin_core::parse::{parse, CancelToken, ParseResult};

/// In-memory representation of an open Gremlin document and its cached
/// parse. The cancel token belongs to the current version; an edit
/// signals it and installs a fresh one.
#[derive(Debug, Default)]
pub(crate) struct Document {
    pub(crate) content: Rope,
    pub(crate) version: i32,
    pub(crate) parse: Option<Arc<ParseResult>>,
    pub(crate) cancel: CancelToken,
}

impl Document {
    /// Install a completed parse only when `version` is still the live
    /// version; a result computed against older content is discarded.
    pub(crate) fn store_parse(&mut self, version: i32, result: Arc<ParseResult>) -> bool {
        if self.version == version {
            self.parse = Some(result);
            true
        } else {
            false
        }
    }
}

/// Primary LSP server state shared across handlers.
pub(crate) struct GremlinLanguageServer {
    pub(crate) client: Client,
    pub(crate) documents: Arc<DashMap<Url, Document>>,
    pub(crate) config: Mutex<super::config::ServerConfig>,
}

impl GremlinLanguageServer {
    pub(crate) fn new(client: Client) -> Self {
        Self {
            client,
            documents: Arc::new(DashMap::new()),
            config: Mutex::new(super::config::ServerConfig::default()),
        }
    }

    /// Parse the document's current content and store the result, unless
    /// a newer edit arrived in the meantime. Each cache slot is only ever
    /// replaced by its own document's latest completed parse.
    pub(crate) fn update_parse(&self, uri: &Url) -> Option<Arc<ParseResult>> {
        let (text, version, cancel) = {
            let doc = self.documents.get(uri)?;
            (doc.content.to_string(), doc.version, doc.cancel.clone())
        };

        let result = match parse(&text, &cancel) {
            Ok(result) => result,
            Err(e) => {
                warn!(error = %e, "parse aborted");
                return None;
            }
        };

        if cancel.is_cancelled() {
            return None;
        }

        let result = Arc::new(result);
        let mut doc = self.documents.get_mut(uri)?;
        if doc.store_parse(version, result.clone()) {
            Some(result)
        } else {
            // A stale parse never overwrites a newer edit's result.
            None
        }
    }

    /// Cached parse for the document, computing one on demand.
    pub(crate) fn parse_of(&self, uri: &Url) -> Option<Arc<ParseResult>> {
        if let Some(doc) = self.documents.get(uri) {
            if let Some(parse) = &doc.parse {
                return Some(parse.clone());
            }
        }
        self.update_parse(uri)
    }

    /// Cheap snapshot of the document content for position mapping.
    pub(crate) fn rope_of(&self, uri: &Url) -> Option<Rope> {
        self.documents.get(uri).map(|doc| doc.content.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_document_has_no_cached_parse() {
        let doc = Document::default();
        assert!(doc.parse.is_none());
        assert!(!doc.cancel.is_cancelled());
    }

    #[test]
    fn stale_parse_never_overwrites_a_newer_version() {
        let text = "g.V().count()";
        let parsed = Arc::new(parse(text, &CancelToken::new()).unwrap());

        let mut doc = Document::default();
        let seen_version = doc.version;

        // An edit bumps the version while the parse is in flight.
        doc.version = seen_version + 1;

        assert!(!doc.store_parse(seen_version, parsed.clone()));
        assert!(doc.parse.is_none());

        // The parse of the current version lands.
        assert!(doc.store_parse(seen_version + 1, parsed));
        assert!(doc.parse.is_some());
    }

    #[test]
    fn cancellation_reaches_earlier_snapshots() {
        // update_parse clones the token before parsing; an edit that
        // cancels and swaps the document's token must still stop the
        // in-flight parse holding the old clone.
        let mut doc = Document::default();
        let snapshot = doc.cancel.clone();

        doc.cancel.cancel();
        doc.cancel = CancelToken::new();

        assert!(snapshot.is_cancelled());
        assert!(!doc.cancel.is_cancelled());
    }
}
