use serde::Deserialize;
use tower_lsp::lsp_types::ConfigurationItem;

use super::state::GremlinLanguageServer;
use super::MAX_SEMANTIC_TOKENS;

#[derive(Debug, Clone)]
pub(crate) struct ServerConfig {
    /// Hard cap on emitted semantic tokens per document.
    pub(crate) max_semantic_tokens: usize,
    /// Include full overload documentation in signature help.
    pub(crate) signature_documentation: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            max_semantic_tokens: MAX_SEMANTIC_TOKENS,
            signature_documentation: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct GremlinLspConfigSection {
    #[serde(default)]
    signature_help: SignatureHelpConfig,
    #[serde(default)]
    performance: PerformanceConfig,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct SignatureHelpConfig {
    #[serde(default)]
    documentation: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct PerformanceConfig {
    #[serde(default)]
    max_semantic_tokens: Option<usize>,
}

impl GremlinLanguageServer {
    pub(crate) async fn load_config(&self) {
        let items = vec![ConfigurationItem {
            scope_uri: None,
            section: Some("gremlin.lsp".to_string()),
        }];

        if let Ok(values) = self.client.configuration(items).await {
            if let Some(val) = values.into_iter().next() {
                if let Ok(cfg) = serde_json::from_value::<GremlinLspConfigSection>(val) {
                    let mut guard = self.config.lock().unwrap();
                    guard.signature_documentation =
                        cfg.signature_help.documentation.unwrap_or(true);

                    if let Some(v) = cfg.performance.max_semantic_tokens.filter(|v| *v > 0) {
                        guard.max_semantic_tokens = v;
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_deserializes_with_camel_case_keys() {
        let value = serde_json::json!({
            "signatureHelp": { "documentation": false },
            "performance": { "maxSemanticTokens": 2000 }
        });

        let cfg: GremlinLspConfigSection = serde_json::from_value(value).unwrap();
        assert_eq!(cfg.signature_help.documentation, Some(false));
        assert_eq!(cfg.performance.max_semantic_tokens, Some(2000));
    }

    #[test]
    fn empty_section_falls_back_to_defaults() {
        let cfg: GremlinLspConfigSection = serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(cfg.signature_help.documentation, None);
        assert_eq!(cfg.performance.max_semantic_tokens, None);

        let defaults = ServerConfig::default();
        assert_eq!(defaults.max_semantic_tokens, MAX_SEMANTIC_TOKENS);
        assert!(defaults.signature_documentation);
    }
}
