use anyhow::Context;
use std::path::{Component, Path};

use gremlin_core::parse::{parse, CancelToken};

/// `gremlin-lsp --parse <file>` dumps the token forest as JSON and exits,
/// bypassing the LSP transport. Handy for debugging what the parser sees.
pub(crate) fn try_cli_parse() -> anyhow::Result<Option<String>> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() <= 1 {
        return Ok(None);
    }

    if let Some(i) = args.iter().position(|a| a == "--parse") {
        let path = args.get(i + 1).cloned().ok_or_else(|| {
            anyhow::anyhow!("Usage: gremlin-lsp --parse <relative-file-path>")
        })?;

        let content = read_file_content(&path)?;
        let result = parse(&content, &CancelToken::new())
            .with_context(|| format!("Failed to parse '{}'", path))?;

        return Ok(Some(serde_json::to_string_pretty(&result)?));
    }

    Ok(None)
}

pub(crate) fn is_safe_path(path: &str) -> bool {
    let path = Path::new(path);

    if path.as_os_str().is_empty() {
        return false;
    }
    if path.is_absolute() {
        return false;
    }
    if path.components().any(|c| c == Component::ParentDir) {
        return false;
    }

    let s = path.to_string_lossy();
    let suspicious = ['\0', '\n', '\r', '\t'];
    if s.chars().any(|c| suspicious.contains(&c)) {
        return false;
    }
    if s.len() >= 2 {
        let bytes = s.as_bytes();
        if bytes[1] == b':' {
            return false;
        }
    }
    true
}

pub(crate) fn read_file_content(path: &str) -> anyhow::Result<String> {
    if !is_safe_path(path) {
        return Err(anyhow::anyhow!("Unsafe file path: {}", path));
    }
    std::fs::read_to_string(path).with_context(|| format!("Failed to read file '{}'", path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_absolute_and_traversal_paths() {
        assert!(!is_safe_path("/etc/passwd"));
        assert!(!is_safe_path("../secrets.groovy"));
        assert!(!is_safe_path("queries/../../secrets.groovy"));
        assert!(!is_safe_path(""));
        assert!(!is_safe_path("C:\\queries.groovy"));
        assert!(!is_safe_path("bad\npath"));
    }

    #[test]
    fn accepts_plain_relative_paths() {
        assert!(is_safe_path("queries.groovy"));
        assert!(is_safe_path("queries/marko.groovy"));
    }
}
