// src/config/keywords.rs
use anyhow::{anyhow, bail, Context, Result};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::filter::DEFAULT_KEYWORDS;

pub const ENV_KEYWORDS_PATH: &str = "BRIEFING_KEYWORDS_PATH";

/// Load keywords from an explicit path. Supports TOML (`keywords = [...]`) or a JSON array.
pub fn load_keywords_from(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("reading keywords from {}", path.display()))?;
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();
    let list = parse_keywords(&content, ext.as_str())
        .with_context(|| format!("parsing keywords in {}", path.display()))?;
    if list.is_empty() {
        bail!("keyword list in {} is empty", path.display());
    }
    Ok(list)
}

/// Load keywords using env var + fallbacks:
/// 1) $BRIEFING_KEYWORDS_PATH
/// 2) config/keywords.toml
/// 3) config/keywords.json
/// 4) built-in list
pub fn load_keywords_default() -> Result<Vec<String>> {
    if let Ok(p) = std::env::var(ENV_KEYWORDS_PATH) {
        let pb = PathBuf::from(p);
        if pb.exists() {
            return load_keywords_from(&pb);
        } else {
            return Err(anyhow!("{ENV_KEYWORDS_PATH} points to non-existent path"));
        }
    }
    let toml_p = PathBuf::from("config/keywords.toml");
    if toml_p.exists() {
        return load_keywords_from(&toml_p);
    }
    let json_p = PathBuf::from("config/keywords.json");
    if json_p.exists() {
        return load_keywords_from(&json_p);
    }
    Ok(DEFAULT_KEYWORDS.iter().map(|k| k.to_string()).collect())
}

fn parse_keywords(s: &str, hint_ext: &str) -> Result<Vec<String>> {
    if hint_ext == "toml" || s.contains("keywords") {
        if let Ok(v) = parse_toml(s) {
            return Ok(v);
        }
    }
    if let Ok(v) = parse_json(s) {
        return Ok(v);
    }
    parse_toml(s).map_err(|_| anyhow!("unsupported keyword list format"))
}

fn parse_toml(s: &str) -> Result<Vec<String>> {
    #[derive(serde::Deserialize)]
    struct TomlKeywords {
        keywords: Vec<String>,
    }
    let v: TomlKeywords = toml::from_str(s)?;
    Ok(clean_list(v.keywords))
}

fn parse_json(s: &str) -> Result<Vec<String>> {
    let v: Vec<String> = serde_json::from_str(s)?;
    Ok(clean_list(v))
}

// Trim, drop empties, dedup case-insensitively; first spelling wins, order kept.
fn clean_list(items: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut out = Vec::with_capacity(items.len());
    for it in items {
        let t = it.trim();
        if !t.is_empty() && seen.insert(t.to_lowercase()) {
            out.push(t.to_string());
        }
    }
    out
}
