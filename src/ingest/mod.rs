// src/ingest/mod.rs
pub mod providers;
pub mod types;

use once_cell::sync::OnceCell;
use regex::Regex;

/// Normalize a headline: decode entities, strip tags, collapse whitespace.
pub fn normalize_title(s: &str) -> String {
    // 1) HTML entity decode
    let mut out = html_escape::decode_html_entities(s).to_string();

    // 2) Strip HTML tags
    static RE_TAGS: OnceCell<Regex> = OnceCell::new();
    let re_tags = RE_TAGS.get_or_init(|| Regex::new(r"(?is)</?[^>]+>").unwrap());
    out = re_tags.replace_all(&out, "").to_string();

    // 3) Normalize “ ” ‘ ’ « » to ASCII quotes
    out = out
        .replace(['\u{201C}', '\u{201D}', '\u{00AB}', '\u{00BB}'], "\"")
        .replace(['\u{2018}', '\u{2019}'], "'");

    // 4) Collapse whitespace
    static RE_WS: OnceCell<Regex> = OnceCell::new();
    let re_ws = RE_WS.get_or_init(|| Regex::new(r"\s+").unwrap());
    re_ws.replace_all(&out, " ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_title_collapses_ws_and_entities() {
        let s = "  Storm&nbsp;&nbsp; hits   Boston &amp; DC  ";
        assert_eq!(normalize_title(s), "Storm hits Boston & DC");
    }

    #[test]
    fn normalize_title_strips_tags_and_curly_quotes() {
        let s = "<b>FAA</b> issues \u{201C}ground stop\u{201D} at DCA";
        assert_eq!(normalize_title(s), "FAA issues \"ground stop\" at DCA");
    }

    #[test]
    fn normalize_title_keeps_trailing_punctuation() {
        assert_eq!(normalize_title("Flights cancelled!"), "Flights cancelled!");
    }
}
