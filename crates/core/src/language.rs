use log::info;

/// Language codes the catalog service can localize product info into.
pub const SUPPORTED_LANGS: [&str; 10] =
    ["zh", "en", "es", "pt", "ja", "ru", "nl", "ko", "fr", "de"];

/// Fallback language used when a caller asks for one the service doesn't have.
pub const DEFAULT_LANG: &str = "en";

/// Map a requested language code onto one the catalog service supports.
///
/// Supported codes pass through unchanged; anything else falls back to
/// [`DEFAULT_LANG`]. An unsupported code is not an error, just worth a note.
pub fn resolve_lang(lang: &str) -> &str {
    if SUPPORTED_LANGS.contains(&lang) {
        lang
    } else {
        info!("unsupported lang={}, falling back to lang={}", lang, DEFAULT_LANG);
        DEFAULT_LANG
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_langs_pass_through() {
        for lang in SUPPORTED_LANGS {
            assert_eq!(resolve_lang(lang), lang);
        }
    }

    #[test]
    fn test_unsupported_lang_falls_back() {
        assert_eq!(resolve_lang("xx"), DEFAULT_LANG);
        assert_eq!(resolve_lang("english"), DEFAULT_LANG);
        assert_eq!(resolve_lang("zh-CN"), DEFAULT_LANG);
    }

    #[test]
    fn test_empty_lang_falls_back() {
        assert_eq!(resolve_lang(""), DEFAULT_LANG);
    }

    #[test]
    fn test_lang_match_is_case_sensitive() {
        assert_eq!(resolve_lang("EN"), DEFAULT_LANG);
        assert_eq!(resolve_lang("Ja"), DEFAULT_LANG);
    }
}
