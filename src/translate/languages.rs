//! Language tags supported by the translator UI.

use serde::Serialize;

/// Sentinel source tag meaning "let the model detect the language".
pub const AUTO: &str = "auto";

/// Tag → display name, in the order the UI presents them.
const LANGUAGES: &[(&str, &str)] = &[
    (AUTO, "auto-detect"),
    ("en", "English"),
    ("es", "Spanish"),
    ("fr", "French"),
    ("de", "German"),
    ("it", "Italian"),
    ("pt", "Portuguese"),
    ("ru", "Russian"),
    ("ja", "Japanese"),
    ("ko", "Korean"),
    ("zh", "Chinese"),
    ("ar", "Arabic"),
    ("hi", "Hindi"),
    ("tr", "Turkish"),
    ("pl", "Polish"),
    ("nl", "Dutch"),
    ("sv", "Swedish"),
    ("da", "Danish"),
    ("no", "Norwegian"),
    ("fi", "Finnish"),
    ("cs", "Czech"),
];

/// Resolve a tag to its display name. Unknown tags echo back unchanged
/// so the UI never shows an empty label.
pub fn display_name(tag: &str) -> &str {
    LANGUAGES
        .iter()
        .find(|(t, _)| *t == tag)
        .map(|(_, name)| *name)
        .unwrap_or(tag)
}

#[derive(Debug, Clone, Serialize)]
pub struct LanguageInfo {
    pub tag: &'static str,
    pub name: &'static str,
}

/// All selectable languages, `auto` first.
pub fn all() -> Vec<LanguageInfo> {
    LANGUAGES
        .iter()
        .map(|&(tag, name)| LanguageInfo { tag, name })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_tags_resolve() {
        assert_eq!(display_name("fr"), "French");
        assert_eq!(display_name("zh"), "Chinese");
        assert_eq!(display_name(AUTO), "auto-detect");
    }

    #[test]
    fn unknown_tag_echoes_back() {
        assert_eq!(display_name("tlh"), "tlh");
    }

    #[test]
    fn auto_listed_first() {
        let all = all();
        assert_eq!(all[0].tag, AUTO);
        assert_eq!(all.len(), 21);
    }
}
