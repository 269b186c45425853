//! Deterministic mock translations — used when no API credential is
//! configured, and as the fallback when the remote call fails.

use super::languages;
use std::time::Duration;

/// Simulated latency so the mock path behaves like an asynchronous request.
const MOCK_DELAY: Duration = Duration::from_millis(800);

pub async fn translate(text: &str, source_lang: &str, target_lang: &str) -> String {
    tokio::time::sleep(MOCK_DELAY).await;
    translate_now(text, source_lang, target_lang)
}

/// The deterministic core, without the artificial delay.
pub(crate) fn translate_now(text: &str, source_lang: &str, target_lang: &str) -> String {
    if source_lang == target_lang && source_lang != languages::AUTO {
        return text.to_string();
    }

    let phrase = text.trim().to_lowercase();
    if let Some(known) = phrase_translation(&phrase, target_lang) {
        return known.to_string();
    }

    format!(
        "{} (mock translation to {})",
        text,
        languages::display_name(target_lang)
    )
}

/// Built-in phrase table for a handful of common greetings.
fn phrase_translation(phrase: &str, target_lang: &str) -> Option<&'static str> {
    let row: &[(&str, &str)] = match phrase {
        "hello" => &[
            ("es", "hola"),
            ("fr", "bonjour"),
            ("de", "hallo"),
            ("it", "ciao"),
            ("pt", "olá"),
            ("ru", "привет"),
            ("ja", "こんにちは"),
            ("ko", "안녕하세요"),
            ("zh", "你好"),
            ("ar", "مرحبا"),
            ("hi", "नमस्ते"),
        ],
        "good morning" => &[
            ("es", "buenos días"),
            ("fr", "bonjour"),
            ("de", "guten morgen"),
            ("it", "buongiorno"),
            ("pt", "bom dia"),
            ("ru", "доброе утро"),
            ("ja", "おはよう"),
            ("ko", "좋은 아침"),
            ("zh", "早上好"),
            ("ar", "صباح الخير"),
            ("hi", "सुप्रभात"),
        ],
        _ => return None,
    };
    row.iter()
        .find(|(tag, _)| *tag == target_lang)
        .map(|(_, translation)| *translation)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_when_source_equals_target() {
        assert_eq!(translate_now("whatever text", "en", "en"), "whatever text");
        assert_eq!(translate_now("hello", "es", "es"), "hello");
    }

    #[test]
    fn known_phrase_uses_table() {
        assert_eq!(translate_now("hello", "auto", "es"), "hola");
        assert_eq!(translate_now("good morning", "en", "de"), "guten morgen");
        assert_eq!(translate_now("hello", "en", "ja"), "こんにちは");
    }

    #[test]
    fn lookup_is_case_and_whitespace_insensitive() {
        assert_eq!(translate_now("  HeLLo  ", "auto", "es"), "hola");
    }

    #[test]
    fn unknown_phrase_gets_annotated() {
        assert_eq!(
            translate_now("the weather is nice", "auto", "fr"),
            "the weather is nice (mock translation to French)"
        );
    }

    #[test]
    fn unknown_target_keeps_table_miss_annotation() {
        // "hello" has no "tlh" column — falls through to the annotation.
        assert_eq!(
            translate_now("hello", "auto", "tlh"),
            "hello (mock translation to tlh)"
        );
    }
}
