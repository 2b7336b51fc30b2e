use std::sync::LazyLock;

use regex::Regex;

static RE_EMOJI: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\p{Emoji_Presentation}\p{Extended_Pictographic}\x{FE0F}\x{200D}]+").unwrap()
});

/// Raw user input split into its text and the emoji typed along with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedName {
    /// Display text with emoji removed and whitespace collapsed.
    pub clean: String,
    /// Every emoji glyph found in the input, concatenated in order.
    pub custom_emoji: Option<String>,
}

impl ParsedName {
    pub fn parse(raw: &str) -> Self {
        let custom_emoji = RE_EMOJI
            .find_iter(raw)
            .map(|m| m.as_str())
            .collect::<String>();

        let has_glyph = custom_emoji
            .chars()
            .any(|c| c != '\u{FE0F}' && c != '\u{200D}');
        let custom_emoji = has_glyph.then_some(custom_emoji);

        Self {
            clean: collapse_whitespace(&strip_emoji(raw)),
            custom_emoji,
        }
    }

    pub fn key(&self) -> String {
        normalize(&self.clean)
    }
}

pub fn strip_emoji(raw: &str) -> String {
    RE_EMOJI.replace_all(raw, "").into_owned()
}

fn collapse_whitespace(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Canonical lookup key for an item name.
///
/// Emoji and punctuation are dropped, the rest is trimmed and lowercased, then
/// a naive English plural is removed. An empty key means "no item".
pub fn normalize(raw: &str) -> String {
    let clean = strip_emoji(raw)
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace() || *c == '_')
        .collect::<String>()
        .trim()
        .to_lowercase();

    singularize(clean)
}

fn singularize(word: String) -> String {
    if let Some(stem) = word.strip_suffix("ies") {
        return format!("{stem}y");
    }

    if let Some(stem) = word.strip_suffix("es") {
        return stem.to_owned();
    }

    if word.ends_with('s') && !word.ends_with("ss") {
        return word[..word.len() - 1].to_owned();
    }

    word
}
