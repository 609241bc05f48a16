//! Word tokenization and n-gram extraction.
//!
//! Tokens are runs of two or more word characters (alphanumeric or `_`),
//! lowercased. Every other character separates tokens, so punctuation and
//! single-character words never reach the counters.

/// Minimum token length in characters.
const MIN_TOKEN_CHARS: usize = 2;

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Splits one document into lowercase tokens, in order of appearance.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !is_word_char(c))
        .filter(|token| token.chars().count() >= MIN_TOKEN_CHARS)
        .map(str::to_lowercase)
        .collect()
}

/// Contiguous `n`-word sequences of one document, joined by single spaces.
///
/// A document with fewer than `n` tokens yields nothing.
pub fn ngrams(text: &str, n: usize) -> Vec<String> {
    if n == 0 {
        return Vec::new();
    }
    tokenize(text)
        .windows(n)
        .map(|window| window.join(" "))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_drops_short_tokens() {
        assert_eq!(
            tokenize("Harga BBM naik, a b ok!"),
            ["harga", "bbm", "naik", "ok"]
        );
    }

    #[test]
    fn keeps_digits_and_unicode_letters() {
        assert_eq!(tokenize("brics 2024 ümit"), ["brics", "2024", "ümit"]);
    }

    #[test]
    fn empty_and_whitespace_text_has_no_tokens() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \t ").is_empty());
    }

    #[test]
    fn trigrams_are_contiguous_windows() {
        assert_eq!(
            ngrams("bad service very slow", 3),
            ["bad service very", "service very slow"]
        );
    }

    #[test]
    fn too_short_document_yields_no_ngrams() {
        assert!(ngrams("bad service", 3).is_empty());
        assert!(ngrams("anything", 0).is_empty());
    }
}
