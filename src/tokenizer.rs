//! Word tokenization for corpus text
//!
//! Text is lowercased, then segmented on Unicode (UAX #29) word boundaries.
//! URLs and email addresses are kept as single tokens instead of being split
//! on their punctuation. Emoji segments are tokens of their own.

use regex::Regex;
use std::sync::LazyLock;
use unicode_segmentation::UnicodeSegmentation;

/// URLs (scheme or `www.` prefixed) and email addresses, matched on lowercased text
static URL_OR_EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?P<url>(?:(?:https?|ftp)://|www\.)[^\s<>"'`]+)|(?P<email>[\w%+][\w%+-]*(?:\.[\w%+-]+)*@[\w-]+(?:\.[\w-]+)+)"#,
    )
    .unwrap_or_else(|e| panic!("invalid url/email pattern: {e}"))
});

/// Trailing characters that end a sentence rather than a URL
const URL_TRAILING_PUNCTUATION: &[char] = &['.', ',', ';', ':', '!', '?', ')', ']', '}'];

/// Split `text` into lowercase word tokens
///
/// # Example
/// ```
/// use ngram_gap::tokenizer::tokenize;
///
/// let tokens = tokenize("Hello, World! Mail bob@example.com.");
/// assert_eq!(tokens, vec!["hello", "world", "mail", "bob@example.com"]);
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let mut tokens = Vec::new();
    let mut cursor = 0;

    for caps in URL_OR_EMAIL.captures_iter(&lowered) {
        let (found, is_url) = match (caps.name("url"), caps.name("email")) {
            (Some(url), _) => (url, true),
            (None, Some(email)) => (email, false),
            (None, None) => continue,
        };
        // A URL glued to a preceding word belongs to that word
        if is_url && !starts_word(&lowered, found.start()) {
            continue;
        }
        let atom = found.as_str().trim_end_matches(URL_TRAILING_PUNCTUATION);
        if atom.is_empty() {
            continue;
        }
        push_words(&lowered[cursor..found.start()], &mut tokens);
        tokens.push(atom.to_string());
        cursor = found.start() + atom.len();
    }
    push_words(&lowered[cursor..], &mut tokens);

    tokens
}

fn starts_word(text: &str, start: usize) -> bool {
    text[..start].chars().next_back().map_or(true, |c| {
        !(c.is_alphanumeric() || matches!(c, '_' | '.' | '-' | '@' | '/' | '+' | '%'))
    })
}

fn push_words(segment: &str, tokens: &mut Vec<String>) {
    tokens.extend(
        segment
            .split_word_bounds()
            .filter(|word| word.chars().any(char::is_alphanumeric) || is_emoji(word))
            .map(str::to_string),
    );
}

/// Whether a word-bound segment starts with a pictographic character
///
/// Covers the emoji blocks (emoticons, pictographs, transport, flags,
/// supplemental symbols) plus the older symbol and dingbat blocks.
fn is_emoji(segment: &str) -> bool {
    segment.chars().next().is_some_and(|c| {
        matches!(c,
            '\u{1F000}'..='\u{1FAFF}'
            | '\u{2600}'..='\u{27BF}'
            | '\u{2B00}'..='\u{2BFF}'
            | '\u{2300}'..='\u{23FF}'
        )
    })
}
