//! Groups a text stream into whitespace-normalized share strings.
//!
//! - A line whose first non-space character is not a word character is a
//!   comment/separator: discarded, and it also terminates any
//!   in-progress share.
//! - A blank line terminates the current share (if any).
//! - Consecutive separators never emit an empty share.
//! - Any in-progress share is flushed at end of stream.

/// Parses `text` into its constituent share strings, in input order.
#[must_use]
pub fn parse_share_block(text: &str) -> Vec<String> {
    let mut shares = Vec::new();
    let mut words: Vec<&str> = Vec::new();

    for line in text.lines() {
        let line = line.trim();

        if line.is_empty() {
            flush(&mut words, &mut shares);
            continue;
        }

        let first_char = line.chars().next().expect("checked non-empty above");
        if !is_word_char(first_char) {
            flush(&mut words, &mut shares);
            continue;
        }

        words.extend(line.split_whitespace());
    }

    flush(&mut words, &mut shares);
    shares
}

fn flush<'a>(words: &mut Vec<&'a str>, shares: &mut Vec<String>) {
    if !words.is_empty() {
        shares.push(words.join(" "));
        words.clear();
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
