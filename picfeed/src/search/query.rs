//! Free-text query tokenization.
//!
//! | Input                  | wild  | from    | empty | keywords          |
//! |------------------------|-------|---------|-------|-------------------|
//! | `""`                   | no    | -       | yes   | `[""]`            |
//! | `"*"`                  | yes   | -       | no    | `[""]`            |
//! | `"from:alice Cat"`     | no    | `alice` | no    | `["cat"]`         |
//! | `"* from:bob dog"`     | yes   | `bob`   | no    | `["dog"]`         |
//! | `"cat * dog"`          | yes   | -       | no    | `["catdog"]`      |
//! | `"a*b"`                | no    | -       | no    | `["a*b"]`         |
//!
//! Only the first `from:` filter and the first standalone `*` are consumed;
//! later ones stay in the text and become keywords. The consumed `*` takes
//! one bounding whitespace character on each side with it, which joins the
//! words around it.

const FROM_PREFIX: &str = "from:";
const WILDCARD: char = '*';

/// A search string broken into its special markers and keywords.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedQuery {
    /// A standalone `*` was present.
    pub wild: bool,
    /// Username captured by the first `from:<token>`.
    pub from: Option<String>,
    /// The raw input was exactly the empty string.
    pub empty: bool,
    /// Lowercased remainder split on single spaces. May contain empty strings.
    pub keywords: Vec<String>,
}

impl ParsedQuery {
    pub fn parse(raw: &str) -> Self {
        let wild = find_wildcard(raw).is_some();
        let from_match = find_from_filter(raw);
        let from = from_match.as_ref().map(|m| raw[m.token.clone()].to_string());

        let mut remainder = raw.to_string();
        if let Some(m) = from_match {
            remainder.replace_range(m.whole, "");
        }
        if wild && let Some(index) = find_wildcard(&remainder) {
            remainder.replace_range(wildcard_span(&remainder, index), "");
        }

        let keywords = remainder
            .trim()
            .to_lowercase()
            .split(' ')
            .map(str::to_string)
            .collect();

        Self {
            wild,
            from,
            empty: raw.is_empty(),
            keywords,
        }
    }

    /// Keywords that actually narrow a selection.
    pub fn effective_keywords(&self) -> impl Iterator<Item = &str> {
        self.keywords.iter().map(String::as_str).filter(|k| !k.is_empty())
    }
}

struct FromMatch {
    whole: std::ops::Range<usize>,
    token: std::ops::Range<usize>,
}

/// Byte index of the first `*` bounded by whitespace or the ends of the string.
fn find_wildcard(text: &str) -> Option<usize> {
    text.char_indices().find_map(|(index, c)| {
        if c != WILDCARD {
            return None;
        }
        let before_ok = text[..index].chars().next_back().is_none_or(char::is_whitespace);
        let after_ok = text[index + c.len_utf8()..]
            .chars()
            .next()
            .is_none_or(char::is_whitespace);
        (before_ok && after_ok).then_some(index)
    })
}

/// The `*` at `index` plus the separator on either side of it, if any.
fn wildcard_span(text: &str, index: usize) -> std::ops::Range<usize> {
    let start = text[..index]
        .chars()
        .next_back()
        .map_or(index, |c| index - c.len_utf8());
    let end = index + WILDCARD.len_utf8();
    let end = text[end..].chars().next().map_or(end, |c| end + c.len_utf8());
    start..end
}

/// First `from:` followed by at least one non-whitespace character.
fn find_from_filter(text: &str) -> Option<FromMatch> {
    text.match_indices(FROM_PREFIX).find_map(|(start, _)| {
        let token_start = start + FROM_PREFIX.len();
        let token_len = text[token_start..]
            .find(char::is_whitespace)
            .unwrap_or(text.len() - token_start);
        (token_len > 0).then(|| FromMatch {
            whole: start..token_start + token_len,
            token: token_start..token_start + token_len,
        })
    })
}
