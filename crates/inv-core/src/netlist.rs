//! Line-level view of a SPICE deck.
//!
//! This is not a parser: it only splits the text into numbered lines,
//! folds `+` continuations into the statement they extend, and tokenises
//! each statement on whitespace. The checker rules pattern-match on it.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    Statement,
    Comment,
    Empty,
}

#[derive(Debug, Clone)]
pub struct Param {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Clone)]
pub struct DeckLine {
    /// 1-based line number of the first physical line
    pub line: usize,
    pub kind: LineKind,
    /// Trimmed text, continuations joined with a single space
    pub text: String,
    pub tokens: Vec<String>,
}

impl DeckLine {
    fn new(line: usize, kind: LineKind, text: String) -> Self {
        let tokens = match kind {
            LineKind::Statement => text.split_whitespace().map(str::to_string).collect(),
            _ => Vec::new(),
        };
        Self {
            line,
            kind,
            text,
            tokens,
        }
    }

    pub fn is_statement(&self) -> bool {
        self.kind == LineKind::Statement
    }

    pub fn has_token(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| t == token)
    }

    /// True when `sequence` appears as consecutive tokens.
    pub fn has_sequence(&self, sequence: &[&str]) -> bool {
        if sequence.is_empty() || self.tokens.len() < sequence.len() {
            return false;
        }
        self.tokens
            .windows(sequence.len())
            .any(|window| window.iter().zip(sequence).all(|(t, s)| t == s))
    }

    /// The token directly after the first occurrence of `keyword`.
    pub fn token_after(&self, keyword: &str) -> Option<&str> {
        let pos = self.tokens.iter().position(|t| t == keyword)?;
        self.tokens.get(pos + 1).map(String::as_str)
    }

    /// `key=value` tokens; the key match is exact.
    pub fn params(&self) -> Vec<Param> {
        self.tokens
            .iter()
            .filter_map(|token| token.split_once('='))
            .map(|(key, value)| Param {
                key: key.to_string(),
                value: value.to_string(),
            })
            .collect()
    }

    pub fn param(&self, key: &str) -> Option<String> {
        self.params()
            .into_iter()
            .find(|param| param.key == key)
            .map(|param| param.value)
    }
}

#[derive(Debug, Clone)]
pub struct Deck {
    pub lines: Vec<DeckLine>,
}

impl Deck {
    pub fn statements(&self) -> impl Iterator<Item = &DeckLine> {
        self.lines.iter().filter(|line| line.is_statement())
    }

    /// First statement holding every token in `tokens`, in any position.
    pub fn find_with_tokens(&self, tokens: &[&str]) -> Option<&DeckLine> {
        self.statements()
            .find(|line| tokens.iter().all(|token| line.has_token(token)))
    }

    pub fn has_sequence(&self, sequence: &[&str]) -> bool {
        self.statements().any(|line| line.has_sequence(sequence))
    }

    /// Last non-empty line of any kind.
    pub fn last_line(&self) -> Option<&DeckLine> {
        self.lines
            .iter()
            .rev()
            .find(|line| line.kind != LineKind::Empty)
    }
}

pub fn parse_deck(input: &str) -> Deck {
    let mut lines = Vec::new();
    let mut pending: Option<(usize, String)> = None;

    for (index, raw_line) in input.lines().enumerate() {
        let line_no = index + 1;
        let trimmed = raw_line.trim();

        if trimmed.starts_with('+') {
            let rest = trimmed.trim_start_matches('+').trim();
            match pending.as_mut() {
                Some((_, text)) => {
                    if !rest.is_empty() {
                        text.push(' ');
                        text.push_str(rest);
                    }
                }
                // orphan continuation, keep it as its own statement
                None => pending = Some((line_no, trimmed.to_string())),
            }
            continue;
        }

        if let Some((start, text)) = pending.take() {
            lines.push(DeckLine::new(start, LineKind::Statement, text));
        }

        if trimmed.is_empty() {
            lines.push(DeckLine::new(line_no, LineKind::Empty, String::new()));
        } else if trimmed.starts_with('*') {
            lines.push(DeckLine::new(line_no, LineKind::Comment, trimmed.to_string()));
        } else {
            pending = Some((line_no, trimmed.to_string()));
        }
    }

    if let Some((start, text)) = pending {
        lines.push(DeckLine::new(start, LineKind::Statement, text));
    }

    Deck { lines }
}

/// Parse a SPICE number such as `0.18u`, `5V` or `1meg`.
///
/// A trailing unit letter `V` is dropped before the scale suffix is read.
pub fn parse_number_with_suffix(token: &str) -> Option<f64> {
    let lower = token.trim().to_ascii_lowercase();
    let trimmed = if lower.ends_with("meg") {
        lower.as_str()
    } else {
        lower.trim_end_matches('v')
    };
    if trimmed.is_empty() {
        return None;
    }
    let (num_str, multiplier) = if let Some(value_part) = trimmed.strip_suffix("meg") {
        (value_part, 1e6)
    } else {
        let mut chars = trimmed.chars();
        let suffix = chars.next_back();
        let value_part = chars.as_str();
        match suffix {
            Some('f') => (value_part, 1e-15),
            Some('p') => (value_part, 1e-12),
            Some('n') => (value_part, 1e-9),
            Some('u') => (value_part, 1e-6),
            Some('m') => (value_part, 1e-3),
            Some('k') => (value_part, 1e3),
            Some('g') => (value_part, 1e9),
            Some('t') => (value_part, 1e12),
            _ => (trimmed, 1.0),
        }
    };

    num_str.parse::<f64>().ok().map(|num| num * multiplier)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suffixes_scale_values() {
        assert_eq!(parse_number_with_suffix("5V"), Some(5.0));
        assert_eq!(parse_number_with_suffix("-5V"), Some(-5.0));
        assert_eq!(parse_number_with_suffix("1k"), Some(1e3));
        assert_eq!(parse_number_with_suffix("2meg"), Some(2e6));
        let micro = parse_number_with_suffix("0.18u").unwrap();
        assert!((micro - 0.18e-6).abs() < 1e-18);
    }

    #[test]
    fn garbage_is_not_a_number() {
        assert_eq!(parse_number_with_suffix("abc"), None);
        assert_eq!(parse_number_with_suffix("V"), None);
        assert_eq!(parse_number_with_suffix(""), None);
        assert_eq!(parse_number_with_suffix("5µ"), None);
    }
}
