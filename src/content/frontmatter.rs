use std::collections::BTreeMap;

use tracing::trace;

const DELIMITER: &str = "---";

/// Parsed header keys, in key order.
pub type HeaderMap = BTreeMap<String, HeaderValue>;

/// A single header value.
///
/// `Map` only ever appears at the top level and only holds scalars.
#[derive(Debug, Clone, PartialEq)]
pub enum HeaderValue {
    Str(String),
    Bool(bool),
    Number(f64),
    Map(HeaderMap),
}

impl HeaderValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            HeaderValue::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            HeaderValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            HeaderValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&HeaderMap> {
        match self {
            HeaderValue::Map(m) => Some(m),
            _ => None,
        }
    }
}

/// A source unit split into its header and the free-form body after it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    pub header: HeaderMap,
    pub body: String,
}

/// Split `input` into header and body.
///
/// The header block is fenced by `---` lines at the very top and holds
/// `key: value` pairs plus one level of nesting:
///
/// ```text
/// ---
/// name: "Jane Doe"
/// order: 1
/// social:
///   x: "https://x.com/janedoe"
/// ---
/// ```
///
/// Lists, multi-line scalars and comments are not supported; lines that do
/// not fit are skipped. Never fails: without a complete header block the
/// whole input becomes the body and the header is empty.
pub fn parse(input: &str) -> Document {
    match split_header(input) {
        Some((block, body)) => Document {
            header: parse_header(block),
            body: body.to_string(),
        },
        None => Document {
            header: HeaderMap::new(),
            body: input.to_string(),
        },
    }
}

/// Returns the text between the delimiter lines and everything after the
/// closing one.
fn split_header(input: &str) -> Option<(&str, &str)> {
    let (first, rest) = input.split_once('\n')?;
    if trim_line_ending(first) != DELIMITER {
        return None;
    }

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if trim_line_ending(line) == DELIMITER {
            return Some((&rest[..offset], &rest[offset + line.len()..]));
        }
        offset += line.len();
    }
    None
}

fn trim_line_ending(line: &str) -> &str {
    line.trim_end_matches(['\n', '\r'])
}

#[derive(Debug, Clone, Copy)]
enum State<'a> {
    TopLevel,
    /// Inside the mapping opened by `key`, which sat at `indent`.
    Nested { key: &'a str, indent: usize },
}

fn parse_header(block: &str) -> HeaderMap {
    let mut header = HeaderMap::new();
    let mut state = State::TopLevel;

    for line in block.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let Some((key, value)) = split_key_value(trimmed) else {
            trace!(line, "skipping header line");
            continue;
        };
        let indent = line.chars().take_while(|c| c.is_whitespace()).count();

        if indent == 0 {
            if value.is_empty() {
                header.insert(key.to_string(), HeaderValue::Map(HeaderMap::new()));
                state = State::Nested { key, indent };
            } else {
                header.insert(key.to_string(), parse_value(value));
                state = State::TopLevel;
            }
            continue;
        }

        match state {
            State::Nested {
                key: parent,
                indent: parent_indent,
            } if indent > parent_indent => {
                if let Some(HeaderValue::Map(map)) = header.get_mut(parent) {
                    map.insert(key.to_string(), parse_value(value));
                }
            }
            _ => trace!(line, "skipping indented line outside a mapping"),
        }
    }

    header
}

/// Split `key: value`, where the key is made of word characters.
fn split_key_value(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.split_once(':')?;
    let is_word = !key.is_empty() && key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
    is_word.then(|| (key, value.trim()))
}

/// Interpret a raw scalar: strip one layer of matching quotes, then try
/// boolean and number before falling back to text.
pub(crate) fn parse_value(raw: &str) -> HeaderValue {
    let unquoted = strip_quotes(raw);

    match unquoted {
        "true" => return HeaderValue::Bool(true),
        "false" => return HeaderValue::Bool(false),
        _ => {}
    }

    let numeric = unquoted.trim();
    if looks_numeric(numeric) {
        if let Ok(n) = numeric.parse::<f64>() {
            if n.is_finite() {
                return HeaderValue::Number(n);
            }
        }
    }

    HeaderValue::Str(unquoted.to_string())
}

/// Decimal literals only. Rust also parses `inf`, `infinity` and `nan`,
/// which must stay text.
fn looks_numeric(s: &str) -> bool {
    s.starts_with(|c: char| c.is_ascii_digit() || matches!(c, '+' | '-' | '.'))
        && s.chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'))
}

fn strip_quotes(raw: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = raw
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner;
        }
    }
    raw
}
