//! # JSON Syntax Highlighting
//!
//! Turns pretty-printed JSON into HTML-safe markup where every token is
//! wrapped in `<span class="json-…">`. The terminal view converts the same
//! markup into ANSI colours, and the HTML export embeds it as is.
//!
//! Escaping happens before tokenizing so the inserted span tags are never
//! escaped themselves.

use regex::Regex;
use std::sync::OnceLock;

/// Strings (with escapes) plus an optional trailing colon, literals, numbers
const TOKEN_PATTERN: &str = r#""(\\u[a-zA-Z0-9]{4}|\\[^u]|[^\\"])*"(\s*:)?|\b(true|false|null)\b|-?[0-9]+(?:\.[0-9]*)?(?:[eE][+\-]?[0-9]+)?"#;

const SPAN_PATTERN: &str = r#"(?s)<span class="json-(key|string|boolean|null|number)">(.*?)</span>"#;

fn token_regex() -> &'static Regex {
    static TOKEN_REGEX: OnceLock<Regex> = OnceLock::new();
    TOKEN_REGEX.get_or_init(|| Regex::new(TOKEN_PATTERN).expect("token pattern is valid"))
}

fn span_regex() -> &'static Regex {
    static SPAN_REGEX: OnceLock<Regex> = OnceLock::new();
    SPAN_REGEX.get_or_init(|| Regex::new(SPAN_PATTERN).expect("span pattern is valid"))
}

/// Category of a highlighted token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenClass {
    Key,
    String,
    Boolean,
    Null,
    Number,
}

impl TokenClass {
    /// CSS class carried by the wrapping span
    pub fn css_class(&self) -> &'static str {
        match self {
            TokenClass::Key => "json-key",
            TokenClass::String => "json-string",
            TokenClass::Boolean => "json-boolean",
            TokenClass::Null => "json-null",
            TokenClass::Number => "json-number",
        }
    }

    fn from_css_suffix(suffix: &str) -> Option<Self> {
        match suffix {
            "key" => Some(TokenClass::Key),
            "string" => Some(TokenClass::String),
            "boolean" => Some(TokenClass::Boolean),
            "null" => Some(TokenClass::Null),
            "number" => Some(TokenClass::Number),
            _ => None,
        }
    }

    /// Classify a token matched by the tokenizer
    pub fn classify(token: &str) -> Self {
        if token.starts_with('"') {
            if token.ends_with(':') {
                TokenClass::Key
            } else {
                TokenClass::String
            }
        } else if token == "true" || token == "false" {
            TokenClass::Boolean
        } else if token == "null" {
            TokenClass::Null
        } else {
            TokenClass::Number
        }
    }
}

/// A piece of highlighted text: untouched punctuation or a classified token
#[derive(Debug, Clone, PartialEq)]
pub enum Segment<'a> {
    Plain(&'a str),
    Token(TokenClass, &'a str),
}

/// Escape `&`, `<` and `>`; `&` goes first so entities are not escaped twice
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Reverse of [`escape_html`]
pub fn unescape_html(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}

/// Split text into plain runs and classified tokens, in order
pub fn tokenize(text: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut last_end = 0;

    for token in token_regex().find_iter(text) {
        if token.start() > last_end {
            segments.push(Segment::Plain(&text[last_end..token.start()]));
        }
        segments.push(Segment::Token(
            TokenClass::classify(token.as_str()),
            token.as_str(),
        ));
        last_end = token.end();
    }

    if last_end < text.len() {
        segments.push(Segment::Plain(&text[last_end..]));
    }

    segments
}

/// Escape JSON text and wrap every token in a classed span
pub fn highlight_json(json: &str) -> String {
    let escaped = escape_html(json);
    let mut markup = String::with_capacity(escaped.len() * 2);

    for segment in tokenize(&escaped) {
        match segment {
            Segment::Plain(text) => markup.push_str(text),
            Segment::Token(class, text) => {
                markup.push_str("<span class=\"");
                markup.push_str(class.css_class());
                markup.push_str("\">");
                markup.push_str(text);
                markup.push_str("</span>");
            }
        }
    }

    markup
}

/// Read highlighted markup back into segments, entities left escaped
pub fn parse_markup(markup: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut last_end = 0;

    for captures in span_regex().captures_iter(markup) {
        let (Some(whole), Some(class), Some(inner)) =
            (captures.get(0), captures.get(1), captures.get(2))
        else {
            continue;
        };
        if whole.start() > last_end {
            segments.push(Segment::Plain(&markup[last_end..whole.start()]));
        }
        match TokenClass::from_css_suffix(class.as_str()) {
            Some(class) => segments.push(Segment::Token(class, inner.as_str())),
            None => segments.push(Segment::Plain(inner.as_str())),
        }
        last_end = whole.end();
    }

    if last_end < markup.len() {
        segments.push(Segment::Plain(&markup[last_end..]));
    }

    segments
}

/// Text content of highlighted markup: tags removed, entities decoded
pub fn markup_text(markup: &str) -> String {
    let stripped: String = parse_markup(markup)
        .into_iter()
        .map(|segment| match segment {
            Segment::Plain(text) | Segment::Token(_, text) => text,
        })
        .collect();
    unescape_html(&stripped)
}
