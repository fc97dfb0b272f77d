//! JSON pretty-printing and syntax highlighting
//!
//! The highlighter is a lexical pass over already-serialized JSON text. It
//! recognizes string, literal and number tokens by shape only and does not
//! validate structure: malformed input is highlighted token by token and
//! everything else is copied through.

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::Value;

/// Serialize a value with four-space indentation.
pub fn pretty_json(value: &Value) -> Result<String, serde_json::Error> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Token category, doubles as the CSS class of the wrapping span
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenClass {
    Key,
    String,
    Boolean,
    Null,
    Number,
}

impl TokenClass {
    pub fn css_class(&self) -> &'static str {
        match self {
            TokenClass::Key => "key",
            TokenClass::String => "string",
            TokenClass::Boolean => "boolean",
            TokenClass::Null => "null",
            TokenClass::Number => "number",
        }
    }
}

/// Escape HTML and wrap every JSON token in `<span class="...">`.
pub fn syntax_highlight(json: &str) -> String {
    let escaped = html_escape(json);
    let chars: Vec<char> = escaped.chars().collect();
    let len = chars.len();
    let mut result = String::with_capacity(escaped.len() * 2);
    let mut i = 0;

    while i < len {
        let matched = match_string(&chars, i)
            .or_else(|| match_literal(&chars, i))
            .or_else(|| match_number(&chars, i).map(|end| (end, TokenClass::Number)));

        match matched {
            Some((end, class)) => {
                result.push_str("<span class=\"");
                result.push_str(class.css_class());
                result.push_str("\">");
                result.extend(&chars[i..end]);
                result.push_str("</span>");
                i = end;
            }
            None => {
                result.push(chars[i]);
                i += 1;
            }
        }
    }

    result
}

/// Escape `&` first so the entities produced for `<` and `>` stay intact
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Quoted string, optionally followed by whitespace and a colon (object key)
fn match_string(chars: &[char], start: usize) -> Option<(usize, TokenClass)> {
    if chars.get(start) != Some(&'"') {
        return None;
    }
    let len = chars.len();
    let mut i = start + 1;

    loop {
        match chars.get(i)? {
            '"' => {
                i += 1;
                break;
            }
            '\\' => match chars.get(i + 1)? {
                'u' => {
                    let hex = chars.get(i + 2..i + 6)?;
                    if !hex.iter().all(|c| c.is_ascii_alphanumeric()) {
                        return None;
                    }
                    i += 6;
                }
                _ => i += 2,
            },
            _ => i += 1,
        }
    }

    let mut j = i;
    while j < len && chars[j].is_whitespace() {
        j += 1;
    }
    if j < len && chars[j] == ':' {
        Some((j + 1, TokenClass::Key))
    } else {
        Some((i, TokenClass::String))
    }
}

/// `true`, `false` or `null` standing as a whole word
fn match_literal(chars: &[char], start: usize) -> Option<(usize, TokenClass)> {
    if start > 0 && is_word_char(chars[start - 1]) {
        return None;
    }
    for (word, class) in [
        ("true", TokenClass::Boolean),
        ("false", TokenClass::Boolean),
        ("null", TokenClass::Null),
    ] {
        let end = start + word.len();
        let Some(candidate) = chars.get(start..end) else {
            continue;
        };
        if candidate.iter().copied().eq(word.chars())
            && !chars.get(end).copied().is_some_and(is_word_char)
        {
            return Some((end, class));
        }
    }
    None
}

/// `-?\d+(\.\d*)?([eE][+-]?\d+)?`, returns the end of the match
fn match_number(chars: &[char], start: usize) -> Option<usize> {
    let len = chars.len();
    let mut i = start;
    if chars.get(i) == Some(&'-') {
        i += 1;
    }

    let digits_start = i;
    while i < len && chars[i].is_ascii_digit() {
        i += 1;
    }
    if i == digits_start {
        return None;
    }

    if i < len && chars[i] == '.' {
        i += 1;
        while i < len && chars[i].is_ascii_digit() {
            i += 1;
        }
    }

    if i < len && (chars[i] == 'e' || chars[i] == 'E') {
        let mut j = i + 1;
        if j < len && (chars[j] == '+' || chars[j] == '-') {
            j += 1;
        }
        let exp_start = j;
        while j < len && chars[j].is_ascii_digit() {
            j += 1;
        }
        // an incomplete exponent is left out of the match
        if j > exp_start {
            i = j;
        }
    }

    Some(i)
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn span(class: &str, text: &str) -> String {
        format!("<span class=\"{}\">{}</span>", class, text)
    }

    #[test]
    fn test_pretty_json_uses_four_spaces() {
        let text = pretty_json(&json!({"a": 1, "b": "x"})).unwrap();
        assert_eq!(text, "{\n    \"a\": 1,\n    \"b\": \"x\"\n}");
    }

    #[test]
    fn test_pretty_json_keeps_key_order() {
        let value: Value = serde_json::from_str(r#"{"z":1,"a":2}"#).unwrap();
        let text = pretty_json(&value).unwrap();
        assert!(text.find("\"z\"").unwrap() < text.find("\"a\"").unwrap());
    }

    #[test]
    fn test_highlight_pretty_response() {
        let text = pretty_json(&json!({"a": 1, "b": "x"})).unwrap();
        let html = syntax_highlight(&text);
        let expected = format!(
            "{{\n    {} {},\n    {} {}\n}}",
            span("key", "\"a\":"),
            span("number", "1"),
            span("key", "\"b\":"),
            span("string", "\"x\"")
        );
        assert_eq!(html, expected);
    }

    #[test]
    fn test_highlight_literals_and_exponent() {
        let html = syntax_highlight(r#"{"k":true,"n":null,"x":-1.3e5}"#);
        let expected = format!(
            "{{{}{},{}{},{}{}}}",
            span("key", "\"k\":"),
            span("boolean", "true"),
            span("key", "\"n\":"),
            span("null", "null"),
            span("key", "\"x\":"),
            span("number", "-1.3e5")
        );
        assert_eq!(html, expected);
    }

    #[test]
    fn test_key_keeps_whitespace_before_colon() {
        assert_eq!(syntax_highlight("\"a\" : 1"), format!("{} {}", span("key", "\"a\" :"), span("number", "1")));
        assert_eq!(syntax_highlight("\"a\" "), format!("{} ", span("string", "\"a\"")));
    }

    #[test]
    fn test_html_is_escaped_before_tagging() {
        let html = syntax_highlight(r#"{"tag":"<b>&</b>"}"#);
        assert_eq!(
            html,
            format!(
                "{{{}{}}}",
                span("key", "\"tag\":"),
                span("string", "\"&lt;b&gt;&amp;&lt;/b&gt;\"")
            )
        );
        assert_eq!(syntax_highlight("&lt;"), "&amp;lt;");
        assert_eq!(
            syntax_highlight("[1 < 2]"),
            format!("[{} &lt; {}]", span("number", "1"), span("number", "2"))
        );
    }

    #[test]
    fn test_escaped_quotes_stay_inside_string() {
        let html = syntax_highlight(r#"["say \"hi\"", "é"]"#);
        assert_eq!(
            html,
            format!(
                "[{}, {}]",
                span("string", r#""say \"hi\"""#),
                span("string", r#""é""#)
            )
        );
    }

    #[test]
    fn test_literals_need_word_boundaries() {
        assert_eq!(syntax_highlight("nullable"), "nullable");
        assert_eq!(syntax_highlight("xtrue"), "xtrue");
        assert_eq!(syntax_highlight("[false]"), format!("[{}]", span("boolean", "false")));
    }

    #[test]
    fn test_number_shapes() {
        assert_eq!(syntax_highlight("10."), span("number", "10."));
        assert_eq!(syntax_highlight("2E+10"), span("number", "2E+10"));
        assert_eq!(syntax_highlight("3e"), format!("{}e", span("number", "3")));
        assert_eq!(syntax_highlight("- 4"), format!("- {}", span("number", "4")));
    }

    #[test]
    fn test_unterminated_string_is_not_tagged() {
        assert_eq!(syntax_highlight("\"open"), "\"open");
        assert_eq!(syntax_highlight("\"open 12"), format!("\"open {}", span("number", "12")));
    }
}
