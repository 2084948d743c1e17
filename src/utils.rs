//! Naming and string helpers shared by the builder and the emitters.

use std::path::Path;

use heck::{ToKebabCase, ToLowerCamelCase, ToSnakeCase, ToUpperCamelCase};

/// Naming style a tag value or proto field name is rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamingStyle {
    SmallCamelCase,
    CamelCase,
    SnakeCase,
    Kebab,
}

impl NamingStyle {
    /// Parse a style name as written in options and on the command line.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "smallCamelCase" => Some(NamingStyle::SmallCamelCase),
            "camelCase" | "pascalCase" => Some(NamingStyle::CamelCase),
            "snakeCase" => Some(NamingStyle::SnakeCase),
            "kebab" | "kebab-case" => Some(NamingStyle::Kebab),
            _ => None,
        }
    }

    pub fn apply(&self, name: &str) -> String {
        match self {
            NamingStyle::SmallCamelCase => name.to_lower_camel_case(),
            NamingStyle::CamelCase => name.to_upper_camel_case(),
            NamingStyle::SnakeCase => name.to_snake_case(),
            NamingStyle::Kebab => name.to_kebab_case(),
        }
    }
}

/// Exported Go name for a table or column.
pub fn camel_case(name: &str) -> String {
    name.to_upper_camel_case()
}

/// Make a comment safe to embed in a struct tag: one line, no backticks,
/// escaped double quotes.
pub fn trim_comment(s: &str) -> String {
    s.trim()
        .replace(';', ",")
        .replace('`', "'")
        .replace('"', "\\\"")
        .replace("\r\n", " ")
        .replace('\n', " ")
}

/// Collapse a comment onto a single line.
pub fn single_line(s: &str) -> String {
    s.lines().map(str::trim).filter(|l| !l.is_empty()).collect::<Vec<_>>().join(" ")
}

const GO_KEYWORDS: &[&str] = &[
    "break", "case", "chan", "const", "continue", "default", "defer", "else", "fallthrough",
    "for", "func", "go", "goto", "if", "import", "interface", "map", "package", "range",
    "return", "select", "struct", "switch", "type", "var",
];

pub fn is_go_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_alphabetic() || first == '_')
        && chars.all(|c| c.is_alphanumeric() || c == '_')
        && !GO_KEYWORDS.contains(&s)
}

/// Proto3 identifier: ASCII letter or `_`, then ASCII letters, digits, `_`.
pub fn is_proto_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_ascii_alphabetic() || first == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Last path segment of an import path or output directory, used as a Go package name.
pub fn pkg_name(path: &str) -> String {
    let trimmed = path.trim_end_matches('/');
    match Path::new(trimmed).file_name().and_then(|n| n.to_str()) {
        Some(name) if name != "." && !name.is_empty() => name.replace('-', "_"),
        _ => "model".to_string(),
    }
}

/// Escape a string for a quoted literal.
///
/// # Arguments
/// * `s` - The string to escape
/// * `quote_char` - The quote character to escape (`"` for Go literals, `'` for SQL)
pub fn escape_string_for_quote(s: &str, quote_char: char) -> String {
    let mut result = String::with_capacity(s.len() * 2);
    for c in s.chars() {
        match c {
            '\\' => result.push_str("\\\\"),
            c if c == quote_char => {
                result.push('\\');
                result.push(c);
            }
            '\n' => result.push_str("\\n"),
            '\r' => result.push_str("\\r"),
            '\t' => result.push_str("\\t"),
            c => result.push(c),
        }
    }
    result
}
