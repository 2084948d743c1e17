//! Column comment annotations.
//!
//! Comments may carry small directives for the generators:
//!
//! - `[@jsontag: name,omitempty]` replaces the synthesized `json` tag value
//! - `[@affix]` appends `,string` to the `json` tag (numbers as JSON strings)
//! - `[@pbtype: google.protobuf.Struct]` overrides the protobuf field type
//!
//! Extraction is pure and never fails; a missing directive is `None`/`false`.
//! When a directive appears more than once, the last one wins.

use std::sync::LazyLock;

use regex::Regex;

static JSON_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)\[@(?i:jsontag):\s*([^\[\]]*)\]").expect("jsontag pattern compiles")
});

static AFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[@(?i:affix)\s*\]").expect("affix pattern compiles"));

static PB_TYPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)\[@(?i:pbtype):\s*([^\[\]]*)\]").expect("pbtype pattern compiles")
});

static ANY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[@[^\[\]]*\]").expect("annotation pattern compiles"));

fn capture(re: &Regex, comment: &str) -> Option<String> {
    re.captures_iter(comment)
        .last()
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Value of a `[@jsontag: ...]` directive.
pub fn json_tag(comment: &str) -> Option<String> {
    capture(&JSON_TAG, comment)
}

pub fn has_affix(comment: &str) -> bool {
    AFFIX.is_match(comment)
}

/// Value of a `[@pbtype: ...]` directive.
pub fn pb_type(comment: &str) -> Option<String> {
    capture(&PB_TYPE, comment)
}

/// Comment text with every `[@...]` directive removed.
pub fn strip(comment: &str) -> String {
    let stripped = ANY.replace_all(comment, "");
    stripped
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .trim_end_matches([',', ';'])
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("11 [@jsontag: id,omitempty,string] 11, [@affix]", Some("id,omitempty,string"))]
    #[case("id [@jsontag: identifier,omitempty]", Some("identifier,omitempty"))]
    #[case("[@JsonTag:name]", Some("name"))]
    #[case("[@jsontag: ]", None)]
    #[case("[@jsontag: first] then [@jsontag: second,omitempty]", Some("second,omitempty"))]
    #[case("plain comment", None)]
    fn test_json_tag(#[case] comment: &str, #[case] expected: Option<&str>) {
        assert_eq!(json_tag(comment).as_deref(), expected);
    }

    #[rstest]
    #[case("11 [@jsontag: id] 11, [@affix]", true)]
    #[case("[@affix ]", true)]
    #[case("affix", false)]
    #[case("[@affixed]", false)]
    fn test_affix(#[case] comment: &str, #[case] expected: bool) {
        assert_eq!(has_affix(comment), expected);
    }

    #[rstest]
    fn test_pb_type() {
        assert_eq!(
            pb_type("extra [@pbtype: google.protobuf.Struct]").as_deref(),
            Some("google.protobuf.Struct")
        );
        assert_eq!(pb_type("extra"), None);
        assert_eq!(
            pb_type("[@pbtype: E.Gender] [@pbtype: E.Status]").as_deref(),
            Some("E.Status")
        );
    }

    #[rstest]
    #[case("status [@jsontag: st] [@affix]", "status")]
    #[case("0: off, 1: on, [@affix]", "0: off, 1: on")]
    #[case("[@affix]", "")]
    #[case("unchanged", "unchanged")]
    fn test_strip(#[case] comment: &str, #[case] expected: &str) {
        assert_eq!(strip(comment), expected);
    }
}
