/// Typed path-segment converters
///
/// A converter is the bidirectional contract between one raw URL path
/// segment and a typed value: a regex gate on the way in, a canonical
/// string rendering on the way out. All functions are **pure**.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// Anchored pattern for `int` segments: one or more ASCII digits.
static INT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+$").expect("int segment regex"));

/// Anchored pattern for `float` segments.
///
/// Accepts an optional sign, then either digits with an optional
/// fractional part (`12`, `12.`, `12.5`) or a bare fractional part
/// (`.5`).
static FLOAT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?([0-9]+([.][0-9]*)?|[.][0-9]+)$").expect("float segment regex"));

/// Anchored pattern for `str` segments: anything without a slash.
static STR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^/]+$").expect("str segment regex"));

/// A value extracted from one path segment
///
/// Sum type over the three converter kinds. Matching a route produces
/// one `SegmentValue` per dynamic segment; URL generation consumes
/// them back through [`Converter::to_url`].
#[derive(Debug, Clone, PartialEq)]
pub enum SegmentValue {
    Str(String),
    Int(i64),
    Float(f64),
}

impl SegmentValue {
    /// Returns the string payload, if this is a `Str` value
    pub fn as_str(&self) -> Option<&str> {
        match self {
            SegmentValue::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the integer payload, if this is an `Int` value
    pub fn as_int(&self) -> Option<i64> {
        match self {
            SegmentValue::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the float payload; `Int` widens to `f64`
    pub fn as_float(&self) -> Option<f64> {
        match self {
            SegmentValue::Float(f) => Some(*f),
            SegmentValue::Int(n) => Some(*n as f64),
            _ => None,
        }
    }
}

impl fmt::Display for SegmentValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SegmentValue::Str(s) => write!(f, "{}", s),
            SegmentValue::Int(n) => write!(f, "{}", n),
            SegmentValue::Float(x) => write!(f, "{}", x),
        }
    }
}

/// Converter kind for one dynamic path segment
///
/// `Str` is the default when a pattern parameter names no converter.
///
/// # Examples
///
/// ```
/// use farecast_router::convert::{Converter, SegmentValue};
///
/// assert_eq!(Converter::Int.parse("30"), Some(SegmentValue::Int(30)));
/// assert_eq!(Converter::Float.parse("-0.5"), Some(SegmentValue::Float(-0.5)));
/// assert_eq!(Converter::Float.parse("abc"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Converter {
    /// Any non-empty segment without a slash (default)
    Str,
    /// Unsigned decimal digits, parsed as `i64`
    Int,
    /// Signed decimal number, parsed as `f64`, rendered with two decimals
    Float,
}

impl Converter {
    /// Looks up a converter by the name used in route patterns
    ///
    /// Returns `None` for unknown names so registration can reject the
    /// pattern instead of silently treating it as `str`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "str" => Some(Converter::Str),
            "int" => Some(Converter::Int),
            "float" => Some(Converter::Float),
            _ => None,
        }
    }

    /// Pattern name of this converter
    pub fn name(&self) -> &'static str {
        match self {
            Converter::Str => "str",
            Converter::Int => "int",
            Converter::Float => "float",
        }
    }

    /// Checks whether a raw segment passes this converter's regex
    ///
    /// Full-segment match: the regexes are anchored at both ends.
    pub fn matches(&self, segment: &str) -> bool {
        match self {
            Converter::Str => STR_RE.is_match(segment),
            Converter::Int => INT_RE.is_match(segment),
            Converter::Float => FLOAT_RE.is_match(segment),
        }
    }

    /// Parses a raw segment into a typed value
    ///
    /// Regex pre-match first, then the numeric parse. After the regex
    /// accepts a segment the parse itself cannot fail, with one
    /// exception: an `int` segment whose digits overflow `i64` is
    /// treated as a non-match.
    ///
    /// # Examples
    ///
    /// ```
    /// use farecast_router::convert::{Converter, SegmentValue};
    ///
    /// assert_eq!(Converter::Float.parse("3.14159"), Some(SegmentValue::Float(3.14159)));
    /// assert_eq!(Converter::Float.parse("12"), Some(SegmentValue::Float(12.0)));
    /// assert_eq!(Converter::Int.parse("12.5"), None);
    /// ```
    pub fn parse(&self, segment: &str) -> Option<SegmentValue> {
        if !self.matches(segment) {
            return None;
        }
        match self {
            Converter::Str => Some(SegmentValue::Str(segment.to_string())),
            Converter::Int => segment.parse::<i64>().ok().map(SegmentValue::Int),
            Converter::Float => segment.parse::<f64>().ok().map(SegmentValue::Float),
        }
    }

    /// Renders a typed value back into a path segment
    ///
    /// Inverse of [`parse`](Self::parse), used by URL generation.
    /// Floats always come back with exactly two digits after the
    /// decimal point; an `Int` value widens for a `float` segment.
    /// Returns `None` when the value kind does not fit this converter.
    ///
    /// # Examples
    ///
    /// ```
    /// use farecast_router::convert::{Converter, SegmentValue};
    ///
    /// let url = Converter::Float.to_url(&SegmentValue::Float(3.14159));
    /// assert_eq!(url, Some("3.14".to_string()));
    ///
    /// let url = Converter::Float.to_url(&SegmentValue::Int(12));
    /// assert_eq!(url, Some("12.00".to_string()));
    /// ```
    pub fn to_url(&self, value: &SegmentValue) -> Option<String> {
        match (self, value) {
            (Converter::Str, SegmentValue::Str(s)) => Some(s.clone()),
            (Converter::Str, other) => Some(other.to_string()),
            (Converter::Int, SegmentValue::Int(n)) => Some(n.to_string()),
            (Converter::Float, value) => value.as_float().map(|f| format!("{:.2}", f)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("12", 12.0)]
    #[case("12.", 12.0)]
    #[case(".5", 0.5)]
    #[case("3.14159", 3.14159)]
    #[case("-0.5", -0.5)]
    #[case("+7.25", 7.25)]
    fn test_float_parses_matching_segments(#[case] raw: &str, #[case] expected: f64) {
        assert_eq!(Converter::Float.parse(raw), Some(SegmentValue::Float(expected)));
    }

    #[rstest]
    #[case("abc")]
    #[case("")]
    #[case(".")]
    #[case("+")]
    #[case("1.2.3")]
    #[case("1e5")]
    fn test_float_rejects_non_matching_segments(#[case] raw: &str) {
        assert!(!Converter::Float.matches(raw));
        assert_eq!(Converter::Float.parse(raw), None);
    }

    #[rstest]
    #[case(12.0, "12.00")]
    #[case(3.14159, "3.14")]
    #[case(-0.5, "-0.50")]
    #[case(0.0, "0.00")]
    fn test_float_serializes_with_two_decimals(#[case] value: f64, #[case] expected: &str) {
        assert_eq!(
            Converter::Float.to_url(&SegmentValue::Float(value)),
            Some(expected.to_string())
        );
    }

    #[test]
    fn test_float_round_trip_is_deterministic() {
        // "12" -> 12.0 -> "12.00"
        let parsed = Converter::Float.parse("12").unwrap();
        assert_eq!(parsed, SegmentValue::Float(12.0));
        assert_eq!(Converter::Float.to_url(&parsed), Some("12.00".to_string()));
    }

    #[test]
    fn test_int_parses_digits_only() {
        assert_eq!(Converter::Int.parse("30"), Some(SegmentValue::Int(30)));
        assert_eq!(Converter::Int.parse("-5"), None);
        assert_eq!(Converter::Int.parse("12.5"), None);
    }

    #[test]
    fn test_int_overflow_is_a_non_match() {
        // 20 digits, past i64::MAX
        assert_eq!(Converter::Int.parse("99999999999999999999"), None);
    }

    #[test]
    fn test_str_accepts_anything_without_slash() {
        assert_eq!(
            Converter::Str.parse("hello-world"),
            Some(SegmentValue::Str("hello-world".to_string()))
        );
        assert_eq!(Converter::Str.parse(""), None);
    }

    #[test]
    fn test_converter_names_round_trip() {
        for conv in [Converter::Str, Converter::Int, Converter::Float] {
            assert_eq!(Converter::from_name(conv.name()), Some(conv));
        }
        assert_eq!(Converter::from_name("uuid"), None);
    }
}
