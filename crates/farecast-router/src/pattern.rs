/// Pattern parsing for route segments
///
/// Pure functional parsing of route patterns like
/// `/results/{ticket:int}/{fare:float}` into typed segments.
/// All functions are **pure**: same input → same output, no side effects.

use crate::convert::Converter;
use std::error::Error;
use std::fmt;

/// Represents one parsed segment of a route pattern
///
/// # Examples
///
/// ```
/// use farecast_router::pattern::{classify_segment, PatternSegment};
/// use farecast_router::convert::Converter;
///
/// // Static segment
/// let seg = classify_segment("results").unwrap();
/// assert_eq!(seg, PatternSegment::Static("results".to_string()));
///
/// // Parameter with the default converter
/// let seg = classify_segment("{slug}").unwrap();
/// assert!(matches!(seg, PatternSegment::Param { .. }));
///
/// // Parameter with a named converter
/// let seg = classify_segment("{fare:float}").unwrap();
/// assert_eq!(
///     seg,
///     PatternSegment::Param { name: "fare".to_string(), converter: Converter::Float }
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum PatternSegment {
    /// Static text segment, compared literally
    Static(String),
    /// Dynamic segment: `{name}` or `{name:converter}`
    Param { name: String, converter: Converter },
}

/// Error rejecting a malformed route pattern at registration time
#[derive(Debug, Clone, PartialEq)]
pub enum PatternError {
    /// `{name:kind}` named a converter this router does not know
    UnknownConverter { segment: String, converter: String },
    /// `{}` or `{:int}` — a parameter needs a name
    EmptyParamName { segment: String },
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternError::UnknownConverter { segment, converter } => {
                write!(f, "unknown converter '{}' in segment '{}'", converter, segment)
            }
            PatternError::EmptyParamName { segment } => {
                write!(f, "missing parameter name in segment '{}'", segment)
            }
        }
    }
}

impl Error for PatternError {}

/// Classifies a pattern segment (pure function)
///
/// # Parsing Rules
///
/// 1. `{name:converter}` — dynamic segment with a named converter
/// 2. `{name}` — dynamic segment, default `str` converter
/// 3. anything else — static text
///
/// Unknown converter names and empty parameter names are rejected so
/// the mistake surfaces when the route is registered, not when the
/// first request fails to match.
pub fn classify_segment(segment: &str) -> Result<PatternSegment, PatternError> {
    match segment.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
        Some(inner) => {
            let (name, converter) = match inner.split_once(':') {
                Some((name, conv_name)) => {
                    let converter = Converter::from_name(conv_name).ok_or_else(|| {
                        PatternError::UnknownConverter {
                            segment: segment.to_string(),
                            converter: conv_name.to_string(),
                        }
                    })?;
                    (name, converter)
                }
                None => (inner, Converter::Str),
            };
            if name.is_empty() {
                return Err(PatternError::EmptyParamName {
                    segment: segment.to_string(),
                });
            }
            Ok(PatternSegment::Param {
                name: name.to_string(),
                converter,
            })
        }
        None => Ok(PatternSegment::Static(segment.to_string())),
    }
}

/// Parses a full route pattern into segments (pure function)
///
/// Empty segments are skipped, so `/homePost/` and `/homePost` parse
/// identically.
///
/// # Examples
///
/// ```
/// use farecast_router::pattern::parse_pattern;
///
/// let segments = parse_pattern("/results/{ticket:int}/{fare:float}").unwrap();
/// assert_eq!(segments.len(), 3);
/// ```
pub fn parse_pattern(pattern: &str) -> Result<Vec<PatternSegment>, PatternError> {
    pattern
        .split('/')
        .filter(|s| !s.is_empty())
        .map(classify_segment)
        .collect()
}
