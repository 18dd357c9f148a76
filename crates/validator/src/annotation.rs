//! Annotation grammar
//!
//! A field annotation is a comma-separated string whose first token picks
//! the constraint kind:
//!
//! ```text
//! string[,min=<int>][,max=<int>]
//! number[,min=<float>][,max=<float>]
//! regex,<pattern>
//! email
//! ```
//!
//! Any other kind parses to [`ConstraintSpec::AlwaysValid`]. The empty
//! annotation and the sentinel [`SKIP`] are handled by the schema, which
//! never registers such fields.

use std::fmt;

use crate::config::MalformedPolicy;
use crate::foundation::AnnotationError;

/// Annotation that disables validation of a field.
pub const SKIP: &str = "-";

// ============================================================================
// CONSTRAINT KIND
// ============================================================================

/// The kind token of an annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstraintKind {
    /// `string`: length in characters.
    String,
    /// `number`: numeric range.
    Number,
    /// `regex`: full-string pattern.
    Regex,
    /// `email`: fixed address grammar.
    Email,
    /// Anything else.
    Unrecognized,
}

impl ConstraintKind {
    /// Maps a kind token to its kind.
    #[must_use]
    pub fn from_token(token: &str) -> Self {
        match token {
            "string" => Self::String,
            "number" => Self::Number,
            "regex" => Self::Regex,
            "email" => Self::Email,
            _ => Self::Unrecognized,
        }
    }

    /// The kind token as written in annotations.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Regex => "regex",
            Self::Email => "email",
            Self::Unrecognized => "unrecognized",
        }
    }
}

impl fmt::Display for ConstraintKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// CONSTRAINT SPEC
// ============================================================================

/// Parsed form of one annotation.
///
/// An absent bound is `0`, except that `max` is `None` when no bound is
/// given at all, which leaves the upper side unconstrained. A `max` below
/// `min` is ignored at check time, so `string,min=3` has no upper bound
/// while `number,min=-5` caps at `0`.
#[derive(Debug, Clone, PartialEq)]
pub enum ConstraintSpec {
    /// No constraint.
    AlwaysValid,
    /// Length of text in characters.
    Length {
        /// Minimum length.
        min: usize,
        /// Maximum length.
        max: Option<usize>,
    },
    /// Numeric range.
    Range {
        /// Lower bound (inclusive).
        min: f64,
        /// Upper bound (inclusive).
        max: Option<f64>,
    },
    /// Full-string regular expression, verbatim.
    Pattern(String),
    /// Email address.
    Email,
}

impl ConstraintSpec {
    /// Parses an annotation.
    ///
    /// Unrecognized kinds are not an error; they yield
    /// [`ConstraintSpec::AlwaysValid`]. The pattern of a `regex`
    /// annotation is not compiled here.
    ///
    /// # Examples
    ///
    /// ```
    /// use fieldcheck::annotation::ConstraintSpec;
    ///
    /// assert_eq!(
    ///     ConstraintSpec::parse("string,min=1,max=20"),
    ///     Ok(ConstraintSpec::Length { min: 1, max: Some(20) })
    /// );
    /// assert_eq!(
    ///     ConstraintSpec::parse("regex,^[a-z]+(,[a-z]+)*$"),
    ///     Ok(ConstraintSpec::Pattern("^[a-z]+(,[a-z]+)*$".into()))
    /// );
    /// assert_eq!(ConstraintSpec::parse("uuid"), Ok(ConstraintSpec::AlwaysValid));
    /// assert!(ConstraintSpec::parse("number,between=1").is_err());
    /// ```
    pub fn parse(annotation: &str) -> Result<Self, AnnotationError> {
        Self::parse_with(annotation, MalformedPolicy::Degrade)
    }

    /// Parses an annotation under a malformed-annotation policy.
    ///
    /// The policy only matters for faults that leave the kind usable:
    /// parameters after `email` are ignored with a warning under
    /// [`MalformedPolicy::Degrade`] and rejected under
    /// [`MalformedPolicy::Reject`]. Bound and pattern faults are errors
    /// under both.
    ///
    /// ```
    /// use fieldcheck::annotation::ConstraintSpec;
    /// use fieldcheck::config::MalformedPolicy;
    ///
    /// assert_eq!(
    ///     ConstraintSpec::parse_with("email,required", MalformedPolicy::Degrade),
    ///     Ok(ConstraintSpec::Email)
    /// );
    /// assert!(ConstraintSpec::parse_with("email,required", MalformedPolicy::Reject).is_err());
    /// ```
    pub fn parse_with(annotation: &str, policy: MalformedPolicy) -> Result<Self, AnnotationError> {
        let (kind_token, rest) = match annotation.split_once(',') {
            Some((kind, rest)) => (kind, Some(rest)),
            None => (annotation, None),
        };
        let kind_token = kind_token.trim();
        if kind_token.is_empty() {
            return Err(AnnotationError::Empty);
        }

        match ConstraintKind::from_token(kind_token) {
            ConstraintKind::String => {
                let (min, max) = parse_bounds(ConstraintKind::String, rest, parse_count)?;
                Ok(Self::Length {
                    min: min.unwrap_or(0),
                    max,
                })
            }
            ConstraintKind::Number => {
                let (min, max) = parse_bounds(ConstraintKind::Number, rest, parse_float)?;
                Ok(Self::Range {
                    min: min.unwrap_or(0.0),
                    max,
                })
            }
            ConstraintKind::Regex => match rest {
                Some(pattern) if !pattern.is_empty() => Ok(Self::Pattern(pattern.to_owned())),
                _ => Err(AnnotationError::MissingPattern),
            },
            ConstraintKind::Email => match (rest, policy) {
                (None, _) => Ok(Self::Email),
                (Some(params), MalformedPolicy::Reject) => {
                    Err(AnnotationError::UnexpectedParameters {
                        params: params.to_owned(),
                    })
                }
                (Some(params), MalformedPolicy::Degrade) => {
                    tracing::warn!(annotation, params, "`email` takes no parameters, ignoring them");
                    Ok(Self::Email)
                }
            },
            ConstraintKind::Unrecognized => Ok(Self::AlwaysValid),
        }
    }

    /// The kind this spec was parsed from.
    #[must_use]
    pub fn kind(&self) -> ConstraintKind {
        match self {
            Self::AlwaysValid => ConstraintKind::Unrecognized,
            Self::Length { .. } => ConstraintKind::String,
            Self::Range { .. } => ConstraintKind::Number,
            Self::Pattern(_) => ConstraintKind::Regex,
            Self::Email => ConstraintKind::Email,
        }
    }
}

// ============================================================================
// BOUNDS
// ============================================================================

type Bounds<T> = (Option<T>, Option<T>);

fn parse_bounds<T: Default>(
    kind: ConstraintKind,
    rest: Option<&str>,
    parse_value: fn(&'static str, &str) -> Result<T, AnnotationError>,
) -> Result<Bounds<T>, AnnotationError> {
    let Some(rest) = rest else {
        return Ok((None, None));
    };

    let tokens: Vec<&str> = rest.split(',').collect();
    if tokens.len() > 2 {
        return Err(AnnotationError::TooManyBounds {
            kind: kind.as_str(),
            found: tokens.len(),
        });
    }

    let mut min = None;
    let mut max = None;
    for token in tokens {
        let token = token.trim();
        let (key, raw) = token
            .split_once('=')
            .map_or((token, ""), |(key, raw)| (key.trim(), raw.trim()));

        let slot = match key {
            "min" => &mut min,
            "max" => &mut max,
            _ => {
                return Err(AnnotationError::UnknownBound {
                    kind: kind.as_str(),
                    token: token.to_owned(),
                });
            }
        };
        let key = if key == "min" { "min" } else { "max" };
        if slot.is_some() {
            return Err(AnnotationError::DuplicateBound { key });
        }
        *slot = Some(parse_value(key, raw)?);
    }

    Ok((min, Some(max.unwrap_or_default())))
}

fn parse_count(key: &'static str, raw: &str) -> Result<usize, AnnotationError> {
    raw.parse().map_err(|_| AnnotationError::InvalidBound {
        key,
        value: raw.to_owned(),
    })
}

fn parse_float(key: &'static str, raw: &str) -> Result<f64, AnnotationError> {
    raw.parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| AnnotationError::InvalidBound {
            key,
            value: raw.to_owned(),
        })
}

// ============================================================================
// TESTS
// ============================================================================
