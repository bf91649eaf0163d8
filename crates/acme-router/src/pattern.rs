//! Path patterns: static segments, named `:params`, and the `:name(.*)*`
//! catch-all.
//!
//! Static segments match case-insensitively and a trailing slash is
//! ignored, so `/Home/` matches `/home`.

use std::collections::BTreeMap;
use std::fmt;

use acme_core::error::AcmeError;

/// Parameters captured by a match, keyed by name.
///
/// A catch-all captures the remaining segments joined by `/` (empty when
/// nothing remains).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteParams(BTreeMap<String, String>);

impl RouteParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Static(String),
    Param(String),
    /// Matches every remaining segment. `allow_empty` is the `*` (zero or
    /// more) form, otherwise `+` (one or more).
    CatchAll { name: String, allow_empty: bool },
}

/// A parsed route path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
    raw: String,
    segments: Vec<Segment>,
}

impl PathPattern {
    /// Parse a pattern such as `/home`, `/courses/:id`, or `/:pathMatch(.*)*`.
    pub fn parse(raw: &str) -> Result<Self, AcmeError> {
        let Some(rest) = raw.strip_prefix('/') else {
            return Err(AcmeError::Route(format!(
                "path '{raw}' must start with '/'"
            )));
        };

        let parts: Vec<&str> = rest.split('/').filter(|s| !s.is_empty()).collect();
        let mut segments = Vec::with_capacity(parts.len());
        for (i, part) in parts.iter().enumerate() {
            let segment = parse_segment(raw, part)?;
            if matches!(segment, Segment::CatchAll { .. }) && i + 1 != parts.len() {
                return Err(AcmeError::Route(format!(
                    "path '{raw}': catch-all must be the last segment"
                )));
            }
            segments.push(segment);
        }

        Ok(Self {
            raw: raw.to_string(),
            segments,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Whether the pattern matches every path, `/` included. Only a lone
    /// zero-or-more catch-all such as `/:pathMatch(.*)*` qualifies.
    pub fn matches_everything(&self) -> bool {
        matches!(
            self.segments.as_slice(),
            [Segment::CatchAll {
                allow_empty: true,
                ..
            }]
        )
    }

    /// Whether the pattern has no parameters.
    pub fn is_static(&self) -> bool {
        self.segments
            .iter()
            .all(|s| matches!(s, Segment::Static(_)))
    }

    /// Match an app-relative path (no query or hash).
    pub fn matches(&self, path: &str) -> Option<RouteParams> {
        let parts: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        let mut params = RouteParams::new();

        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                Segment::Static(expected) => {
                    let actual = parts.get(i)?;
                    if !actual.eq_ignore_ascii_case(expected) {
                        return None;
                    }
                }
                Segment::Param(name) => {
                    let actual = parts.get(i)?;
                    params.insert(name.as_str(), *actual);
                }
                Segment::CatchAll { name, allow_empty } => {
                    let rest = parts.get(i..).unwrap_or_default();
                    if rest.is_empty() && !allow_empty {
                        return None;
                    }
                    params.insert(name.as_str(), rest.join("/"));
                    return Some(params);
                }
            }
        }

        (parts.len() == self.segments.len()).then_some(params)
    }

    /// Build a concrete path from this pattern and `params`.
    pub fn build(&self, params: &RouteParams) -> Result<String, AcmeError> {
        let mut out = String::new();
        for segment in &self.segments {
            let value = match segment {
                Segment::Static(s) => s.as_str(),
                Segment::Param(name) | Segment::CatchAll { name, .. } => {
                    params.get(name).ok_or_else(|| {
                        AcmeError::Route(format!(
                            "path '{}': missing param '{name}'",
                            self.raw
                        ))
                    })?
                }
            };
            if value.is_empty() {
                continue;
            }
            out.push('/');
            out.push_str(value);
        }
        if out.is_empty() {
            out.push('/');
        }
        Ok(out)
    }
}

impl fmt::Display for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

fn parse_segment(raw: &str, part: &str) -> Result<Segment, AcmeError> {
    let Some(param) = part.strip_prefix(':') else {
        return Ok(Segment::Static(part.to_string()));
    };

    let (name, regex) = match param.split_once('(') {
        Some((name, rest)) => (name, Some(rest)),
        None => (param, None),
    };
    if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(AcmeError::Route(format!(
            "path '{raw}': invalid param name in '{part}'"
        )));
    }

    match regex {
        None => Ok(Segment::Param(name.to_string())),
        Some(".*)*") => Ok(Segment::CatchAll {
            name: name.to_string(),
            allow_empty: true,
        }),
        Some(".*)+") => Ok(Segment::CatchAll {
            name: name.to_string(),
            allow_empty: false,
        }),
        Some(_) => Err(AcmeError::Route(format!(
            "path '{raw}': unsupported param pattern '{part}'"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_pattern() {
        let p = PathPattern::parse("/home").unwrap();
        assert!(p.is_static());
        assert!(!p.matches_everything());
        assert!(p.matches("/home").is_some());
        assert!(p.matches("/home/").is_some());
        assert!(p.matches("/HOME").is_some());
        assert!(p.matches("/home/extra").is_none());
        assert!(p.matches("/").is_none());
        assert!(p.matches("/homes").is_none());
    }

    #[test]
    fn test_root_pattern_matches_only_root() {
        let p = PathPattern::parse("/").unwrap();
        assert!(p.matches("/").is_some());
        assert!(p.matches("").is_some());
        assert!(p.matches("/home").is_none());
    }

    #[test]
    fn test_named_param_is_captured() {
        let p = PathPattern::parse("/courses/:id").unwrap();
        let params = p.matches("/courses/rust-101").unwrap();
        assert_eq!(params.get("id"), Some("rust-101"));
        assert!(p.matches("/courses").is_none());
        assert!(p.matches("/courses/a/b").is_none());
    }

    #[test]
    fn test_catch_all_matches_everything() {
        let p = PathPattern::parse("/:pathMatch(.*)*").unwrap();
        assert!(p.matches_everything());
        assert_eq!(p.matches("/").unwrap().get("pathMatch"), Some(""));
        assert_eq!(
            p.matches("/a/b/c").unwrap().get("pathMatch"),
            Some("a/b/c")
        );
    }

    #[test]
    fn test_only_a_lone_zero_or_more_catch_all_matches_everything() {
        assert!(PathPattern::parse("/:pathMatch(.*)*")
            .unwrap()
            .matches_everything());
        assert!(!PathPattern::parse("/:x(.*)+").unwrap().matches_everything());
        assert!(!PathPattern::parse("/docs/:rest(.*)*")
            .unwrap()
            .matches_everything());
        assert!(!PathPattern::parse("/home").unwrap().matches_everything());
    }

    #[test]
    fn test_one_or_more_catch_all_needs_a_segment() {
        let p = PathPattern::parse("/docs/:rest(.*)+").unwrap();
        assert!(p.matches("/docs").is_none());
        assert_eq!(p.matches("/docs/x/y").unwrap().get("rest"), Some("x/y"));
    }

    #[test]
    fn test_parse_errors() {
        assert!(PathPattern::parse("home").is_err());
        assert!(PathPattern::parse("/:").is_err());
        assert!(PathPattern::parse("/:id(\\d+)").is_err());
        assert!(PathPattern::parse("/:all(.*)*/tail").is_err());
    }

    #[test]
    fn test_build_from_params() {
        let p = PathPattern::parse("/courses/:id").unwrap();
        let mut params = RouteParams::new();
        params.insert("id", "42");
        assert_eq!(p.build(&params).unwrap(), "/courses/42");
        assert!(p.build(&RouteParams::new()).is_err());

        let root = PathPattern::parse("/").unwrap();
        assert_eq!(root.build(&RouteParams::new()).unwrap(), "/");
    }
}
