//
//  webmate-sdk
//  api/template.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # URI Templates
//!
//! Every webmate endpoint is addressed by a path pattern containing named
//! placeholders of the form `${name}`. A [`UriTemplate`] is resolved per call
//! by substituting a mapping of placeholder name to value.
//!
//! ## Example
//!
//! ```rust
//! use webmate_sdk::api::UriTemplate;
//!
//! const GET_TEST: UriTemplate = UriTemplate::new("/testmgmt/tests/${testId}");
//!
//! let path = GET_TEST.resolve(&[("testId", "abc".to_string())])?;
//! assert_eq!(path, "/testmgmt/tests/abc");
//! # Ok::<(), webmate_sdk::api::ApiError>(())
//! ```
//!
//! ## Notes
//!
//! - Substitution is literal. Values are not escaped.
//! - Keys that the template does not reference are ignored.
//! - An unterminated `${` is kept as literal text.

use std::fmt;

use super::common::{ApiError, Result};

const OPEN: &str = "${";
const CLOSE: char = '}';

/// A path pattern with `${name}` placeholders.
///
/// Templates are `const`-constructible so resource modules can declare their
/// endpoint tables as module-level constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UriTemplate {
    template: &'static str,
}

impl UriTemplate {
    /// Creates a template from a static pattern.
    pub const fn new(template: &'static str) -> Self {
        Self { template }
    }

    /// Returns the raw pattern.
    pub fn as_str(&self) -> &'static str {
        self.template
    }

    /// Lists the placeholder names referenced by this template, in order of
    /// appearance.
    ///
    /// # Example
    ///
    /// ```rust
    /// use webmate_sdk::api::UriTemplate;
    ///
    /// let template = UriTemplate::new("/projects/${projectId}/artifacts");
    /// assert_eq!(template.placeholders(), vec!["projectId"]);
    /// ```
    pub fn placeholders(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        let mut rest = self.template;
        while let Some(start) = rest.find(OPEN) {
            let after = &rest[start + OPEN.len()..];
            match after.find(CLOSE) {
                Some(end) => {
                    names.push(&after[..end]);
                    rest = &after[end + 1..];
                }
                None => break,
            }
        }
        names
    }

    /// Resolves the template into a concrete path.
    ///
    /// # Parameters
    ///
    /// * `params` - Placeholder name to value pairs
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Template`] naming the first placeholder that has no
    /// entry in `params`.
    pub fn resolve(&self, params: &[(&str, String)]) -> Result<String> {
        let mut path = String::with_capacity(self.template.len());
        let mut rest = self.template;

        while let Some(start) = rest.find(OPEN) {
            let after = &rest[start + OPEN.len()..];
            let Some(end) = after.find(CLOSE) else {
                break;
            };

            let name = &after[..end];
            let value = params
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| value)
                .ok_or_else(|| ApiError::Template {
                    template: self.template.to_string(),
                    placeholder: name.to_string(),
                })?;

            path.push_str(&rest[..start]);
            path.push_str(value);
            rest = &after[end + 1..];
        }

        path.push_str(rest);
        Ok(path)
    }
}

impl fmt::Display for UriTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.template)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESULTS: UriTemplate = UriTemplate::new("/testmgmt/testruns/${testRunId}/results");

    #[test]
    fn test_resolve_single_placeholder() {
        let path = RESULTS.resolve(&[("testRunId", "R1".to_string())]).unwrap();
        assert_eq!(path, "/testmgmt/testruns/R1/results");
    }

    #[test]
    fn test_resolve_multiple_placeholders_any_order() {
        let template = UriTemplate::new("/a/${first}/b/${second}");
        let forward = template
            .resolve(&[("first", "1".to_string()), ("second", "2".to_string())])
            .unwrap();
        let backward = template
            .resolve(&[("second", "2".to_string()), ("first", "1".to_string())])
            .unwrap();
        assert_eq!(forward, "/a/1/b/2");
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_resolve_missing_placeholder_fails() {
        let err = RESULTS.resolve(&[("testId", "T1".to_string())]).unwrap_err();
        match err {
            ApiError::Template { template, placeholder } => {
                assert_eq!(template, RESULTS.as_str());
                assert_eq!(placeholder, "testRunId");
            }
            other => panic!("expected template error, got {other:?}"),
        }
    }

    #[test]
    fn test_resolve_ignores_unused_keys() {
        let path = RESULTS
            .resolve(&[
                ("testRunId", "R1".to_string()),
                ("projectId", "P1".to_string()),
            ])
            .unwrap();
        assert!(!path.contains("${"));
        assert!(!path.contains("P1"));
    }

    #[test]
    fn test_resolve_without_placeholders() {
        let template = UriTemplate::new("/static/path");
        assert_eq!(template.resolve(&[]).unwrap(), "/static/path");
        assert!(template.placeholders().is_empty());
    }

    #[test]
    fn test_resolve_repeated_placeholder() {
        let template = UriTemplate::new("/${id}/copy/${id}");
        let path = template.resolve(&[("id", "x".to_string())]).unwrap();
        assert_eq!(path, "/x/copy/x");
    }

    #[test]
    fn test_unterminated_placeholder_is_literal() {
        let template = UriTemplate::new("/broken/${id");
        assert_eq!(template.resolve(&[]).unwrap(), "/broken/${id");
        assert!(template.placeholders().is_empty());
    }

    #[test]
    fn test_placeholders_in_order() {
        let template = UriTemplate::new("/projects/${projectId}/tests/${testId}");
        assert_eq!(template.placeholders(), vec!["projectId", "testId"]);
    }
}
