//! Name matching for include/exclude filters.
//!
//! A pattern-spec is either:
//! - empty, which matches every name,
//! - `regex:<expr>`, a regular expression that must match the whole name,
//! - a comma-separated list of shell wildcards (`*`, `?`), any of which may
//!   match.
//!
//! [`NameFilter`] holds the parsed form so a traversal compiles the spec once;
//! [`matches`] and [`matches_exclude`] are one-shot helpers on top of it.

use regex::Regex;
use tracing::debug;

const REGEX_PREFIX: &str = "regex:";

/// A parsed pattern-spec.
#[derive(Debug, Clone)]
pub enum NameFilter {
    /// Empty spec: everything matches.
    Any,
    /// Anchored regular expression. `None` when the expression did not
    /// compile, in which case nothing matches.
    Regex(Option<Regex>),
    /// Wildcard alternatives, stored as characters.
    Wildcards(Vec<Vec<char>>),
}

impl NameFilter {
    /// Parses a pattern-spec. Never fails: a malformed regex yields a filter
    /// that matches nothing.
    pub fn new(spec: &str) -> Self {
        if spec.is_empty() {
            return NameFilter::Any;
        }

        if let Some(expr) = spec.strip_prefix(REGEX_PREFIX) {
            // Validate the raw expression first so that something like `a)|(b`
            // is rejected instead of becoming valid once wrapped.
            let compiled = Regex::new(expr)
                .and_then(|_| Regex::new(&format!("^(?:{})$", expr)))
                .map_err(|e| debug!("invalid regex '{}': {}", expr, e))
                .ok();
            return NameFilter::Regex(compiled);
        }

        NameFilter::Wildcards(
            spec.split(',')
                .map(|p| p.trim_matches(|c| c == ' ' || c == '\t').chars().collect())
                .collect(),
        )
    }

    /// Returns true if `name` satisfies this filter.
    pub fn is_match(&self, name: &str) -> bool {
        match self {
            NameFilter::Any => true,
            NameFilter::Regex(Some(re)) => re.is_match(name),
            NameFilter::Regex(None) => false,
            NameFilter::Wildcards(patterns) => {
                let text: Vec<char> = name.chars().collect();
                patterns.iter().any(|p| wildcard_match(&text, p))
            }
        }
    }

    pub fn is_any(&self) -> bool {
        matches!(self, NameFilter::Any)
    }
}

/// Returns true if `name` matches the pattern-spec `spec`.
///
/// # Examples
/// ```
/// use lstree::pattern::matches;
///
/// assert!(matches("main.rs", ""));
/// assert!(matches("main.rs", "*.toml, *.rs"));
/// assert!(matches("main.rs", "regex:ma.*"));
/// assert!(!matches("main.rs", "regex:ma"));
/// ```
pub fn matches(name: &str, spec: &str) -> bool {
    NameFilter::new(spec).is_match(name)
}

/// Returns true if `name` should be dropped by the exclude spec `spec`.
/// An empty exclude spec excludes nothing.
pub fn matches_exclude(name: &str, spec: &str) -> bool {
    !spec.is_empty() && matches(name, spec)
}

/// Shell-style wildcard match of `text` against `pattern`.
///
/// `*` matches any run of characters (including none), `?` exactly one,
/// everything else itself. On a mismatch after a `*` the star is retried one
/// character further along the text.
fn wildcard_match(text: &[char], pattern: &[char]) -> bool {
    let (mut t, mut p) = (0, 0);
    let mut star: Option<usize> = None;
    let mut star_t = 0;

    while t < text.len() {
        if p < pattern.len() && (pattern[p] == '?' || pattern[p] == text[t]) {
            t += 1;
            p += 1;
        } else if p < pattern.len() && pattern[p] == '*' {
            star = Some(p);
            star_t = t;
            p += 1;
        } else if let Some(s) = star {
            p = s + 1;
            star_t += 1;
            t = star_t;
        } else {
            return false;
        }
    }

    while p < pattern.len() && pattern[p] == '*' {
        p += 1;
    }
    p == pattern.len()
}
