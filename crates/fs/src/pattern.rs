use globset::{GlobBuilder, GlobMatcher};
use syswrap_interface::{FsError, FsResult};

/// Case folding follows the platform's usual filesystem behaviour.
const CASE_INSENSITIVE: bool = cfg!(any(windows, target_os = "macos"));

const MATCH_ALL_DOTTED: &str = "*.*";

/// Search pattern matched against entry names.
///
/// `*` matches any run of characters and `?` exactly one; everything else,
/// including `[`, `]`, `{`, `}` and `\`, is literal. `*.*` matches every
/// name, dotted or not.
#[derive(Debug, Clone)]
pub struct NamePattern {
    raw: String,
    matcher: GlobMatcher,
}

impl NamePattern {
    pub fn new(pattern: &str) -> FsResult<Self> {
        if pattern.chars().any(std::path::is_separator) {
            return Err(FsError::InvalidPattern {
                pattern: pattern.to_owned(),
                details: "patterns match names only and cannot contain a path separator"
                    .to_owned(),
            });
        }

        let effective = if pattern == MATCH_ALL_DOTTED { "*" } else { pattern };
        let glob = GlobBuilder::new(&escape_literals(effective))
            .literal_separator(true)
            .backslash_escape(false)
            .case_insensitive(CASE_INSENSITIVE)
            .build()
            .map_err(|e| FsError::InvalidPattern {
                pattern: pattern.to_owned(),
                details: e.to_string(),
            })?;

        Ok(Self {
            raw: pattern.to_owned(),
            matcher: glob.compile_matcher(),
        })
    }

    #[inline]
    pub fn is_match(&self, name: &str) -> bool {
        self.matcher.is_match(name)
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

/// Wrap glob metacharacters other than `*` and `?` in single-character
/// classes so globset treats them literally.
fn escape_literals(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len());
    for c in pattern.chars() {
        match c {
            '[' | ']' | '{' | '}' => {
                out.push('[');
                out.push(c);
                out.push(']');
            }
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "pattern_tests.rs"]
mod tests;
