pub use syswrap_runtime::DEFAULT_SEARCH_PATTERN;

/// How far an enumeration descends below the directory it starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SearchOption {
    /// Immediate children only.
    #[default]
    TopDirectoryOnly,
    /// Every descendant. Results come back in no particular order.
    AllDirectories,
}

impl SearchOption {
    #[inline]
    pub fn is_recursive(self) -> bool {
        matches!(self, Self::AllDirectories)
    }
}

impl From<bool> for SearchOption {
    /// `true` means recursive.
    fn from(recursive: bool) -> Self {
        if recursive {
            Self::AllDirectories
        } else {
            Self::TopDirectoryOnly
        }
    }
}
