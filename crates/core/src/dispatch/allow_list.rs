//! Allow-list of request kinds.

use std::collections::HashSet;

use fxroute_shared::RequestKind;

/// Immutable set of request kinds a dispatch filter classifies.
///
/// An empty list places no restriction. Kinds that match no real request
/// are accepted and simply never match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllowList {
    kinds: HashSet<RequestKind>,
}

impl AllowList {
    /// Creates a list from the given kinds.
    #[must_use]
    pub fn new(kinds: impl IntoIterator<Item = RequestKind>) -> Self {
        Self {
            kinds: kinds.into_iter().collect(),
        }
    }

    /// Creates a list that permits every kind.
    #[must_use]
    pub fn unrestricted() -> Self {
        Self::default()
    }

    /// Returns true if no kind was listed.
    #[must_use]
    pub fn is_unrestricted(&self) -> bool {
        self.kinds.is_empty()
    }

    /// Returns true if requests of `kind` pass the gate.
    #[must_use]
    pub fn permits(&self, kind: &RequestKind) -> bool {
        self.kinds.is_empty() || self.kinds.contains(kind)
    }

    /// Number of distinct listed kinds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    /// Same as [`AllowList::is_unrestricted`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}

impl FromIterator<RequestKind> for AllowList {
    fn from_iter<I: IntoIterator<Item = RequestKind>>(iter: I) -> Self {
        Self::new(iter)
    }
}
