//! Vertex identity: [`OwnerId`], [`VertexId`] and [`Vertex`].
//!
//! Every builder allocates a fresh [`OwnerId`] and stamps it into each
//! [`VertexId`] it hands out, so a container can tell its own vertices from
//! vertices belonging to another container with the same indices.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique [`OwnerId`] allocation.
static OWNER_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Process-unique identifier of the container a vertex belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OwnerId(u64);

impl OwnerId {
    /// Allocate a fresh, unique owner ID. Thread-safe.
    pub fn next() -> Self {
        Self(OWNER_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for OwnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identity of a vertex: its container plus its insertion index.
///
/// Indices are assigned sequentially from 0 in insertion order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VertexId {
    owner: OwnerId,
    index: usize,
}

impl VertexId {
    #[inline]
    pub(crate) const fn new(owner: OwnerId, index: usize) -> Self {
        Self { owner, index }
    }

    /// Sequential insertion index within the owning container.
    #[inline]
    pub const fn index(self) -> usize {
        self.index
    }

    /// The container this vertex was created by.
    #[inline]
    pub const fn owner(self) -> OwnerId {
        self.owner
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.index)
    }
}

/// A value paired with an identity.
///
/// Two vertices are equal iff their identities are equal; the value takes no
/// part in equality or hashing.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vertex<T> {
    id: VertexId,
    value: T,
}

impl<T> Vertex<T> {
    #[inline]
    pub(crate) const fn new(id: VertexId, value: T) -> Self {
        Self { id, value }
    }

    #[inline]
    pub fn id(&self) -> VertexId {
        self.id
    }

    #[inline]
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Shorthand for `self.id().index()`.
    #[inline]
    pub fn index(&self) -> usize {
        self.id.index
    }
}

impl<T> PartialEq for Vertex<T> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<T> Eq for Vertex<T> {}

impl<T> Hash for Vertex<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl<T: fmt::Display> fmt::Display for Vertex<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}
