use core::fmt;

/// The category of an immutable leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LeafKind {
    Str,
    Char,
    Bool,
    Integer,
    Float,
    Decimal,
    Temporal,
}

/// The structural category of a value.
///
/// Classification depends only on the runtime type, with one exception that
/// mirrors nullable references: an empty [`Option`], a dangling weak pointer
/// or a cell that cannot currently be read classify as [`Classification::Null`].
///
/// ## Priority
///
/// null, leaf, sequence, associative, array, then composite.
///
/// ## Example
///
/// ```
/// use vc_inspect::Inspect;
/// use vc_inspect::info::{Classification, LeafKind};
///
/// assert_eq!(7_u8.classify(), Classification::Leaf(LeafKind::Integer));
/// assert_eq!(None::<u8>.classify(), Classification::Null);
/// assert_eq!(vec![1, 2].classify(), Classification::Sequence);
/// assert_eq!([1, 2].classify(), Classification::Array);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    Null,
    Leaf(LeafKind),
    Sequence,
    Associative,
    Array,
    Composite,
}

impl Classification {
    #[inline]
    pub const fn is_null(self) -> bool {
        matches!(self, Self::Null)
    }

    #[inline]
    pub const fn is_leaf(self) -> bool {
        matches!(self, Self::Leaf(_))
    }

    /// Returns `true` for sequences, associative containers and arrays.
    #[inline]
    pub const fn is_container(self) -> bool {
        matches!(self, Self::Sequence | Self::Associative | Self::Array)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Leaf(_) => "leaf",
            Self::Sequence => "sequence",
            Self::Associative => "associative",
            Self::Array => "array",
            Self::Composite => "composite",
        }
    }
}

impl fmt::Display for Classification {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A value without content.
///
/// Stands in for the target of a dangling pointer, and can be passed where a
/// null argument is needed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Absent;
