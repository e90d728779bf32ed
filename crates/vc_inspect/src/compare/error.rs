use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use thiserror::Error;

use crate::access::AccessError;

/// A `compare` call whose arguments can never match.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UsageError {
    #[error("one or more values are null")]
    NullArgument,
    #[error("values of different types, expected `{expected}` actual `{actual}`")]
    TypeMismatch {
        expected: &'static str,
        actual: &'static str,
    },
}

/// A failed comparison.
///
/// Snapshots are the indented renderings of both sides.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Mismatch {
    #[error("expected [{expected}] but found [{actual}]")]
    Value { expected: String, actual: String },
    #[error("different sizes, expected {expected} actual {actual}")]
    Size { expected: usize, actual: usize },
    #[error("different element types, expected {expected} actual {actual}")]
    ElementType {
        expected: &'static str,
        actual: &'static str,
    },
    #[error("missing element {element}")]
    MissingElement { element: String },
    #[error(
        "fields do not match for type {type_name}: [{}] expected [{expected}] but found [{actual}]",
        FieldList(.fields)
    )]
    Fields {
        type_name: &'static str,
        fields: Vec<&'static str>,
        expected: String,
        actual: String,
    },
}

impl Mismatch {
    /// Names of the mismatched fields, empty unless this is
    /// [`Mismatch::Fields`].
    pub fn fields(&self) -> &[&'static str] {
        match self {
            Self::Fields { fields, .. } => fields,
            _ => &[],
        }
    }
}

struct FieldList<'a>(&'a [&'static str]);

impl fmt::Display for FieldList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, name) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "\"{name}\"")?;
        }
        Ok(())
    }
}

/// Error returned by [`compare`](super::compare).
///
/// The three kinds are kept apart: a [`Mismatch`] is the expected outcome of
/// a failing assertion, the other two signal a bug in the test itself.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompareError {
    #[error("comparison failed. {0}")]
    Usage(#[from] UsageError),
    #[error("comparison failed. {0}")]
    Mismatch(#[from] Mismatch),
    #[error("comparison failed. {0}")]
    Access(#[from] AccessError),
}

impl CompareError {
    #[inline]
    pub const fn is_mismatch(&self) -> bool {
        matches!(self, Self::Mismatch(_))
    }
}

#[cfg(test)]
mod tests {
    use super::{CompareError, Mismatch, UsageError};
    use alloc::string::{String, ToString};
    use alloc::vec;

    #[test]
    fn messages() {
        let err = CompareError::from(UsageError::NullArgument);
        assert_eq!(err.to_string(), "comparison failed. one or more values are null");

        let err = CompareError::from(Mismatch::Size {
            expected: 3,
            actual: 2,
        });
        assert_eq!(
            err.to_string(),
            "comparison failed. different sizes, expected 3 actual 2"
        );

        let err = CompareError::from(Mismatch::Fields {
            type_name: "Person",
            fields: vec!["name", "age"],
            expected: String::from("{}"),
            actual: String::from("{}"),
        });
        assert!(err.is_mismatch());
        assert_eq!(
            err.to_string(),
            "comparison failed. fields do not match for type Person: [\"name\", \"age\"] \
             expected [{}] but found [{}]"
        );
    }
}
