//! Functional dependencies
//!
//! A functional dependency `X -> Y` states that the values of the
//! attributes in `X` uniquely determine the values of those in `Y`.
//! Dependencies are immutable values with structural equality.

use crate::attrs::{parse_attrs, render_attrs, AttrSet};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A functional dependency: determinant `from`, dependent `to`.
///
/// Relations store these with singleton dependents only; see
/// [`Relation::add_fd`](crate::Relation::add_fd) for the split.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FunctionDependency {
    /// Determinant attributes (left side).
    pub from: AttrSet,
    /// Dependent attributes (right side).
    pub to: AttrSet,
}

impl FunctionDependency {
    /// Create a dependency from explicit attribute sets.
    pub fn new(from: AttrSet, to: AttrSet) -> Self {
        FunctionDependency { from, to }
    }

    /// Parse the compact `"AB->C"` notation.
    ///
    /// The text before the first `"->"` is the determinant, the text
    /// after it the dependent; each non-whitespace character is one
    /// attribute. A token without an arrow, or with an empty determinant
    /// or dependent, is rejected.
    pub fn parse(text: &str) -> Result<Self> {
        let Some((from, to)) = text.split_once("->") else {
            return Err(Error::MalformedDependency(text.to_string()));
        };
        let from = parse_attrs(from);
        let to = parse_attrs(to);
        if from.is_empty() || to.is_empty() {
            return Err(Error::MalformedDependency(text.to_string()));
        }
        Ok(FunctionDependency { from, to })
    }

    /// A dependency is trivial when it derives nothing new: `to ⊆ from`.
    pub fn is_trivial(&self) -> bool {
        self.to.is_subset(&self.from)
    }
}

impl fmt::Display for FunctionDependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", render_attrs(&self.from), render_attrs(&self.to))
    }
}
