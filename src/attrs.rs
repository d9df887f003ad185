//! Attribute sets and primitive set algebra
//!
//! Attributes are single characters, the smallest token the compact
//! notation can carry; the aliases here are the one place to widen that.
//! `BTreeSet` gives value semantics and sorted iteration, so renderings
//! and tableau columns come out in a stable order without extra sorting.

use std::collections::BTreeSet;

/// A single attribute (column name).
pub type Attr = char;

/// An unordered, duplicate-free collection of attributes.
pub type AttrSet = BTreeSet<Attr>;

/// Union of two attribute sets.
pub fn union(a: &AttrSet, b: &AttrSet) -> AttrSet {
    a.union(b).copied().collect()
}

/// Intersection of two attribute sets.
pub fn intersect(a: &AttrSet, b: &AttrSet) -> AttrSet {
    a.intersection(b).copied().collect()
}

/// Elements of `a` that are not in `b`.
pub fn difference(a: &AttrSet, b: &AttrSet) -> AttrSet {
    a.difference(b).copied().collect()
}

/// Parse attribute text: every non-whitespace character is one attribute.
pub fn parse_attrs(text: &str) -> AttrSet {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Render an attribute set as concatenated characters in sorted order.
pub fn render_attrs(attrs: &AttrSet) -> String {
    attrs.iter().collect()
}
