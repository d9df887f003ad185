//! Relations and their normalization queries
//!
//! A [`Relation`] owns a property (attribute) set and a normalized
//! dependency set: every stored FD has exactly one dependent attribute
//! (`X->YZ` is split on insertion), and the property set always covers
//! every attribute a dependency mentions. Queries never mutate; the only
//! mutators are the append-only [`Relation::add_property`] and
//! [`Relation::add_fd`].

use crate::attrs::{difference, parse_attrs, Attr, AttrSet};
use crate::error::Result;
use crate::fd::FunctionDependency;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// A relation schema: attributes plus functional dependencies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relation {
    properties: AttrSet,
    fds: BTreeSet<FunctionDependency>,
}

impl Relation {
    /// Build a relation from raw dependencies.
    ///
    /// Multi-attribute dependents are split into one dependency per
    /// dependent attribute, and the property set is the union of every
    /// attribute the dependencies mention.
    pub fn new<I>(fds: I) -> Self
    where
        I: IntoIterator<Item = FunctionDependency>,
    {
        let mut relation = Relation::default();
        for fd in fds {
            relation.add_fd(fd);
        }
        relation
    }

    /// Parse the compact comma-separated notation.
    ///
    /// Tokens containing `"->"` are dependencies; an arrowless token
    /// declares bare properties, one per character.
    ///
    /// ```
    /// use relnorm::Relation;
    /// let r = Relation::parse("B->C,C->B,A")?;
    /// assert_eq!(r.properties(), &"ABC".chars().collect());
    /// # Ok::<(), relnorm::Error>(())
    /// ```
    pub fn parse(text: &str) -> Result<Self> {
        let mut relation = Relation::default();
        for token in text.split(',') {
            if token.contains("->") {
                relation.add_fd(FunctionDependency::parse(token)?);
            } else {
                for attr in parse_attrs(token) {
                    relation.add_property(attr);
                }
            }
        }
        Ok(relation)
    }

    /// The attribute set of this relation.
    pub fn properties(&self) -> &AttrSet {
        &self.properties
    }

    /// The stored dependencies (singleton dependents).
    pub fn fds(&self) -> &BTreeSet<FunctionDependency> {
        &self.fds
    }

    /// Declare an attribute with no associated dependency.
    pub fn add_property(&mut self, attr: Attr) {
        self.properties.insert(attr);
    }

    /// Insert a dependency, splitting a multi-attribute dependent into
    /// one dependency per dependent attribute.
    pub fn add_fd(&mut self, fd: FunctionDependency) {
        self.properties.extend(fd.from.iter().copied());
        self.properties.extend(fd.to.iter().copied());
        for &to in &fd.to {
            self.fds
                .insert(FunctionDependency::new(fd.from.clone(), AttrSet::from([to])));
        }
    }

    /// Attribute closure: the fixed point of applying every dependency
    /// whose determinant is already contained in the running set.
    pub fn property_closure(&self, attrs: &AttrSet) -> AttrSet {
        let mut result = attrs.clone();
        loop {
            let before = result.len();
            for fd in &self.fds {
                if fd.from.is_subset(&result) {
                    result.extend(fd.to.iter().copied());
                }
            }
            if result.len() == before {
                return result;
            }
        }
    }

    /// True iff `lhs` functionally determines `rhs`.
    pub fn can_decide(&self, lhs: &AttrSet, rhs: &AttrSet) -> bool {
        rhs.is_subset(&self.property_closure(lhs))
    }

    /// Candidate keys, found by partitioning attributes on which FD side
    /// they occur.
    ///
    /// Attributes never derived must be in every key; attributes that are
    /// only ever derived can be in no minimal key. If the must-have core
    /// does not already close over everything, each remaining attribute
    /// is tried as the single augmentation of the core. Augmentations of
    /// more than one attribute are not searched.
    pub fn candidate_keys(&self) -> BTreeSet<AttrSet> {
        let mut exist_in_right = AttrSet::new();
        let mut exist_in_left = AttrSet::new();
        for fd in &self.fds {
            exist_in_right.extend(fd.to.iter().copied());
            exist_in_left.extend(fd.from.iter().copied());
        }
        let must_have = difference(&self.properties, &exist_in_right);
        let must_not_have = difference(&exist_in_right, &exist_in_left);
        let possible = difference(&difference(&self.properties, &must_have), &must_not_have);

        let mut keys = BTreeSet::new();
        if self.property_closure(&must_have) == self.properties {
            keys.insert(must_have);
        } else {
            for &attr in &possible {
                let mut candidate = must_have.clone();
                candidate.insert(attr);
                if self.property_closure(&candidate) == self.properties {
                    keys.insert(candidate);
                }
            }
        }
        keys
    }

    /// Prime attributes: the union of all candidate keys.
    pub fn key_attributes(&self) -> AttrSet {
        self.candidate_keys().into_iter().flatten().collect()
    }

    /// Same value as [`Relation::key_attributes`], named the way the 2NF
    /// definition speaks about key attributes.
    pub fn key_codes(&self) -> AttrSet {
        self.key_attributes()
    }

    /// 2NF: no non-prime attribute depends on a proper subset of a
    /// candidate key.
    ///
    /// Each candidate key is weakened by removing one attribute at a
    /// time; if any weakened key still determines a non-prime attribute,
    /// that dependency is partial and the relation fails.
    pub fn second_nf(&self) -> bool {
        let key_codes = self.key_codes();
        let candidate_keys = self.candidate_keys();
        for &attr in &self.properties {
            if key_codes.contains(&attr) {
                continue;
            }
            let target = AttrSet::from([attr]);
            for key in &candidate_keys {
                for remove in key {
                    let mut partial = key.clone();
                    partial.remove(remove);
                    if self.can_decide(&partial, &target) {
                        return false;
                    }
                }
            }
        }
        true
    }

    /// 3NF: 2NF plus, for every dependency whose determinant is not a
    /// superkey, every dependent attribute must be prime.
    pub fn third_nf(&self) -> bool {
        if !self.second_nf() {
            return false;
        }
        let candidate_keys = self.candidate_keys();
        let key_attributes = self.key_attributes();
        for fd in &self.fds {
            let superkey = candidate_keys.iter().any(|key| key.is_subset(&fd.from));
            if !superkey && !fd.to.is_subset(&key_attributes) {
                return false;
            }
        }
        true
    }

    /// BCNF: 2NF plus every determinant is a superkey.
    pub fn bcnf(&self) -> bool {
        if !self.second_nf() {
            return false;
        }
        let candidate_keys = self.candidate_keys();
        self.fds
            .iter()
            .all(|fd| candidate_keys.iter().any(|key| key.is_subset(&fd.from)))
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self.fds.iter().map(|fd| fd.to_string()).collect();
        write!(f, "{}", rendered.join(","))
    }
}
