//! Minimal cover computation
//!
//! Two sequential elimination passes turn a dependency set into an
//! equivalent minimal cover (Fmin): first extraneous determinant
//! attributes are dropped, then whole redundant dependencies. Each pass
//! records every decision it takes, so callers can display the full
//! derivation; the traces are plain data, decoupled from the algorithm
//! result.

use crate::attrs::{Attr, AttrSet};
use crate::fd::FunctionDependency;
use crate::relation::Relation;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// One attempted removal of a determinant attribute.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyElimination {
    /// The dependency whose determinant was being reduced.
    pub fd: FunctionDependency,
    /// The attribute tried for removal.
    pub attribute: Attr,
    /// Closure of the reduced determinant under the original relation.
    pub closure: AttrSet,
    /// Whether the removal was kept.
    pub eliminated: bool,
}

/// One attempted removal of a whole dependency.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FdElimination {
    /// The dependency tried for removal.
    pub fd: FunctionDependency,
    /// Closure of its determinant with the dependency removed.
    pub closure: AttrSet,
    /// Whether the removal was kept.
    pub eliminated: bool,
}

/// Outcome of [`minify`]: both decision traces plus the minimal cover.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MinimalCover {
    pub eliminate_property: Vec<PropertyElimination>,
    pub eliminate_fd: Vec<FdElimination>,
    pub result: Relation,
}

/// Compute the minimal cover (Fmin) of a relation's dependency set.
pub fn minify(relation: &Relation) -> MinimalCover {
    let (eliminate_property, reduced) = eliminate_properties(relation);
    let (eliminate_fd, result) = eliminate_fds(&reduced);
    MinimalCover {
        eliminate_property,
        eliminate_fd,
        result,
    }
}

/// Left-side reduction: drop determinant attributes the rest of the
/// determinant already derives.
///
/// Closures are computed under the original relation. An accepted drop is
/// permanent for the remaining attempts on the same dependency; a
/// rejected one is restored before the next attempt.
pub fn eliminate_properties(relation: &Relation) -> (Vec<PropertyElimination>, Relation) {
    let mut steps = Vec::new();
    let mut new_fds: BTreeSet<FunctionDependency> = relation.fds().clone();
    for fd in relation.fds() {
        if fd.from.len() > 1 {
            new_fds.remove(fd);
            let mut new_from = fd.from.clone();
            for &attr in &fd.from {
                new_from.remove(&attr);
                let closure = relation.property_closure(&new_from);
                let eliminated = fd.to.is_subset(&closure);
                steps.push(PropertyElimination {
                    fd: fd.clone(),
                    attribute: attr,
                    closure,
                    eliminated,
                });
                if !eliminated {
                    new_from.insert(attr);
                }
            }
            new_fds.insert(FunctionDependency::new(new_from, fd.to.clone()));
        }
    }
    (steps, Relation::new(new_fds))
}

/// Redundancy removal: drop each dependency whose dependent is still
/// derivable from its determinant without it.
pub fn eliminate_fds(relation: &Relation) -> (Vec<FdElimination>, Relation) {
    let mut steps = Vec::new();
    let mut new_fds: BTreeSet<FunctionDependency> = relation.fds().clone();
    for fd in relation.fds() {
        new_fds.remove(fd);
        let reduced = Relation::new(new_fds.iter().cloned());
        let closure = reduced.property_closure(&fd.from);
        let eliminated = fd.to.is_subset(&closure);
        steps.push(FdElimination {
            fd: fd.clone(),
            closure,
            eliminated,
        });
        if !eliminated {
            new_fds.insert(fd.clone());
        }
    }
    (steps, Relation::new(new_fds))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eliminate_properties() {
        // BD->CA splits to BD->C and BD->A; B alone derives both
        let relation = Relation::parse("A->D,B->D,BD->CA,CD->B").unwrap();
        let (steps, result) = eliminate_properties(&relation);
        assert_eq!(steps.len(), 6);
        assert_eq!(
            result.fds(),
            Relation::parse("A->D,B->D,B->C,B->A,CD->B").unwrap().fds()
        );
    }

    #[test]
    fn test_eliminate_fds() {
        let relation = Relation::parse("A->D,B->D,B->C,B->A,CD->B").unwrap();
        let (steps, result) = eliminate_fds(&relation);
        assert_eq!(steps.len(), 5);
        assert_eq!(
            result.fds(),
            Relation::parse("A->D,B->C,B->A,CD->B").unwrap().fds()
        );
    }

    #[test]
    fn test_minify_chains_both_passes() {
        let relation = Relation::parse("A->D,B->D,BD->CA,CD->B").unwrap();
        let cover = minify(&relation);
        assert_eq!(cover.eliminate_property.len(), 6);
        assert_eq!(cover.eliminate_fd.len(), 5);
        assert_eq!(cover.result.to_string(), "A->D,B->A,B->C,CD->B");
    }

    #[test]
    fn test_minify_keeps_already_minimal_set() {
        let relation = Relation::parse("A->B,B->C").unwrap();
        let cover = minify(&relation);
        assert!(cover.eliminate_property.is_empty());
        assert!(cover.eliminate_fd.iter().all(|step| !step.eliminated));
        assert_eq!(cover.result.fds(), relation.fds());
    }

    #[test]
    fn test_eliminated_attribute_closure_is_recorded() {
        let relation = Relation::parse("A->B,AB->C").unwrap();
        let (steps, result) = eliminate_properties(&relation);
        // dropping B from AB->C: closure of {A} still contains C? {A,B,C} yes
        assert_eq!(steps.len(), 2);
        let drop_b = steps.iter().find(|s| s.attribute == 'B').unwrap();
        assert!(drop_b.eliminated);
        assert_eq!(drop_b.closure, "ABC".chars().collect());
        assert_eq!(result.fds(), Relation::parse("A->B,A->C").unwrap().fds());
    }
}
