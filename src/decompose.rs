//! Decomposition analyzers
//!
//! Two independent checks on a proposed decomposition of a relation: the
//! tableau chase for the lossless-join property, and the dependency
//! preservation test. Decompositions are ordered slices; row numbering
//! and the recorded chase process depend on member order.

use crate::attrs::{intersect, union, Attr, AttrSet};
use crate::fd::FunctionDependency;
use crate::relation::Relation;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One tableau cell: the distinguished shared marker, or a
/// row-identifying subscript (1-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    /// The row carries this column (`A` in the classical presentation).
    Shared,
    /// Row-subscripted placeholder.
    Row(usize),
}

impl Cell {
    /// Minimum under the chase ordering: `Shared` dominates everything,
    /// numeric cells compare by subscript.
    fn min(self, other: Cell) -> Cell {
        match (self, other) {
            (Cell::Shared, _) | (_, Cell::Shared) => Cell::Shared,
            (Cell::Row(a), Cell::Row(b)) => Cell::Row(a.min(b)),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Shared => write!(f, "A"),
            Cell::Row(n) => write!(f, "{n}"),
        }
    }
}

/// The chase tableau: one row per decomposition member, one column per
/// property of the target relation, columns in sorted order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tableau {
    pub columns: Vec<Attr>,
    pub rows: Vec<Vec<Cell>>,
}

impl Tableau {
    fn new(decomposition: &[Relation], relation: &Relation) -> Self {
        let columns: Vec<Attr> = relation.properties().iter().copied().collect();
        let rows = decomposition
            .iter()
            .enumerate()
            .map(|(i, member)| {
                columns
                    .iter()
                    .map(|col| {
                        if member.properties().contains(col) {
                            Cell::Shared
                        } else {
                            Cell::Row(i + 1)
                        }
                    })
                    .collect()
            })
            .collect();
        Tableau { columns, rows }
    }

    fn column_index(&self, attr: Attr) -> Option<usize> {
        self.columns.iter().position(|&c| c == attr)
    }

    fn has_shared_row(&self) -> bool {
        self.rows
            .iter()
            .any(|row| row.iter().all(|&cell| cell == Cell::Shared))
    }
}

impl fmt::Display for Tableau {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, col) in self.columns.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{col:>3}")?;
        }
        writeln!(f)?;
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                if i > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{:>3}", cell.to_string())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// One chase step: the dependency applied and the tableau state after it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChaseStep {
    pub fd: FunctionDependency,
    pub tableau: Tableau,
}

/// Outcome of the lossless-join check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LosslessCheck {
    pub lossless: bool,
    pub initial: Tableau,
    pub steps: Vec<ChaseStep>,
}

/// Tableau chase: decide whether joining the decomposition members
/// reconstructs exactly the original relation.
///
/// For each dependency, the first group of rows agreeing on the
/// determinant columns is unified on the dependent column to the group
/// minimum (`Shared` dominating). A step is recorded after every
/// dependency application, changed or not; a fully shared row ends the
/// chase with success, and a full pass with no change ends it with
/// failure.
pub fn is_lossless(decomposition: &[Relation], relation: &Relation) -> LosslessCheck {
    let mut tableau = Tableau::new(decomposition, relation);
    let initial = tableau.clone();
    let mut steps = Vec::new();
    let mut lossless = false;

    let mut done = false;
    while !done {
        done = true;
        for fd in relation.fds() {
            let Some(&to) = fd.to.first() else { continue };
            let selected: Vec<usize> = fd
                .from
                .iter()
                .filter_map(|&attr| tableau.column_index(attr))
                .collect();

            // first row with at least one later agreeing row, plus all
            // rows agreeing with it on the determinant columns
            let mut group = vec![0];
            for i in 0..tableau.rows.len().saturating_sub(1) {
                group = vec![i];
                for j in (i + 1)..tableau.rows.len() {
                    let agrees = selected
                        .iter()
                        .all(|&col| tableau.rows[i][col] == tableau.rows[j][col]);
                    if agrees {
                        group.push(j);
                    }
                }
                if group.len() >= 2 {
                    break;
                }
            }

            if group.len() >= 2 {
                if let Some(col) = tableau.column_index(to) {
                    let merged = group
                        .iter()
                        .map(|&row| tableau.rows[row][col])
                        .fold(Cell::Row(usize::MAX), Cell::min);
                    for &row in &group {
                        if tableau.rows[row][col] != merged {
                            tableau.rows[row][col] = merged;
                            done = false;
                        }
                    }
                }
            }

            steps.push(ChaseStep {
                fd: fd.clone(),
                tableau: tableau.clone(),
            });

            if tableau.has_shared_row() {
                lossless = true;
                done = true;
                break;
            }
        }
    }

    LosslessCheck {
        lossless,
        initial,
        steps,
    }
}

/// Outcome of the dependency-preservation check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreservationCheck {
    pub preserved: bool,
    /// The first dependency that could not be re-derived, if any.
    pub failed_on: Option<FunctionDependency>,
}

/// Check that every dependency of `relation` can be re-derived using only
/// attribute sets expressible inside the decomposition members.
///
/// For each dependency the determinant is grown to a fixed point: each
/// member contributes the part of the closure that its own properties can
/// see. The dependency is preserved when its dependent ends up inside
/// that fixed point.
pub fn preserves_fds(decomposition: &[Relation], relation: &Relation) -> PreservationCheck {
    for fd in relation.fds() {
        let mut result = fd.from.clone();
        let mut changed = true;
        while changed {
            changed = false;
            for member in decomposition {
                let projected = intersect(&result, member.properties());
                let derived =
                    intersect(&relation.property_closure(&projected), member.properties());
                if !derived.is_subset(&result) {
                    result = union(&result, &derived);
                    changed = true;
                }
            }
        }
        if !fd.to.is_subset(&result) {
            return PreservationCheck {
                preserved: false,
                failed_on: Some(fd.clone()),
            };
        }
    }
    PreservationCheck {
        preserved: true,
        failed_on: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decomposition(members: &[&str]) -> Vec<Relation> {
        members
            .iter()
            .map(|text| Relation::parse(text).unwrap())
            .collect()
    }

    #[test]
    fn test_initial_tableau_layout() {
        let relation = Relation::parse("A->B,C->D").unwrap();
        let members = decomposition(&["AB", "CD"]);
        let check = is_lossless(&members, &relation);
        assert_eq!(check.initial.columns, vec!['A', 'B', 'C', 'D']);
        assert_eq!(
            check.initial.rows[0],
            vec![Cell::Shared, Cell::Shared, Cell::Row(1), Cell::Row(1)]
        );
        assert_eq!(
            check.initial.rows[1],
            vec![Cell::Row(2), Cell::Row(2), Cell::Shared, Cell::Shared]
        );
    }

    #[test]
    fn test_lossless_decomposition() {
        let relation = Relation::parse("A->C,B->C,C->D,CE->A,DE->C").unwrap();
        let members = decomposition(&["AD", "AB", "BE", "CDE", "AE"]);
        let check = is_lossless(&members, &relation);
        assert!(check.lossless);
        assert!(!check.steps.is_empty());
        let last = check.steps.last().unwrap();
        assert!(last.tableau.has_shared_row());
    }

    #[test]
    fn test_lossy_decomposition() {
        let relation = Relation::parse("A->B,C->D").unwrap();
        let members = decomposition(&["AB", "AB", "BC", "CD"]);
        let check = is_lossless(&members, &relation);
        assert!(!check.lossless);
    }

    #[test]
    fn test_chase_records_every_application() {
        let relation = Relation::parse("A->B,C->D").unwrap();
        let members = decomposition(&["AB", "AB", "BC", "CD"]);
        let check = is_lossless(&members, &relation);
        // steps come in whole passes over the dependency set when lossy
        assert_eq!(check.steps.len() % relation.fds().len(), 0);
    }

    #[test]
    fn test_preservation_fails_and_reports_fd() {
        let relation = Relation::parse("A->C,B->C,C->D,CE->A,DE->C").unwrap();
        let members = decomposition(&["AD", "AB", "BE", "CDE", "AE"]);
        let check = preserves_fds(&members, &relation);
        assert!(!check.preserved);
        assert!(check.failed_on.is_some());
    }

    #[test]
    fn test_preservation_holds() {
        let relation = Relation::parse("A->C,B->C,C->D,CE->A,DE->C").unwrap();
        let members = decomposition(&["ACE", "BC", "CDE"]);
        let check = preserves_fds(&members, &relation);
        assert!(check.preserved);
        assert_eq!(check.failed_on, None);
    }
}
