// Production-quality lints
#![warn(
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
// Deny truly dangerous patterns
#![deny(clippy::mem_forget)]
// Allow common patterns in library code
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! # relnorm — Relational Normalization Analysis
//!
//! Classical relational-database normalization theory as a pure
//! computation library: attribute closures, candidate keys, minimal
//! covers, normal forms, and decomposition checks over a finite attribute
//! set and its functional dependencies.
//!
//! ## Core Concept
//!
//! A [`Relation`] owns a set of attributes and a set of functional
//! dependencies (FDs). Every analysis is a deterministic, in-memory set
//! computation built on one primitive, the attribute closure. From a
//! relation, relnorm can:
//!
//! - **Close** an attribute set under the FDs ([`Relation::property_closure`])
//! - **Enumerate** candidate keys and prime attributes
//! - **Classify** the relation as 2NF / 3NF / BCNF
//! - **Minify** the FD set into a minimal cover, with a decision trace ([`minify`])
//! - **Chase** a tableau to decide whether a decomposition is lossless ([`is_lossless`])
//! - **Check** whether a decomposition preserves every FD ([`preserves_fds`])
//!
//! ## Quick Start
//!
//! ```
//! use relnorm::{minify, Relation};
//!
//! let relation = Relation::parse("A->B,B->C,AC->D")?;
//!
//! // What does {A} determine?
//! let closure = relation.property_closure(&"A".chars().collect());
//! assert_eq!(closure, "ABCD".chars().collect());
//!
//! // Keys and normal forms
//! assert_eq!(relation.candidate_keys().len(), 1);
//! assert!(relation.second_nf());
//!
//! // Minimal cover: C is extraneous in AC->D
//! let cover = minify(&relation);
//! assert_eq!(cover.result.to_string(), "A->B,A->D,B->C");
//! # Ok::<(), relnorm::Error>(())
//! ```
//!
//! ## Notation
//!
//! Relations parse from a compact text form: a comma-separated list of
//! tokens, where `"AB->C"` declares a dependency (one attribute per
//! character) and an arrowless token declares bare attributes with no
//! dependency. `X->YZ` is stored as `X->Y` and `X->Z`; every FD inside a
//! relation has a single dependent attribute.
//!
//! ## Architecture
//!
//! ```text
//! RELATION ("A->B,B->C" notation)
//!      │
//!      ├──► property_closure(attrs) ──► AttrSet
//!      │
//!      ├──► candidate_keys / key_attributes ──► key sets
//!      │
//!      ├──► second_nf / third_nf / bcnf ──► bool
//!      │
//!      ├──► minify(&r) ──► MinimalCover { traces, result }
//!      │
//!      ├──► is_lossless(members, &r) ──► LosslessCheck { tableau chase }
//!      │
//!      └──► preserves_fds(members, &r) ──► PreservationCheck
//! ```
//!
//! The engine holds no state between calls and performs no I/O; every
//! query returns independent values, so read-only use from multiple
//! callers is safe.

pub mod attrs;
pub mod decompose;
pub mod error;
pub mod fd;
pub mod minify;
pub mod relation;

// Re-exports
pub use attrs::{difference, intersect, parse_attrs, render_attrs, union, Attr, AttrSet};
pub use decompose::{
    is_lossless, preserves_fds, Cell, ChaseStep, LosslessCheck, PreservationCheck, Tableau,
};
pub use error::{Error, Result};
pub use fd::FunctionDependency;
pub use minify::{
    eliminate_fds, eliminate_properties, minify, FdElimination, MinimalCover, PropertyElimination,
};
pub use relation::Relation;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
