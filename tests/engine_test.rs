//! Integration tests for the normalization engine
//!
//! End-to-end scenarios over the public API: closures, candidate keys,
//! the normal-form ladder, minimal covers, and decomposition checks.

use pretty_assertions::assert_eq;
use relnorm::{is_lossless, minify, preserves_fds, AttrSet, Relation};
use rstest::rstest;
use std::collections::BTreeSet;

fn attrs(text: &str) -> AttrSet {
    text.chars().collect()
}

fn members(texts: &[&str]) -> Vec<Relation> {
    texts
        .iter()
        .map(|text| Relation::parse(text).unwrap())
        .collect()
}

#[test]
fn test_closure_scenario() {
    let relation = Relation::parse("A->B,B->C,D->B").unwrap();
    assert_eq!(relation.property_closure(&attrs("A")), attrs("ABC"));
    assert_eq!(relation.property_closure(&attrs("AD")), attrs("ABCD"));
    assert_eq!(relation.property_closure(&attrs("BD")), attrs("BCD"));
}

#[test]
fn test_candidate_keys_scenario() {
    let relation = Relation::parse("B->C,B->E,C->B,C->D,A").unwrap();
    assert_eq!(
        relation.candidate_keys(),
        BTreeSet::from([attrs("AB"), attrs("AC")])
    );

    let relation = Relation::parse("A->B,A->C,B->C").unwrap();
    assert_eq!(relation.candidate_keys(), BTreeSet::from([attrs("A")]));
}

#[rstest]
#[case::partial_dependency("SC->G,S->NA", false, false, false)]
#[case::transitive_dependency("A->B,B->C", true, false, false)]
#[case::prime_dependent("A->B,BC->A", true, true, false)]
#[case::determinant_is_key("A->B,A->C", true, true, true)]
fn test_normal_form_ladder(
    #[case] text: &str,
    #[case] second: bool,
    #[case] third: bool,
    #[case] bcnf: bool,
) {
    let relation = Relation::parse(text).unwrap();
    assert_eq!(relation.second_nf(), second, "2NF of {text}");
    assert_eq!(relation.third_nf(), third, "3NF of {text}");
    assert_eq!(relation.bcnf(), bcnf, "BCNF of {text}");
}

#[test]
fn test_minimal_cover_scenario() {
    let relation = Relation::parse("A->D,B->D,BD->CA,CD->B").unwrap();
    let cover = minify(&relation);

    assert_eq!(cover.eliminate_property.len(), 6);
    assert_eq!(cover.eliminate_fd.len(), 5);
    assert_eq!(
        cover.result.fds(),
        Relation::parse("A->D,B->A,B->C,CD->B").unwrap().fds()
    );
}

#[test]
fn test_lossless_join_scenarios() {
    let relation = Relation::parse("A->C,B->C,C->D,CE->A,DE->C").unwrap();
    let check = is_lossless(&members(&["AD", "AB", "BE", "CDE", "AE"]), &relation);
    assert!(check.lossless);

    let relation = Relation::parse("A->B,C->D").unwrap();
    let check = is_lossless(&members(&["AB", "AB", "BC", "CD"]), &relation);
    assert!(!check.lossless);
}

#[test]
fn test_preservation_scenarios() {
    let relation = Relation::parse("A->C,B->C,C->D,CE->A,DE->C").unwrap();

    let check = preserves_fds(&members(&["AD", "AB", "BE", "CDE", "AE"]), &relation);
    assert!(!check.preserved);
    assert!(check.failed_on.is_some());

    let check = preserves_fds(&members(&["ACE", "BC", "CDE"]), &relation);
    assert!(check.preserved);
    assert_eq!(check.failed_on, None);
}

#[test]
fn test_relation_text_round_trip() {
    let relation = Relation::parse("AB->C,C->D").unwrap();
    let reparsed = Relation::parse(&relation.to_string()).unwrap();
    assert_eq!(reparsed, relation);
}
