use super::*;

#[test]
fn step_lookup_known_names() {
    let out = step("out").expect("out is a step");
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].parameters.len(), 1);
    assert!(out[0].parameters[0].multiple);
    assert_eq!(out[0].parameters[0].kind, Kind::String);

    let has = step("has").expect("has is a step");
    assert_eq!(has.len(), 9);

    let select = step("select").expect("select is a step");
    assert_eq!(select.len(), 8);
}

#[test]
fn step_lookup_is_case_sensitive() {
    assert!(step("V").is_some());
    assert!(step("v").is_none());
    assert!(step("OUT").is_none());
    assert!(step("nonsense").is_none());
}

#[test]
fn predicate_lookup_known_names() {
    let within = predicate("within").expect("within is a predicate");
    assert_eq!(within.len(), 1);
    assert!(within[0].parameters[0].multiple);

    let and = predicate("and").expect("and is a predicate");
    assert_eq!(and.len(), 2);
    assert!(and[0].is_nullary());
    assert_eq!(and[1].parameters[0].kind, Kind::Predicate);
}

#[test]
fn step_and_predicate_namespaces_overlap() {
    // "and", "or" and "not" exist in both tables with separate overloads.
    for name in ["and", "or", "not"] {
        assert!(step(name).is_some(), "{name} should be a step");
        assert!(predicate(name).is_some(), "{name} should be a predicate");
    }
}

#[test]
fn table_sizes() {
    assert_eq!(steps().count(), 105);
    assert_eq!(predicates().count(), 22);

    let total_sigs: usize = steps().map(|(_, sigs)| sigs.len()).sum();
    assert_eq!(total_sigs, 195);
}

#[test]
fn every_entry_has_at_least_one_signature() {
    for (name, sigs) in steps().chain(predicates()) {
        assert!(!sigs.is_empty(), "{name} has no signatures");
        for s in sigs {
            assert!(!s.since.is_empty(), "{name} has an empty since field");
        }
    }
}

#[test]
fn kind_serializes_lowercase() {
    let json = serde_json::to_string(&Kind::Traversal).unwrap();
    assert_eq!(json, "\"traversal\"");
    assert_eq!(Kind::Pop.to_string(), "pop");
}
