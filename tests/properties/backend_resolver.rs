//! Property tests for user backend resolution.

use std::collections::BTreeSet;

use proptest::prelude::*;

use user_cleanup::domain::ports::{backend_name, UserBackend};
use user_cleanup::domain::services::{resolve_backend, ResolutionError};
use user_cleanup::infrastructure::ListBackend;

fn backends(names: &[String]) -> Vec<Box<dyn UserBackend>> {
    names
        .iter()
        .map(|n| {
            Box::new(ListBackend::new(Vec::<String>::new()).with_name(n.clone()))
                as Box<dyn UserBackend>
        })
        .collect()
}

/// Names that are distinct even when compared case-insensitively.
fn distinct_names(min: usize) -> impl Strategy<Value = Vec<String>> {
    proptest::collection::btree_set("[a-z]{1,8}", min..=6)
        .prop_map(|set: BTreeSet<String>| set.into_iter().collect::<Vec<_>>())
        .prop_shuffle()
}

fn flip_case(name: &str, mask: &[bool]) -> String {
    name.chars()
        .zip(mask.iter().cycle())
        .map(|(c, upper)| if *upper { c.to_ascii_uppercase() } else { c })
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: A single registered backend is always selected.
    #[test]
    fn property_single_backend_always_selected(
        name in "[A-Za-z]{1,8}",
        requested in proptest::option::of("[A-Za-z ]{0,8}"),
    ) {
        let registered = backends(&[name.clone()]);

        let selected = resolve_backend(requested.as_deref(), &registered).unwrap();

        prop_assert_eq!(backend_name(selected), name.as_str());
    }

    /// PROPERTY: Exactly one case-insensitive match selects that backend.
    #[test]
    fn property_unique_match_selects_backend(
        names in distinct_names(2),
        pick in any::<prop::sample::Index>(),
        mask in proptest::collection::vec(any::<bool>(), 1..8),
    ) {
        let registered = backends(&names);
        let target = &names[pick.index(names.len())];

        let requested = flip_case(target, &mask);

        let selected = resolve_backend(Some(requested.as_str()), &registered).unwrap();

        prop_assert_eq!(backend_name(selected), target.as_str());
    }

    /// PROPERTY: A name matching no backend fails with every name listed.
    #[test]
    fn property_no_match_lists_available(
        names in distinct_names(2),
        requested in "[0-9]{1,4}",
    ) {
        let registered = backends(&names);

        let err = resolve_backend(Some(requested.as_str()), &registered).err().unwrap();

        let is_none_matched = matches!(err, ResolutionError::NoneMatched { .. });
        prop_assert!(is_none_matched);
        prop_assert_eq!(err.available(), names.as_slice());
    }

    /// PROPERTY: Several case-insensitive matches are ambiguous, never a pick.
    #[test]
    fn property_duplicate_names_are_ambiguous(
        mut names in distinct_names(1),
        pick in any::<prop::sample::Index>(),
        mask in proptest::collection::vec(any::<bool>(), 1..8),
    ) {
        let duplicated = names[pick.index(names.len())].clone();
        names.push(flip_case(&duplicated, &mask));
        let registered = backends(&names);

        let requested = duplicated.to_uppercase();

        let err = resolve_backend(Some(requested.as_str()), &registered).err().unwrap();

        match err {
            ResolutionError::Ambiguous { matches, .. } => prop_assert_eq!(matches, 2),
            other => prop_assert!(false, "expected Ambiguous, got {:?}", other),
        }
    }

    /// PROPERTY: No requested name with several backends lists each once, in order.
    #[test]
    fn property_unspecified_lists_each_backend_once(
        names in distinct_names(2),
        blank in proptest::option::of(" {0,3}"),
    ) {
        let registered = backends(&names);

        let err = resolve_backend(blank.as_deref(), &registered).err().unwrap();

        let is_unspecified = matches!(err, ResolutionError::UnspecifiedWithMultipleAvailable { .. });
        prop_assert!(is_unspecified);
        prop_assert_eq!(err.available(), names.as_slice());
    }
}

#[test]
fn no_backends_is_its_own_error() {
    let none: Vec<Box<dyn UserBackend>> = Vec::new();
    let err = resolve_backend(Some("anything"), &none).err().unwrap();
    assert!(matches!(err, ResolutionError::NoBackendsRegistered));
}
