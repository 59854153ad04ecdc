//! Property-based tests - pragmatic approach testing core guarantees
//!
//! These complement the example-based tests by checking the build/flatten
//! relationship and tokenizer totality across generated inputs.

use proptest::prelude::*;

use formtree::{
    from_entries, from_entries_with_options, name::split_name, to_entries,
    to_entries_with_options, BuildOptions, FlattenOptions,
};

/// Simple bracket-free key fragments, so generated names have no append
/// tokens and no type suffixes.
fn key() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,7}".prop_map(|s| s)
}

/// A bracketed field name one to three keys deep.
fn field_name() -> impl Strategy<Value = String> {
    prop::collection::vec(key(), 1..=3).prop_map(|keys| {
        let mut name = keys[0].clone();
        for k in &keys[1..] {
            name.push('[');
            name.push_str(k);
            name.push(']');
        }
        name
    })
}

fn value() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 _.-]{0,12}".prop_map(|s| s)
}

proptest! {
    // Building never panics on arbitrary names (errors are fine)
    #[test]
    fn prop_build_total(name in "\\PC{0,24}", raw in value()) {
        let _ = from_entries(vec![(name.as_str(), raw.as_str())]);
    }

    // The tokenizer never panics and, when it succeeds on a suffix-free
    // name, reproduces the bracket structure
    #[test]
    fn prop_tokenizer_total(name in "\\PC{0,32}") {
        let _ = split_name(&name);
    }

    #[test]
    fn prop_flat_names_survive_roundtrip(names in prop::collection::btree_set(field_name(), 1..8)) {
        let entries: Vec<(String, String)> =
            names.iter().map(|n| (n.clone(), "v".to_string())).collect();
        let value = from_entries(entries).unwrap();
        let flat = to_entries(&value);

        // every input name appears as a flattened path; nesting can merge
        // prefixes but never invents or loses leaves, except when one input
        // name is a strict prefix path of another (the deeper entry widens
        // the scalar away)
        let paths: std::collections::BTreeSet<String> = flat.keys().cloned().collect();
        for name in &names {
            let shadowed = names.iter().any(|other| {
                other != name && other.starts_with(&format!("{}[", name))
            });
            if !shadowed {
                prop_assert!(paths.contains(name), "missing path {:?} in {:?}", name, paths);
            }
        }
    }

    // build -> flatten (indexed) -> rebuild is structurally idempotent for
    // entries without append ambiguity
    #[test]
    fn prop_rebuild_idempotent(pairs in prop::collection::btree_map(field_name(), value(), 1..8)) {
        let entries: Vec<(String, String)> = pairs.into_iter().collect();
        let original = match from_entries(entries) {
            Ok(v) => v,
            // prefix-shadowed names can make ordering-dependent shapes;
            // builds themselves must still never panic
            Err(_) => return Ok(()),
        };

        let flat = to_entries_with_options(
            &original,
            &FlattenOptions::new().with_array_indices(true),
        );
        let rebuilt_entries: Vec<(String, String)> = flat
            .iter()
            .flat_map(|(path, v)| {
                v.as_slice()
                    .iter()
                    .map(|leaf| (path.clone(), leaf.to_string()))
                    .collect::<Vec<_>>()
            })
            .collect();
        let rebuilt = from_entries_with_options(
            rebuilt_entries,
            &BuildOptions::new().with_use_int_keys_as_array_index(true),
        )
        .unwrap();

        prop_assert_eq!(rebuilt, original);
    }
}
