//! Property tests for config merging.

use proptest::prelude::*;

use save::config::{FixPluginConfig, GeneralConfig, MergeableConfig, NameSet};

fn field() -> impl Strategy<Value = Option<String>> {
    proptest::option::of("[a-z]{1,8}")
}

fn fix_config() -> impl Strategy<Value = FixPluginConfig> {
    (field(), proptest::option::of(1usize..16), field(), field(), field()).prop_map(
        |(exec_cmd, batch_size, batch_separator, test_suffix, expected_suffix)| FixPluginConfig {
            exec_cmd,
            batch_size,
            batch_separator,
            resource_name_test_suffix: test_suffix,
            resource_name_expected_suffix: expected_suffix,
        },
    )
}

fn names() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec("[a-d]", 0..6)
}

fn sorted(set: &NameSet) -> Vec<String> {
    let mut items = set.clone().into_vec();
    items.sort();
    items
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: every field present in the child survives the merge, absent ones come from the parent.
    #[test]
    fn property_merge_prefers_child(child in fix_config(), parent in fix_config()) {
        let merged = child.clone().merge(&parent);

        prop_assert_eq!(merged.exec_cmd, child.exec_cmd.or(parent.exec_cmd));
        prop_assert_eq!(merged.batch_size, child.batch_size.or(parent.batch_size));
        prop_assert_eq!(merged.batch_separator, child.batch_separator.or(parent.batch_separator));
        prop_assert_eq!(
            merged.resource_name_test_suffix,
            child.resource_name_test_suffix.or(parent.resource_name_test_suffix)
        );
        prop_assert_eq!(
            merged.resource_name_expected_suffix,
            child.resource_name_expected_suffix.or(parent.resource_name_expected_suffix)
        );
    }

    /// PROPERTY: merging with an empty parent changes nothing.
    #[test]
    fn property_merge_with_empty_parent_is_identity(child in fix_config()) {
        prop_assert_eq!(child.clone().merge(&FixPluginConfig::default()), child);
    }

    /// PROPERTY: merged tags are the set union, whichever side they come from.
    #[test]
    fn property_tag_union_is_order_independent(left in names(), right in names()) {
        let config = |tags: &[String]| GeneralConfig {
            tags: Some(NameSet::from_items(tags.iter().cloned())),
            ..Default::default()
        };

        let one = config(&left).merge(&config(&right)).tags.unwrap();
        let other = config(&right).merge(&config(&left)).tags.unwrap();

        prop_assert_eq!(sorted(&one), sorted(&other));
        let merged = sorted(&one);
        for tag in left.iter().chain(right.iter()) {
            prop_assert!(merged.contains(tag));
        }
    }

    /// PROPERTY: validation succeeds exactly when the command is known.
    #[test]
    fn property_fix_validation_requires_only_exec_cmd(config in fix_config()) {
        let has_command = config.exec_cmd.is_some();

        prop_assert_eq!(config.validate_and_default().is_ok(), has_command);
    }
}

#[test]
fn tag_strings_and_lists_merge_alike() {
    let parent = GeneralConfig {
        tags: Some(NameSet::parse("a, b")),
        ..Default::default()
    };
    let child = GeneralConfig {
        tags: Some(NameSet::from_items(["b".to_string(), "c".to_string()])),
        ..Default::default()
    };

    let merged = child.merge(&parent).tags.unwrap();

    assert_eq!(sorted(&merged), ["a", "b", "c"]);
}
