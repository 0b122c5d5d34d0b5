//! Property tests for line placeholder resolution.

use proptest::prelude::*;

use save::domain::services::resolve_line;
use save::SaveError;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: `$l+N` points N lines below the annotation.
    #[test]
    fn property_positive_offset_adds(line in 1usize..10_000, offset in 0usize..1_000) {
        let token = format!("$l+{offset}");
        prop_assert_eq!(resolve_line(&token, "$l", line).unwrap(), line + offset);
    }

    /// PROPERTY: `$l-N` resolves while it stays on a real line and fails otherwise.
    #[test]
    fn property_negative_offset_never_below_first_line(line in 1usize..100, offset in 0usize..200) {
        let token = format!("$l-{offset}");
        let resolved = resolve_line(&token, "$l", line);
        if offset < line {
            prop_assert_eq!(resolved.unwrap(), line - offset);
        } else {
            prop_assert!(resolved.is_err());
        }
    }

    /// PROPERTY: plain numbers are taken as they are.
    #[test]
    fn property_numbers_pass_through(line in 1usize..10_000, annotation in 1usize..10_000) {
        prop_assert_eq!(resolve_line(&line.to_string(), "$line", annotation).unwrap(), line);
    }
}

#[test]
fn foreign_marker_is_an_invalid_placeholder() {
    let err = resolve_line("#5", "$line", 1).unwrap_err();

    assert!(matches!(err, SaveError::InvalidPlaceholder { .. }));
}
