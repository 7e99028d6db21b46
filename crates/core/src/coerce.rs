//! Numeric coercion for raw form input.
//!
//! Form fields arrive as text; these keep the drafts total over any input
//! instead of bubbling parse errors into the view.

/// Coerce a count field (stock, reorder level): 0 if unparseable, never
/// negative.
pub fn coerce_count(raw: &str) -> i64 {
    raw.trim().parse::<i64>().map(|n| n.max(0)).unwrap_or(0)
}

/// Coerce the transaction quantity: 1 if unparseable; 1 is the minimum
/// meaningful value.
pub fn coerce_quantity(raw: &str) -> i64 {
    raw.trim().parse::<i64>().map(|n| n.max(1)).unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn count_parses_digits() {
        assert_eq!(coerce_count("42"), 42);
        assert_eq!(coerce_count(" 7 "), 7);
    }

    #[test]
    fn count_defaults_to_zero_when_unparseable() {
        assert_eq!(coerce_count(""), 0);
        assert_eq!(coerce_count("abc"), 0);
        assert_eq!(coerce_count("3.5"), 0);
    }

    #[test]
    fn count_floors_negatives() {
        assert_eq!(coerce_count("-4"), 0);
    }

    #[test]
    fn quantity_defaults_to_one_when_unparseable() {
        assert_eq!(coerce_quantity(""), 1);
        assert_eq!(coerce_quantity("many"), 1);
    }

    #[test]
    fn quantity_floors_at_one() {
        assert_eq!(coerce_quantity("0"), 1);
        assert_eq!(coerce_quantity("-3"), 1);
        assert_eq!(coerce_quantity("3"), 3);
    }

    proptest! {
        /// Property: coercion is total and respects the field floors.
        #[test]
        fn coercion_is_total(raw in "\\PC*") {
            prop_assert!(coerce_count(&raw) >= 0);
            prop_assert!(coerce_quantity(&raw) >= 1);
        }

        /// Property: digit strings map to their numeric value.
        #[test]
        fn digits_map_to_their_value(n in 0i64..1_000_000) {
            prop_assert_eq!(coerce_count(&n.to_string()), n);
            prop_assert_eq!(coerce_quantity(&n.to_string()), n.max(1));
        }
    }
}
