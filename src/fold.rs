//! Case-folding and query tokenization.
//!
//! `fold` is applied once per tag at index build time (producing
//! `Item::folded`) and once per keystroke when tokenizing a query. Both
//! call sites share this function so the two stay byte-for-byte
//! comparable.

/// Maximum number of search terms a query can carry.
///
/// The pruning mask in [`crate::query`] uses one bit per term in a
/// 32-bit integer; this is a hard design constant tied to that width
/// (see spec Design Notes: widen to 64 if more terms are ever needed,
/// don't silently drop terms without logging).
pub const MAX_SEARCH_TERMS: usize = 32;

/// Case-fold a string for substring comparison.
///
/// This is UTF-8 lower-casing, nothing more: no Unicode normalization,
/// no stemming, no locale-aware collation.
pub fn fold(s: &str) -> String {
    s.to_lowercase()
}

/// Split a query into case-folded, non-empty tokens.
///
/// Tokenization splits on ASCII space only and discards empty
/// fragments. Terms beyond [`MAX_SEARCH_TERMS`] are dropped, with a
/// warning logged rather than silently truncated.
pub fn tokenize(query: &str) -> Vec<String> {
    let folded = fold(query);
    let mut terms: Vec<String> = folded
        .split(' ')
        .filter(|t| !t.is_empty())
        .map(str::to_owned)
        .collect();

    if terms.len() > MAX_SEARCH_TERMS {
        tracing::warn!(
            target: "fold",
            term_count = terms.len(),
            limit = MAX_SEARCH_TERMS,
            "query has more terms than the pruning mask supports; dropping the tail"
        );
        terms.truncate(MAX_SEARCH_TERMS);
    }

    terms
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fold_is_idempotent() {
        for s in ["The Beatles", "ABBEY ROAD", "déjà vu", ""] {
            assert_eq!(fold(&fold(s)), fold(s));
        }
    }

    #[test]
    fn tokenize_splits_on_ascii_space_and_drops_empties() {
        assert_eq!(
            tokenize("Come  Together"),
            vec!["come".to_string(), "together".to_string()]
        );
        assert_eq!(tokenize("   "), Vec::<String>::new());
        assert_eq!(tokenize(""), Vec::<String>::new());
    }

    #[test]
    fn tokenize_caps_at_max_terms() {
        let many = (0..40).map(|i| i.to_string()).collect::<Vec<_>>().join(" ");
        let terms = tokenize(&many);
        assert_eq!(terms.len(), MAX_SEARCH_TERMS);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn fold_stability(s in ".*") {
            prop_assert_eq!(fold(&fold(&s)), fold(&s));
        }

        #[test]
        fn tokenize_never_yields_empty_tokens(s in ".*") {
            for tok in tokenize(&s) {
                prop_assert!(!tok.is_empty());
            }
        }
    }
}
