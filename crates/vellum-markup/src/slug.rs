//! Topic slugs - canonical lookup keys derived from free-form topic names.

/// Separator substituted for every character a slug cannot carry.
pub const SLUG_SEPARATOR: char = '-';

/// Derive the canonical topic slug for a free-form topic string.
///
/// The input is Unicode-lowercased; every resulting character outside
/// `a-z` becomes [`SLUG_SEPARATOR`]. The function is total (any string,
/// including the empty string, produces a slug) and idempotent: a slug
/// maps to itself.
///
/// Slugs double as the `#d` lookup value on the relay network and as the
/// `/wiki/<slug>` path segment.
pub fn topic_slug(input: &str) -> String {
    input
        .chars()
        .flat_map(char::to_lowercase)
        .map(|c| {
            if c.is_ascii_lowercase() {
                c
            } else {
                SLUG_SEPARATOR
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn lowercases_and_separates() {
        assert_eq!(topic_slug("Foo Bar"), "foo-bar");
        assert_eq!(topic_slug("Rust 2021!"), "rust------");
    }

    #[test]
    fn empty_input() {
        assert_eq!(topic_slug(""), "");
    }

    #[test]
    fn already_canonical_is_unchanged() {
        assert_eq!(topic_slug("foo-bar"), "foo-bar");
    }

    #[test]
    fn non_ascii_becomes_separator() {
        assert_eq!(topic_slug("caf\u{e9}"), "caf-");
        assert_eq!(topic_slug("\u{65e5}\u{672c}"), "--");
    }

    proptest! {
        #[test]
        fn idempotent(s in ".*") {
            let once = topic_slug(&s);
            prop_assert_eq!(topic_slug(&once), once);
        }

        #[test]
        fn output_charset(s in ".*") {
            let slug = topic_slug(&s);
            prop_assert!(slug
                .chars()
                .all(|c| c.is_ascii_lowercase() || c == SLUG_SEPARATOR));
        }
    }
}
