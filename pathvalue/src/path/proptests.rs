//! Property-based tests for path values.

use super::PathValue;
use crate::config::PathStyle;
use proptest::prelude::*;

fn segment_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_-]{1,10}(\\.[a-z]{1,4})?"
}

// Segments mixed with navigation elements
fn navigating_segment_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => segment_strategy(),
        1 => Just(".".to_string()),
        1 => Just("..".to_string()),
    ]
}

fn separator_strategy() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("/"), Just("\\"), Just("//")]
}

fn raw_path_strategy() -> impl Strategy<Value = String> {
    (
        any::<bool>(),
        prop::collection::vec((navigating_segment_strategy(), separator_strategy()), 0..8),
    )
        .prop_map(|(rooted, parts)| {
            let mut raw = String::new();
            if rooted {
                raw.push('/');
            }
            for (segment, separator) in parts {
                raw.push_str(&segment);
                raw.push_str(separator);
            }
            raw
        })
}

fn plain_path_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(segment_strategy(), 1..6)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // normalize(normalize(p)) == normalize(p)
    #[test]
    fn normalize_idempotent(raw in raw_path_strategy()) {
        let path = PathValue::parse(&raw);
        if let Ok(once) = path.normalize() {
            let twice = once.normalize().unwrap();
            prop_assert_eq!(once.segments(), twice.segments());
            prop_assert_eq!(once.is_rooted(), twice.is_rooted());
        }
    }

    // Normalized segments never contain "." and only lead with ".."
    #[test]
    fn normalized_segments_are_clean(raw in raw_path_strategy()) {
        if let Ok(normalized) = PathValue::parse(&raw).normalize() {
            let first_plain = normalized
                .segments()
                .iter()
                .position(|s| s != "..")
                .unwrap_or(normalized.len());
            for (i, segment) in normalized.segments().iter().enumerate() {
                prop_assert_ne!(segment.as_str(), ".");
                if i >= first_plain {
                    prop_assert_ne!(segment.as_str(), "..");
                }
            }
            if normalized.is_rooted() {
                prop_assert_eq!(first_plain, 0);
            }
        }
    }

    // Parsing the POSIX rendering of a normalized rooted path gives it back
    #[test]
    fn posix_round_trip(raw in raw_path_strategy()) {
        let path = PathValue::parse(&format!("/{raw}"));
        if let Ok(normalized) = path.normalize() {
            let reparsed = PathValue::parse(&normalized.to_posix_path()).normalize().unwrap();
            prop_assert_eq!(reparsed.segments(), normalized.segments());
            prop_assert!(reparsed.is_rooted());
        }
    }

    // Separators never leak into segments
    #[test]
    fn segments_have_no_separators(raw in raw_path_strategy()) {
        for segment in PathValue::parse(&raw).segments() {
            prop_assert!(!segment.is_empty());
            prop_assert!(!segment.contains(super::SEPARATORS));
        }
    }

    // Equality agrees with the normalized rendering
    #[test]
    fn equality_matches_normalized_form(a in raw_path_strategy(), b in raw_path_strategy()) {
        let (pa, pb) = (PathValue::parse(&a), PathValue::parse(&b));
        if let (Ok(na), Ok(nb)) = (pa.normalize(), pb.normalize()) {
            prop_assert_eq!(pa == pb, na.to_posix_path() == nb.to_posix_path());
        }
    }

    // Separator style does not change the parsed segments
    #[test]
    fn separator_style_is_irrelevant(parts in plain_path_strategy()) {
        let posix = PathValue::parse(&parts.join("/"));
        let windows = PathValue::parse(&parts.join("\\"));
        prop_assert_eq!(posix.segments(), windows.segments());
        prop_assert_eq!(posix, windows);
    }

    // unroot inverts append for plain segments
    #[test]
    fn unroot_inverts_append(root in plain_path_strategy(), rest in plain_path_strategy()) {
        let root = PathValue::parse(&format!("/{}", root.join("/")));
        let rest = PathValue::parse(&rest.join("/"));
        let full = root.append(&rest);
        let stripped = full.unroot(&root).unwrap();
        prop_assert_eq!(stripped.segments(), rest.segments());
        prop_assert!(!stripped.is_rooted());
    }

    // A pure descent relative path navigates back to the target
    #[test]
    fn relative_descent_navigates_back(
        base in plain_path_strategy(),
        rest in plain_path_strategy(),
    ) {
        let source = PathValue::parse(&format!("/{}", base.join("/")));
        let target = source.append(&PathValue::parse(&rest.join("/")));
        let relative = target.relative_to(&source).unwrap();
        prop_assert_eq!(source.navigate(&relative).unwrap(), target);
    }

    // Extensions are lower case and never contain a separator
    #[test]
    fn extension_is_lower_case(parts in plain_path_strategy()) {
        let path = PathValue::parse(&parts.join("/"));
        for style in [PathStyle::Posix, PathStyle::Windows] {
            if let Some(ext) = path.extension(style) {
                prop_assert_eq!(ext.to_lowercase(), ext.clone());
                prop_assert!(!ext.contains(['/', '\\']));
            }
        }
    }
}
