mod prop_tests {
    use crate::{
        ARA, Context, LiteralMatch, Matcher, TwinMatch, Verse, extract_diacritics,
        group::{group_by_weight, majority_word_count, word_count_groups},
    };
    use proptest::prelude::*;
    use std::collections::{HashMap, HashSet};

    const VOCAB: &[&str] = &[
        "قَالَ", "كَانَ", "قُلْ", "يَا", "هُوَ", "بَلْ", "سَوَّلَتْ", "الر", "عِشَاءً", "abc",
    ];

    const MARKS: &[char] = &[
        '\u{064B}', '\u{064C}', '\u{064D}', '\u{064E}', '\u{064F}', '\u{0650}', '\u{0651}',
        '\u{0652}',
    ];

    fn chapter() -> impl Strategy<Value = Vec<Verse>> {
        prop::collection::vec(
            prop::collection::vec(prop::sample::select(VOCAB), 0..5),
            0..30,
        )
        .prop_map(|texts| {
            texts
                .iter()
                .enumerate()
                .map(|(i, words)| {
                    Verse::parse(format!("12|{}|{}", i + 1, words.join(" ")), i + 1).unwrap()
                })
                .collect()
        })
    }

    fn matchers() -> [&'static dyn Matcher; 2] {
        [&LiteralMatch, &TwinMatch]
    }

    proptest! {
        #[test]
        fn every_output_verse_once_and_from_input(verses in chapter()) {
            let ctx = Context::new(ARA).unwrap();
            for matcher in matchers() {
                let grouped = group_by_weight(&verses, &ctx, matcher);
                let mut seen = HashSet::new();
                for v in grouped.verses() {
                    prop_assert!(verses.contains(v));
                    prop_assert!(seen.insert(v.number()), "duplicate verse {}", v.number());
                }
            }
        }

        #[test]
        fn buckets_preserve_input_order(verses in chapter()) {
            let ctx = Context::new(ARA).unwrap();
            let grouped = group_by_weight(&verses, &ctx, &TwinMatch);
            let position = |v: &Verse| verses.iter().position(|x| x == v).unwrap();
            for bucket in std::iter::once(&grouped.majority).chain(grouped.other.values()) {
                let idx: Vec<usize> = bucket.iter().map(|&v| position(v)).collect();
                prop_assert!(idx.windows(2).all(|w| w[0] < w[1]));
            }
        }

        #[test]
        fn grouping_idempotent(verses in chapter()) {
            let ctx = Context::new(ARA).unwrap();
            for matcher in matchers() {
                prop_assert_eq!(
                    group_by_weight(&verses, &ctx, matcher),
                    group_by_weight(&verses, &ctx, matcher)
                );
            }
        }

        #[test]
        fn unique_word_counts_never_reported(verses in chapter()) {
            let ctx = Context::new(ARA).unwrap();
            let groups = word_count_groups(&verses);
            let lonely: HashSet<&str> = groups
                .values()
                .filter(|g| g.len() == 1)
                .map(|g| g[0].number())
                .collect();
            for matcher in matchers() {
                let grouped = group_by_weight(&verses, &ctx, matcher);
                prop_assert!(grouped.verses().all(|v| !lonely.contains(v.number())));
                prop_assert!(grouped.other.values().all(|b| b.len() >= 2));
            }
        }

        #[test]
        fn literal_keeps_all_multi_verse_groups(verses in chapter()) {
            let ctx = Context::new(ARA).unwrap();
            let expected: usize = word_count_groups(&verses)
                .values()
                .filter(|g| g.len() >= 2)
                .map(Vec::len)
                .sum();
            prop_assert_eq!(group_by_weight(&verses, &ctx, &LiteralMatch).len(), expected);
        }

        #[test]
        fn majority_is_first_most_frequent(verses in chapter()) {
            let groups = word_count_groups(&verses);
            let Some(majority) = majority_word_count(&groups) else {
                prop_assert!(verses.is_empty());
                return Ok(());
            };
            let mut freq: HashMap<usize, usize> = HashMap::new();
            let mut first_seen = Vec::new();
            for v in &verses {
                let n = crate::unicode::word_count(v.text());
                if !freq.contains_key(&n) {
                    first_seen.push(n);
                }
                *freq.entry(n).or_default() += 1;
            }
            let top = freq.values().copied().max().unwrap();
            let expected = first_seen.into_iter().find(|n| freq[n] == top).unwrap();
            prop_assert_eq!(majority, expected);
        }

        #[test]
        fn engine_majority_agrees_with_word_count_groups(verses in chapter()) {
            let ctx = Context::new(ARA).unwrap();
            let groups = word_count_groups(&verses);
            let grouped = group_by_weight(&verses, &ctx, &LiteralMatch);
            prop_assert_eq!(grouped.majority_word_count, majority_word_count(&groups));
            prop_assert_eq!(grouped.stats.groups, groups.len());
            for (count, bucket) in &grouped.other {
                prop_assert!(bucket.iter().all(|&v| groups[count].contains(&v)));
            }
        }

        #[test]
        fn diacritic_pattern_keeps_order_and_duplicates(
            marks in prop::collection::vec(prop::sample::select(MARKS), 0..40)
        ) {
            let ctx = Context::new(ARA).unwrap();
            let text: String = marks.iter().flat_map(|&m| ['ب', m, ' ']).collect();
            let pattern = extract_diacritics(&text, &ctx.alphabet);
            prop_assert_eq!(pattern.as_slice(), marks.as_slice());
        }
    }
}
