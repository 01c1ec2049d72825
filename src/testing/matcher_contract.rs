use crate::{
    classify::VerseWeight,
    context::Context,
    matcher::Matcher,
    script::ARA,
};

/// Assert that a matcher satisfies the universal grouping contracts.
///
/// 1. `empty_group_retains_nothing`
/// 2. `indices_ascending_and_in_bounds`
/// 3. `identical_weights_all_retained` → a group of clones always qualifies
/// 4. `stable_under_reapplication` → matching the retained subset keeps it all
/// 5. `order_independent` → reversing the group retains the mirrored indices
#[macro_export]
macro_rules! assert_matcher_contract {
    ($matcher:expr) => {
        $crate::testing::matcher_contract::empty_group_retains_nothing(&$matcher);
        $crate::testing::matcher_contract::indices_ascending_and_in_bounds(&$matcher);
        $crate::testing::matcher_contract::identical_weights_all_retained(&$matcher);
        $crate::testing::matcher_contract::stable_under_reapplication(&$matcher);
        $crate::testing::matcher_contract::order_independent(&$matcher);
    };
}

/// Word-count groups drawn from chapter 12, each entry sharing a word count.
const SAMPLE_GROUPS: &[&[&str]] = &[
    &["قَالَ", "قُلْ", "قَالَ", "الر"],
    &["قَالَ يَا", "قَالَ يَا", "بَلْ سَوَّلَتْ", "قُلْ يَا"],
    &[
        "نَحْنُ نَقُصُّ عَلَيْكَ",
        "إِنَّا أَنزَلْنَاهُ قُرْآنًا",
        "نَحْنُ نَقُصُّ عَلَيْكَ",
        "إِنَّا أَنزَلْنَاهُ قُرْآنًا",
        "وَجَاءُوا أَبَاهُمْ عِشَاءً",
    ],
    &["الر", "المر"],
];

fn sample_weights() -> Vec<Vec<VerseWeight>> {
    let ctx = Context::new(ARA).unwrap();
    SAMPLE_GROUPS
        .iter()
        .map(|group| {
            group
                .iter()
                .map(|text| VerseWeight::of(text, &ctx.alphabet))
                .collect()
        })
        .collect()
}

pub fn empty_group_retains_nothing<M: Matcher>(matcher: &M) {
    assert!(
        matcher.retain(&[]).is_empty(),
        "{}: empty group produced members",
        matcher.name()
    );
}

pub fn indices_ascending_and_in_bounds<M: Matcher>(matcher: &M) {
    for weights in sample_weights() {
        let kept = matcher.retain(&weights);
        assert!(
            kept.windows(2).all(|w| w[0] < w[1]),
            "{}: indices not strictly ascending: {kept:?}",
            matcher.name()
        );
        assert!(
            kept.iter().all(|&i| i < weights.len()),
            "{}: index out of bounds",
            matcher.name()
        );
    }
}

pub fn identical_weights_all_retained<M: Matcher>(matcher: &M) {
    for weights in sample_weights() {
        let clones = vec![weights[0].clone(); 3];
        assert_eq!(
            matcher.retain(&clones),
            [0, 1, 2],
            "{}: identical weights not all retained",
            matcher.name()
        );
    }
}

pub fn stable_under_reapplication<M: Matcher>(matcher: &M) {
    for weights in sample_weights() {
        let kept: Vec<VerseWeight> = matcher
            .retain(&weights)
            .into_iter()
            .map(|i| weights[i].clone())
            .collect();
        let again = matcher.retain(&kept);
        assert_eq!(
            again,
            (0..kept.len()).collect::<Vec<_>>(),
            "{}: retained subset is not stable",
            matcher.name()
        );
    }
}

pub fn order_independent<M: Matcher>(matcher: &M) {
    for weights in sample_weights() {
        let n = weights.len();
        let forward = matcher.retain(&weights);
        let reversed: Vec<VerseWeight> = weights.iter().rev().cloned().collect();
        let mut mirrored: Vec<usize> = matcher
            .retain(&reversed)
            .into_iter()
            .map(|i| n - 1 - i)
            .collect();
        mirrored.sort_unstable();
        assert_eq!(
            forward, mirrored,
            "{}: result depends on member order",
            matcher.name()
        );
    }
}

#[cfg(test)]
mod tests {
    use crate::matcher::{LiteralMatch, Matcher, TwinMatch};

    #[test]
    fn samples_contain_twins_and_loners() {
        let weights = super::sample_weights();
        assert_eq!(TwinMatch.retain(&weights[2]), [0, 1, 2, 3]);
        assert_eq!(LiteralMatch.retain(&weights[2]), [0, 1, 2, 3, 4]);
    }
}
