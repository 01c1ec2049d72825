//! src/group.rs
//!
//! Grouping engine: partition verses by word count, pick the majority word
//! count, and keep the members of each group that a [`Matcher`] accepts.

use crate::{
    classify::VerseWeight, context::Context, matcher::Matcher, unicode::word_count, verse::Verse,
};
use indexmap::IndexMap;
use tracing::{debug, warn};

/// Verses keyed by word count, both levels in first-seen order.
pub type WordCountGroups<'a> = IndexMap<usize, Vec<&'a Verse>>;

/// Counters collected during one grouping pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GroupStats {
    pub verses: usize,
    pub groups: usize,
    pub singleton_groups: usize,
    pub retained: usize,
}

/// Result of [`group_by_weight`].
///
/// Every verse appears at most once across `majority` and `other`, and each
/// bucket keeps the input order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GroupedVerses<'a> {
    pub majority_word_count: Option<usize>,
    pub majority: Vec<&'a Verse>,
    pub other: IndexMap<usize, Vec<&'a Verse>>,
    pub stats: GroupStats,
}

impl<'a> GroupedVerses<'a> {
    /// Total number of verses across all buckets.
    pub fn len(&self) -> usize {
        self.majority.len() + self.other.values().map(Vec::len).sum::<usize>()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate all verses, majority first, then other buckets in order.
    pub fn verses(&self) -> impl Iterator<Item = &'a Verse> + '_ {
        self.majority
            .iter()
            .chain(self.other.values().flatten())
            .copied()
    }
}

/// Partition verses by the number of words in their text field.
pub fn word_count_groups(verses: &[Verse]) -> WordCountGroups<'_> {
    let mut groups = WordCountGroups::new();
    for verse in verses {
        groups
            .entry(word_count(verse.text()))
            .or_default()
            .push(verse);
    }
    groups
}

/// The word count shared by the most verses. Ties go to the word count seen
/// first. `None` only for empty input.
pub fn majority_word_count(groups: &WordCountGroups<'_>) -> Option<usize> {
    first_largest(groups.iter().map(|(&count, members)| (count, members.len())))
}

// (word count, group size) pairs in first-seen order.
fn first_largest(sizes: impl IntoIterator<Item = (usize, usize)>) -> Option<usize> {
    let mut best: Option<(usize, usize)> = None;
    for (count, len) in sizes {
        match best {
            Some((_, size)) if size >= len => {}
            _ => best = Some((count, len)),
        }
    }
    best.map(|(count, _)| count)
}

/// A word-count group with each member's weight, computed once per verse.
#[derive(Default)]
struct WeighedGroup<'a> {
    members: Vec<&'a Verse>,
    weights: Vec<VerseWeight>,
}

/// Find the verses that share word count, letter counts and diacritic
/// pattern with some other verse, per `matcher`.
///
/// Groups of one verse are dropped before matching. Matches from the
/// majority word count go to `majority`; the rest go to `other` when at least
/// two verses of the group qualify. Empty input gives an empty result.
#[tracing::instrument(skip_all, fields(matcher = matcher.name(), script = %ctx.script))]
pub fn group_by_weight<'a>(
    verses: &'a [Verse],
    ctx: &Context,
    matcher: &dyn Matcher,
) -> GroupedVerses<'a> {
    let mut result = GroupedVerses::default();
    result.stats.verses = verses.len();

    let mut groups: IndexMap<usize, WeighedGroup<'a>> = IndexMap::new();
    for verse in verses {
        let weight = VerseWeight::of(verse.text(), &ctx.alphabet);
        let group = groups.entry(weight.word_count).or_default();
        group.members.push(verse);
        group.weights.push(weight);
    }

    let Some(majority) = first_largest(groups.iter().map(|(&c, g)| (c, g.members.len()))) else {
        warn!("no verses to group");
        return result;
    };
    result.majority_word_count = Some(majority);
    result.stats.groups = groups.len();

    for (count, WeighedGroup { members, weights }) in groups {
        if members.len() < 2 {
            result.stats.singleton_groups += 1;
            continue;
        }

        // Indices a matcher reports past the group's end are ignored.
        let kept: Vec<&Verse> = matcher
            .retain(&weights)
            .into_iter()
            .filter_map(|i| members.get(i).copied())
            .collect();
        debug!(
            word_count = count,
            members = members.len(),
            kept = kept.len(),
            "group matched"
        );

        if count == majority {
            result.stats.retained += kept.len();
            result.majority.extend(kept);
        } else if kept.len() >= 2 {
            result.stats.retained += kept.len();
            result.other.insert(count, kept);
        }
    }

    debug!(stats = ?result.stats, "grouping done");
    result
}
