// src/analysis/attribution.rs
//! Dominant-occupation attribution for one coreness shell.

use std::collections::HashMap;

use serde::Serialize;

/// Bucket for members that have none of the dominant tags.
pub const OTHER_BUCKET: &str = "other/unknown";

/// At most this many dominant tags are selected per shell.
pub const MAX_DOMINANT: usize = 2;

/// Dominant tags of a cohort and the per-bucket member counts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Attribution {
    /// Selected tags in priority order.
    pub dominant: Vec<String>,
    /// `(tag, count)` descending by count; ties keep first attribution order.
    pub buckets: Vec<(String, usize)>,
}

/// Counts tag occurrences across members, descending by frequency.
///
/// A member with several tags contributes to each of them. Ties keep the order
/// in which tags were first seen.
#[must_use]
pub fn tally<'a>(members: &[&'a [String]]) -> Vec<(&'a str, usize)> {
    let mut counts = FirstSeenCounter::default();
    for tags in members {
        for tag in *tags {
            counts.add(tag);
        }
    }
    counts.into_descending()
}

/// Picks the shortest prefix of `tally` (at most [`MAX_DOMINANT`] tags) whose
/// cumulative count reaches half of all tag occurrences.
#[must_use]
pub fn select_dominant(tally: &[(&str, usize)]) -> Vec<String> {
    let total: usize = tally.iter().map(|(_, c)| c).sum();
    let mut running = 0usize;
    let mut dominant = Vec::new();
    for &(tag, count) in tally {
        if running * 2 >= total || dominant.len() >= MAX_DOMINANT {
            break;
        }
        dominant.push(tag.to_string());
        running += count;
    }
    dominant
}

/// Attributes every member to its highest-priority dominant tag, or to
/// [`OTHER_BUCKET`] when it has none of them.
#[must_use]
pub fn attribute(members: &[&[String]]) -> Attribution {
    let dominant = select_dominant(&tally(members));

    let mut buckets = FirstSeenCounter::default();
    for tags in members {
        let bucket = dominant
            .iter()
            .find(|d| tags.contains(*d))
            .map_or(OTHER_BUCKET, String::as_str);
        buckets.add(bucket);
    }

    Attribution {
        buckets: buckets
            .into_descending()
            .into_iter()
            .map(|(tag, count)| (tag.to_string(), count))
            .collect(),
        dominant,
    }
}

#[derive(Default)]
struct FirstSeenCounter<'a> {
    order: Vec<(&'a str, usize)>,
    index: HashMap<&'a str, usize>,
}

impl<'a> FirstSeenCounter<'a> {
    fn add(&mut self, key: &'a str) {
        let slot = *self.index.entry(key).or_insert_with(|| {
            self.order.push((key, 0));
            self.order.len() - 1
        });
        self.order[slot].1 += 1;
    }

    fn into_descending(mut self) -> Vec<(&'a str, usize)> {
        self.order.sort_by(|a, b| b.1.cmp(&a.1));
        self.order
    }
}
