//! Ordered grouping of characters by normalized brightness.
use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};
use std::ops::Bound;

/// Totally ordered wrapper around a finite brightness value.
#[derive(Clone, Copy, Debug)]
pub struct BrightnessKey(f64);

impl BrightnessKey {
    /// Folds `-0.0` onto `0.0` so both address the same bucket.
    pub fn new(value: f64) -> Self {
        Self(if value == 0.0 { 0.0 } else { value })
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl PartialEq for BrightnessKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for BrightnessKey {}

impl PartialOrd for BrightnessKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BrightnessKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Clone, Debug, Default)]
pub struct BrightnessIndex {
    by_value: BTreeMap<BrightnessKey, BTreeSet<char>>,
}

impl BrightnessIndex {
    pub fn build<'a>(entries: impl IntoIterator<Item = (&'a char, &'a f64)>) -> Self {
        let mut by_value: BTreeMap<BrightnessKey, BTreeSet<char>> = BTreeMap::new();
        for (&c, &value) in entries {
            by_value.entry(BrightnessKey::new(value)).or_default().insert(c);
        }
        Self { by_value }
    }

    pub fn is_empty(&self) -> bool {
        self.by_value.is_empty()
    }

    /// Number of distinct brightness values.
    pub fn len(&self) -> usize {
        self.by_value.len()
    }

    /// Smallest character whose brightness equals `value` exactly.
    pub fn exact(&self, value: f64) -> Option<char> {
        self.by_value
            .get(&BrightnessKey::new(value))
            .and_then(|set| set.first().copied())
    }

    /// Smallest character at the brightness value closest to `value`.
    ///
    /// Equally distant neighbours resolve to the one whose smallest
    /// character has the lower code point.
    pub fn nearest(&self, value: f64) -> Option<char> {
        let key = BrightnessKey::new(value);
        if let Some(c) = self.exact(value) {
            return Some(c);
        }
        let below = self
            .by_value
            .range((Bound::Unbounded, Bound::Excluded(key)))
            .next_back();
        let above = self
            .by_value
            .range((Bound::Excluded(key), Bound::Unbounded))
            .next();
        let pick = |(k, set): (&BrightnessKey, &BTreeSet<char>)| {
            set.first().map(|&c| ((k.value() - value).abs(), c))
        };
        match (below.and_then(pick), above.and_then(pick)) {
            (Some((db, cb)), Some((da, ca))) => {
                let best = match db.total_cmp(&da) {
                    Ordering::Less => cb,
                    Ordering::Greater => ca,
                    Ordering::Equal => cb.min(ca),
                };
                Some(best)
            }
            (Some((_, c)), None) | (None, Some((_, c))) => Some(c),
            (None, None) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index(pairs: &[(char, f64)]) -> BrightnessIndex {
        let map: BTreeMap<char, f64> = pairs.iter().copied().collect();
        BrightnessIndex::build(map.iter())
    }

    #[test]
    fn exact_match_prefers_smallest_char() {
        let idx = index(&[('q', 0.5), ('b', 0.5), ('z', 0.0)]);
        assert_eq!(idx.len(), 2);
        assert_eq!(idx.exact(0.5), Some('b'));
        assert_eq!(idx.exact(-0.0), Some('z'));
        assert_eq!(idx.exact(0.25), None);
    }

    #[test]
    fn nearest_picks_closest_value() {
        let idx = index(&[('a', 0.0), ('m', 0.3), ('k', 0.8), ('z', 1.0)]);
        assert_eq!(idx.nearest(0.5), Some('m'));
        assert_eq!(idx.nearest(0.6), Some('k'));
        assert_eq!(idx.nearest(0.95), Some('z'));
    }

    #[test]
    fn equidistant_values_prefer_lower_min_char() {
        let idx = index(&[('z', 0.0), ('a', 1.0)]);
        assert_eq!(idx.nearest(0.5), Some('a'));
        let idx = index(&[('a', 0.0), ('z', 1.0)]);
        assert_eq!(idx.nearest(0.5), Some('a'));
    }

    #[test]
    fn out_of_range_values_clamp_to_ends() {
        let idx = index(&[('a', 0.0), ('b', 1.0)]);
        assert_eq!(idx.nearest(-3.0), Some('a'));
        assert_eq!(idx.nearest(7.0), Some('b'));
        let empty = BrightnessIndex::default();
        assert!(empty.is_empty());
        assert_eq!(empty.nearest(0.5), None);
        assert!(!idx.is_empty());
    }
}
