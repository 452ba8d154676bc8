//! Per-region visibility scores
//!
//! Scores live in a fixed table indexed by [`Region::index`], so finding the
//! most visible region is a single pass over eight slots.

use crate::region::Region;
use serde::{Deserialize, Serialize};

/// One intersection notification for a region
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VisibilityEntry {
    pub region: Region,
    pub is_intersecting: bool,
    /// Fraction of the region inside the adjusted viewport
    pub intersection_ratio: f64,
}

impl VisibilityEntry {
    pub fn new(region: Region, is_intersecting: bool, intersection_ratio: f64) -> Self {
        Self {
            region,
            is_intersecting,
            intersection_ratio,
        }
    }

    /// Entry for a region that is intersecting at `ratio`
    pub fn visible(region: Region, ratio: f64) -> Self {
        Self::new(region, true, ratio)
    }

    /// Entry for a region that has left the viewport
    pub fn hidden(region: Region) -> Self {
        Self::new(region, false, 0.0)
    }

    /// Score this entry assigns to its region
    pub fn score(&self) -> f64 {
        if self.is_intersecting {
            clamp_ratio(self.intersection_ratio)
        } else {
            0.0
        }
    }
}

fn clamp_ratio(ratio: f64) -> f64 {
    if ratio.is_nan() {
        0.0
    } else {
        ratio.clamp(0.0, 1.0)
    }
}

/// Visibility score for every region
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScoreTable {
    scores: [f64; Region::COUNT],
}

impl ScoreTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, region: Region) -> f64 {
        self.scores[region.index()]
    }

    /// Replace the region's score (scores are never merged)
    pub fn set(&mut self, region: Region, score: f64) {
        self.scores[region.index()] = clamp_ratio(score);
    }

    pub fn apply(&mut self, entry: &VisibilityEntry) {
        self.set(entry.region, entry.score());
    }

    pub fn reset(&mut self) {
        self.scores = [0.0; Region::COUNT];
    }

    /// Region with the strictly greatest positive score.
    ///
    /// Equal maxima resolve to the earliest region in document order.
    /// Returns `None` when every score is zero.
    pub fn leader(&self) -> Option<Region> {
        let mut best: Option<(Region, f64)> = None;
        for region in Region::ALL {
            let score = self.get(region);
            if score <= 0.0 {
                continue;
            }
            match best {
                Some((_, top)) if score <= top => {}
                _ => best = Some((region, score)),
            }
        }
        best.map(|(region, _)| region)
    }

    /// `(region, score)` pairs in document order
    pub fn iter(&self) -> impl Iterator<Item = (Region, f64)> + '_ {
        Region::ALL.iter().map(move |&region| (region, self.get(region)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_table_is_zeroed() {
        let table = ScoreTable::new();
        assert!(table.iter().all(|(_, score)| score == 0.0));
        assert_eq!(table.leader(), None);
    }

    #[test]
    fn test_hidden_entry_scores_zero() {
        let entry = VisibilityEntry::new(Region::About, false, 0.8);
        assert_eq!(entry.score(), 0.0);
    }

    #[test]
    fn test_ratio_is_clamped() {
        assert_eq!(VisibilityEntry::visible(Region::Home, 1.7).score(), 1.0);
        assert_eq!(VisibilityEntry::visible(Region::Home, -0.2).score(), 0.0);
        assert_eq!(VisibilityEntry::visible(Region::Home, f64::NAN).score(), 0.0);
    }

    #[test]
    fn test_set_replaces_score() {
        let mut table = ScoreTable::new();
        table.set(Region::Skills, 0.6);
        table.set(Region::Skills, 0.2);
        assert_eq!(table.get(Region::Skills), 0.2);
    }

    #[test]
    fn test_leader_picks_max() {
        let mut table = ScoreTable::new();
        table.set(Region::Home, 0.1);
        table.set(Region::About, 0.5);
        table.set(Region::Experience, 0.35);
        assert_eq!(table.leader(), Some(Region::About));
    }

    #[test]
    fn test_leader_tie_goes_to_document_order() {
        let mut table = ScoreTable::new();
        table.set(Region::Contact, 0.5);
        table.set(Region::Projects, 0.5);
        assert_eq!(table.leader(), Some(Region::Projects));
    }

    #[test]
    fn test_reset() {
        let mut table = ScoreTable::new();
        table.set(Region::Education, 0.65);
        table.reset();
        assert_eq!(table.leader(), None);
    }
}
