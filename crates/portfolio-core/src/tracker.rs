//! Active-section selection
//!
//! `SectionTracker` is the pure state machine behind the scroll spy. It knows
//! nothing about the DOM: batches of [`VisibilityEntry`] go in, the most
//! visible [`Region`] comes out.

use crate::region::Region;
use crate::score::{ScoreTable, VisibilityEntry};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct SectionTracker {
    scores: ScoreTable,
    active: Region,
}

impl SectionTracker {
    /// Create a tracker with all scores at zero and `default` active
    pub fn new(default: Region) -> Self {
        Self {
            scores: ScoreTable::new(),
            active: default,
        }
    }

    pub fn active(&self) -> Region {
        self.active
    }

    pub fn scores(&self) -> &ScoreTable {
        &self.scores
    }

    /// Apply one observer batch and recompute the active section.
    ///
    /// Every entry overwrites its region's score before the scan. If no
    /// region has a positive score the active section is left alone.
    /// Returns the new active region when it changed.
    pub fn apply_batch(&mut self, entries: &[VisibilityEntry]) -> Option<Region> {
        for entry in entries {
            self.scores.apply(entry);
        }

        let leader = self.scores.leader()?;
        debug!(entries = entries.len(), leader = %leader, "visibility batch applied");
        self.set_active(leader)
    }

    /// Set the active section regardless of scores.
    ///
    /// The override lasts until the next batch recomputes the leader.
    pub fn force_active(&mut self, region: Region) -> Option<Region> {
        self.set_active(region)
    }

    fn set_active(&mut self, region: Region) -> Option<Region> {
        if self.active == region {
            return None;
        }
        self.active = region;
        Some(region)
    }
}

impl Default for SectionTracker {
    fn default() -> Self {
        Self::new(Region::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_initial_active_is_home() {
        let tracker = SectionTracker::default();
        assert_eq!(tracker.active(), Region::Home);
    }

    #[test]
    fn test_batch_sequence() {
        let mut tracker = SectionTracker::default();

        tracker.apply_batch(&[VisibilityEntry::visible(Region::Home, 1.0)]);
        assert_eq!(tracker.active(), Region::Home);

        tracker.apply_batch(&[
            VisibilityEntry::visible(Region::Home, 0.1),
            VisibilityEntry::visible(Region::About, 0.5),
        ]);
        assert_eq!(tracker.active(), Region::About);

        // Only about and experience are updated; home keeps its 0.1, so it leads.
        tracker.apply_batch(&[
            VisibilityEntry::visible(Region::About, 0.0),
            VisibilityEntry::visible(Region::Experience, 0.0),
        ]);
        assert_eq!(tracker.active(), Region::Home);
    }

    #[test]
    fn test_no_positive_score_keeps_last_leader() {
        let mut tracker = SectionTracker::default();
        tracker.apply_batch(&[VisibilityEntry::visible(Region::Home, 1.0)]);
        tracker.apply_batch(&[
            VisibilityEntry::hidden(Region::Home),
            VisibilityEntry::visible(Region::About, 0.5),
        ]);
        assert_eq!(tracker.active(), Region::About);

        tracker.apply_batch(&[
            VisibilityEntry::visible(Region::About, 0.0),
            VisibilityEntry::visible(Region::Experience, 0.0),
        ]);
        assert_eq!(tracker.active(), Region::About);
    }

    #[test]
    fn test_all_zero_leaves_active_unchanged() {
        let mut tracker = SectionTracker::default();
        tracker.apply_batch(&[VisibilityEntry::visible(Region::About, 0.5)]);
        assert_eq!(tracker.active(), Region::About);

        let changed = tracker.apply_batch(&[
            VisibilityEntry::hidden(Region::About),
            VisibilityEntry::hidden(Region::Experience),
        ]);
        assert_eq!(changed, None);
        assert_eq!(tracker.active(), Region::About);
    }

    #[test]
    fn test_apply_batch_reports_changes_only() {
        let mut tracker = SectionTracker::default();
        assert_eq!(
            tracker.apply_batch(&[VisibilityEntry::visible(Region::Home, 0.65)]),
            None
        );
        assert_eq!(
            tracker.apply_batch(&[VisibilityEntry::visible(Region::Skills, 0.9)]),
            Some(Region::Skills)
        );
    }

    #[test]
    fn test_force_active_is_overwritten_by_next_batch() {
        let mut tracker = SectionTracker::default();
        tracker.apply_batch(&[VisibilityEntry::visible(Region::Home, 0.5)]);

        tracker.force_active(Region::Contact);
        assert_eq!(tracker.active(), Region::Contact);
        assert_eq!(tracker.scores().get(Region::Contact), 0.0);

        tracker.apply_batch(&[VisibilityEntry::visible(Region::Home, 0.35)]);
        assert_eq!(tracker.active(), Region::Home);
    }

    #[test]
    fn test_empty_batch_after_force_keeps_override() {
        let mut tracker = SectionTracker::default();
        tracker.force_active(Region::Projects);
        tracker.apply_batch(&[]);
        assert_eq!(tracker.active(), Region::Projects);
    }
}
