use std::collections::HashSet;

pub const REVEAL_CLASS: &str = "fade-in-up";

/// Attribute carrying the identifier the viewport watcher keys on.
pub const REVEAL_ID_ATTR: &str = "data-reveal-id";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    /// First time in view: apply the class and stop watching.
    Reveal,
    AlreadyRevealed,
    NotVisible,
}

/// Set of elements that have already been animated in.
///
/// Membership only grows. An element that has fired never fires again, no
/// matter how many intersection events arrive for it afterwards.
#[derive(Debug, Default)]
pub struct RevealTracker {
    revealed: HashSet<String>,
}

impl RevealTracker {
    pub fn observe(&mut self, id: &str, is_intersecting: bool) -> RevealOutcome {
        if self.revealed.contains(id) {
            return RevealOutcome::AlreadyRevealed;
        }
        if !is_intersecting {
            return RevealOutcome::NotVisible;
        }
        self.revealed.insert(id.to_string());
        RevealOutcome::Reveal
    }

    pub fn is_revealed(&self, id: &str) -> bool {
        self.revealed.contains(id)
    }

    pub fn len(&self) -> usize {
        self.revealed.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn fires_once_on_first_entry() {
        let mut tracker = RevealTracker::default();
        assert_eq!(tracker.observe("project-a", false), RevealOutcome::NotVisible);
        assert_eq!(tracker.observe("project-a", true), RevealOutcome::Reveal);
        assert_eq!(tracker.observe("project-a", true), RevealOutcome::AlreadyRevealed);
        assert!(tracker.is_revealed("project-a"));
        assert!(!tracker.is_revealed("project-b"));
    }

    proptest! {
        #[test]
        fn revealed_elements_stay_revealed(events in proptest::collection::vec((0..4usize, any::<bool>()), 1..64)) {
            let mut tracker = RevealTracker::default();
            let mut fired = vec![0u32; 4];
            for (idx, visible) in events {
                let id = format!("item-{}", idx);
                let was_revealed = tracker.is_revealed(&id);
                if tracker.observe(&id, visible) == RevealOutcome::Reveal {
                    fired[idx] += 1;
                }
                if was_revealed {
                    prop_assert!(tracker.is_revealed(&id));
                }
            }
            prop_assert!(fired.iter().all(|count| *count <= 1));
            prop_assert_eq!(tracker.len() as u32, fired.iter().sum::<u32>());
        }
    }
}
