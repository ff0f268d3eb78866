use bee_types::{SelectionMode, Word};
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

/// Mode-dependent cursor for the selector. Only meaningful relative to the
/// active word list it was built against; callers must reset it whenever the
/// mode or the active set changes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SelectionState {
    /// Sequential mode: next lookup position. Kept bounded by storing the
    /// wrapped lookup index plus one, which is observably identical to an
    /// unbounded cursor.
    pub index: usize,
    /// No-repeats mode: ids still pending in the current shuffled cycle.
    pub queue: Vec<String>,
}

impl SelectionState {
    pub fn reset(&mut self) {
        self.index = 0;
        self.queue.clear();
    }
}

/// Picks the id of the next word to present and the state to carry into the
/// following turn.
///
/// An empty active list yields `None` with the state unchanged; callers must
/// treat that as "no word available" and disable attempt submission.
pub fn select_next<R: Rng + ?Sized>(
    active: &[Word],
    mode: SelectionMode,
    state: SelectionState,
    rng: &mut R,
) -> (Option<String>, SelectionState) {
    if active.is_empty() {
        return (None, state);
    }

    match mode {
        SelectionMode::Random => {
            // Each pick is independent; immediate repeats are possible.
            let id = active[rng.random_range(0..active.len())].id.clone();
            (Some(id), state)
        }
        SelectionMode::Sequential => {
            let lookup = state.index % active.len();
            let id = active[lookup].id.clone();
            (
                Some(id),
                SelectionState {
                    index: lookup + 1,
                    queue: state.queue,
                },
            )
        }
        SelectionMode::NoRepeats => {
            let mut queue = state.queue;
            if queue.is_empty() {
                queue = active.iter().map(|w| w.id.clone()).collect();
                queue.shuffle(rng);
            }
            let id = queue.remove(0);
            // An emptied queue stays empty; the next call reshuffles.
            (
                Some(id),
                SelectionState {
                    index: state.index,
                    queue,
                },
            )
        }
    }
}
