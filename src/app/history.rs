// SPDX-License-Identifier: MPL-2.0
//! In-memory navigation history.
//!
//! Before every state-changing transition the controller pushes the current
//! [`State`] here. Going back restores the newest snapshot verbatim and moves
//! the state being left onto the forward stack; pushing a new snapshot clears
//! the forward stack.
//!
//! Snapshots are stored serialized in CBOR (Concise Binary Object
//! Representation), so a history entry is an opaque payload that cannot alias
//! live state. Restoring only checks that the payload decodes.

use crate::config::DEFAULT_HISTORY_ENTRIES;
use crate::domain::gallery::State;
use std::collections::VecDeque;
use std::fmt;

/// Errors raised while encoding or decoding a snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryError {
    Encode(String),
    Decode(String),
}

impl fmt::Display for HistoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HistoryError::Encode(msg) => write!(f, "Snapshot encoding failed: {msg}"),
            HistoryError::Decode(msg) => write!(f, "Snapshot decoding failed: {msg}"),
        }
    }
}

impl std::error::Error for HistoryError {}

/// A serialized [`State`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot(Vec<u8>);

impl Snapshot {
    /// Serializes `state`.
    pub fn capture(state: &State) -> Result<Self, HistoryError> {
        let mut bytes = Vec::new();
        ciborium::into_writer(state, &mut bytes)
            .map_err(|e| HistoryError::Encode(e.to_string()))?;
        Ok(Self(bytes))
    }

    #[cfg(test)]
    pub(crate) fn from_bytes(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// Deserializes the stored state.
    pub fn restore(&self) -> Result<State, HistoryError> {
        ciborium::from_reader(self.0.as_slice()).map_err(|e| HistoryError::Decode(e.to_string()))
    }
}

/// Direction of a history navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Back,
    Forward,
}

/// Back and forward stacks of state snapshots.
#[derive(Debug, Clone)]
pub struct History {
    back: VecDeque<Snapshot>,
    forward: Vec<Snapshot>,
    max_entries: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_ENTRIES)
    }
}

impl History {
    /// Creates an empty history keeping at most `max_entries` back snapshots.
    #[must_use]
    pub fn new(max_entries: usize) -> Self {
        Self {
            back: VecDeque::new(),
            forward: Vec::new(),
            max_entries: max_entries.max(1),
        }
    }

    /// Records `state` as the entry to return to, and clears forward history.
    ///
    /// Returns `false` if the state could not be serialized; history is then
    /// left untouched.
    pub fn push(&mut self, state: &State) -> bool {
        match Snapshot::capture(state) {
            Ok(snapshot) => {
                self.push_snapshot(snapshot);
                true
            }
            Err(err) => {
                tracing::warn!(error = %err, "history entry dropped");
                false
            }
        }
    }

    /// Records an already serialized snapshot.
    pub fn push_snapshot(&mut self, snapshot: Snapshot) {
        self.forward.clear();
        self.back.push_back(snapshot);
        while self.back.len() > self.max_entries {
            self.back.pop_front();
        }
    }

    /// Steps back: returns the newest recorded state and remembers `current`
    /// for [`History::forward`].
    pub fn back(&mut self, current: &State) -> Option<State> {
        self.navigate(Direction::Back, current)
    }

    /// Steps forward again after [`History::back`].
    pub fn forward(&mut self, current: &State) -> Option<State> {
        self.navigate(Direction::Forward, current)
    }

    /// Steps in `direction`. Returns `None` when there is nothing to restore
    /// or the snapshot does not decode; undecodable snapshots are discarded.
    pub fn navigate(&mut self, direction: Direction, current: &State) -> Option<State> {
        let snapshot = match direction {
            Direction::Back => self.back.pop_back()?,
            Direction::Forward => self.forward.pop()?,
        };

        let restored = match snapshot.restore() {
            Ok(state) => state,
            Err(err) => {
                tracing::warn!(?direction, error = %err, "discarding unreadable history entry");
                return None;
            }
        };

        match Snapshot::capture(current) {
            Ok(left) => match direction {
                Direction::Back => self.forward.push(left),
                Direction::Forward => self.back.push_back(left),
            },
            Err(err) => tracing::warn!(error = %err, "state being left was not recorded"),
        }

        Some(restored)
    }

    #[must_use]
    pub fn can_go_back(&self) -> bool {
        !self.back.is_empty()
    }

    #[must_use]
    pub fn can_go_forward(&self) -> bool {
        !self.forward.is_empty()
    }

    /// Number of entries on the back stack.
    #[must_use]
    pub fn len(&self) -> usize {
        self.back.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.back.is_empty()
    }

    /// Number of entries on the forward stack.
    #[must_use]
    pub fn forward_len(&self) -> usize {
        self.forward.len()
    }
}
