//! Frame-counted key auto-repeat.
//!
//! A held key fires on its first frame, stays silent through the initial
//! delay, then fires every `interval_frames` frames. Timing is counted in
//! rendered frames, not wall-clock time.

use crate::constants::{DEFAULT_KEY_REPEAT_DELAY_FRAMES, DEFAULT_KEY_REPEAT_INTERVAL_FRAMES};
use std::collections::HashMap;

/// Logical keys the editing engine reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EditKey {
    A,
    C,
    V,
    X,
    Enter,
    Backspace,
    Delete,
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Home,
    End,
}

/// Repeat cadence in frames.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyRepeatTimings {
    pub initial_delay_frames: u32,
    pub interval_frames: u32,
}

impl Default for KeyRepeatTimings {
    fn default() -> Self {
        Self {
            initial_delay_frames: DEFAULT_KEY_REPEAT_DELAY_FRAMES,
            interval_frames: DEFAULT_KEY_REPEAT_INTERVAL_FRAMES,
        }
    }
}

/// Per-key count of consecutive frames each key has been held.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyRepeat {
    held_frames: HashMap<EditKey, u32>,
}

impl KeyRepeat {
    /// Advance `key` by one frame and report whether it fires this frame.
    pub fn poll(&mut self, key: EditKey, held: bool, timings: KeyRepeatTimings) -> bool {
        if !held {
            self.held_frames.remove(&key);
            return false;
        }
        let frames = self.held_frames.entry(key).or_insert(0);
        let count = *frames;
        *frames = frames.saturating_add(1);
        count == 0
            || (count > timings.initial_delay_frames
                && count % timings.interval_frames.max(1) == 0)
    }

    /// Forget `key`'s held count without firing.
    pub fn release(&mut self, key: EditKey) {
        self.held_frames.remove(&key);
    }

    /// Number of consecutive frames `key` has been observed held.
    pub fn held_frames(&self, key: EditKey) -> u32 {
        self.held_frames.get(&key).copied().unwrap_or(0)
    }

    /// Forget every held key.
    pub fn reset(&mut self) {
        self.held_frames.clear();
    }
}
