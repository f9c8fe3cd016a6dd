//! Sprite Animation
//!
//! Frame sequences keyed by [`Status`], and the fractional frame counter
//! that walks through them. Side effects tied to a specific frame (firing,
//! striking) are decided from the interval the counter moved across this
//! update, so a long frame time can never jump over a trigger.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::core::mask::Mask;
use crate::game::entity::ActorKind;
use crate::game::error::LoadError;
use crate::game::status::{Mode, Status};

/// One decoded animation frame.
///
/// Only the collision silhouette matters to the simulation; the renderer
/// resolves pixels from (actor kind, status, frame index).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    mask: Arc<Mask>,
}

impl Frame {
    /// Frame with a silhouette.
    pub fn new(mask: Mask) -> Self {
        Self { mask: Arc::new(mask) }
    }

    /// Fully opaque frame.
    pub fn solid(width: u32, height: u32) -> Self {
        Self::new(Mask::filled(width, height))
    }

    #[inline]
    pub fn mask(&self) -> &Mask {
        &self.mask
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.mask.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.mask.height()
    }
}

/// All frame sequences for one kind of actor.
#[derive(Clone, Debug, Default)]
pub struct AnimationSet {
    sequences: BTreeMap<Status, Vec<Frame>>,
}

impl AnimationSet {
    /// Empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every status gets `frames[mode]` copies of the same frame.
    ///
    /// Handy for headless runs and tests, where only sizes and sequence
    /// lengths matter.
    pub fn uniform(frame: Frame, idle: usize, walk: usize, attack: usize) -> Self {
        let mut set = Self::new();
        for status in Status::all() {
            let count = match status.mode {
                Mode::Idle => idle,
                Mode::Walk => walk,
                Mode::Attack => attack,
            };
            set.insert(status, vec![frame.clone(); count]);
        }
        set
    }

    /// Add or replace a sequence.
    pub fn insert(&mut self, status: Status, frames: Vec<Frame>) {
        self.sequences.insert(status, frames);
    }

    /// Add a sequence by its asset key (`down_idle`, `left`, ...).
    ///
    /// Returns false for keys that do not name a status.
    pub fn insert_keyed(&mut self, key: &str, frames: Vec<Frame>) -> bool {
        match Status::all().find(|status| status.animation_key() == key) {
            Some(status) => {
                self.insert(status, frames);
                true
            }
            None => false,
        }
    }

    /// Frames for a status. Empty if the status was never loaded.
    pub fn frames(&self, status: Status) -> &[Frame] {
        self.sequences.get(&status).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of frames for a status.
    #[inline]
    pub fn frame_count(&self, status: Status) -> usize {
        self.frames(status).len()
    }

    /// Frame used to size the sprite before any animation runs.
    pub fn first_frame(&self) -> Option<&Frame> {
        self.frames(Status::default()).first()
    }

    /// Check that every status has frames and that the attack trigger
    /// frame exists in every attack sequence.
    pub fn validate(&self, kind: ActorKind, trigger_frame: u32) -> Result<(), LoadError> {
        for status in Status::all() {
            let key = status.animation_key();
            let frames = self
                .sequences
                .get(&status)
                .ok_or_else(|| LoadError::MissingAnimation { kind, key: key.clone() })?;
            if frames.is_empty() {
                return Err(LoadError::EmptyAnimation { kind, key });
            }
            if status.mode == Mode::Attack && trigger_frame as usize >= frames.len() {
                return Err(LoadError::TriggerOutOfRange {
                    kind,
                    key,
                    frame: trigger_frame,
                    len: frames.len(),
                });
            }
        }
        Ok(())
    }
}

/// Fractional frame counter.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Animator {
    frame_index: f32,
}

/// What one `Animator::advance` call did.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationStep {
    /// Counter before the update
    pub from: f32,
    /// Counter after the update, before wrapping
    pub to: f32,
    /// Sequence length used for this update
    pub len: usize,
    /// The counter ran past the last frame and restarted at 0
    pub completed: bool,
}

impl AnimationStep {
    /// True if the counter passed over (or sat on) `frame` this update.
    ///
    /// Frames past the end of the sequence never count.
    pub fn crossed(&self, frame: u32) -> bool {
        let frame = frame as f32;
        (frame as usize) < self.len && self.from.floor() <= frame && self.to >= frame
    }
}

impl Animator {
    /// Current counter value.
    #[inline]
    pub fn frame_index(&self) -> f32 {
        self.frame_index
    }

    /// Restart from the first frame.
    #[inline]
    pub fn reset(&mut self) {
        self.frame_index = 0.0;
    }

    /// Move the counter by `speed * dt` frames over a sequence of `len`.
    ///
    /// Running off the end resets the counter to 0.
    pub fn advance(&mut self, speed: f32, dt: f32, len: usize) -> AnimationStep {
        let from = self.frame_index;
        let to = from + speed * dt;
        let completed = to >= len as f32;
        self.frame_index = if completed { 0.0 } else { to };
        AnimationStep { from, to, len, completed }
    }

    /// Index to display for a sequence of `len`, always in `[0, len)`.
    pub fn display_index(&self, len: usize) -> usize {
        let index = self.frame_index as usize;
        if index >= len {
            0
        } else {
            index
        }
    }
}
