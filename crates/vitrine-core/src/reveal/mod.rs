//! One-shot reveal tracking and highlight-driven progress derivation.

use heapless::Vec;
use log::debug;

use crate::notify::RevealSink;

/// Upper bound on the observed element collection.
pub const MAX_OBSERVED_ELEMENTS: usize = 32;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RevealConfigError {
    DuplicateId,
    CapacityExceeded,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ElementError {
    UnknownElement,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ProgressError {
    EmptyCollection,
    OutOfBounds,
}

/// Owns the revealed flags of a fixed, ordered element collection and the
/// currently highlighted element.
///
/// Reveal flags are monotonic: once an element has been reported visible it
/// stays revealed even when it later leaves the viewport. Reveal and highlight
/// are independent; an element may be highlighted before it was ever revealed.
pub struct RevealController<Id, S>
where
    Id: Copy + Eq,
    S: RevealSink<Id>,
{
    ids: Vec<Id, MAX_OBSERVED_ELEMENTS>,
    revealed: Vec<bool, MAX_OBSERVED_ELEMENTS>,
    active: Option<usize>,
    sink: S,
}

impl<Id, S> RevealController<Id, S>
where
    Id: Copy + Eq,
    S: RevealSink<Id>,
{
    pub fn new(ids: &[Id], sink: S) -> Result<Self, RevealConfigError> {
        for (position, id) in ids.iter().enumerate() {
            if ids[..position].contains(id) {
                return Err(RevealConfigError::DuplicateId);
            }
        }

        let ids = Vec::from_slice(ids).map_err(|_| RevealConfigError::CapacityExceeded)?;
        let mut revealed = Vec::new();
        revealed
            .resize(ids.len(), false)
            .map_err(|_| RevealConfigError::CapacityExceeded)?;

        Ok(Self {
            ids,
            revealed,
            active: None,
            sink,
        })
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn is_revealed(&self, id: Id) -> Result<bool, ElementError> {
        Ok(self.revealed[self.position_of(id)?])
    }

    /// Feeds one intersection change from the visibility observer. The first
    /// intersecting observation reveals the element and reports it exactly
    /// once; every later transition is a no-op.
    pub fn observe(&mut self, id: Id, intersecting: bool) -> Result<(), ElementError> {
        let position = self.position_of(id)?;

        if intersecting && !self.revealed[position] {
            self.revealed[position] = true;
            debug!("reveal: element {}/{} revealed", position, self.ids.len());
            self.sink.revealed(id);
        }
        Ok(())
    }

    /// Highlights `id` and reports the derived progress percentage,
    /// `(position + 1) / len * 100`.
    pub fn highlight(&mut self, id: Id) -> Result<(), ElementError> {
        let position = self.position_of(id)?;

        self.active = Some(position);
        let progress_percent = (position + 1) as f32 / self.ids.len() as f32 * 100.0;
        debug!(
            "reveal: highlight {}/{} progress={progress_percent}",
            position,
            self.ids.len()
        );
        self.sink.highlight_changed(id, progress_percent);
        Ok(())
    }

    /// Progress shown before any highlight: the share of elements already
    /// completed, as a percentage.
    pub fn initial_progress_percent(&self, completed_count: usize) -> Result<f32, ProgressError> {
        if self.ids.is_empty() {
            return Err(ProgressError::EmptyCollection);
        }
        if completed_count > self.ids.len() {
            return Err(ProgressError::OutOfBounds);
        }

        Ok(completed_count as f32 / self.ids.len() as f32 * 100.0)
    }

    fn position_of(&self, id: Id) -> Result<usize, ElementError> {
        self.ids
            .iter()
            .position(|known| *known == id)
            .ok_or(ElementError::UnknownElement)
    }
}
