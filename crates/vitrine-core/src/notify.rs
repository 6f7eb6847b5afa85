//! Notification sinks consumed by the embedding adapter.

/// Receives rotation state changes and applies the selected styling.
pub trait RotationSink {
    fn selection_changed(&mut self, index: usize);
}

/// Receives reveal and highlight changes and applies the revealed styling
/// and progress-track width.
pub trait RevealSink<Id> {
    fn revealed(&mut self, id: Id);
    fn highlight_changed(&mut self, id: Id, progress_percent: f32);
}

/// Sink that drops every notification; used during bring-up.
#[derive(Default, Debug, Clone, Copy)]
pub struct DiscardSink;

impl DiscardSink {
    pub const fn new() -> Self {
        Self
    }
}

impl RotationSink for DiscardSink {
    fn selection_changed(&mut self, _index: usize) {}
}

impl<Id> RevealSink<Id> for DiscardSink {
    fn revealed(&mut self, _id: Id) {}

    fn highlight_changed(&mut self, _id: Id, _progress_percent: f32) {}
}
