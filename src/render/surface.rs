//! Render targets.

use super::{Binding, EventKind, Intent, View};

/// A container whose content can be wholly replaced and whose descendant
/// elements can have listeners attached.
///
/// `mount` must tear down every binding of the previous generation before
/// attaching the new view's bindings.
pub trait RenderTarget {
    /// Replace content and bindings with `view`.
    fn mount(&mut self, view: View, generation: u64);

    /// Replace content with static placeholder markup and drop all bindings.
    fn show_placeholder(&mut self, markup: &str, generation: u64);

    fn content(&self) -> &str;

    fn generation(&self) -> u64;
}

/// In-memory render target. Records what is mounted and resolves events to
/// the intents bound for the current generation.
#[derive(Debug, Default)]
pub struct Surface {
    content: String,
    bindings: Vec<Binding>,
    generation: u64,
    mounts: usize,
}

impl Surface {
    pub fn new() -> Self {
        Self::default()
    }

    /// The intent bound to `event` on `element_id`, if any.
    pub fn trigger(&self, element_id: &str, event: EventKind) -> Option<Intent> {
        self.bindings
            .iter()
            .find(|b| b.element_id == element_id && b.event == event)
            .map(|b| b.intent.clone())
    }

    pub fn bindings(&self) -> &[Binding] {
        &self.bindings
    }

    /// How many times a view (not a placeholder) has been mounted.
    pub fn mount_count(&self) -> usize {
        self.mounts
    }
}

impl RenderTarget for Surface {
    fn mount(&mut self, view: View, generation: u64) {
        // Replacing the set drops every binding of the previous generation.
        self.content = view.markup;
        self.bindings = view.bindings;
        self.generation = generation;
        self.mounts += 1;
    }

    fn show_placeholder(&mut self, markup: &str, generation: u64) {
        self.bindings.clear();
        self.content = markup.to_string();
        self.generation = generation;
    }

    fn content(&self) -> &str {
        &self.content
    }

    fn generation(&self) -> u64 {
        self.generation
    }
}
