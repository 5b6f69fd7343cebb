//! ModuleRegistry - module id to render function routing.

use std::collections::HashMap;

use tracing::debug;

use super::modules;
use super::{ModuleId, RenderContext, View};
use crate::store::KeyValueStore;

/// A module render function.
pub type RenderFn<S> = Box<dyn Fn(&RenderContext<'_, S>) -> View>;

/// Maps module ids to render functions.
///
/// Unknown ids (or known ids with nothing registered) render the
/// "module not found" placeholder instead of failing.
pub struct ModuleRegistry<S> {
    renderers: HashMap<ModuleId, RenderFn<S>>,
}

impl<S> Default for ModuleRegistry<S> {
    fn default() -> Self {
        Self {
            renderers: HashMap::new(),
        }
    }
}

impl<S: KeyValueStore + 'static> ModuleRegistry<S> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the seven built-in dashboard modules.
    pub fn standard() -> Self {
        Self::new()
            .module(ModuleId::Overview, modules::overview::render::<S>)
            .module(ModuleId::Crops, modules::crops::render::<S>)
            .module(ModuleId::Market, modules::market::render::<S>)
            .module(ModuleId::Queries, modules::queries::render::<S>)
            .module(ModuleId::Ideas, modules::ideas::render::<S>)
            .module(ModuleId::Schemes, modules::schemes::render::<S>)
            .module(ModuleId::Admin, modules::admin::render::<S>)
    }

    /// Register a render function. Builder style; a later registration for
    /// the same id replaces the earlier one.
    pub fn module<F>(mut self, id: ModuleId, render: F) -> Self
    where
        F: Fn(&RenderContext<'_, S>) -> View + 'static,
    {
        self.renderers.insert(id, Box::new(render));
        self
    }

    /// Render `id`, or the not-found placeholder.
    pub fn render(&self, id: &ModuleId, ctx: &RenderContext<'_, S>) -> View {
        match self.renderers.get(id) {
            Some(render) => {
                debug!(module = %id, "rendering module");
                render(ctx)
            }
            None => {
                debug!(module = %id, "no renderer registered");
                not_found()
            }
        }
    }

    pub fn contains(&self, id: &ModuleId) -> bool {
        self.renderers.contains_key(id)
    }

    /// Registered module ids, in sidebar order where known.
    pub fn modules(&self) -> Vec<&ModuleId> {
        let mut ids: Vec<&ModuleId> = self.renderers.keys().collect();
        ids.sort_by_key(|id| {
            ModuleId::ALL
                .iter()
                .position(|known| known == *id)
                .unwrap_or(usize::MAX)
        });
        ids
    }
}

pub(crate) fn not_found() -> View {
    View::from_markup("<p>Module not found.</p>")
}
