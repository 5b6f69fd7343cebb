use crate::feedback::Page;
use crate::render::modules::crops::CsvExport;
use crate::render::ModuleId;

/// Deferred dashboard work, queued on the scheduler and run between user
/// events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Task {
    /// Replace the loading placeholder with the module's view, unless a
    /// newer render has happened since.
    Render { module: ModuleId, generation: u64 },
    /// The simulated expert reply to query `id`.
    ResolveQuery { id: u64 },
    DismissBanner,
}

/// Something the host page has to carry out after an intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Redirect(Page),
    Download(CsvExport),
}
