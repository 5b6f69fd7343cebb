//! Render - turning repository state into markup plus event bindings.
//!
//! A render function reads everything it shows from the store on every
//! call and returns a [`View`]: the markup and the list of [`Binding`]s
//! (element id + event -> [`Intent`]) the markup needs. It never attaches
//! anything itself. Mounting a view on a [`RenderTarget`] replaces both the
//! content and the whole binding set, so rendering the same module again
//! can never stack up duplicate handlers.
//!
//! Given the same store contents and context, a render function returns an
//! identical `View`.

mod form;
mod html;
mod module;
pub mod modules;
mod registry;
mod shell;
mod surface;

use crate::model::{CropId, User};
use crate::store::JsonStore;

pub use form::{FormData, FormError};
pub use html::escape;
pub use module::{Modal, ModuleId};
pub use registry::{ModuleRegistry, RenderFn};
pub use shell::{nav_link_id, render_nav, render_shell, LOGOUT_ID, THEME_TOGGLE_ID};
pub use surface::{RenderTarget, Surface};

/// DOM event kinds the dashboard listens for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
    Submit,
}

/// What a bound element asks the dashboard to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Navigate(ModuleId),
    OpenModal(Modal),
    CloseModal,
    SubmitCrop,
    DeleteCrop(CropId),
    ExportCrops,
    SubmitQuery,
    SubmitIdea,
    SubmitProduct,
    ToggleTheme,
    Logout,
}

/// One listener a view needs attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    pub element_id: String,
    pub event: EventKind,
    pub intent: Intent,
}

/// Rendered markup and the bindings it requires.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct View {
    pub markup: String,
    pub bindings: Vec<Binding>,
}

impl View {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_markup(markup: impl Into<String>) -> Self {
        Self {
            markup: markup.into(),
            bindings: Vec::new(),
        }
    }

    pub fn push(&mut self, markup: &str) {
        self.markup.push_str(markup);
    }

    pub fn on_click(&mut self, element_id: impl Into<String>, intent: Intent) {
        self.bind(element_id, EventKind::Click, intent);
    }

    pub fn on_submit(&mut self, element_id: impl Into<String>, intent: Intent) {
        self.bind(element_id, EventKind::Submit, intent);
    }

    fn bind(&mut self, element_id: impl Into<String>, event: EventKind, intent: Intent) {
        self.bindings.push(Binding {
            element_id: element_id.into(),
            event,
            intent,
        });
    }

    /// Append another view's markup and bindings.
    pub fn extend(&mut self, other: View) {
        self.markup.push_str(&other.markup);
        self.bindings.extend(other.bindings);
    }
}

/// Everything a module render function may look at. Passed explicitly;
/// there is no ambient "current user" or "current module".
pub struct RenderContext<'a, S> {
    pub store: &'a JsonStore<S>,
    pub user: &'a User,
    pub active: &'a ModuleId,
    pub open_modal: Option<Modal>,
}
