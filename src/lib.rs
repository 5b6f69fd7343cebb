//! Krishi dashboard core: a browser farm-management dashboard's state and
//! render loop, with all data kept in a string key-value store.
//!
//! The pieces, leaves first:
//!
//! - [`store`]: typed JSON access over a [`KeyValueStore`] backend.
//! - [`repository`]: whole-collection persistence per [`Record`] type, plus
//!   the built-in seed data.
//! - [`session`]: registration, login and the current-user gate.
//! - [`render`]: module render functions producing markup and event
//!   bindings, and the [`Surface`] they are mounted on.
//! - [`dashboard`]: the controller tying these together, with deferred work
//!   driven by a virtual-time [`Scheduler`].

// Lets `#[derive(Record)]` refer to `krishi_dashboard::Record` from inside
// this crate too.
extern crate self as krishi_dashboard;

pub mod clock;
pub mod config;
pub mod dashboard;
pub mod feedback;
pub mod model;
mod record;
pub mod render;
pub mod repository;
pub mod scheduler;
pub mod session;
pub mod store;
pub mod telemetry;
pub mod theme;

pub use clock::{Clock, IdGenerator, ManualClock, SystemClock};
pub use config::{ConfigError, DashboardConfig};
pub use dashboard::{Dashboard, Effect, Task};
pub use feedback::{Feedback, FeedbackKind, Page};
pub use krishi_dashboard_macros::Record;
pub use model::{
    Crop, CropId, Idea, IdeaCategory, NewCrop, NewIdea, NewProduct, NewQuery, NewUser, Product,
    Query, QueryStatus, Season, User, UserType,
};
pub use record::Record;
pub use render::modules::crops::CsvExport;
pub use render::{
    EventKind, FormData, FormError, Intent, Modal, ModuleId, ModuleRegistry, RenderContext,
    RenderTarget, Surface, View,
};
pub use repository::{RecordsExt, Repository};
pub use scheduler::{Scheduler, TimerToken};
pub use session::{is_admin, AuthError, AuthPage, SessionManager};
pub use store::{InMemoryStore, JsonStore, KeyValueStore, StoreError};
pub use telemetry::init_tracing;
pub use theme::{Theme, ThemePreference};
