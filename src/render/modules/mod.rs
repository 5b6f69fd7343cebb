//! The built-in dashboard modules. Each exposes
//! `render(&RenderContext<S>) -> View`; data modules also parse their
//! modal form.

pub mod admin;
pub mod crops;
pub mod ideas;
pub mod market;
pub mod overview;
pub mod queries;
pub mod schemes;
