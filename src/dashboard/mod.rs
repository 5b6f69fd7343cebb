//! Dashboard - the stateful loop behind the dashboard page.
//!
//! Owns the active module, the open dialog, the render generation and the
//! timer queue. User events come in as [`Intent`]s (or as element events
//! resolved through the mounted bindings); every mutation goes through a
//! repository and is followed by a fresh render of the active module.
//!
//! Nothing here runs concurrently. Deferred work sits in the scheduler until
//! the host calls [`Dashboard::tick`].

mod task;

use std::time::Duration;

use tracing::{debug, info};

use crate::clock::{Clock, IdGenerator};
use crate::config::DashboardConfig;
use crate::feedback::{Feedback, Page};
use crate::model::{Crop, CropId, Idea, Product, Query, User};
use crate::render::modules::{crops, ideas, market, queries};
use crate::render::{
    render_shell, EventKind, FormData, FormError, Intent, Modal, ModuleId, ModuleRegistry,
    RenderContext, RenderTarget, Surface,
};
use crate::repository::seed_all;
use crate::scheduler::{Scheduler, TimerToken};
use crate::session::{AuthError, SessionManager};
use crate::store::{JsonStore, KeyValueStore};
use crate::theme::{Theme, ThemePreference};
use crate::{Record, RecordsExt};

pub use task::{Effect, Task};

/// Placeholder shown while a module's render is pending.
pub const LOADER_MARKUP: &str = "<div class=\"loader\">Loading...</div>";

pub const EMPTY_EXPORT_NOTICE: &str = "No data to export!";

pub struct Dashboard<S, C> {
    store: JsonStore<S>,
    config: DashboardConfig,
    clock: C,
    ids: IdGenerator,
    user: User,
    registry: ModuleRegistry<S>,
    active: ModuleId,
    open_modal: Option<Modal>,
    generation: u64,
    scheduler: Scheduler<Task>,
    pending_query: Option<(u64, TimerToken)>,
    banner: Option<(Feedback, TimerToken)>,
    system_prefers_dark: bool,
    content: Surface,
    shell: Surface,
}

impl<S: KeyValueStore + 'static, C: Clock> Dashboard<S, C> {
    /// Enter the dashboard with the standard modules.
    ///
    /// Fails with `NotAuthenticated` when there is no session. Otherwise
    /// seeds any absent collection and starts loading the overview.
    pub fn bootstrap(
        store: JsonStore<S>,
        config: DashboardConfig,
        clock: C,
    ) -> Result<Self, AuthError> {
        Self::bootstrap_with(store, config, clock, ModuleRegistry::standard())
    }

    pub fn bootstrap_with(
        store: JsonStore<S>,
        config: DashboardConfig,
        clock: C,
        registry: ModuleRegistry<S>,
    ) -> Result<Self, AuthError> {
        let user = SessionManager::new(&store, &clock).current_session()?;
        seed_all(&store);
        info!(user = %user.email, "dashboard session started");

        let mut dashboard = Self {
            store,
            config,
            clock,
            ids: IdGenerator::new(),
            user,
            registry,
            active: ModuleId::Overview,
            open_modal: None,
            generation: 0,
            scheduler: Scheduler::new(),
            pending_query: None,
            banner: None,
            system_prefers_dark: false,
            content: Surface::new(),
            shell: Surface::new(),
        };
        dashboard.activate(ModuleId::Overview);
        Ok(dashboard)
    }

    /// Use the host's colour-scheme preference when no theme is saved.
    pub fn prefers_dark(mut self, system_prefers_dark: bool) -> Self {
        self.system_prefers_dark = system_prefers_dark;
        self.render_shell();
        self
    }

    /// Switch to `module`: show the loading placeholder now and queue the
    /// real render after the render delay.
    ///
    /// Leaving the queries module cancels the pending expert reply.
    pub fn activate(&mut self, module: ModuleId) {
        if self.active == ModuleId::Queries && module != ModuleId::Queries {
            self.cancel_pending_query();
        }
        debug!(from = %self.active, to = %module, "activating module");

        self.active = module;
        self.open_modal = None;
        self.generation += 1;
        self.content.show_placeholder(LOADER_MARKUP, self.generation);
        self.scheduler.schedule(
            self.config.render_delay(),
            Task::Render {
                module: self.active.clone(),
                generation: self.generation,
            },
        );
        self.render_shell();
    }

    /// Let `elapsed` of virtual time pass, running every task that falls
    /// due in order.
    pub fn tick(&mut self, elapsed: Duration) {
        let deadline = self.scheduler.now() + elapsed;
        while let Some((token, task)) = self.scheduler.pop_due(deadline) {
            self.run_task(token, task);
        }
        self.scheduler.settle_at(deadline);
    }

    /// Run queued tasks until none are left.
    pub fn run_until_idle(&mut self) {
        while let Some(due) = self.scheduler.next_due() {
            let elapsed = due.saturating_sub(self.scheduler.now());
            self.tick(elapsed);
        }
    }

    /// Fire `event` on `element_id` with the given form input. Elements
    /// without a binding in the current views are ignored.
    pub fn trigger(
        &mut self,
        element_id: &str,
        event: EventKind,
        form: FormData,
    ) -> Option<Effect> {
        let intent = self
            .content
            .trigger(element_id, event)
            .or_else(|| self.shell.trigger(element_id, event));
        match intent {
            Some(intent) => self.dispatch(intent, form),
            None => {
                debug!(element_id, ?event, "event with no binding ignored");
                None
            }
        }
    }

    /// Carry out `intent`. `form` holds the submitted fields for submit
    /// intents and is ignored otherwise.
    pub fn dispatch(&mut self, intent: Intent, form: FormData) -> Option<Effect> {
        debug!(?intent, "dispatching intent");
        match intent {
            Intent::Navigate(module) => self.activate(module),
            Intent::OpenModal(modal) => self.open_modal(modal),
            Intent::CloseModal => {
                self.open_modal = None;
                self.render_active();
            }
            Intent::SubmitCrop => self.add_crop(&form),
            Intent::DeleteCrop(id) => self.delete_crop(id),
            Intent::ExportCrops => return self.export_crops().map(Effect::Download),
            Intent::SubmitQuery => self.ask_query(&form),
            Intent::SubmitIdea => self.submit_idea(&form),
            Intent::SubmitProduct => self.list_product(&form),
            Intent::ToggleTheme => {
                self.toggle_theme();
            }
            Intent::Logout => return Some(Effect::Redirect(self.logout())),
        }
        None
    }

    fn open_modal(&mut self, modal: Modal) {
        if modal.module() != self.active {
            debug!(?modal, active = %self.active, "dialog belongs to another module");
            return;
        }
        self.open_modal = Some(modal);
        self.render_active();
    }

    /// Append a crop from the add-crop form.
    pub fn add_crop(&mut self, form: &FormData) {
        let input = match crops::parse_form(form) {
            Ok(input) => input,
            Err(e) => return self.form_rejected(e),
        };
        let crop = Crop::from_input(self.fresh_id::<Crop>(), input);
        debug!(id = crop.id, name = %crop.name, "adding crop");
        self.store.records::<Crop>().append(crop);
        self.close_and_render();
    }

    /// Remove the crop with `id`, keeping the others in order.
    pub fn delete_crop(&mut self, id: CropId) {
        if !self.store.records::<Crop>().remove_by_id(&id) {
            self.show_banner(Feedback::notice("Crop not found."));
        }
        self.render_active();
    }

    /// CSV of the stored crops, or `None` (with a notice banner) when there
    /// are none.
    pub fn export_crops(&mut self) -> Option<crops::CsvExport> {
        let export = crops::export_csv(&self.store.records::<Crop>().load_all());
        if export.is_none() {
            self.show_banner(Feedback::notice(EMPTY_EXPORT_NOTICE));
        }
        export
    }

    /// Put a new pending query at the front and queue its expert reply.
    ///
    /// A reply still waiting for an earlier query is cancelled; that query
    /// stays pending. Deactivating the queries module before the reply
    /// fires also cancels it for good: coming back does not reschedule it,
    /// and the query stays pending.
    pub fn ask_query(&mut self, form: &FormData) {
        let input = match queries::parse_form(form) {
            Ok(input) => input,
            Err(e) => return self.form_rejected(e),
        };
        let query = Query::pending(self.fresh_id::<Query>(), input, self.clock.today());
        let id = query.id;
        self.store.records::<Query>().prepend(query);

        self.cancel_pending_query();
        let token = self
            .scheduler
            .schedule(self.config.auto_resolve_delay(), Task::ResolveQuery { id });
        self.pending_query = Some((id, token));
        debug!(id, "query raised");
        self.close_and_render();
    }

    pub fn submit_idea(&mut self, form: &FormData) {
        let input = match ideas::parse_form(form) {
            Ok(input) => input,
            Err(e) => return self.form_rejected(e),
        };
        let idea = Idea::from_input(self.fresh_id::<Idea>(), input, &self.user.name);
        self.store.records::<Idea>().append(idea);
        self.close_and_render();
    }

    pub fn list_product(&mut self, form: &FormData) {
        let input = match market::parse_form(form) {
            Ok(input) => input,
            Err(e) => return self.form_rejected(e),
        };
        let product = Product::from_input(self.fresh_id::<Product>(), input, &self.user.name);
        self.store.records::<Product>().append(product);
        self.close_and_render();
    }

    /// Flip and persist the theme.
    pub fn toggle_theme(&mut self) -> Theme {
        let theme = ThemePreference::new(&self.store, &self.config.theme_key)
            .toggle(self.system_prefers_dark);
        self.render_shell();
        theme
    }

    /// End the session. The dashboard should be dropped after this; the
    /// host goes to the returned page.
    pub fn logout(&mut self) -> Page {
        self.cancel_pending_query();
        SessionManager::new(&self.store, &self.clock).destroy_session();
        info!(user = %self.user.email, "logged out");
        Page::Index
    }

    pub fn theme(&self) -> Theme {
        ThemePreference::new(&self.store, &self.config.theme_key).current(self.system_prefers_dark)
    }

    pub fn active_module(&self) -> &ModuleId {
        &self.active
    }

    pub fn open_dialog(&self) -> Option<Modal> {
        self.open_modal
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn store(&self) -> &JsonStore<S> {
        &self.store
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// The content pane.
    pub fn surface(&self) -> &Surface {
        &self.content
    }

    pub fn content(&self) -> &str {
        self.content.content()
    }

    /// Sidebar and header.
    pub fn shell(&self) -> &Surface {
        &self.shell
    }

    pub fn banner(&self) -> Option<&Feedback> {
        self.banner.as_ref().map(|(feedback, _)| feedback)
    }

    /// Id of the query whose expert reply is still queued.
    pub fn pending_query(&self) -> Option<u64> {
        self.pending_query.map(|(id, _)| id)
    }

    pub fn has_pending_tasks(&self) -> bool {
        !self.scheduler.is_empty()
    }

    fn run_task(&mut self, token: TimerToken, task: Task) {
        debug!(?task, "task fired");
        match task {
            Task::Render { module, generation } => {
                if generation == self.generation && module == self.active {
                    self.mount_active();
                } else {
                    debug!(%module, generation, "stale render dropped");
                }
            }
            Task::ResolveQuery { id } => {
                if matches!(self.pending_query, Some((_, t)) if t == token) {
                    self.pending_query = None;
                }
                self.resolve_query(id);
            }
            Task::DismissBanner => {
                if matches!(self.banner, Some((_, t)) if t == token) {
                    self.banner = None;
                }
            }
        }
    }

    /// Attach the canned reply to query `id` if it is still pending. Matches
    /// on id and status, never on position.
    fn resolve_query(&mut self, id: u64) {
        let repository = self.store.records::<Query>();
        let mut all = repository.load_all();
        let resolved = all
            .iter_mut()
            .find(|q| q.id == id && q.is_pending())
            .map(|q| q.resolve(self.config.canned_response.clone()))
            .unwrap_or(false);
        if !resolved {
            debug!(id, "query gone or already answered");
            return;
        }
        repository.replace_all(&all);
        info!(id, "query resolved");

        if self.active == ModuleId::Queries {
            self.render_active();
        }
    }

    /// A timestamp id for a new `R`, above every id already stored in its
    /// collection, whichever session wrote them.
    fn fresh_id<R: Record<Id = u64>>(&self) -> u64 {
        let floor = self
            .store
            .records::<R>()
            .load_all()
            .iter()
            .map(|record| record.id() + 1)
            .max()
            .unwrap_or(0);
        self.ids.next_id(&self.clock, floor)
    }

    fn cancel_pending_query(&mut self) {
        if let Some((id, token)) = self.pending_query.take() {
            if self.scheduler.cancel(token) {
                debug!(id, "expert reply cancelled");
            }
        }
    }

    fn form_rejected(&mut self, error: FormError) {
        debug!(%error, "form rejected");
        let message = match error {
            FormError::Missing(_) => "Please fill in all required fields.".to_string(),
            FormError::Invalid { .. } => error.to_string(),
        };
        self.show_banner(Feedback::error(message));
    }

    fn show_banner(&mut self, feedback: Feedback) {
        if let Some((_, token)) = self.banner.take() {
            self.scheduler.cancel(token);
        }
        let token = self
            .scheduler
            .schedule(self.config.banner_timeout(), Task::DismissBanner);
        self.banner = Some((feedback, token));
    }

    fn close_and_render(&mut self) {
        self.open_modal = None;
        self.render_active();
    }

    /// Render the active module immediately under a new generation. Any
    /// render still queued for an older generation becomes stale.
    fn render_active(&mut self) {
        self.generation += 1;
        self.mount_active();
    }

    fn mount_active(&mut self) {
        let view = {
            let ctx = RenderContext {
                store: &self.store,
                user: &self.user,
                active: &self.active,
                open_modal: self.open_modal,
            };
            self.registry.render(&self.active, &ctx)
        };
        self.content.mount(view, self.generation);
    }

    fn render_shell(&mut self) {
        let view = render_shell(&self.user, &self.active, self.theme());
        self.shell.mount(view, self.generation);
    }
}
