//! The dashboard frame around the content pane: sidebar, header, user
//! badge, logout and theme toggle.

use super::html::escape;
use super::{Intent, ModuleId, View};
use crate::model::User;
use crate::session::is_admin;
use crate::theme::Theme;

pub const LOGOUT_ID: &str = "logoutBtn";
pub const THEME_TOGGLE_ID: &str = "themeToggle";

/// Element id of the sidebar link for `module`.
pub fn nav_link_id(module: &ModuleId) -> String {
    format!("nav-{}", module.name())
}

/// Sidebar links in order. The admin link only appears for admin sessions.
pub fn render_nav(user: &User, active: &ModuleId) -> View {
    let show_admin = is_admin(user);
    let mut view = View::from_markup("<nav class=\"sidebar-nav\">");
    for module in ModuleId::ALL {
        if module == ModuleId::Admin && !show_admin {
            continue;
        }
        let id = nav_link_id(&module);
        view.push(&format!(
            "<a id=\"{}\" class=\"nav-link{}\" data-module=\"{}\">{} {}</a>",
            id,
            if &module == active { " active" } else { "" },
            module.name(),
            module.icon(),
            module.title()
        ));
        view.on_click(id, Intent::Navigate(module));
    }
    view.push("</nav>");
    view
}

/// The full frame: sidebar, header with the active module's title, user
/// badge, theme toggle and logout.
pub fn render_shell(user: &User, active: &ModuleId, theme: Theme) -> View {
    let mut view = View::from_markup(
        "<aside class=\"sidebar\"><div class=\"brand\">\u{1f331} Krishi Connect</div>",
    );
    view.extend(render_nav(user, active));
    view.push(&format!(
        "<button id=\"{}\" class=\"btn btn-secondary\">Logout</button></aside>",
        LOGOUT_ID
    ));
    view.on_click(LOGOUT_ID, Intent::Logout);

    view.push(&format!(
        "<header class=\"top-header\"><h2 id=\"pageTitle\">{}</h2><div class=\"user-info\"><button id=\"{}\" class=\"btn btn-secondary\">{}</button><span id=\"userName\">{}</span><div class=\"avatar\">{}</div></div></header>",
        escape(&active.title()),
        THEME_TOGGLE_ID,
        theme.toggle_icon(),
        escape(&user.name),
        escape(&user.initial())
    ));
    view.on_click(THEME_TOGGLE_ID, Intent::ToggleTheme);
    view
}
