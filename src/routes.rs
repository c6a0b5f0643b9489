//! Typed view of the client route table.
//!
//! SYSTEM CONTEXT
//! ==============
//! `app.rs` declares the Leptos routes; this module mirrors them as data so
//! the sidebar, navbar, and guard can reason about paths without a router.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use crate::types::TaskStage;

pub const LOGIN_PATH: &str = "/log-in";
pub const DASHBOARD_PATH: &str = "/dashboard";
pub const TASKS_PATH: &str = "/tasks";
pub const TEAM_PATH: &str = "/team";
pub const TRASH_PATH: &str = "/trashed";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppRoute {
    /// `/`, forwarded to the dashboard.
    Root,
    Dashboard,
    /// `/tasks` or one of the stage-filtered views such as `/todo/:status`.
    Tasks { stage: Option<TaskStage>, status: Option<String> },
    Team,
    Trash,
    TaskDetails { id: String },
    LogIn,
    NotFound,
}

impl AppRoute {
    pub fn parse(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Self::Root,
            ["dashboard"] => Self::Dashboard,
            ["tasks"] => Self::Tasks { stage: None, status: None },
            ["team"] => Self::Team,
            ["trashed"] => Self::Trash,
            ["log-in"] => Self::LogIn,
            ["task", id] => Self::TaskDetails { id: (*id).to_owned() },
            [stage, status] => match TaskStage::from_segment(stage) {
                Some(stage) => Self::Tasks { stage: Some(stage), status: Some((*status).to_owned()) },
                None => Self::NotFound,
            },
            _ => Self::NotFound,
        }
    }

    /// Whether the route sits behind the session guard.
    pub fn requires_session(&self) -> bool {
        !matches!(self, Self::LogIn | Self::NotFound)
    }

    /// Canonical path for this route.
    pub fn path(&self) -> String {
        match self {
            Self::Root => "/".to_owned(),
            Self::Dashboard => DASHBOARD_PATH.to_owned(),
            Self::Tasks { stage: None, .. } => TASKS_PATH.to_owned(),
            Self::Tasks { stage: Some(stage), status } => {
                format!("/{}/{}", stage.segment(), status.as_deref().unwrap_or(stage.segment()))
            }
            Self::Team => TEAM_PATH.to_owned(),
            Self::Trash => TRASH_PATH.to_owned(),
            Self::TaskDetails { id } => task_path(id),
            Self::LogIn => LOGIN_PATH.to_owned(),
            Self::NotFound => "/404".to_owned(),
        }
    }

    /// Heading shown in the navbar for this route.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Root | Self::Dashboard => "Dashboard",
            Self::Tasks { stage: None, .. } => "Tasks",
            Self::Tasks { stage: Some(stage), .. } => stage.label(),
            Self::Team => "Team",
            Self::Trash => "Trash",
            Self::TaskDetails { .. } => "Task",
            Self::LogIn => "Log in",
            Self::NotFound => "Not found",
        }
    }
}

pub fn task_path(id: &str) -> String {
    format!("/task/{id}")
}

pub fn stage_path(stage: TaskStage) -> String {
    AppRoute::Tasks { stage: Some(stage), status: None }.path()
}

/// Full location for a return path: `pathname` plus non-empty query and
/// fragment. Leading `?`/`#` on `search` and `hash` are optional.
pub fn attempted_path(pathname: &str, search: &str, hash: &str) -> String {
    let search = search.trim_start_matches('?');
    let hash = hash.trim_start_matches('#');
    let mut path = pathname.to_owned();
    if !search.is_empty() {
        path.push('?');
        path.push_str(search);
    }
    if !hash.is_empty() {
        path.push('#');
        path.push_str(hash);
    }
    path
}

/// Entry in the sidebar navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "Dashboard", href: DASHBOARD_PATH },
    NavLink { label: "Tasks", href: TASKS_PATH },
    NavLink { label: "Completed", href: "/completed/completed" },
    NavLink { label: "In Progress", href: "/in-progress/in-progress" },
    NavLink { label: "To Do", href: "/todo/todo" },
    NavLink { label: "Team", href: TEAM_PATH },
    NavLink { label: "Trash", href: TRASH_PATH },
];

/// Whether `link` should render as active for the current `path`.
pub fn is_active_link(link: &NavLink, path: &str) -> bool {
    nav_key(AppRoute::parse(link.href)) == nav_key(AppRoute::parse(path))
}

fn nav_key(route: AppRoute) -> AppRoute {
    match route {
        AppRoute::Root => AppRoute::Dashboard,
        AppRoute::Tasks { stage, .. } => AppRoute::Tasks { stage, status: None },
        other => other,
    }
}
