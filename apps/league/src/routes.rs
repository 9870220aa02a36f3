use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::UserKind;

/// Screens the core can send the user to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Route {
    #[serde(rename = "/")]
    Landing,
    #[serde(rename = "/onboarding")]
    Onboarding,
    #[serde(rename = "/dashboard/talent")]
    TalentDashboard,
    #[serde(rename = "/dashboard/club")]
    ClubDashboard,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Landing => "/",
            Route::Onboarding => "/onboarding",
            Route::TalentDashboard => "/dashboard/talent",
            Route::ClubDashboard => "/dashboard/club",
        }
    }

    pub fn dashboard_for(kind: UserKind) -> Route {
        match kind {
            UserKind::Talent => Route::TalentDashboard,
            UserKind::Club => Route::ClubDashboard,
        }
    }
}

pub trait Navigator {
    fn navigate(&mut self, route: Route);
}

/// Navigator that only remembers where it was sent.
#[derive(Debug, Default, Clone)]
pub struct History {
    visited: Vec<Route>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<Route> {
        self.visited.last().copied()
    }

    pub fn visited(&self) -> &[Route] {
        &self.visited
    }
}

impl Navigator for History {
    fn navigate(&mut self, route: Route) {
        debug!(path = route.path(), "Navigating");
        self.visited.push(route);
    }
}
