//! Routes, destinations and the one-shot navigation slot.

mod host;
mod slot;

pub use host::{NavGraph, NavHost, NavigationError};
pub use slot::{NavigationObserver, NavigationSlot};

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    PublicTimeline,
    Post,
    RegisterUser,
}

impl Route {
    pub fn as_str(&self) -> &'static str {
        match self {
            Route::Login => "login",
            Route::PublicTimeline => "publicTimeline",
            Route::Post => "post",
            Route::RegisterUser => "registerUser",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Back-stack adjustment applied together with a forward navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PopUpTo {
    pub route: Route,
    /// Also remove `route` itself, not just the entries above it.
    pub inclusive: bool,
}

/// A navigation request. Describes the transition; [`NavHost`] performs it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Destination {
    pub route: Route,
    pub pop_up_to: Option<PopUpTo>,
}

impl Destination {
    pub fn new(route: Route) -> Self {
        Self {
            route,
            pop_up_to: None,
        }
    }

    pub fn pop_up_to(mut self, route: Route, inclusive: bool) -> Self {
        self.pop_up_to = Some(PopUpTo { route, inclusive });
        self
    }
}
