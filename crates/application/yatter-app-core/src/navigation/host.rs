use std::collections::HashSet;
use tracing::info;

use super::{Destination, Route};
use crate::holder::ScreenStateHolder;

/// Raised when a destination names a route the graph does not contain.
/// This is a wiring defect, not a runtime condition to recover from.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavigationError {
    #[error("route '{0}' is not registered in the navigation graph")]
    UnknownRoute(Route),
}

/// The set of routes a [`NavHost`] can show.
#[derive(Debug, Clone, Default)]
pub struct NavGraph {
    routes: HashSet<Route>,
}

impl NavGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn route(mut self, route: Route) -> Self {
        self.routes.insert(route);
        self
    }

    pub fn contains(&self, route: Route) -> bool {
        self.routes.contains(&route)
    }

    fn require(&self, route: Route) -> Result<(), NavigationError> {
        if self.contains(route) {
            Ok(())
        } else {
            Err(NavigationError::UnknownRoute(route))
        }
    }
}

/// Owns the back stack and turns destinations into transitions.
///
/// A host only exists once the start route is known, so there is never a
/// graph without a defined start point.
#[derive(Debug)]
pub struct NavHost {
    graph: NavGraph,
    back_stack: Vec<Route>,
}

impl NavHost {
    pub fn new(graph: NavGraph, start: Route) -> Result<Self, NavigationError> {
        graph.require(start)?;
        Ok(Self {
            graph,
            back_stack: vec![start],
        })
    }

    pub fn current(&self) -> Option<Route> {
        self.back_stack.last().copied()
    }

    pub fn back_stack(&self) -> &[Route] {
        &self.back_stack
    }

    /// Applies the pop directive and pushes the new route as one replacement
    /// of the back stack.
    ///
    /// A pop directive naming a route that is not on the stack pops nothing.
    pub fn navigate(&mut self, dest: &Destination) -> Result<(), NavigationError> {
        self.graph.require(dest.route)?;

        let mut next = self.back_stack.clone();
        if let Some(pop) = dest.pop_up_to {
            self.graph.require(pop.route)?;
            if let Some(ix) = next.iter().rposition(|r| *r == pop.route) {
                let keep = if pop.inclusive { ix } else { ix + 1 };
                next.truncate(keep);
            }
        }
        next.push(dest.route);

        info!(
            from = ?self.current().map(|r| r.as_str()),
            to = %dest.route,
            "navigate"
        );
        self.back_stack = next;
        Ok(())
    }

    /// Performs the holder's pending command, if any, then acknowledges it.
    ///
    /// The command is only acknowledged after the transition succeeded.
    pub fn consume_from<H: ScreenStateHolder>(
        &mut self,
        holder: &mut H,
    ) -> Result<Option<Route>, NavigationError> {
        let Some(dest) = holder.navigation().pending() else {
            return Ok(None);
        };
        self.navigate(&dest)?;
        holder.on_navigation_consumed();
        Ok(Some(dest.route))
    }
}
