// Drawer + route state transitions (pure, no egui types)

use crate::nav::types::Route;

/// Authoritative navigation state of the shell.
///
/// The open/close *fraction* is not stored here: the host framework owns the
/// interpolated progress value and the shell only reads it. This struct only
/// tracks the target states the user can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavState {
    pub route: Route,
    pub drawer_open: bool,
}

impl NavState {
    pub fn new(route: Route) -> Self {
        Self {
            route,
            drawer_open: false,
        }
    }

    /// Request the drawer to open. Valid from any route, fire-and-forget.
    pub fn open_drawer(&mut self) {
        self.drawer_open = true;
    }

    pub fn close_drawer(&mut self) {
        self.drawer_open = false;
    }

    /// Switch the active route. Closes the drawer as a side effect, so a
    /// menu selection always lands on a fully visible screen.
    pub fn navigate(&mut self, route: Route) {
        self.route = route;
        self.drawer_open = false;
    }
}

impl Default for NavState {
    fn default() -> Self {
        NavState::new(Route::Home)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_drawer_from_any_route() {
        for route in Route::ALL {
            let mut nav = NavState::new(route);
            nav.open_drawer();
            assert!(nav.drawer_open);
            assert_eq!(nav.route, route); // Opening must not change the route
        }
    }

    #[test]
    fn test_navigate_switches_route_and_closes_drawer() {
        let mut nav = NavState::new(Route::Home);
        nav.open_drawer();

        nav.navigate(Route::Messages);
        assert_eq!(nav.route, Route::Messages);
        assert!(!nav.drawer_open);

        // Navigating with the drawer already closed keeps it closed
        nav.navigate(Route::Contact);
        assert_eq!(nav.route, Route::Contact);
        assert!(!nav.drawer_open);
    }

    #[test]
    fn test_close_drawer() {
        let mut nav = NavState::default();
        assert_eq!(nav.route, Route::Home);
        assert!(!nav.drawer_open);

        nav.open_drawer();
        nav.close_drawer();
        assert!(!nav.drawer_open);
    }
}
