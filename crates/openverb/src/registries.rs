//! Host-supplied collections the navigation, search and modal verbs query.

pub mod modal;
pub mod route;

pub use modal::ModalRegistry;
pub use route::{find_route_by_intent, routes_for_role, Route, RouteRegistry};
