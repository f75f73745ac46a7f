//! HealthFAQ HTTP server: router, shared state and cookie sessions.

pub mod check;
pub mod routes;
pub mod session;
pub mod state;

pub use routes::build_router;
pub use state::AppState;
