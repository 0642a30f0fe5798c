pub mod handlers;
pub mod routes;
pub mod server;
pub mod state;

pub use routes::{app, router};
pub use server::serve;
pub use state::AppState;
