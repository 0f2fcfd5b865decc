pub mod config;
pub mod error;
pub mod observability;
pub mod routes;
pub mod server;
pub mod site;

pub use config::Config;
pub use routes::{AppState, router};
pub use site::SiteContent;
