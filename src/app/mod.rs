pub mod api;
pub mod cli;
pub mod config;
mod context;
pub mod logging;

pub use context::AppContext;
