pub mod commands;
pub mod env;
pub mod state;

pub use state::{Session, SessionStatus};
