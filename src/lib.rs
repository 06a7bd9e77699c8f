pub mod config;
pub mod error;
pub mod flags;
pub mod highlight;
pub mod output;
pub mod parse;
pub mod shell;

pub mod core;
pub mod input;
pub mod path;
