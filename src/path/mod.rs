mod expander;
mod virtual_dir;

pub use expander::PathExpander;
pub use virtual_dir::VirtualDir;
