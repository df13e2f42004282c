//! Command implementations.

pub mod batch;
pub mod config;
pub mod render;

pub use self::batch::execute_batch;
pub use self::config::execute_config;
pub use self::render::execute_render;
