pub mod dependencies;
pub mod invocation;
pub mod manifest;
pub mod questions;
pub mod resolved_config;
pub mod template;
