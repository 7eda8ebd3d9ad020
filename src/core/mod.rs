pub mod components;
pub mod config;
pub mod scene;
pub mod system;
pub mod viewport;
