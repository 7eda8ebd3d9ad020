pub mod lab;
pub mod lifecycle;
pub mod listeners;
pub mod state;
