pub mod boundary;
pub mod factory;
pub mod rapier;
