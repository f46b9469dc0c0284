//! Command implementations for the TypeMatch CLI

pub mod build;
pub mod demo;
pub mod shape;

pub use build::build_command;
pub use demo::demo_command;
pub use shape::shape_command;
