//! Terminal demo host: one autocomplete over a catalog of labels.

pub mod command;
pub mod demo;
pub mod event;
pub mod render;
pub mod runtime;

pub use demo::Demo;
pub use runtime::Runtime;
