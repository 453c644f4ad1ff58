//! Terminal components for the datatype mapping client.

pub mod display;
pub mod logging;
pub mod settings;
pub mod terminal;
