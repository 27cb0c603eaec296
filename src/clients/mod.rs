pub mod command;
pub mod render;
pub mod terminal;
