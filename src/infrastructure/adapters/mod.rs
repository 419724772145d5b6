//! Gateway adapters for chat platforms

pub mod console;

pub use console::ConsoleAdapter;
