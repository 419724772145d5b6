//! mute-bot - a chat bot that recognises commands by prefix or mention and
//! dispatches them to registered handlers

pub mod application;
pub mod domain;
pub mod infrastructure;
