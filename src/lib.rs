// Liam - Mental health companion chat service
// Library exports

pub mod backend;
pub mod cli;
pub mod companion;
pub mod config;
pub mod conversation;
pub mod engine;
pub mod response;
pub mod server;
pub mod triage;

pub use companion::Companion;
