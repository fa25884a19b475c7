// Command-line interface

mod chat;

pub use chat::run_chat;
