mod bot;
pub mod commands;
pub mod embeds;

pub use bot::{Context, Data, create_framework};
