pub mod command_handler;
pub mod commands;
pub mod config;
pub mod content;
pub mod countdown;
pub mod mentions;
pub mod roster;
pub mod team_channels;
