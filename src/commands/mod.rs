//! # Command System
//!
//! The closed set of slash commands the bot answers, their definitions and
//! the handler that runs them.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 1.0.0: Initial command set

pub mod slash;

pub use crate::command_handler::CommandHandler;

pub use slash::{
    create_slash_commands, get_string_option, register_guild_commands, spawn_guild_command_refresh,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HackathonCommand {
    Agenda,
    Activities,
    Call,
    Faq,
    Create,
    Timer,
}

impl HackathonCommand {
    /// Every command, in registration order
    pub const ALL: [HackathonCommand; 6] = [
        HackathonCommand::Agenda,
        HackathonCommand::Activities,
        HackathonCommand::Call,
        HackathonCommand::Faq,
        HackathonCommand::Create,
        HackathonCommand::Timer,
    ];

    /// The name the command is registered under
    pub fn name(self) -> &'static str {
        match self {
            HackathonCommand::Agenda => "agenda",
            HackathonCommand::Activities => "activites",
            HackathonCommand::Call => "call",
            HackathonCommand::Faq => "faq",
            HackathonCommand::Create => "create",
            HackathonCommand::Timer => "timer",
        }
    }

    /// Exact, case-sensitive lookup by registered name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|command| command.name() == name)
    }

    /// Whether the command acknowledges first and edits its reply later
    pub fn is_deferred(self) -> bool {
        matches!(self, HackathonCommand::Call | HackathonCommand::Create)
    }
}
