//! Team slash commands: /call, /create

use crate::roster::STAFF_ROLES;
use serenity::builder::CreateApplicationCommand;
use serenity::model::application::command::CommandOptionType;

/// Creates the call command
pub(super) fn create_call_command() -> CreateApplicationCommand {
    CreateApplicationCommand::default()
        .name("call")
        .description("Call an organizer or a mentor for your team")
        .create_option(|option| {
            option
                .name("role")
                .description("Choose Organizer or Mentor")
                .kind(CommandOptionType::String)
                .required(true);
            for (label, value) in STAFF_ROLES {
                option.add_string_choice(*label, *value);
            }
            option
        })
        .create_option(|option| {
            option
                .name("team")
                .description("Your team name")
                .kind(CommandOptionType::String)
                .required(true)
        })
        .to_owned()
}

/// Creates the create command
pub(super) fn create_create_command() -> CreateApplicationCommand {
    CreateApplicationCommand::default()
        .name("create")
        .description("Create a dedicated voice and text channel for your team")
        .create_option(|option| {
            option
                .name("team")
                .description("Your team name")
                .kind(CommandOptionType::String)
                .required(true)
        })
        .create_option(|option| {
            option
                .name("members")
                .description("Mention all team members separated by spaces")
                .kind(CommandOptionType::String)
                .required(true)
        })
        .to_owned()
}
