//! # Slash Commands (/)
//!
//! Guild slash command definitions and their registration.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 1.0.0: agenda, activites, call, faq, create, timer

mod general;
mod team;

use super::HackathonCommand;
use crate::config::Config;
use anyhow::Result;
use log::{error, info};
use serenity::builder::CreateApplicationCommand;
use serenity::http::Http;
use serenity::model::application::interaction::application_command::CommandDataOption;
use serenity::model::id::GuildId;
use std::future::Future;
use tokio::task::JoinHandle;

/// Creates all slash command definitions, in registration order
pub fn create_slash_commands() -> Vec<CreateApplicationCommand> {
    HackathonCommand::ALL.into_iter().map(create_command).collect()
}

fn create_command(command: HackathonCommand) -> CreateApplicationCommand {
    match command {
        HackathonCommand::Agenda => general::create_agenda_command(),
        HackathonCommand::Activities => general::create_activites_command(),
        HackathonCommand::Call => team::create_call_command(),
        HackathonCommand::Faq => general::create_faq_command(),
        HackathonCommand::Create => team::create_create_command(),
        HackathonCommand::Timer => general::create_timer_command(),
    }
}

/// Replaces the guild's registered commands with [`create_slash_commands`]
pub async fn register_guild_commands(http: impl AsRef<Http>, guild_id: GuildId) -> Result<()> {
    let slash_commands = create_slash_commands();
    let count = slash_commands.len();

    guild_id
        .set_application_commands(http, |commands| {
            for command in slash_commands {
                commands.add_application_command(command);
            }
            commands
        })
        .await?;

    info!("{} guild slash commands registered for guild: {}", count, guild_id);
    Ok(())
}

/// Refreshes the guild's commands on a background task so the gateway never waits on it.
///
/// A failed refresh is logged and leaves whatever commands were registered before.
pub fn spawn_guild_command_refresh(config: &Config) -> JoinHandle<()> {
    let http = Http::new_with_application_id(&config.discord_token, config.application_id);
    let guild_id = GuildId(config.guild_id);
    spawn_registration(async move { register_guild_commands(&http, guild_id).await })
}

fn spawn_registration<F>(registration: F) -> JoinHandle<()>
where
    F: Future<Output = Result<()>> + Send + 'static,
{
    tokio::spawn(async move {
        info!("🔄 Refreshing application commands...");
        match registration.await {
            Ok(()) => info!("✅ Commands registered successfully."),
            Err(e) => error!("❌ Error registering commands: {}", e),
        }
    })
}

/// Utility function to get string option from slash command
pub fn get_string_option(options: &[CommandDataOption], name: &str) -> Option<String> {
    options
        .iter()
        .find(|opt| opt.name == name)
        .and_then(|opt| opt.value.as_ref())
        .and_then(|val| val.as_str())
        .map(|s| s.to_string())
}
