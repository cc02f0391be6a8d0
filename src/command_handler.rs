use crate::commands::{get_string_option, HackathonCommand};
use crate::config::Config;
use crate::content::{ACTIVITIES, AGENDA, FAQ};
use crate::countdown::TimerStatus;
use crate::roster::{resolve_call, role_entries};
use crate::team_channels::{TeamChannelPlan, NO_MEMBERS_REPLY, THREAD_AUTO_ARCHIVE_MINUTES};
use anyhow::Result;
use chrono::{DateTime, Utc};
use log::{info, warn};
use serenity::model::application::interaction::application_command::ApplicationCommandInteraction;
use serenity::model::application::interaction::InteractionResponseType;
use serenity::model::channel::ChannelType;
use serenity::model::id::{GuildId, RoleId};
use serenity::prelude::Context;

#[derive(Clone)]
pub struct CommandHandler {
    end_time: DateTime<Utc>,
}

impl CommandHandler {
    pub fn new(config: &Config) -> Self {
        CommandHandler {
            end_time: config.end_time,
        }
    }

    pub async fn handle_slash_command(&self, ctx: &Context, command: &ApplicationCommandInteraction) -> Result<()> {
        let Some(kind) = HackathonCommand::from_name(&command.data.name) else {
            warn!("Ignoring unknown slash command: {}", command.data.name);
            return Ok(());
        };

        info!("Processing slash command: {} from user: {}", kind.name(), command.user.id);

        match kind {
            HackathonCommand::Agenda => self.reply(ctx, command, AGENDA, false).await?,
            HackathonCommand::Activities => self.reply(ctx, command, ACTIVITIES, false).await?,
            HackathonCommand::Call => self.handle_slash_call(ctx, command).await?,
            HackathonCommand::Faq => self.reply(ctx, command, FAQ, true).await?,
            HackathonCommand::Create => self.handle_slash_create(ctx, command).await?,
            HackathonCommand::Timer => self.handle_slash_timer(ctx, command).await?,
        }

        Ok(())
    }

    async fn handle_slash_call(&self, ctx: &Context, command: &ApplicationCommandInteraction) -> Result<()> {
        self.defer_ephemeral(ctx, command).await?;

        let role = get_string_option(&command.data.options, "role")
            .ok_or_else(|| anyhow::anyhow!("Missing role parameter"))?;
        let team = get_string_option(&command.data.options, "team")
            .ok_or_else(|| anyhow::anyhow!("Missing team parameter"))?;

        let guild_id = guild_of(command)?;
        let guild = ctx
            .cache
            .guild(guild_id)
            .ok_or_else(|| anyhow::anyhow!("Guild {} is not cached", guild_id))?;

        let outcome = resolve_call(&role_entries(&guild), &role, &team);
        self.edit_reply(ctx, command, outcome.content()).await
    }

    async fn handle_slash_create(&self, ctx: &Context, command: &ApplicationCommandInteraction) -> Result<()> {
        self.defer_ephemeral(ctx, command).await?;

        let team = get_string_option(&command.data.options, "team")
            .ok_or_else(|| anyhow::anyhow!("Missing team parameter"))?;
        let members = get_string_option(&command.data.options, "members")
            .ok_or_else(|| anyhow::anyhow!("Missing members parameter"))?;

        let guild_id = guild_of(command)?;
        // @everyone shares the guild's id
        let Some(plan) = TeamChannelPlan::new(&team, &members, RoleId(guild_id.0)) else {
            return self.edit_reply(ctx, command, NO_MEMBERS_REPLY).await;
        };

        let text_channel = guild_id
            .create_channel(&ctx.http, |channel| {
                channel
                    .name(&plan.text_channel_name)
                    .kind(ChannelType::Text)
                    .permissions(plan.overwrites.clone())
            })
            .await?;

        let voice_channel = guild_id
            .create_channel(&ctx.http, |channel| {
                channel
                    .name(&plan.voice_channel_name)
                    .kind(ChannelType::Voice)
                    .permissions(plan.overwrites.clone())
            })
            .await?;

        // Threads without a starter message go through this endpoint; the kind picks a public thread.
        let thread = text_channel
            .id
            .create_private_thread(&ctx.http, |thread| {
                thread
                    .name(&plan.thread_name)
                    .kind(ChannelType::PublicThread)
                    .auto_archive_duration(THREAD_AUTO_ARCHIVE_MINUTES)
            })
            .await?;

        info!(
            "Created channels for team '{}' ({} members): {}, {}, {}",
            plan.team,
            plan.members.len(),
            text_channel.id,
            voice_channel.id,
            thread.id
        );

        let content = plan.created_content(text_channel.id, voice_channel.id, thread.id);
        self.edit_reply(ctx, command, content).await
    }

    async fn handle_slash_timer(&self, ctx: &Context, command: &ApplicationCommandInteraction) -> Result<()> {
        let status = TimerStatus::at(self.end_time, Utc::now());
        self.reply(ctx, command, status.content(), false).await
    }

    async fn reply(
        &self,
        ctx: &Context,
        command: &ApplicationCommandInteraction,
        content: impl ToString,
        ephemeral: bool,
    ) -> Result<()> {
        command
            .create_interaction_response(&ctx.http, |response| {
                response
                    .kind(InteractionResponseType::ChannelMessageWithSource)
                    .interaction_response_data(|message| message.content(content).ephemeral(ephemeral))
            })
            .await?;
        Ok(())
    }

    /// Acknowledges within the interaction window; the answer follows through [`Self::edit_reply`].
    async fn defer_ephemeral(&self, ctx: &Context, command: &ApplicationCommandInteraction) -> Result<()> {
        command
            .create_interaction_response(&ctx.http, |response| {
                response
                    .kind(InteractionResponseType::DeferredChannelMessageWithSource)
                    .interaction_response_data(|message| message.ephemeral(true))
            })
            .await?;
        Ok(())
    }

    async fn edit_reply(
        &self,
        ctx: &Context,
        command: &ApplicationCommandInteraction,
        content: impl ToString,
    ) -> Result<()> {
        command
            .edit_original_interaction_response(&ctx.http, |response| response.content(content))
            .await?;
        Ok(())
    }
}

fn guild_of(command: &ApplicationCommandInteraction) -> Result<GuildId> {
    command
        .guild_id
        .ok_or_else(|| anyhow::anyhow!("/{} must be used inside a guild", command.data.name))
}
