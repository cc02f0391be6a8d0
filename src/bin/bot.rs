use anyhow::Result;
use dotenvy::dotenv;
use log::{debug, error, info};
use serenity::async_trait;
use serenity::model::application::interaction::Interaction;
use serenity::model::gateway::Ready;
use serenity::prelude::*;
use std::sync::Arc;

use adc_bot::commands::{spawn_guild_command_refresh, CommandHandler};
use adc_bot::config::Config;

struct Handler {
    command_handler: Arc<CommandHandler>,
}

impl Handler {
    fn new(command_handler: CommandHandler) -> Self {
        Handler {
            command_handler: Arc::new(command_handler),
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    async fn ready(&self, _ctx: Context, ready: Ready) {
        info!("🎉 Logged in as {}", ready.user.tag());
        info!("📡 Connected to {} guilds", ready.guilds.len());
    }

    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        match interaction {
            Interaction::ApplicationCommand(command) => {
                // Failures are logged only; the interaction is left as the handler reached it.
                if let Err(e) = self.command_handler.handle_slash_command(&ctx, &command).await {
                    error!("Error handling slash command '{}': {:?}", command.data.name, e);
                }
            }
            other => {
                debug!("Ignoring non-command interaction: {:?}", other.kind());
            }
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let config = Config::from_env()?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();

    info!("Starting hackathon bot...");
    info!("⏳ Submission deadline: {}", config.end_time);

    // Runs alongside the gateway login; its outcome is only logged.
    spawn_guild_command_refresh(&config);

    let handler = Handler::new(CommandHandler::new(&config));

    // GUILD_MEMBERS keeps role holders in the cache for /call. It is a privileged
    // intent: enable "Server Members Intent" in the developer portal or the gateway
    // refuses the connection.
    let intents = GatewayIntents::GUILDS | GatewayIntents::GUILD_MEMBERS;

    let mut client = Client::builder(&config.discord_token, intents)
        .event_handler(handler)
        .application_id(config.application_id)
        .await
        .map_err(|e| {
            error!("Failed to create Discord client: {}", e);
            anyhow::anyhow!("Client creation failed: {}", e)
        })?;

    info!("Bot configured successfully. Connecting to Discord gateway...");

    if let Err(why) = client.start().await {
        error!("Gateway connection failed: {:?}", why);
        return Err(anyhow::anyhow!("Failed to establish gateway connection: {}", why));
    }

    Ok(())
}
