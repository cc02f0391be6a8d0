//! Informational slash commands: /agenda, /activites, /faq, /timer

use serenity::builder::CreateApplicationCommand;

/// Creates the agenda command
pub(super) fn create_agenda_command() -> CreateApplicationCommand {
    CreateApplicationCommand::default()
        .name("agenda")
        .description("Discover the ADC agenda")
        .to_owned()
}

/// Creates the activites command
pub(super) fn create_activites_command() -> CreateApplicationCommand {
    CreateApplicationCommand::default()
        .name("activites")
        .description("Explore the available activities to freshen up the mood")
        .to_owned()
}

/// Creates the faq command
pub(super) fn create_faq_command() -> CreateApplicationCommand {
    CreateApplicationCommand::default()
        .name("faq")
        .description("Frequently asked questions about ADC 4.0 and the problematics")
        .to_owned()
}

/// Creates the timer command
pub(super) fn create_timer_command() -> CreateApplicationCommand {
    CreateApplicationCommand::default()
        .name("timer")
        .description("Show time left for submissions")
        .to_owned()
}
