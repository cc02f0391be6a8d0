//! # Team Channels
//!
//! Plans the private text channel, voice channel and thread created by
//! `/create`. The plan is pure data; the command handler performs the
//! actual Discord calls.

use crate::mentions::extract_user_ids;
use serenity::model::channel::{PermissionOverwrite, PermissionOverwriteType};
use serenity::model::id::{ChannelId, RoleId, UserId};
use serenity::model::mention::Mentionable;
use serenity::model::permissions::Permissions;

/// Auto-archive duration of the team thread, in minutes.
pub const THREAD_AUTO_ARCHIVE_MINUTES: u16 = 1440;

pub const NO_MEMBERS_REPLY: &str = "Please mention at least one team member using @username.";

#[derive(Debug, Clone)]
pub struct TeamChannelPlan {
    pub team: String,
    pub members: Vec<UserId>,
    pub text_channel_name: String,
    pub voice_channel_name: String,
    pub thread_name: String,
    pub overwrites: Vec<PermissionOverwrite>,
}

impl TeamChannelPlan {
    /// Returns `None` when `members` holds no user mention.
    ///
    /// `everyone` is the guild's default role, whose id equals the guild id.
    pub fn new(team: &str, members: &str, everyone: RoleId) -> Option<Self> {
        let members = extract_user_ids(members);
        if members.is_empty() {
            return None;
        }

        let slug = team.to_lowercase();
        Some(TeamChannelPlan {
            team: team.to_string(),
            overwrites: member_overwrites(everyone, &members),
            members,
            text_channel_name: format!("team-{}-text", slug),
            voice_channel_name: format!("team-{}-voice", slug),
            thread_name: format!("🏷️ {}", team),
        })
    }

    pub fn created_content(&self, text: ChannelId, voice: ChannelId, thread: ChannelId) -> String {
        format!(
            "✅ Channels created for team **{}**:\n• Text: {}\n• Voice: {}\n• Thread: {}",
            self.team,
            text.mention(),
            voice.mention(),
            thread.mention()
        )
    }
}

/// Hides the channel from `@everyone` and opens it to each member.
fn member_overwrites(everyone: RoleId, members: &[UserId]) -> Vec<PermissionOverwrite> {
    let member_access = Permissions::VIEW_CHANNEL
        | Permissions::SEND_MESSAGES
        | Permissions::CONNECT
        | Permissions::SPEAK;

    let mut overwrites = Vec::with_capacity(members.len() + 1);
    overwrites.push(PermissionOverwrite {
        allow: Permissions::empty(),
        deny: Permissions::VIEW_CHANNEL,
        kind: PermissionOverwriteType::Role(everyone),
    });
    overwrites.extend(members.iter().map(|member| PermissionOverwrite {
        allow: member_access,
        deny: Permissions::empty(),
        kind: PermissionOverwriteType::Member(*member),
    }));
    overwrites
}

#[cfg(test)]
mod tests {
    use super::*;

    const GUILD: u64 = 900;

    #[test]
    fn test_plan_without_mentions_is_rejected() {
        assert!(TeamChannelPlan::new("Falcons", "alice bob", RoleId(GUILD)).is_none());
        assert!(TeamChannelPlan::new("Falcons", "", RoleId(GUILD)).is_none());
    }

    #[test]
    fn test_plan_names() {
        let plan = TeamChannelPlan::new("Falcons", "<@111> <@222>", RoleId(GUILD)).unwrap();
        assert_eq!(plan.text_channel_name, "team-falcons-text");
        assert_eq!(plan.voice_channel_name, "team-falcons-voice");
        assert_eq!(plan.thread_name, "🏷️ Falcons");
        assert_eq!(plan.members, vec![UserId(111), UserId(222)]);
    }

    #[test]
    fn test_plan_overwrites() {
        let plan = TeamChannelPlan::new("Falcons", "<@111> <@222>", RoleId(GUILD)).unwrap();
        assert_eq!(plan.overwrites.len(), 3);

        let everyone = &plan.overwrites[0];
        assert!(matches!(everyone.kind, PermissionOverwriteType::Role(RoleId(GUILD))));
        assert_eq!(everyone.deny, Permissions::VIEW_CHANNEL);
        assert!(everyone.allow.is_empty());

        let expected_allow = Permissions::VIEW_CHANNEL
            | Permissions::SEND_MESSAGES
            | Permissions::CONNECT
            | Permissions::SPEAK;
        let granted: Vec<u64> = plan.overwrites[1..]
            .iter()
            .map(|overwrite| {
                assert_eq!(overwrite.allow, expected_allow);
                assert!(overwrite.deny.is_empty());
                match overwrite.kind {
                    PermissionOverwriteType::Member(UserId(id)) => id,
                    _ => panic!("expected a member overwrite"),
                }
            })
            .collect();
        assert_eq!(granted, vec![111, 222]);
    }

    #[test]
    fn test_thread_keeps_team_casing() {
        let plan = TeamChannelPlan::new("Night Owls", "<@!5>", RoleId(GUILD)).unwrap();
        assert_eq!(plan.text_channel_name, "team-night owls-text");
        assert_eq!(plan.thread_name, "🏷️ Night Owls");
    }

    #[test]
    fn test_created_content_links_all_channels() {
        let plan = TeamChannelPlan::new("Falcons", "<@111>", RoleId(GUILD)).unwrap();
        let content = plan.created_content(ChannelId(1), ChannelId(2), ChannelId(3));
        assert_eq!(
            content,
            "✅ Channels created for team **Falcons**:\n• Text: <#1>\n• Voice: <#2>\n• Thread: <#3>"
        );
    }
}
