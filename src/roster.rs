//! # Staff Paging
//!
//! Resolves `/call` requests against a snapshot of the guild's roles and the
//! members holding them.
//!
//! Role names are compared case-insensitively against the requested role.
//! When several members hold the role, only the first holder is paged;
//! holders are ordered by user id so the choice is stable between calls.

use serenity::model::guild::Guild;
use serenity::model::id::{RoleId, UserId};
use serenity::model::mention::Mentionable;

/// Choice values offered by the `role` option of `/call`.
pub const STAFF_ROLES: &[(&str, &str)] = &[("Organizer", "organizer"), ("Mentor", "mentor")];

/// A guild role together with the members currently holding it.
#[derive(Debug, Clone)]
pub struct RoleEntry {
    pub id: RoleId,
    pub name: String,
    pub holders: Vec<UserId>,
}

/// Builds role entries from a cached guild.
pub fn role_entries(guild: &Guild) -> Vec<RoleEntry> {
    guild
        .roles
        .values()
        .map(|role| {
            let mut holders: Vec<UserId> = guild
                .members
                .values()
                .filter(|member| member.roles.contains(&role.id))
                .map(|member| member.user.id)
                .collect();
            holders.sort();
            RoleEntry {
                id: role.id,
                name: role.name.clone(),
                holders,
            }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallOutcome {
    RoleNotFound { role: String },
    NoneAvailable { role: String },
    Called { member: UserId, team: String },
}

impl CallOutcome {
    pub fn content(&self) -> String {
        match self {
            CallOutcome::RoleNotFound { role } => format!("Role \"{}\" not found.", role),
            CallOutcome::NoneAvailable { role } => format!("No {} is currently available.", role),
            CallOutcome::Called { member, team } => {
                format!("{}, you have been called by team **{}**.", member.mention(), team)
            }
        }
    }
}

/// Picks the member to page for `role` on behalf of `team`.
pub fn resolve_call(roles: &[RoleEntry], role: &str, team: &str) -> CallOutcome {
    let Some(entry) = roles.iter().find(|entry| entry.name.to_lowercase() == role) else {
        return CallOutcome::RoleNotFound {
            role: role.to_string(),
        };
    };

    match entry.holders.first() {
        Some(member) => CallOutcome::Called {
            member: *member,
            team: team.to_string(),
        },
        None => CallOutcome::NoneAvailable {
            role: role.to_string(),
        },
    }
}
