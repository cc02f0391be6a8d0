use regex::Regex;
use serenity::model::id::UserId;
use std::sync::OnceLock;

fn user_mention_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"<@!?(\d+)>").expect("user mention pattern is valid"))
}

/// Extracts the user ids of every `<@id>` / `<@!id>` token in `text`.
///
/// Ids come back in the order they first appear; repeated mentions of the
/// same user collapse into one entry. Tokens whose id does not fit a
/// snowflake are skipped.
pub fn extract_user_ids(text: &str) -> Vec<UserId> {
    let mut ids: Vec<UserId> = Vec::new();
    for captures in user_mention_pattern().captures_iter(text) {
        let Some(id) = captures.get(1).and_then(|m| m.as_str().parse::<u64>().ok()) else {
            continue;
        };
        let id = UserId(id);
        if !ids.contains(&id) {
            ids.push(id);
        }
    }
    ids
}
