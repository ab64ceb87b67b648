//! Announcement embed builder utilities.
//!
//! Helper functions for constructing the Discord embeds posted into linked
//! channels. These are shared between the status, results, reminder, and link
//! modules to keep the announcements looking consistent.

use chrono::{DateTime, Utc};
use serenity::all::{CreateEmbed, CreateEmbedFooter, Timestamp};

use crate::server::{
    error::AppError,
    model::{party_rank::PartyRank, results::RankedItem},
};

/// Embed color for the submission-closed announcement.
pub const COLOR_ONGOING: u32 = 0x3498db;
/// Embed color for the rating-open announcement.
pub const COLOR_RATING: u32 = 0xe67e22;
/// Embed color for the finished announcement.
pub const COLOR_FINISHED: u32 = 0x9b59b6;
/// Embed color for the results podium.
pub const COLOR_RESULTS: u32 = 0xf1c40f;
/// Embed color for rating deadline reminders.
pub const COLOR_REMINDER: u32 = 0xe74c3c;
/// Embed color for the channel link confirmation.
pub const COLOR_LINK: u32 = 0x2ecc71;

/// Medal prefixes for the top three podium lines.
const PODIUM_MEDALS: [&str; 3] = ["\u{1F947}", "\u{1F948}", "\u{1F949}"];

/// Builds the base embed every announcement starts from.
///
/// Sets the contest name as the title, the contest page as the link target,
/// and a "sent at" timestamp with the contest footer.
///
/// # Arguments
/// - `party_rank` - Contest the announcement is about
/// - `url` - Public contest page URL
/// - `color` - Embed color as hex integer
///
/// # Returns
/// - `Ok(CreateEmbed)` - Base embed ready for announcement fields
/// - `Err(AppError::InternalError)` - Current time outside Discord's timestamp range
pub fn base_embed(party_rank: &PartyRank, url: &str, color: u32) -> Result<CreateEmbed, AppError> {
    let now = Utc::now();
    let timestamp = Timestamp::from_unix_timestamp(now.timestamp()).map_err(|e| {
        AppError::InternalError(format!(
            "Invalid Discord timestamp {}: {}",
            now.timestamp(),
            e
        ))
    })?;

    let mut embed = CreateEmbed::new()
        .title(&party_rank.name)
        .url(url)
        .color(color)
        .footer(CreateEmbedFooter::new(format!(
            "Party Rank #{}",
            party_rank.id
        )))
        .timestamp(timestamp);

    if let Some(description) = &party_rank.description {
        if !description.is_empty() {
            embed = embed.description(description);
        }
    }

    Ok(embed)
}

/// Formats a deadline as Discord timestamp markup, absolute plus relative.
pub fn deadline_markup(deadline: DateTime<Utc>) -> String {
    format!("<t:{}:F> - <t:{}:R>", deadline.timestamp(), deadline.timestamp())
}

/// Formats the podium lines for the results embed.
///
/// Lists the top three items with medals and their weighted score. Item
/// names come from the leaderboard, so authors stay hidden here; the full
/// attributed breakdown lives on the results page.
///
/// # Arguments
/// - `items` - Leaderboard in order, best first
///
/// # Returns
/// - `String` - One line per podium place, or a placeholder with no items
pub fn format_podium(items: &[RankedItem]) -> String {
    if items.is_empty() {
        return "No entries were rated.".to_string();
    }

    items
        .iter()
        .take(PODIUM_MEDALS.len())
        .zip(PODIUM_MEDALS.iter())
        .map(|(ranked, medal)| {
            format!(
                "{} **{}** - {:.2}",
                medal, ranked.item.name, ranked.weighted_score
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
