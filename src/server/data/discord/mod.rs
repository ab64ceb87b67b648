pub mod channel;
pub mod guild;
pub mod link;
pub mod message;

#[cfg(test)]
mod test;

pub use channel::DiscordGuildChannelRepository;
pub use guild::DiscordGuildRepository;
pub use link::PartyRankChannelRepository;
pub use message::PartyRankMessageRepository;
