//! Domain types exchanged with the SoundHaven backend.

pub mod card;
pub mod discovery;
pub mod ids;
pub mod user;

pub use card::Card;
pub use discovery::{DiscoveryChoice, DiscoveryLogEntry, MarkAsAdded, TodayDiscovery};
pub use ids::{TrackUri, UserId};
pub use user::UserProfile;
