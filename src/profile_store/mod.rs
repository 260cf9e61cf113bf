mod memory_store;

pub use memory_store::InMemoryProfileStore;

use crate::listening::Profile;
use anyhow::Result;

/// Keyed storage for built listening profiles.
///
/// The scoring engine never touches this; it exists so the session layer
/// can park each user's profile once per session and hand plain
/// [`Profile`] values to the engine afterwards.
pub trait ProfileStore: Send + Sync {
    /// Returns the profile stored under `user_id`.
    /// Returns Ok(None) if no profile was stored for that user.
    fn get(&self, user_id: &str) -> Result<Option<Profile>>;

    /// Stores (or replaces) the profile for `user_id`.
    fn put(&self, user_id: &str, profile: Profile) -> Result<()>;

    /// Returns the ids of all users with a stored profile.
    fn user_ids(&self) -> Result<Vec<String>>;
}
