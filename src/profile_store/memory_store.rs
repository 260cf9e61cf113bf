use super::ProfileStore;
use crate::listening::Profile;
use anyhow::{anyhow, Result};
use std::collections::HashMap;
use std::sync::RwLock;

/// Process-local [`ProfileStore`]. Profiles live for the lifetime of the
/// process and are gone on restart.
#[derive(Default)]
pub struct InMemoryProfileStore {
    profiles: RwLock<HashMap<String, Profile>>,
}

impl InMemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProfileStore for InMemoryProfileStore {
    fn get(&self, user_id: &str) -> Result<Option<Profile>> {
        let profiles = self
            .profiles
            .read()
            .map_err(|_| anyhow!("profile store lock poisoned"))?;
        Ok(profiles.get(user_id).cloned())
    }

    fn put(&self, user_id: &str, profile: Profile) -> Result<()> {
        let mut profiles = self
            .profiles
            .write()
            .map_err(|_| anyhow!("profile store lock poisoned"))?;
        profiles.insert(user_id.to_string(), profile);
        Ok(())
    }

    fn user_ids(&self) -> Result<Vec<String>> {
        let profiles = self
            .profiles
            .read()
            .map_err(|_| anyhow!("profile store lock poisoned"))?;
        Ok(profiles.keys().cloned().collect())
    }
}
