//! Credential and profile persistence over the key-value store.
//!
//! Loads mirror localStorage semantics: a missing or unreadable value means
//! "not set", never an error the caller has to handle.

use crate::kv::{keys, KvStore};
use anyhow::Result;
use salus_core::credential::ApiCredential;
use salus_core::profile::UserProfile;

/// The stored credential, if any. Unreadable data is treated as unset.
pub fn load_credential(kv: &KvStore) -> Option<ApiCredential> {
    match kv.get::<ApiCredential>(keys::CREDENTIAL) {
        Ok(cred) => cred,
        Err(e) => {
            tracing::warn!("Stored credential unreadable, treating as unset: {}", e);
            None
        }
    }
}

pub fn store_credential(kv: &KvStore, credential: &ApiCredential) -> Result<()> {
    kv.set(keys::CREDENTIAL, credential)
}

pub fn clear_credential(kv: &KvStore) -> Result<()> {
    kv.remove(keys::CREDENTIAL)
}

/// The stored profile, if any. Unreadable data is treated as unset.
pub fn load_profile(kv: &KvStore) -> Option<UserProfile> {
    match kv.get::<UserProfile>(keys::PROFILE) {
        Ok(profile) => profile,
        Err(e) => {
            tracing::warn!("Stored profile unreadable, treating as unset: {}", e);
            None
        }
    }
}

/// Validate and persist the profile.
pub fn store_profile(kv: &KvStore, profile: &UserProfile) -> Result<()> {
    profile.validate()?;
    kv.set(keys::PROFILE, profile)
}
