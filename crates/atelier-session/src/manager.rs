//! PreferenceManager — concurrent per-session access via DashMap.

use std::sync::Arc;

use dashmap::DashMap;

use atelier_core::errors::AtelierResult;
use atelier_core::models::{CatalogItem, PreferenceProfile};
use atelier_core::traits::IPreferenceStore;

/// Thread-safe preference store using `DashMap` for concurrent access.
///
/// Profiles are created lazily on the first signal for a session key.
pub struct PreferenceManager {
    profiles: Arc<DashMap<String, PreferenceProfile>>,
}

impl PreferenceManager {
    pub fn new() -> Self {
        Self {
            profiles: Arc::new(DashMap::new()),
        }
    }

    /// Get a profile by session key (cloned snapshot).
    pub fn get_profile(&self, session_key: &str) -> Option<PreferenceProfile> {
        self.profiles.get(session_key).map(|r| r.clone())
    }

    /// Record an item view for a session.
    pub fn record_view(&self, session_key: &str, item: &CatalogItem) {
        self.profiles
            .entry(session_key.to_string())
            .or_default()
            .record_view(item);
    }

    /// Record a like for a session.
    pub fn record_like(&self, session_key: &str, item_id: &str) {
        self.profiles
            .entry(session_key.to_string())
            .or_default()
            .record_like(item_id);
    }

    /// Remove a like. No-op for unknown sessions.
    pub fn unlike(&self, session_key: &str, item_id: &str) {
        if let Some(mut entry) = self.profiles.get_mut(session_key) {
            entry.unlike(item_id);
        }
    }

    /// Replace a session's preferred colors.
    pub fn set_preferred_colors(&self, session_key: &str, colors: Vec<String>) {
        self.profiles
            .entry(session_key.to_string())
            .or_default()
            .set_preferred_colors(colors);
    }

    /// Replace a session's preferred styles.
    pub fn set_preferred_styles(&self, session_key: &str, styles: Vec<String>) {
        self.profiles
            .entry(session_key.to_string())
            .or_default()
            .set_preferred_styles(styles);
    }

    /// Replace a session's preferred seasons.
    pub fn set_preferred_seasons(&self, session_key: &str, seasons: Vec<String>) {
        self.profiles
            .entry(session_key.to_string())
            .or_default()
            .set_preferred_seasons(seasons);
    }

    /// Replace a session's preferred occasions.
    pub fn set_preferred_occasions(&self, session_key: &str, occasions: Vec<String>) {
        self.profiles
            .entry(session_key.to_string())
            .or_default()
            .set_preferred_occasions(occasions);
    }

    /// Drop a session's profile entirely.
    pub fn remove(&self, session_key: &str) -> Option<PreferenceProfile> {
        self.profiles.remove(session_key).map(|(_, v)| v)
    }

    /// Number of sessions with a profile.
    pub fn profile_count(&self) -> usize {
        self.profiles.len()
    }

    /// All session keys with a profile.
    pub fn session_keys(&self) -> Vec<String> {
        self.profiles.iter().map(|r| r.key().clone()).collect()
    }
}

impl Default for PreferenceManager {
    fn default() -> Self {
        Self::new()
    }
}

impl IPreferenceStore for PreferenceManager {
    fn read(&self, session_key: &str) -> AtelierResult<Option<PreferenceProfile>> {
        Ok(self.get_profile(session_key))
    }

    fn write(&self, session_key: &str, profile: &PreferenceProfile) -> AtelierResult<()> {
        self.profiles
            .insert(session_key.to_string(), profile.clone());
        Ok(())
    }
}
