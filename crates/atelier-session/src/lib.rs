//! # atelier-session
//!
//! Concurrent per-session preference profile store backing the
//! [`IPreferenceStore`](atelier_core::traits::IPreferenceStore) seam.

pub mod manager;

pub use manager::PreferenceManager;
