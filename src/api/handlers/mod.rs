use anyhow::Result;
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::config::settings::{AppConfig, CategorySettings};
use crate::rating::RatingEngine;
use crate::store::Ladder;
use crate::uploads::PhotoStorage;

pub mod home;
pub mod matches;
pub mod players;
pub mod ratings;

/// Shared by every handler through `Arc<AppState>`
pub struct AppState {
    ladder: Mutex<Ladder>,
    pub engine: RatingEngine,
    pub categories: CategorySettings,
    pub photos: PhotoStorage,
    pub static_dir: PathBuf,
    pub max_upload_bytes: usize,
}

impl AppState {
    pub fn new(config: AppConfig) -> Result<Self> {
        let AppConfig { rating, categories, server } = config;

        Ok(Self {
            ladder: Mutex::new(Ladder::new(rating.baseline_rating)),
            engine: RatingEngine::new(rating),
            categories,
            photos: PhotoStorage::new(&server.upload_dir)?,
            static_dir: server.static_dir,
            max_upload_bytes: server.max_upload_bytes,
        })
    }

    /// Lock the ladder for one whole read or update.
    ///
    /// Every update leaves the ladder consistent, so a poisoned lock is
    /// recovered rather than propagated.
    pub fn ladder(&self) -> MutexGuard<'_, Ladder> {
        self.ladder.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
