//! Persistence for saved posts and user preferences.

mod sqlite;

pub use sqlite::SqlitePostRepository;

use async_trait::async_trait;

use crate::error::GeneratorError;
use crate::model::{ComposedPost, Platform, Tone, UserSettings};

/// Storage contract for posts and settings
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Store a post and return its new id
    async fn save(&self, post: &ComposedPost) -> Result<i64, GeneratorError>;

    /// All stored posts, newest first
    async fn list_all(&self) -> Result<Vec<ComposedPost>, GeneratorError>;

    /// Remove a post; [`GeneratorError::NotFound`] if there is no such id
    async fn delete(&self, id: i64) -> Result<(), GeneratorError>;

    async fn save_settings(&self, settings: &UserSettings) -> Result<(), GeneratorError>;

    /// Stored settings, or the defaults when none were saved yet
    async fn load_settings(&self) -> Result<UserSettings, GeneratorError>;
}

/// Keep posts matching the optional platform and tone filters.
pub fn filter_posts(
    posts: Vec<ComposedPost>,
    platform: Option<Platform>,
    tone: Option<Tone>,
) -> Vec<ComposedPost> {
    posts
        .into_iter()
        .filter(|post| platform.map_or(true, |p| post.platform == p))
        .filter(|post| tone.map_or(true, |t| post.tone == t))
        .collect()
}
