use std::str::FromStr;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::info;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions, SqliteRow};
use sqlx::Row;

use super::PostRepository;
use crate::error::GeneratorError;
use crate::model::{ComposedPost, Platform, UserSettings};

const CREATE_POSTS: &str = r"
    CREATE TABLE IF NOT EXISTS posts (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        text TEXT NOT NULL,
        hashtags TEXT,
        platform TEXT,
        tone TEXT,
        content_type TEXT,
        timestamp TEXT
    )
";

const CREATE_SETTINGS: &str = r"
    CREATE TABLE IF NOT EXISTS user_settings (
        id INTEGER PRIMARY KEY,
        default_tone TEXT,
        default_platforms TEXT,
        api_key TEXT
    )
";

/// SQLite-backed repository. Hashtag and platform lists are stored as JSON
/// text columns.
#[derive(Clone)]
pub struct SqlitePostRepository {
    pool: SqlitePool,
}

impl SqlitePostRepository {
    /// Open (creating if missing) the database at `database_url`.
    pub async fn connect(database_url: &str) -> Result<Self, GeneratorError> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new().connect_with(options).await?;
        info!("Opened post database at {}", database_url);
        Self::with_pool(pool).await
    }

    /// A private in-memory database, gone when the repository is dropped.
    pub async fn in_memory() -> Result<Self, GeneratorError> {
        // Every connection to :memory: is a separate database, so keep one
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await?;
        Self::with_pool(pool).await
    }

    async fn with_pool(pool: SqlitePool) -> Result<Self, GeneratorError> {
        sqlx::query(CREATE_POSTS).execute(&pool).await?;
        sqlx::query(CREATE_SETTINGS).execute(&pool).await?;
        Ok(Self { pool })
    }

    fn row_to_post(row: &SqliteRow) -> Result<ComposedPost, GeneratorError> {
        let hashtags: Option<String> = row.try_get("hashtags")?;
        let platform: String = row.try_get("platform")?;
        let tone: String = row.try_get("tone")?;
        let content_type: String = row.try_get("content_type")?;
        let created_at: DateTime<Utc> = row.try_get("timestamp")?;

        Ok(ComposedPost {
            id: Some(row.try_get("id")?),
            text: row.try_get("text")?,
            platform: platform.parse()?,
            hashtags: match hashtags.filter(|h| !h.is_empty()) {
                Some(json) => serde_json::from_str(&json)?,
                None => Vec::new(),
            },
            content_type: content_type.parse()?,
            tone: tone.parse()?,
            created_at,
        })
    }
}

#[async_trait]
impl PostRepository for SqlitePostRepository {
    async fn save(&self, post: &ComposedPost) -> Result<i64, GeneratorError> {
        let result = sqlx::query(
            r"
            INSERT INTO posts (text, hashtags, platform, tone, content_type, timestamp)
            VALUES (?, ?, ?, ?, ?, ?)
            ",
        )
        .bind(&post.text)
        .bind(serde_json::to_string(&post.hashtags)?)
        .bind(post.platform.as_str())
        .bind(post.tone.as_str())
        .bind(post.content_type.as_str())
        .bind(post.created_at)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();
        info!("Saved {} post with id {}", post.platform, id);
        Ok(id)
    }

    async fn list_all(&self) -> Result<Vec<ComposedPost>, GeneratorError> {
        let rows = sqlx::query(
            "SELECT id, text, hashtags, platform, tone, content_type, timestamp \
             FROM posts ORDER BY timestamp DESC, id DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(Self::row_to_post).collect()
    }

    async fn delete(&self, id: i64) -> Result<(), GeneratorError> {
        let result = sqlx::query("DELETE FROM posts WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(GeneratorError::NotFound(id));
        }
        info!("Deleted post {}", id);
        Ok(())
    }

    async fn save_settings(&self, settings: &UserSettings) -> Result<(), GeneratorError> {
        sqlx::query(
            r"
            INSERT OR REPLACE INTO user_settings (id, default_tone, default_platforms, api_key)
            VALUES (1, ?, ?, ?)
            ",
        )
        .bind(settings.default_tone.as_str())
        .bind(serde_json::to_string(&settings.default_platforms)?)
        .bind(&settings.api_key)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn load_settings(&self) -> Result<UserSettings, GeneratorError> {
        let row = sqlx::query(
            "SELECT default_tone, default_platforms, api_key FROM user_settings WHERE id = 1",
        )
        .fetch_optional(&self.pool)
        .await?;

        let Some(row) = row else {
            return Ok(UserSettings::default());
        };

        let defaults = UserSettings::default();
        let tone: Option<String> = row.try_get("default_tone")?;
        let platforms: Option<String> = row.try_get("default_platforms")?;
        let api_key: Option<String> = row.try_get("api_key")?;

        Ok(UserSettings {
            default_tone: match tone {
                Some(tone) => tone.parse()?,
                None => defaults.default_tone,
            },
            default_platforms: match platforms.filter(|p| !p.is_empty()) {
                Some(json) => serde_json::from_str::<Vec<Platform>>(&json)?,
                None => defaults.default_platforms,
            },
            api_key: api_key.unwrap_or_default(),
        })
    }
}
