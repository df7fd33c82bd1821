use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for item, joined with its owning category.
///
/// `image` holds the storage path written by the admin tooling, not a full
/// URL; resolution against the media base URL happens at serialization.
#[derive(Debug, Clone, FromRow)]
pub struct ItemRow {
    pub id: i64,
    pub image: Option<String>,
    pub title: String,
    pub caption: String,
    pub link: String,
    pub category_id: i64,
    pub category_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
