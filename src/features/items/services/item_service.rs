use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::items::dtos::{ItemListingDto, ItemResponseDto};
use crate::features::items::models::ItemRow;
use crate::features::items::query::ItemQuery;

/// Service for item read operations
pub struct ItemService {
    pool: PgPool,
    media_base_url: String,
}

impl ItemService {
    pub fn new(pool: PgPool, media_base_url: String) -> Self {
        Self {
            pool,
            media_base_url,
        }
    }

    /// Run a resolved item query and shape the reply accordingly
    pub async fn query(&self, query: ItemQuery) -> Result<ItemListingDto> {
        match query {
            ItemQuery::Detail(id) => Ok(ItemListingDto::Item(self.get(id).await?)),
            ItemQuery::Category(name) => {
                Ok(ItemListingDto::Items(self.list_by_category(&name).await?))
            }
            ItemQuery::All => Ok(ItemListingDto::Items(self.list().await?)),
        }
    }

    /// List all items, newest first
    pub async fn list(&self) -> Result<Vec<ItemResponseDto>> {
        let rows = sqlx::query_as::<_, ItemRow>(
            r#"
            SELECT
                i.id,
                i.image,
                i.title,
                i.caption,
                i.link,
                i.category_id,
                c.name AS category_name,
                i.created_at,
                i.updated_at
            FROM items i
            JOIN categories c ON c.id = i.category_id
            ORDER BY i.created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list items: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(self.into_dtos(rows))
    }

    /// List items whose category name matches, newest first.
    ///
    /// `name` must already be lowercased by the resolver; matching is done
    /// by explicit lowercase normalization rather than store collation, so
    /// behavior does not depend on the database's locale.
    pub async fn list_by_category(&self, name: &str) -> Result<Vec<ItemResponseDto>> {
        let rows = sqlx::query_as::<_, ItemRow>(
            r#"
            SELECT
                i.id,
                i.image,
                i.title,
                i.caption,
                i.link,
                i.category_id,
                c.name AS category_name,
                i.created_at,
                i.updated_at
            FROM items i
            JOIN categories c ON c.id = i.category_id
            WHERE LOWER(c.name) = $1
            ORDER BY i.created_at DESC
            "#,
        )
        .bind(name)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list items by category: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(self.into_dtos(rows))
    }

    /// Get a single item by id
    pub async fn get(&self, id: i64) -> Result<ItemResponseDto> {
        let row = sqlx::query_as::<_, ItemRow>(
            r#"
            SELECT
                i.id,
                i.image,
                i.title,
                i.caption,
                i.link,
                i.category_id,
                c.name AS category_name,
                i.created_at,
                i.updated_at
            FROM items i
            JOIN categories c ON c.id = i.category_id
            WHERE i.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get item: {:?}", e);
            AppError::Database(e)
        })?;

        row.map(|r| ItemResponseDto::from_row(r, &self.media_base_url))
            .ok_or_else(|| AppError::NotFound("Item not found".to_string()))
    }

    fn into_dtos(&self, rows: Vec<ItemRow>) -> Vec<ItemResponseDto> {
        rows.into_iter()
            .map(|r| ItemResponseDto::from_row(r, &self.media_base_url))
            .collect()
    }
}
