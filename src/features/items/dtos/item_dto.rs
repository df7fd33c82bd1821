use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::categories::dtos::CategoryResponseDto;
use crate::features::items::models::ItemRow;

/// Response DTO for item, with its category nested as `{id, name}`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ItemResponseDto {
    pub id: i64,
    /// Resolved image URL, null when the item has no image
    pub image: Option<String>,
    pub title: String,
    pub caption: String,
    pub link: String,
    pub category: CategoryResponseDto,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ItemResponseDto {
    /// Build from a joined row, resolving the stored image path against the
    /// configured media base URL
    pub fn from_row(row: ItemRow, media_base_url: &str) -> Self {
        Self {
            id: row.id,
            image: row.image.map(|path| join_media_url(media_base_url, &path)),
            title: row.title,
            caption: row.caption,
            link: row.link,
            category: CategoryResponseDto {
                id: row.category_id,
                name: row.category_name,
            },
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Payload of the item listing endpoint: a single object in `detail` mode,
/// an array otherwise. Serialized untagged so the two shapes are exactly
/// what callers see on the wire.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ItemListingDto {
    Item(ItemResponseDto),
    Items(Vec<ItemResponseDto>),
}

/// Join a stored relative path onto the media base URL. Paths that are
/// already absolute URLs pass through unchanged.
fn join_media_url(base: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_row(image: Option<&str>) -> ItemRow {
        ItemRow {
            id: 1,
            image: image.map(String::from),
            title: "Poster".to_string(),
            caption: String::new(),
            link: String::new(),
            category_id: 2,
            category_name: "Art".to_string(),
            created_at: Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2025, 6, 2, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn join_media_url_handles_slashes() {
        assert_eq!(join_media_url("/media", "items/a.png"), "/media/items/a.png");
        assert_eq!(join_media_url("/media/", "/items/a.png"), "/media/items/a.png");
        assert_eq!(
            join_media_url("https://cdn.example.com/media", "items/a.png"),
            "https://cdn.example.com/media/items/a.png"
        );
    }

    #[test]
    fn join_media_url_passes_absolute_urls_through() {
        assert_eq!(
            join_media_url("/media", "https://cdn.example.com/a.png"),
            "https://cdn.example.com/a.png"
        );
    }

    #[test]
    fn item_without_image_serializes_null() {
        let dto = ItemResponseDto::from_row(sample_row(None), "/media");
        let value = serde_json::to_value(&dto).unwrap();

        assert_eq!(value["image"], serde_json::Value::Null);
    }

    #[test]
    fn item_serializes_the_full_field_set_with_nested_category() {
        let dto = ItemResponseDto::from_row(sample_row(Some("items/images/a.png")), "/media");
        let value = serde_json::to_value(&dto).unwrap();

        let fields: Vec<&str> = value.as_object().unwrap().keys().map(|k| k.as_str()).collect();
        for expected in [
            "id",
            "image",
            "title",
            "caption",
            "link",
            "category",
            "created_at",
            "updated_at",
        ] {
            assert!(fields.contains(&expected), "missing field {}", expected);
        }
        assert_eq!(value["image"], "/media/items/images/a.png");
        assert_eq!(value["category"], serde_json::json!({"id": 2, "name": "Art"}));
    }

    #[test]
    fn detail_mode_is_an_object_and_listing_mode_an_array() {
        let dto = ItemResponseDto::from_row(sample_row(None), "/media");

        let single = serde_json::to_value(ItemListingDto::Item(dto.clone())).unwrap();
        assert!(single.is_object());

        let listing = serde_json::to_value(ItemListingDto::Items(vec![dto])).unwrap();
        assert!(listing.is_array());

        let empty = serde_json::to_value(ItemListingDto::Items(Vec::new())).unwrap();
        assert_eq!(empty, serde_json::json!([]));
    }
}
