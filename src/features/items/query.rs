use serde::Deserialize;
use utoipa::IntoParams;

use crate::core::error::{AppError, Result};

/// Raw query parameters accepted by the item listing endpoint.
///
/// Deserialized once at the boundary; [`ItemQuery::resolve`] turns them into
/// an explicit query before any data access happens.
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct ItemListParams {
    /// Item id for single-item lookup; takes precedence over `category`
    pub detail: Option<String>,

    /// Category name filter, matched case-insensitively
    pub category: Option<String>,
}

/// Resolved form of the item listing parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemQuery {
    /// Single item lookup by id; responds with an object, not an array
    Detail(i64),
    /// Filter by category name, already lowercased for matching
    Category(String),
    /// Unfiltered listing, newest first
    All,
}

impl ItemQuery {
    /// Resolve raw parameters with first-match-wins precedence: `detail`
    /// over `category`, `category` over the unfiltered listing.
    ///
    /// A present but empty or non-integer `detail` is rejected. An empty
    /// `category` counts as absent.
    pub fn resolve(params: &ItemListParams) -> Result<Self> {
        if let Some(detail) = params.detail.as_deref() {
            let id = detail
                .parse::<i64>()
                .map_err(|_| AppError::BadRequest("Invalid item ID".to_string()))?;
            return Ok(ItemQuery::Detail(id));
        }

        match params.category.as_deref() {
            Some(name) if !name.is_empty() => Ok(ItemQuery::Category(name.to_lowercase())),
            _ => Ok(ItemQuery::All),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(detail: Option<&str>, category: Option<&str>) -> ItemListParams {
        ItemListParams {
            detail: detail.map(String::from),
            category: category.map(String::from),
        }
    }

    #[test]
    fn no_params_resolves_to_full_listing() {
        assert_eq!(
            ItemQuery::resolve(&params(None, None)).unwrap(),
            ItemQuery::All
        );
    }

    #[test]
    fn detail_resolves_to_single_item_lookup() {
        assert_eq!(
            ItemQuery::resolve(&params(Some("42"), None)).unwrap(),
            ItemQuery::Detail(42)
        );
    }

    #[test]
    fn detail_wins_over_category() {
        assert_eq!(
            ItemQuery::resolve(&params(Some("7"), Some("Art"))).unwrap(),
            ItemQuery::Detail(7)
        );
    }

    #[test]
    fn non_integer_detail_is_rejected() {
        let err = ItemQuery::resolve(&params(Some("abc"), None)).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(msg) if msg == "Invalid item ID"));
    }

    #[test]
    fn empty_detail_is_rejected_not_ignored() {
        let err = ItemQuery::resolve(&params(Some(""), None)).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[test]
    fn invalid_detail_is_rejected_even_with_valid_category() {
        // Precedence also applies to the error path
        let err = ItemQuery::resolve(&params(Some("abc"), Some("Art"))).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[test]
    fn fractional_detail_is_rejected() {
        let err = ItemQuery::resolve(&params(Some("1.5"), None)).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[test]
    fn negative_detail_parses_as_an_id() {
        // Parses fine; lookup will simply find no row
        assert_eq!(
            ItemQuery::resolve(&params(Some("-3"), None)).unwrap(),
            ItemQuery::Detail(-3)
        );
    }

    #[test]
    fn category_is_lowercased_for_matching() {
        assert_eq!(
            ItemQuery::resolve(&params(None, Some("ArT"))).unwrap(),
            ItemQuery::Category("art".to_string())
        );
    }

    #[test]
    fn empty_category_counts_as_absent() {
        assert_eq!(
            ItemQuery::resolve(&params(None, Some(""))).unwrap(),
            ItemQuery::All
        );
    }
}
