use utoipa::{Modify, OpenApi};

use crate::core::error::ErrorDetail;
use crate::features::categories::{dtos as categories_dtos, handlers as categories_handlers};
use crate::features::items::{dtos as items_dtos, handlers as items_handlers};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Categories (public)
        categories_handlers::list_categories,
        categories_handlers::get_category,
        // Items (public)
        items_handlers::list_items,
        items_handlers::get_item,
    ),
    components(
        schemas(
            ErrorDetail,
            // Categories
            categories_dtos::CategoryResponseDto,
            // Items
            items_dtos::ItemResponseDto,
        )
    ),
    tags(
        (name = "categories", description = "Catalog categories (read-only)"),
        (name = "items", description = "Catalog items (read-only)"),
    ),
    info(
        title = "Catalog API",
        version = "0.1.0",
        description = "Read-only API for the content catalog",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
