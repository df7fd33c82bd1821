//! Catalog items feature.
//!
//! Items are the catalog entries: a title, a caption, an optional image and
//! link, and the category they belong to. Rows are written by the admin
//! tooling only; the API is strictly read-only.
//!
//! The listing endpoint resolves two optional query parameters, `detail`
//! (single-item lookup by id) and `category` (case-insensitive name filter),
//! with `detail` taking precedence. See [`query`] for the resolution rules.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/items` | No | List items, filter by category, or look up one via `detail` |
//! | GET | `/api/items/{id}` | No | Get a single item |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod query;
pub mod routes;
pub mod services;

pub use services::ItemService;
