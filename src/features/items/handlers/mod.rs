pub mod item_handler;

pub use item_handler::{__path_get_item, __path_list_items, get_item, list_items};
