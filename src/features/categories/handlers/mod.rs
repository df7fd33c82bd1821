pub mod category_handler;

pub use category_handler::{
    __path_get_category, __path_list_categories, get_category, list_categories,
};
