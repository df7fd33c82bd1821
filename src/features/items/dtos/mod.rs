mod item_dto;

pub use item_dto::{ItemListingDto, ItemResponseDto};
