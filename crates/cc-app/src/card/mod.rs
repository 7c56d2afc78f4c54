pub mod lazy_flip_card;
pub mod render;

pub use lazy_flip_card::LazyFlipCard;
pub use render::BackFaceRenderer;
