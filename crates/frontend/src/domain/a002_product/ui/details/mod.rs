//! Форма товара
//!
//! - model.rs: список категорий для выбора
//! - view_model.rs: форма, категории, загрузка изображения
//! - view.rs: боковая панель с полями

mod model;
mod view;
mod view_model;

pub use view::ProductDetails;
pub use view_model::ProductDetailsViewModel;
