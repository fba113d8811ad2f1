//! Денормализованный список товаров: товар + категория + владелец категории.
//!
//! Соединение выполняется один раз при загрузке, фильтрация и сортировка
//! пересчитываются на каждое изменение состояния фильтров.

pub mod catalog;
pub mod dto;
pub mod filter;
pub mod filter_state;
pub mod join;
pub mod sort;
pub mod validation;

#[cfg(test)]
pub(crate) mod test_data;

pub use catalog::Catalog;
pub use dto::EnrichedProduct;
pub use filter::{filter_products, OwnerFilter};
pub use filter_state::ProductFilter;
pub use join::build_enriched_products;
pub use sort::sort_products;
pub use validation::validate_fixtures;
