use thiserror::Error;

/// Ошибки загрузки и обработки каталога
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Встроенная фикстура не разбирается как JSON нужной формы
    #[error("Fixture '{name}' is malformed: {message}")]
    Fixture { name: &'static str, message: String },

    #[error("Product {product_id} refers to unknown category {category_id}")]
    UnknownCategory { product_id: u32, category_id: u32 },

    #[error("Category {category_id} refers to unknown owner {owner_id}")]
    UnknownOwner { category_id: u32, owner_id: u32 },

    #[error("Duplicate {entity} id: {id}")]
    DuplicateId { entity: &'static str, id: u32 },

    #[error("Unknown sort field: {0}")]
    UnknownSortField(String),
}

impl CatalogError {
    pub fn fixture(name: &'static str, err: serde_json::Error) -> Self {
        CatalogError::Fixture {
            name,
            message: err.to_string(),
        }
    }
}
