//! Настройки каталога

/// Подпись вкладки "все владельцы"; совпадает с текстовым видом `OwnerFilter::All`
pub const OWNER_ALL_LABEL: &str = "All";

/// Политика проверки ссылочной целостности фикстур при загрузке
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IntegrityPolicy {
    /// Битые ссылки превращаются в пустые категорию/владельца
    #[default]
    Lenient,
    /// Любая битая ссылка или дубликат id - ошибка загрузки
    Strict,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    pub integrity: IntegrityPolicy,
    pub page_title: String,
    pub search_placeholder: String,
    pub empty_message: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            integrity: IntegrityPolicy::Lenient,
            page_title: "Product Categories".to_string(),
            search_placeholder: "Search".to_string(),
            empty_message: "No products matching selected criteria".to_string(),
        }
    }
}
