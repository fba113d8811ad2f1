use super::dto::EnrichedProduct;
use crate::shared::config::OWNER_ALL_LABEL;
use std::fmt;

/// Выбор владельца: все или конкретный пользователь по имени
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OwnerFilter {
    #[default]
    All,
    Named(String),
}

impl OwnerFilter {
    pub fn is_all(&self) -> bool {
        matches!(self, OwnerFilter::All)
    }

    /// Сравнение имени без учёта `All`: для вкладки "All" всегда true
    pub fn matches(&self, owner_name: Option<&str>) -> bool {
        match self {
            OwnerFilter::All => true,
            OwnerFilter::Named(name) => owner_name == Some(name.as_str()),
        }
    }
}

impl From<&str> for OwnerFilter {
    fn from(value: &str) -> Self {
        if value == OWNER_ALL_LABEL {
            OwnerFilter::All
        } else {
            OwnerFilter::Named(value.to_string())
        }
    }
}

impl fmt::Display for OwnerFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OwnerFilter::All => f.write_str(OWNER_ALL_LABEL),
            OwnerFilter::Named(name) => f.write_str(name),
        }
    }
}

/// Нормализация для поиска по названию
fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

fn matches_search(product: &EnrichedProduct, normalized_query: &str) -> bool {
    normalize(product.name()).contains(normalized_query)
}

fn matches_categories(product: &EnrichedProduct, titles: &[String]) -> bool {
    product
        .category_title()
        .is_some_and(|title| titles.iter().any(|t| t == title))
}

/// Фильтрует товары по владельцу, строке поиска и набору категорий.
///
/// Каждый фильтр применяется только если он активен: владелец не `All`,
/// запрос непустой после trim, набор категорий непустой. Фильтры
/// объединяются по И, порядок товаров сохраняется.
pub fn filter_products(
    products: &[EnrichedProduct],
    owner: &OwnerFilter,
    search_query: &str,
    category_titles: &[String],
) -> Vec<EnrichedProduct> {
    let query = normalize(search_query);

    products
        .iter()
        .filter(|p| owner.matches(p.owner_name()))
        .filter(|p| query.is_empty() || matches_search(p, &query))
        .filter(|p| category_titles.is_empty() || matches_categories(p, category_titles))
        .cloned()
        .collect()
}
