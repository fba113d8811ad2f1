use super::dto::EnrichedProduct;
use super::join::build_enriched_products;
use super::validation::validate_fixtures;
use crate::domain::a001_user::User;
use crate::domain::a002_category::Category;
use crate::shared::config::{CatalogConfig, IntegrityPolicy};
use crate::shared::error::CatalogError;
use crate::shared::fixtures::FixtureSet;

/// Загруженный каталог: справочники для панели фильтров и соединённый список товаров
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    pub users: Vec<User>,
    pub categories: Vec<Category>,
    pub products: Vec<EnrichedProduct>,
}

impl Catalog {
    /// Загрузить каталог из встроенных фикстур
    pub fn load(config: &CatalogConfig) -> Result<Self, CatalogError> {
        let set = FixtureSet::embedded()?;
        Self::from_fixtures(set, config.integrity)
    }

    pub fn from_fixtures(set: FixtureSet, policy: IntegrityPolicy) -> Result<Self, CatalogError> {
        if policy == IntegrityPolicy::Strict {
            validate_fixtures(&set)?;
        }

        let products = build_enriched_products(&set.products, &set.categories, &set.users);
        log::info!(
            "catalog loaded: {} users, {} categories, {} products",
            set.users.len(),
            set.categories.len(),
            products.len()
        );

        Ok(Self {
            users: set.users,
            categories: set.categories,
            products,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a003_product::Product;

    #[test]
    fn test_load_embedded_catalog() {
        let catalog = Catalog::load(&CatalogConfig {
            integrity: IntegrityPolicy::Strict,
            ..CatalogConfig::default()
        })
        .unwrap();
        assert_eq!(catalog.products.len(), 12);
        assert!(catalog.products.iter().all(|p| p.user.is_some()));
    }

    #[test]
    fn test_policy_decides_on_dangling_references() {
        let mut set = FixtureSet::embedded().unwrap();
        set.products.push(Product::new(13, "Mystery", 404));

        let lenient = Catalog::from_fixtures(set.clone(), IntegrityPolicy::Lenient).unwrap();
        let mystery = lenient.products.last().unwrap();
        assert_eq!(mystery.category, None);
        assert_eq!(mystery.user, None);

        let strict = Catalog::from_fixtures(set, IntegrityPolicy::Strict);
        assert_eq!(
            strict,
            Err(CatalogError::UnknownCategory {
                product_id: 13,
                category_id: 404
            })
        );
    }
}
