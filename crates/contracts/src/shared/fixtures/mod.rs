//! Статические данные каталога, встроенные в сборку

use crate::domain::a001_user::User;
use crate::domain::a002_category::Category;
use crate::domain::a003_product::Product;
use crate::shared::error::CatalogError;
use serde::de::DeserializeOwned;

const USERS_JSON: &str = include_str!("users.json");
const CATEGORIES_JSON: &str = include_str!("categories.json");
const PRODUCTS_JSON: &str = include_str!("products.json");

/// Три исходных набора записей, только для чтения
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixtureSet {
    pub users: Vec<User>,
    pub categories: Vec<Category>,
    pub products: Vec<Product>,
}

impl FixtureSet {
    /// Фикстуры, встроенные в сборку через `include_str!`
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_json(USERS_JSON, CATEGORIES_JSON, PRODUCTS_JSON)
    }

    pub fn from_json(users: &str, categories: &str, products: &str) -> Result<Self, CatalogError> {
        Ok(Self {
            users: parse("users", users)?,
            categories: parse("categories", categories)?,
            products: parse("products", products)?,
        })
    }
}

fn parse<T: DeserializeOwned>(name: &'static str, json: &str) -> Result<Vec<T>, CatalogError> {
    serde_json::from_str(json).map_err(|e| CatalogError::fixture(name, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_fixtures_parse() {
        let set = FixtureSet::embedded().unwrap();
        assert_eq!(set.users.len(), 4);
        assert_eq!(set.categories.len(), 5);
        assert_eq!(set.products.len(), 12);
    }

    #[test]
    fn test_malformed_fixture_names_the_file() {
        let err = FixtureSet::from_json("[]", "{", "[]").unwrap_err();
        match err {
            CatalogError::Fixture { name, .. } => assert_eq!(name, "categories"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
