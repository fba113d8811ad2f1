//! Небольшой набор данных для тестов: Max владеет Grocery (Milk),
//! Anna владеет Drinks (Coffee).

use super::dto::EnrichedProduct;
use super::join::build_enriched_products;
use crate::domain::a001_user::{Sex, User};
use crate::domain::a002_category::Category;
use crate::domain::a003_product::Product;

pub fn users() -> Vec<User> {
    vec![User::new(1, "Max", Sex::Male), User::new(2, "Anna", Sex::Female)]
}

pub fn categories() -> Vec<Category> {
    vec![
        Category::new(1, "Grocery", "🍞", 1),
        Category::new(2, "Drinks", "🍺", 2),
    ]
}

pub fn products() -> Vec<Product> {
    vec![Product::new(1, "Milk", 1), Product::new(2, "Coffee", 2)]
}

pub fn enriched() -> Vec<EnrichedProduct> {
    build_enriched_products(&products(), &categories(), &users())
}

pub fn names(products: &[EnrichedProduct]) -> Vec<&str> {
    products.iter().map(|p| p.name()).collect()
}
