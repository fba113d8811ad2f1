use super::dto::EnrichedProduct;
use crate::domain::a001_user::{User, UserId};
use crate::domain::a002_category::{Category, CategoryId};
use crate::domain::a003_product::Product;
use std::collections::HashMap;

/// Соединяет товары с категориями и владельцами категорий.
///
/// Владелец ищется только если категория найдена. Ненайденные ссылки дают
/// `None` и пишутся в лог, ошибки при этом нет. Порядок товаров сохраняется.
pub fn build_enriched_products(
    products: &[Product],
    categories: &[Category],
    users: &[User],
) -> Vec<EnrichedProduct> {
    // при дубликатах id побеждает первая запись
    let mut categories_by_id: HashMap<CategoryId, &Category> = HashMap::new();
    for category in categories {
        categories_by_id.entry(category.id).or_insert(category);
    }
    let mut users_by_id: HashMap<UserId, &User> = HashMap::new();
    for user in users {
        users_by_id.entry(user.id).or_insert(user);
    }

    products
        .iter()
        .map(|product| {
            let category = categories_by_id.get(&product.category_id).copied();
            if category.is_none() {
                log::warn!(
                    "Product {} ({}) refers to unknown category {}",
                    product.id.0,
                    product.name,
                    product.category_id.0
                );
            }

            let user = category.and_then(|c| {
                let user = users_by_id.get(&c.owner_id).copied();
                if user.is_none() {
                    log::warn!("Category {} refers to unknown owner {}", c.id.0, c.owner_id.0);
                }
                user
            });

            EnrichedProduct {
                product: product.clone(),
                category: category.cloned(),
                user: user.cloned(),
            }
        })
        .collect()
}
