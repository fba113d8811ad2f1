use crate::domain::common::AggregateId;
use crate::shared::error::CatalogError;
use crate::shared::fixtures::FixtureSet;
use std::collections::HashSet;

/// Проверка ссылочной целостности фикстур.
///
/// Проверяет уникальность id во всех трёх наборах, затем что каждая
/// категория ссылается на существующего пользователя и каждый товар на
/// существующую категорию. Возвращает первую найденную ошибку.
pub fn validate_fixtures(set: &FixtureSet) -> Result<(), CatalogError> {
    let user_ids = unique_ids("user", set.users.iter().map(|u| u.id))?;
    let category_ids = unique_ids("category", set.categories.iter().map(|c| c.id))?;
    unique_ids("product", set.products.iter().map(|p| p.id))?;

    for category in &set.categories {
        if !user_ids.contains(&category.owner_id) {
            return Err(CatalogError::UnknownOwner {
                category_id: category.id.value(),
                owner_id: category.owner_id.value(),
            });
        }
    }

    for product in &set.products {
        if !category_ids.contains(&product.category_id) {
            return Err(CatalogError::UnknownCategory {
                product_id: product.id.value(),
                category_id: product.category_id.value(),
            });
        }
    }

    Ok(())
}

fn unique_ids<I, T>(entity: &'static str, ids: T) -> Result<HashSet<I>, CatalogError>
where
    I: AggregateId,
    T: IntoIterator<Item = I>,
{
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(CatalogError::DuplicateId {
                entity,
                id: id.value(),
            });
        }
    }
    Ok(seen)
}
