use super::dto::EnrichedProduct;
use crate::enums::{SortColumn, SortField};
use std::cmp::Ordering;

impl EnrichedProduct {
    /// Сравнение по колонке в порядке возрастания.
    ///
    /// Категория сравнивается по заголовку; товары без категории идут первыми.
    pub fn compare_by_column(&self, other: &Self, column: SortColumn) -> Ordering {
        match column {
            SortColumn::Id => self.id().cmp(&other.id()),
            SortColumn::Name => self.name().cmp(other.name()),
            SortColumn::Category => self.category_title().cmp(&other.category_title()),
        }
    }
}

/// Устойчивая сортировка списка по запрошенному полю.
///
/// `None` оставляет порядок после фильтрации.
pub fn sort_products(items: &mut [EnrichedProduct], sort_field: Option<SortField>) {
    let Some(field) = sort_field else {
        return;
    };
    let column = field.column();
    let ascending = field.is_ascending();

    items.sort_by(|a, b| {
        let cmp = a.compare_by_column(b, column);
        if ascending { cmp } else { cmp.reverse() }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a003_product::Product;
    use crate::projections::p900_enriched_products::build_enriched_products;
    use crate::projections::p900_enriched_products::test_data::names;
    use crate::shared::fixtures::FixtureSet;

    fn catalog() -> Vec<EnrichedProduct> {
        let set = FixtureSet::embedded().unwrap();
        build_enriched_products(&set.products, &set.categories, &set.users)
    }

    fn ids(items: &[EnrichedProduct]) -> Vec<u32> {
        items.iter().map(|p| p.id().0).collect()
    }

    #[test]
    fn test_none_keeps_order() {
        let mut items = catalog();
        sort_products(&mut items, None);
        assert_eq!(items, catalog());
    }

    #[test]
    fn test_sort_by_id() {
        let mut items = catalog();
        items.reverse();
        sort_products(&mut items, Some(SortField::IdAsc));
        assert_eq!(ids(&items), (1..=12).collect::<Vec<_>>());

        sort_products(&mut items, Some(SortField::IdDesc));
        assert_eq!(ids(&items), (1..=12).rev().collect::<Vec<_>>());
    }

    #[test]
    fn test_sort_by_name_is_case_sensitive() {
        let set = FixtureSet::embedded().unwrap();
        let products = vec![
            Product::new(1, "banana", 3),
            Product::new(2, "Apple", 3),
            Product::new(3, "Beer", 2),
        ];
        let mut items = build_enriched_products(&products, &set.categories, &set.users);

        sort_products(&mut items, Some(SortField::NameAsc));
        assert_eq!(names(&items), vec!["Apple", "Beer", "banana"]);

        sort_products(&mut items, Some(SortField::NameDesc));
        assert_eq!(names(&items), vec!["banana", "Beer", "Apple"]);
    }

    #[test]
    fn test_sort_by_category_is_stable() {
        let mut items = catalog();
        sort_products(&mut items, Some(SortField::CategoryAsc));
        assert_eq!(
            names(&items),
            vec![
                "Jacket", "Socks", // Clothes
                "Milk", "Beer", // Drinks
                "Laptop", // Electronics
                "Apple", "Banana", // Fruits
                "Bread", "Eggs", "Sugar", "Carrot", "Ice cream", // Grocery
            ]
        );

        let mut items = catalog();
        sort_products(&mut items, Some(SortField::CategoryDesc));
        assert_eq!(
            names(&items),
            vec![
                "Bread", "Eggs", "Sugar", "Carrot", "Ice cream", "Apple", "Banana", "Laptop",
                "Milk", "Beer", "Jacket", "Socks",
            ]
        );
    }

    #[test]
    fn test_products_without_category_sort_first() {
        let set = FixtureSet::embedded().unwrap();
        let products = vec![Product::new(1, "Milk", 2), Product::new(2, "Mystery", 404)];
        let mut items = build_enriched_products(&products, &set.categories, &set.users);

        sort_products(&mut items, Some(SortField::CategoryAsc));
        assert_eq!(names(&items), vec!["Mystery", "Milk"]);
    }
}
