use super::dto::EnrichedProduct;
use super::filter::{filter_products, OwnerFilter};
use super::sort::sort_products;
use crate::enums::{SortColumn, SortField};

/// Состояние фильтров списка товаров
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProductFilter {
    pub owner: OwnerFilter,
    pub search: String,
    /// Выбранные заголовки категорий в порядке выбора, без повторов
    pub categories: Vec<String>,
    pub sort: Option<SortField>,
}

impl ProductFilter {
    pub fn set_owner(&mut self, owner: OwnerFilter) {
        log::debug!("owner filter: {}", owner);
        self.owner = owner;
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
    }

    pub fn clear_search(&mut self) {
        self.search.clear();
    }

    /// Добавляет категорию в выбор или убирает её, если она уже выбрана
    pub fn toggle_category(&mut self, title: &str) {
        if let Some(pos) = self.categories.iter().position(|t| t == title) {
            self.categories.remove(pos);
        } else {
            self.categories.push(title.to_string());
        }
        log::debug!("selected categories: {:?}", self.categories);
    }

    /// Кнопка "All" в блоке категорий
    pub fn clear_categories(&mut self) {
        self.categories.clear();
    }

    pub fn set_sort(&mut self, sort: Option<SortField>) {
        self.sort = sort;
    }

    pub fn toggle_sort(&mut self, column: SortColumn) {
        self.sort = SortField::toggle(self.sort, column);
    }

    /// Сброс всех фильтров. Поле сортировки не сбрасывается.
    pub fn reset_all(&mut self) {
        log::debug!("reset all filters");
        self.owner = OwnerFilter::All;
        self.search.clear();
        self.categories.clear();
    }

    pub fn is_owner_selected(&self, owner: &OwnerFilter) -> bool {
        &self.owner == owner
    }

    pub fn is_category_selected(&self, title: &str) -> bool {
        self.categories.iter().any(|t| t == title)
    }

    pub fn has_search(&self) -> bool {
        !self.search.is_empty()
    }

    /// Количество активных фильтров (для бейджа панели)
    pub fn active_filters_count(&self) -> usize {
        let mut count = 0;
        if !self.owner.is_all() {
            count += 1;
        }
        if !self.search.trim().is_empty() {
            count += 1;
        }
        if !self.categories.is_empty() {
            count += 1;
        }
        count
    }

    /// Видимый список: фильтрация, затем сортировка
    pub fn apply(&self, products: &[EnrichedProduct]) -> Vec<EnrichedProduct> {
        let mut visible = filter_products(products, &self.owner, &self.search, &self.categories);
        sort_products(&mut visible, self.sort);
        visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projections::p900_enriched_products::test_data::{self, names};

    #[test]
    fn test_default_state_shows_everything() {
        let all = test_data::enriched();
        let state = ProductFilter::default();
        assert_eq!(state.apply(&all), all);
        assert_eq!(state.active_filters_count(), 0);
    }

    #[test]
    fn test_toggle_category_adds_and_removes() {
        let mut state = ProductFilter::default();
        state.toggle_category("Drinks");
        state.toggle_category("Grocery");
        assert_eq!(state.categories, vec!["Drinks", "Grocery"]);
        assert!(state.is_category_selected("Drinks"));

        state.toggle_category("Drinks");
        assert_eq!(state.categories, vec!["Grocery"]);
        assert!(!state.is_category_selected("Drinks"));

        state.clear_categories();
        assert!(state.categories.is_empty());
    }

    #[test]
    fn test_search_set_and_clear() {
        let mut state = ProductFilter::default();
        state.set_search("cof");
        assert!(state.has_search());
        assert_eq!(names(&state.apply(&test_data::enriched())), vec!["Coffee"]);

        state.clear_search();
        assert!(!state.has_search());
    }

    #[test]
    fn test_reset_all_restores_full_list_and_keeps_sort() {
        let all = test_data::enriched();
        let mut state = ProductFilter::default();
        state.set_owner(OwnerFilter::from("Max"));
        state.set_search("zzz");
        state.toggle_category("Drinks");
        state.set_sort(Some(SortField::NameAsc));
        assert!(state.apply(&all).is_empty());
        assert_eq!(state.active_filters_count(), 3);

        state.reset_all();

        assert_eq!(state.owner, OwnerFilter::All);
        assert_eq!(state.sort, Some(SortField::NameAsc));
        assert_eq!(names(&state.apply(&all)), vec!["Coffee", "Milk"]);
    }

    #[test]
    fn test_apply_filters_then_sorts() {
        let all = test_data::enriched();
        let mut state = ProductFilter::default();
        state.toggle_sort(SortColumn::Id);
        state.toggle_sort(SortColumn::Id);
        assert_eq!(state.sort, Some(SortField::IdDesc));
        assert_eq!(names(&state.apply(&all)), vec!["Coffee", "Milk"]);

        state.toggle_category("Grocery");
        assert_eq!(names(&state.apply(&all)), vec!["Milk"]);
    }

    #[test]
    fn test_owner_selection() {
        let mut state = ProductFilter::default();
        assert!(state.is_owner_selected(&OwnerFilter::All));
        state.set_owner(OwnerFilter::from("Anna"));
        assert!(state.is_owner_selected(&OwnerFilter::Named("Anna".to_string())));
        assert!(!state.is_owner_selected(&OwnerFilter::All));
    }
}
