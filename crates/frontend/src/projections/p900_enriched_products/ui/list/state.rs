use contracts::projections::p900_enriched_products::ProductFilter;
use leptos::prelude::*;

pub fn create_state() -> RwSignal<ProductFilter> {
    RwSignal::new(ProductFilter::default())
}
