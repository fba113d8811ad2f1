use crate::layout::global_context::AppGlobalContext;
use crate::projections::p900_enriched_products::ui::list::ProductCatalogList;
use contracts::shared::CatalogConfig;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the AppGlobalContext store to the whole app via context.
    provide_context(AppGlobalContext::new(CatalogConfig::default()));

    view! {
        <ProductCatalogList />
    }
}
