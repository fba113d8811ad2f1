//! PageFrame — standard root wrapper for a page.
//!
//! Sets `id` on the root DOM element in the `"{entity}--{category}"` form,
//! e.g. `"p900_enriched_products--list"`, plus `data-page-category`.

use leptos::prelude::*;

pub const PAGE_CAT_LIST: &str = "list";

#[component]
pub fn PageFrame(
    /// HTML id in format `{entity}--{category}`.
    page_id: &'static str,
    /// Page category, e.g. [`PAGE_CAT_LIST`].
    category: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div id=page_id class="page section" data-page-category=category>
            <div class="container">
                {children()}
            </div>
        </div>
    }
}
