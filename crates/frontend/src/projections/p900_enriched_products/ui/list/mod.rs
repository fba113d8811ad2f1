pub mod state;

use self::state::create_state;
use super::filters::{ActiveFilterTags, CategoryButtons, OwnerTabs};
use super::table::ProductTable;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::icons::icon;
use crate::shared::list_utils::SearchInput;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use contracts::enums::SortField;
use leptos::prelude::*;
use thaw::*;

/// Страница каталога: панель фильтров и таблица товаров
#[component]
pub fn ProductCatalogList() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let config = ctx.config.get_value();
    let search_placeholder = config.search_placeholder.clone();
    let empty_message = config.empty_message.clone();
    let state = create_state();
    let is_filter_expanded = RwSignal::new(true);

    let users = ctx.with_catalog(|c| c.users.clone());
    let categories = ctx.with_catalog(|c| c.categories.clone());

    // Пересчитывается на каждое изменение фильтров, соединение не повторяется
    let visible_products = Memo::new(move |_| {
        state.with(|s| ctx.with_catalog(|c| s.apply(&c.products)))
    });

    let active_filters_count = Signal::derive(move || state.with(|s| s.active_filters_count()));
    let search_value = Signal::derive(move || state.with(|s| s.search.clone()));
    let sort_field = Signal::derive(move || state.with(|s| s.sort));

    let on_search = Callback::new(move |value: String| state.update(|s| s.set_search(value)));
    let on_sort_change =
        Callback::new(move |field: Option<SortField>| state.update(|s| s.set_sort(field)));

    view! {
        <PageFrame page_id="p900_enriched_products--list" category=PAGE_CAT_LIST>
            <h1 class="title">
                {icon("products")}
                {config.page_title}
            </h1>

            {move || ctx.load_error().map(|e| view! {
                <div class="alert alert--error">{e}</div>
            })}

            <div class="block">
                <FilterPanel
                    is_expanded=is_filter_expanded
                    active_filters_count=active_filters_count
                >
                    <OwnerTabs users=users.clone() state=state />

                    <div class="panel-block">
                        <SearchInput
                            value=search_value
                            on_change=on_search
                            placeholder=search_placeholder.clone()
                        />
                    </div>

                    <CategoryButtons categories=categories.clone() state=state />

                    <ActiveFilterTags state=state />

                    <div class="panel-block">
                        <Button
                            appearance=ButtonAppearance::Secondary
                            attr:data-cy="ResetAllButton"
                            on_click=move |_| state.update(|s| s.reset_all())
                        >
                            "Reset all filters"
                        </Button>
                    </div>
                </FilterPanel>
            </div>

            <div class="box table-container">
                {move || {
                    if visible_products.with(|p| p.is_empty()) {
                        view! {
                            <p data-cy="NoMatchingMessage">{empty_message.clone()}</p>
                        }
                        .into_any()
                    } else {
                        view! {
                            <ProductTable
                                products=visible_products
                                sort_field=sort_field
                                all_sort_fields=SortField::all()
                                on_sort_change=on_sort_change
                                highlight=search_value
                            />
                        }
                        .into_any()
                    }
                }}
            </div>
        </PageFrame>
    }
}
