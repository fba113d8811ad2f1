//! Блоки панели фильтров: владельцы, категории, активные фильтры

use crate::shared::components::filter_panel::FilterTag;
use contracts::domain::a001_user::User;
use contracts::domain::a002_category::Category;
use contracts::projections::p900_enriched_products::{OwnerFilter, ProductFilter};
use contracts::shared::OWNER_ALL_LABEL;
use leptos::prelude::*;

/// Вкладки выбора владельца: "All" и по одной на пользователя
#[component]
pub fn OwnerTabs(users: Vec<User>, state: RwSignal<ProductFilter>) -> impl IntoView {
    let is_all = move || state.with(|s| s.owner.is_all());

    view! {
        <p class="panel-tabs has-text-weight-bold">
            <a
                data-cy="FilterAllUsers"
                href="#/"
                class:is-active=is_all
                on:click=move |ev| {
                    ev.prevent_default();
                    state.update(|s| s.set_owner(OwnerFilter::All));
                }
            >
                {OWNER_ALL_LABEL}
            </a>

            {users.into_iter().map(|user| {
                let owner = OwnerFilter::Named(user.name.clone());
                let owner_for_click = owner.clone();
                view! {
                    <a
                        data-cy="FilterUser"
                        href="#/"
                        class:is-active=move || state.with(|s| s.is_owner_selected(&owner))
                        on:click=move |ev| {
                            ev.prevent_default();
                            let owner = owner_for_click.clone();
                            state.update(|s| s.set_owner(owner));
                        }
                    >
                        {user.name}
                    </a>
                }
            }).collect_view()}
        </p>
    }
}

/// Кнопки категорий: "All" очищает выбор, остальные переключают категорию
#[component]
pub fn CategoryButtons(categories: Vec<Category>, state: RwSignal<ProductFilter>) -> impl IntoView {
    view! {
        <div class="panel-block is-flex-wrap-wrap">
            <a
                href="#/"
                data-cy="AllCategories"
                class="button is-success mr-6"
                class:is-outlined=move || state.with(|s| !s.categories.is_empty())
                on:click=move |ev| {
                    ev.prevent_default();
                    state.update(|s| s.clear_categories());
                }
            >
                "All"
            </a>

            {categories.into_iter().map(|category| {
                let title = category.title.clone();
                let title_for_click = title.clone();
                view! {
                    <a
                        data-cy="Category"
                        href="#/"
                        class="button mr-2 my-1"
                        class:is-info=move || state.with(|s| s.is_category_selected(&title))
                        on:click=move |ev| {
                            ev.prevent_default();
                            state.update(|s| s.toggle_category(&title_for_click));
                        }
                    >
                        {category.title}
                    </a>
                }
            }).collect_view()}
        </div>
    }
}

/// Чипы активных фильтров с кнопкой снятия
#[component]
pub fn ActiveFilterTags(state: RwSignal<ProductFilter>) -> impl IntoView {
    move || {
        let s = state.get();
        if s.active_filters_count() == 0 {
            return view! { <></> }.into_any();
        }

        let owner_tag = (!s.owner.is_all()).then(|| {
            view! {
                <FilterTag
                    label=format!("Owner: {}", s.owner)
                    on_remove=Callback::new(move |_| state.update(|s| s.set_owner(OwnerFilter::All)))
                />
            }
        });

        let search_tag = (!s.search.trim().is_empty()).then(|| {
            view! {
                <FilterTag
                    label=format!("Search: {}", s.search.trim())
                    on_remove=Callback::new(move |_| state.update(|s| s.clear_search()))
                />
            }
        });

        let category_tags = s
            .categories
            .iter()
            .cloned()
            .map(|title| {
                let label = format!("Category: {}", title);
                view! {
                    <FilterTag
                        label=label
                        on_remove=Callback::new(move |_| state.update(|s| s.toggle_category(&title)))
                    />
                }
            })
            .collect_view();

        view! {
            <div class="panel-block filter-tags">
                {owner_tag}
                {search_tag}
                {category_tags}
            </div>
        }
        .into_any()
    }
}
