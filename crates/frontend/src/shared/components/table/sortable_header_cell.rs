//! Компонент сортируемой ячейки заголовка таблицы
//!
//! ```ignore
//! <SortableHeaderCell
//!     column=SortColumn::Name
//!     current_sort=Signal::derive(move || state.with(|s| s.sort))
//!     on_sort=Callback::new(move |column| state.update(|s| s.toggle_sort(column)))
//! />
//! ```

use crate::shared::list_utils::{get_sort_class, get_sort_indicator};
use contracts::enums::{SortColumn, SortField};
use leptos::prelude::*;
use thaw::*;

/// Ячейка заголовка: подпись колонки, индикатор сортировки (▲▼⇅),
/// клик запрашивает следующее состояние сортировки по этой колонке.
#[component]
pub fn SortableHeaderCell(
    /// Колонка таблицы
    column: SortColumn,

    /// Текущее запрошенное поле сортировки
    #[prop(into)]
    current_sort: Signal<Option<SortField>>,

    /// Callback при клике на заголовок
    on_sort: Callback<SortColumn>,

    /// Минимальная ширина колонки
    #[prop(optional, default = 100.0)]
    min_width: f64,
) -> impl IntoView {
    view! {
        <TableHeaderCell resizable=false min_width=min_width>
            <div
                class="table__sortable-header"
                style="cursor: pointer; padding-right: 12px;"
                on:click=move |_| on_sort.run(column)
            >
                {column.label()}
                <span class=move || get_sort_class(current_sort.get(), column)>
                    {move || get_sort_indicator(current_sort.get(), column)}
                </span>
            </div>
        </TableHeaderCell>
    }
}
