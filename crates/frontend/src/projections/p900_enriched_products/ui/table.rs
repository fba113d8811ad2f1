use crate::shared::components::table::SortableHeaderCell;
use crate::shared::list_utils::highlight_matches;
use contracts::domain::a001_user::Sex;
use contracts::domain::common::AggregateId;
use contracts::enums::{SortColumn, SortField};
use contracts::domain::a003_product::ProductId;
use contracts::projections::p900_enriched_products::EnrichedProduct;
use leptos::prelude::*;
use thaw::*;

const TABLE_ID: &str = "p900-enriched-products-table";

/// Строки с позицией в списке: id товара в фикстуре может повторяться
fn indexed_rows(products: Vec<EnrichedProduct>) -> Vec<(usize, EnrichedProduct)> {
    products.into_iter().enumerate().collect()
}

fn row_key(index: usize, item: &EnrichedProduct) -> (usize, ProductId) {
    (index, item.id())
}

/// Таблица товаров с сортируемыми заголовками.
///
/// Получает уже отфильтрованный и отсортированный список; сама ничего не
/// фильтрует, только запрашивает новое поле сортировки через `on_sort_change`.
#[component]
pub fn ProductTable(
    #[prop(into)] products: Signal<Vec<EnrichedProduct>>,
    #[prop(into)] sort_field: Signal<Option<SortField>>,
    /// Допустимые поля сортировки
    all_sort_fields: Vec<SortField>,
    on_sort_change: Callback<Option<SortField>>,
    /// Строка поиска для подсветки совпадений в названии
    #[prop(into)]
    highlight: Signal<String>,
) -> impl IntoView {
    let columns: Vec<SortColumn> = SortColumn::all()
        .into_iter()
        .filter(|column| all_sort_fields.iter().any(|f| f.column() == *column))
        .collect();
    let sortable = move |column: SortColumn| columns.contains(&column);

    let on_sort = Callback::new(move |column: SortColumn| {
        on_sort_change.run(SortField::toggle(sort_field.get_untracked(), column));
    });

    let header_cell = move |column: SortColumn, min_width: f64| {
        if sortable(column) {
            view! {
                <SortableHeaderCell
                    column=column
                    current_sort=sort_field
                    on_sort=on_sort
                    min_width=min_width
                />
            }
            .into_any()
        } else {
            view! {
                <TableHeaderCell resizable=false min_width=min_width>
                    {column.label()}
                </TableHeaderCell>
            }
            .into_any()
        }
    };

    view! {
        <Table attr:id=TABLE_ID attr:data-cy="ProductTable" attr:style="width: 100%;">
            <TableHeader>
                <TableRow>
                    {header_cell(SortColumn::Id, 60.0)}
                    {header_cell(SortColumn::Name, 200.0)}
                    {header_cell(SortColumn::Category, 200.0)}
                    <TableHeaderCell resizable=false min_width=150.0>
                        "User"
                    </TableHeaderCell>
                </TableRow>
            </TableHeader>

            <TableBody>
                <For
                    each=move || indexed_rows(products.get())
                    key=|(index, item)| row_key(*index, item)
                    children=move |(_, item)| {
                        let category = item
                            .category
                            .as_ref()
                            .map(|c| c.label())
                            .unwrap_or_else(|| "—".to_string());
                        let (owner, owner_class) = match &item.user {
                            Some(user) => (
                                user.name.clone(),
                                match user.sex {
                                    Sex::Male => "has-text-link",
                                    Sex::Female => "has-text-danger",
                                },
                            ),
                            None => ("—".to_string(), ""),
                        };
                        let name = item.name().to_string();

                        view! {
                            <TableRow attr:data-cy="Product">
                                <TableCell>
                                    <TableCellLayout>
                                        <span class="has-text-weight-bold" data-cy="ProductId">
                                            {item.id().as_string()}
                                        </span>
                                    </TableCellLayout>
                                </TableCell>
                                <TableCell>
                                    <TableCellLayout truncate=true>
                                        <span data-cy="ProductName">
                                            {move || highlight_matches(&name, &highlight.get())}
                                        </span>
                                    </TableCellLayout>
                                </TableCell>
                                <TableCell>
                                    <TableCellLayout truncate=true>
                                        <span data-cy="ProductCategory">{category}</span>
                                    </TableCellLayout>
                                </TableCell>
                                <TableCell>
                                    <TableCellLayout truncate=true>
                                        <span data-cy="ProductUser" class=owner_class>{owner}</span>
                                    </TableCellLayout>
                                </TableCell>
                            </TableRow>
                        }
                    }
                />
            </TableBody>
        </Table>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a003_product::Product;
    use contracts::projections::p900_enriched_products::build_enriched_products;
    use std::collections::HashSet;

    #[test]
    fn test_row_keys_unique_with_duplicate_product_ids() {
        let products = vec![
            Product::new(1, "Milk", 2),
            Product::new(1, "Milk again", 2),
            Product::new(2, "Bread", 1),
        ];
        let rows = indexed_rows(build_enriched_products(&products, &[], &[]));

        let keys: HashSet<_> = rows.iter().map(|(index, item)| row_key(*index, item)).collect();
        assert_eq!(keys.len(), 3);
        assert_eq!(rows[1].1.name(), "Milk again");
    }
}
