/// Утилиты для списков: подсветка поиска, индикаторы сортировки, поле поиска
use contracts::enums::{SortColumn, SortField};
use leptos::prelude::*;

/// Байтовые диапазоны совпадений `filter` в `text` без учёта регистра.
///
/// Сравнение идёт посимвольно по оригинальной строке, поэтому границы
/// диапазонов всегда попадают на границы символов, даже если символ при
/// переводе в нижний регистр меняет длину в UTF-8.
pub fn match_ranges(text: &str, filter: &str) -> Vec<(usize, usize)> {
    let needle = filter.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut ranges = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let mut lowered = String::new();
        let mut j = i;
        while j < chars.len() && lowered.len() < needle.len() {
            lowered.extend(chars[j].1.to_lowercase());
            j += 1;
        }

        if lowered == needle {
            let end = chars.get(j).map_or(text.len(), |(pos, _)| *pos);
            ranges.push((chars[i].0, end));
            i = j;
        } else {
            i += 1;
        }
    }

    ranges
}

/// Подсветка совпадений в тексте (case-insensitive)
pub fn highlight_matches(text: &str, filter: &str) -> AnyView {
    let ranges = match_ranges(text, filter);
    if ranges.is_empty() {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let mut parts: Vec<AnyView> = Vec::new();
    let mut last_pos = 0;

    for (start, end) in ranges {
        if start > last_pos {
            parts.push(view! { <span>{text[last_pos..start].to_string()}</span> }.into_any());
        }
        parts.push(view! {
            <mark class="table__match">{text[start..end].to_string()}</mark>
        }.into_any());
        last_pos = end;
    }

    if last_pos < text.len() {
        parts.push(view! { <span>{text[last_pos..].to_string()}</span> }.into_any());
    }

    view! { <>{parts}</> }.into_any()
}

/// Получить индикатор сортировки для заголовка
pub fn get_sort_indicator(current: Option<SortField>, column: SortColumn) -> &'static str {
    match current {
        Some(field) if field.column() == column => {
            if field.is_ascending() { " ▲" } else { " ▼" }
        }
        _ => " ⇅",
    }
}

/// CSS класс индикатора: активная колонка подсвечивается
pub fn get_sort_class(current: Option<SortField>, column: SortColumn) -> &'static str {
    match current {
        Some(field) if field.column() == column => "table__sort-icon table__sort-icon--active",
        _ => "table__sort-icon",
    }
}

/// Поле поиска с кнопкой очистки. Значение отдаётся на каждое изменение.
#[component]
pub fn SearchInput(
    /// Текущее значение фильтра
    #[prop(into)]
    value: Signal<String>,
    /// Callback для обновления значения фильтра
    #[prop(into)]
    on_change: Callback<String>,
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search".to_string()
    } else {
        placeholder
    };

    view! {
        <p class="control has-icons-left has-icons-right">
            <input
                data-cy="SearchField"
                type="text"
                class="input"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            />

            <span class="icon is-left">
                {crate::shared::icons::icon("search")}
            </span>

            <span class="icon is-right">
                {move || if !value.get().is_empty() {
                    view! {
                        <button
                            data-cy="ClearButton"
                            type="button"
                            class="delete"
                            title="Clear"
                            on:click=move |_| on_change.run(String::new())
                        >
                            {crate::shared::icons::icon("x")}
                        </button>
                    }.into_any()
                } else {
                    view! { <></> }.into_any()
                }}
            </span>
        </p>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_ranges_ascii() {
        assert_eq!(match_ranges("Ice cream", " CE "), vec![(1, 3)]);
        assert_eq!(match_ranges("Banana", "an"), vec![(1, 3), (3, 5)]);
        assert!(match_ranges("Milk", "  ").is_empty());
        assert!(match_ranges("Milk", "xyz").is_empty());
    }

    #[test]
    fn test_match_ranges_on_chars_changing_length_when_lowered() {
        // 'İ' растёт при to_lowercase, 'K' (знак Кельвина) уменьшается
        let text = "İİ\u{212A}";
        assert_eq!(match_ranges(text, "k"), vec![(4, 7)]);
        for (start, end) in match_ranges(text, "k") {
            assert!(text.is_char_boundary(start) && text.is_char_boundary(end));
        }
    }

    #[test]
    fn test_highlight_matches_does_not_panic_on_unicode_names() {
        let owner = Owner::new();
        owner.with(|| {
            let _ = highlight_matches("İİ\u{212A}", "k");
            let _ = highlight_matches("Straße", "SS");
            let _ = highlight_matches("Ice cream", "ice");
        });
    }

    #[test]
    fn test_sort_indicator() {
        assert_eq!(get_sort_indicator(None, SortColumn::Id), " ⇅");
        assert_eq!(get_sort_indicator(Some(SortField::IdAsc), SortColumn::Id), " ▲");
        assert_eq!(get_sort_indicator(Some(SortField::IdDesc), SortColumn::Id), " ▼");
        assert_eq!(get_sort_indicator(Some(SortField::NameAsc), SortColumn::Id), " ⇅");
    }

    #[test]
    fn test_sort_class() {
        assert_eq!(
            get_sort_class(Some(SortField::CategoryDesc), SortColumn::Category),
            "table__sort-icon table__sort-icon--active"
        );
        assert_eq!(get_sort_class(None, SortColumn::Category), "table__sort-icon");
    }
}
