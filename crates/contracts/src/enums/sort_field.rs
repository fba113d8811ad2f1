use crate::shared::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Колонка таблицы товаров, по которой можно сортировать
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortColumn {
    Id,
    Name,
    Category,
}

impl SortColumn {
    /// Заголовок колонки в таблице
    pub fn label(&self) -> &'static str {
        match self {
            SortColumn::Id => "ID",
            SortColumn::Name => "Product",
            SortColumn::Category => "Category",
        }
    }

    pub fn all() -> Vec<SortColumn> {
        vec![SortColumn::Id, SortColumn::Name, SortColumn::Category]
    }

    pub fn ascending(&self) -> SortField {
        match self {
            SortColumn::Id => SortField::IdAsc,
            SortColumn::Name => SortField::NameAsc,
            SortColumn::Category => SortField::CategoryAsc,
        }
    }

    pub fn descending(&self) -> SortField {
        match self {
            SortColumn::Id => SortField::IdDesc,
            SortColumn::Name => SortField::NameDesc,
            SortColumn::Category => SortField::CategoryDesc,
        }
    }
}

/// Запрошенное поле сортировки списка товаров
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SortField {
    IdAsc,
    IdDesc,
    NameAsc,
    NameDesc,
    CategoryAsc,
    CategoryDesc,
}

impl SortField {
    /// Код поля сортировки
    pub fn code(&self) -> &'static str {
        match self {
            SortField::IdAsc => "id to max",
            SortField::IdDesc => "id to min",
            SortField::NameAsc => "name to max",
            SortField::NameDesc => "name to min",
            SortField::CategoryAsc => "category to max",
            SortField::CategoryDesc => "category to min",
        }
    }

    /// Все поля сортировки в порядке колонок таблицы
    pub fn all() -> Vec<SortField> {
        vec![
            SortField::IdAsc,
            SortField::IdDesc,
            SortField::NameAsc,
            SortField::NameDesc,
            SortField::CategoryAsc,
            SortField::CategoryDesc,
        ]
    }

    /// Парсинг из строки
    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|field| field.code() == code)
    }

    pub fn column(&self) -> SortColumn {
        match self {
            SortField::IdAsc | SortField::IdDesc => SortColumn::Id,
            SortField::NameAsc | SortField::NameDesc => SortColumn::Name,
            SortField::CategoryAsc | SortField::CategoryDesc => SortColumn::Category,
        }
    }

    pub fn is_ascending(&self) -> bool {
        matches!(
            self,
            SortField::IdAsc | SortField::NameAsc | SortField::CategoryAsc
        )
    }

    /// Следующее состояние сортировки после клика по заголовку колонки.
    ///
    /// Та же колонка: по возрастанию -> по убыванию -> без сортировки.
    /// Другая колонка всегда начинается с сортировки по возрастанию.
    pub fn toggle(current: Option<SortField>, column: SortColumn) -> Option<SortField> {
        match current {
            Some(field) if field.column() == column => {
                if field.is_ascending() {
                    Some(column.descending())
                } else {
                    None
                }
            }
            _ => Some(column.ascending()),
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for SortField {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortField::from_code(s).ok_or_else(|| CatalogError::UnknownSortField(s.to_string()))
    }
}

impl TryFrom<String> for SortField {
    type Error = CatalogError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SortField> for String {
    fn from(field: SortField) -> Self {
        field.code().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_parse_back() {
        for field in SortField::all() {
            assert_eq!(field.code().parse::<SortField>().unwrap(), field);
        }
        assert_eq!(
            "price to max".parse::<SortField>(),
            Err(CatalogError::UnknownSortField("price to max".to_string()))
        );
    }

    #[test]
    fn test_serde_uses_codes() {
        let json = serde_json::to_string(&SortField::CategoryDesc).unwrap();
        assert_eq!(json, r#""category to min""#);
        let field: SortField = serde_json::from_str(r#""name to max""#).unwrap();
        assert_eq!(field, SortField::NameAsc);
    }

    #[test]
    fn test_toggle_cycles_same_column() {
        let first = SortField::toggle(None, SortColumn::Name);
        assert_eq!(first, Some(SortField::NameAsc));
        let second = SortField::toggle(first, SortColumn::Name);
        assert_eq!(second, Some(SortField::NameDesc));
        assert_eq!(SortField::toggle(second, SortColumn::Name), None);
    }

    #[test]
    fn test_toggle_other_column_starts_ascending() {
        assert_eq!(
            SortField::toggle(Some(SortField::IdDesc), SortColumn::Category),
            Some(SortField::CategoryAsc)
        );
    }
}
