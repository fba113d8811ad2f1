use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

/// Трейт для типов идентификаторов справочников каталога
pub trait AggregateId:
    Clone + Copy + PartialEq + Eq + Hash + Ord + Serialize + DeserializeOwned + std::fmt::Debug
{
    /// Числовое значение ключа из фикстуры
    fn value(&self) -> u32;

    /// Преобразовать ID в строку (ключ строки таблицы, `data-*` атрибуты)
    fn as_string(&self) -> String {
        self.value().to_string()
    }
}
