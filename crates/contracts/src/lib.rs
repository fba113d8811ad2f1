//! Типы и логика каталога товаров: справочники, соединение товаров с
//! категориями и владельцами, фильтрация и сортировка списка.

pub mod domain;
pub mod enums;
pub mod projections;
pub mod shared;
