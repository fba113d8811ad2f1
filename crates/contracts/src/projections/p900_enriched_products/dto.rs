use crate::domain::a001_user::User;
use crate::domain::a002_category::Category;
use crate::domain::a003_product::{Product, ProductId};

/// Товар вместе с найденной категорией и владельцем категории.
///
/// `category: None` и `user: None` - допустимое состояние: строка
/// отображается с пустыми категорией и владельцем.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrichedProduct {
    pub product: Product,
    pub category: Option<Category>,
    pub user: Option<User>,
}

impl EnrichedProduct {
    pub fn id(&self) -> ProductId {
        self.product.id
    }

    pub fn name(&self) -> &str {
        &self.product.name
    }

    pub fn category_title(&self) -> Option<&str> {
        self.category.as_ref().map(|c| c.title.as_str())
    }

    pub fn owner_name(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.name.as_str())
    }
}
