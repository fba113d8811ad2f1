use contracts::projections::p900_enriched_products::Catalog;
use contracts::shared::{CatalogConfig, CatalogError};
use leptos::prelude::*;

/// Общий контекст приложения: настройки и загруженный один раз каталог
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub config: StoredValue<CatalogConfig>,
    pub catalog: StoredValue<Result<Catalog, CatalogError>>,
}

impl AppGlobalContext {
    /// Загружает каталог по настройкам. Соединение товаров выполняется здесь и больше не повторяется.
    pub fn new(config: CatalogConfig) -> Self {
        let catalog = Catalog::load(&config);
        if let Err(e) = &catalog {
            log::error!("Failed to load catalog: {}", e);
        }

        Self {
            config: StoredValue::new(config),
            catalog: StoredValue::new(catalog),
        }
    }

    pub fn load_error(&self) -> Option<String> {
        self.catalog
            .with_value(|c| c.as_ref().err().map(|e| e.to_string()))
    }

    /// Выполнить `f` над каталогом; при ошибке загрузки - над пустым каталогом
    pub fn with_catalog<R>(&self, f: impl FnOnce(&Catalog) -> R) -> R {
        self.catalog.with_value(|c| match c {
            Ok(catalog) => f(catalog),
            Err(_) => f(&Catalog::default()),
        })
    }
}
