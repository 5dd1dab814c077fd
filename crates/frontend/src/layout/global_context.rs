use leptos::prelude::*;
use web_sys::{window, UrlSearchParams};

/// Страницы приложения
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageKey {
    #[default]
    Dashboard,
    Categories,
    Products,
    Sales,
    MonthlySales,
}

impl PageKey {
    pub const ALL: [PageKey; 5] = [
        PageKey::Dashboard,
        PageKey::Categories,
        PageKey::Products,
        PageKey::Sales,
        PageKey::MonthlySales,
    ];

    /// Значение параметра `?active=`
    pub const fn key(self) -> &'static str {
        match self {
            PageKey::Dashboard => "d400_sales_summary",
            PageKey::Categories => "a001_category",
            PageKey::Products => "a002_product",
            PageKey::Sales => "a003_sale",
            PageKey::MonthlySales => "p900_monthly_sales",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            PageKey::Dashboard => "Dashboard",
            PageKey::Categories => "Categorías",
            PageKey::Products => "Productos",
            PageKey::Sales => "Ventas",
            PageKey::MonthlySales => "Ventas Mensuales",
        }
    }

    pub const fn icon(self) -> &'static str {
        match self {
            PageKey::Dashboard => "dashboard",
            PageKey::Categories => "tag",
            PageKey::Products => "products",
            PageKey::Sales => "invoices",
            PageKey::MonthlySales => "calendar",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.key() == key)
    }
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<PageKey>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(PageKey::default()),
            left_open: RwSignal::new(true),
        }
    }

    /// Открыть страницу из `?active=` и дальше держать параметр в адресе
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let initial = UrlSearchParams::new_with_str(&search)
            .ok()
            .and_then(|params| params.get("active"))
            .and_then(|key| PageKey::from_key(&key));
        if let Some(page) = initial {
            self.active.set(page);
        }

        let this = *self;
        Effect::new(move |_| {
            let new_url = format!("?active={}", this.active.get().key());

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            // Only update URL if it actually changed
            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }

    pub fn open_page(&self, page: PageKey) {
        log::debug!("open_page: {}", page.key());
        self.active.set(page);
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|open| *open = !*open);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_keys_resolve() {
        for page in PageKey::ALL {
            assert_eq!(PageKey::from_key(page.key()), Some(page));
        }
        assert_eq!(PageKey::from_key("a004_nomenclature"), None);
    }
}
