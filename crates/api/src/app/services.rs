use std::sync::Arc;

use shelf_inventory::ItemStore;

/// State shared by all handlers.
pub struct AppServices {
    items: Arc<dyn ItemStore>,
    service_name: String,
}

impl AppServices {
    pub fn new(items: impl ItemStore + 'static, service_name: impl Into<String>) -> Self {
        Self {
            items: Arc::new(items),
            service_name: service_name.into(),
        }
    }

    pub fn items(&self) -> &dyn ItemStore {
        self.items.as_ref()
    }

    pub fn service_name(&self) -> &str {
        &self.service_name
    }
}

impl core::fmt::Debug for AppServices {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AppServices")
            .field("service_name", &self.service_name)
            .finish_non_exhaustive()
    }
}
