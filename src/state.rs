//! Application state shared across all handlers.

use std::sync::Arc;

use tracing::info;

use crate::config::Config;
use crate::developers::DeveloperService;
use crate::registry::DeveloperRegistry;
use crate::tax::{ConfiguredTaxRates, TaxRates};

/// Shared application state.
///
/// Wrapped in Arc internally so Clone is cheap.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    /// Developer service owning the in-memory registry.
    developers: Arc<DeveloperService>,
}

impl AppState {
    /// Create new application state from configuration.
    ///
    /// The registry starts empty; tax rates are frozen at startup.
    pub fn new(config: &Config) -> Self {
        let taxes: Arc<dyn TaxRates> = Arc::new(ConfiguredTaxRates::new(
            config.tax_rate_simple,
            config.tax_rate_middle,
            config.tax_rate_upper,
        ));

        info!(
            simple = config.tax_rate_simple,
            middle = config.tax_rate_middle,
            upper = config.tax_rate_upper,
            "tax rates configured"
        );

        let developers = Arc::new(DeveloperService::new(DeveloperRegistry::new(), taxes));

        Self {
            inner: Arc::new(AppStateInner { developers }),
        }
    }

    /// Get the developer service.
    pub fn developers(&self) -> &Arc<DeveloperService> {
        &self.inner.developers
    }
}
