//! Output format selection
//!
//! The selector walks the registry in priority order and returns a handler
//! from the first enabled provider that supports the requested format under
//! the server configuration's allow-list.

use std::collections::BTreeSet;
use std::sync::Arc;

use crate::config::ServerConfig;
use crate::error::{Error, Result};
use crate::format::DEFAULT_FORMAT;
use crate::permission::PermissionPolicy;
use crate::provider::OutputFormat;
use crate::registry::{ProviderRegistry, RegistryOptions};
use crate::request::PrintRequest;

/// Picks the output format handler for a request.
///
/// Cheap to clone; clones share the same registry.
#[derive(Debug, Clone)]
pub struct FormatSelector {
    registry: Arc<ProviderRegistry>,
}

impl FormatSelector {
    pub fn new(registry: Arc<ProviderRegistry>) -> Self {
        Self { registry }
    }

    /// Create a selector over the built-in providers, configured from the environment.
    pub fn builtin() -> Self {
        Self::new(Arc::new(ProviderRegistry::builtin(
            &RegistryOptions::from_env(),
        )))
    }

    pub fn registry(&self) -> &ProviderRegistry {
        &self.registry
    }

    /// Select and instantiate a handler for `requested` (default `pdf`).
    ///
    /// # Errors
    ///
    /// - [`Error::NoDefaultFormat`] when PDF was requested and nothing can
    ///   produce it. This is fatal.
    /// - [`Error::UnsupportedFormat`] for any other unmatched format, listing
    ///   the formats that are available.
    pub fn create(
        &self,
        config: &ServerConfig,
        requested: Option<&str>,
    ) -> Result<Box<dyn OutputFormat>> {
        let requested = requested.unwrap_or(DEFAULT_FORMAT);
        let policy = PermissionPolicy::from_config(config);

        for provider in self.registry.iter() {
            if let Some(reason) = provider.enablement_status() {
                tracing::warn!("Output provider {} is disabled: {}", provider.name(), reason);
                continue;
            }

            let matched = provider
                .formats()
                .iter()
                .find(|format| policy.allows(format.as_str()) && format.matches(requested));

            if let Some(format) = matched {
                let handler = provider.create(format);
                tracing::info!(
                    "OutputFormat chosen for {} is {}",
                    requested,
                    handler.name()
                );
                return Ok(handler);
            }
        }

        if requested.eq_ignore_ascii_case(DEFAULT_FORMAT) {
            tracing::error!("No enabled and permitted provider can output PDF");
            return Err(Error::NoDefaultFormat);
        }

        Err(Error::UnsupportedFormat {
            requested: requested.to_string(),
            supported: self.supported_formats(config).into_iter().collect(),
        })
    }

    /// Select a handler for the `outputFormat` named in a print request.
    pub fn create_for_request(
        &self,
        config: &ServerConfig,
        request: &PrintRequest,
    ) -> Result<Box<dyn OutputFormat>> {
        self.create(config, Some(&request.output_format()))
    }

    /// Lower-cased formats that enabled providers can produce under `config`.
    pub fn supported_formats(&self, config: &ServerConfig) -> BTreeSet<String> {
        let policy = PermissionPolicy::from_config(config);

        self.registry
            .iter()
            .filter(|provider| provider.enablement_status().is_none())
            .flat_map(|provider| provider.formats().iter())
            .filter(|format| policy.allows(format.as_str()))
            .map(|format| format.normalized())
            .collect()
    }

    /// Whether `format` could currently be selected under `config`.
    pub fn is_supported(&self, config: &ServerConfig, format: &str) -> bool {
        self.supported_formats(config)
            .contains(&format.to_ascii_lowercase())
    }
}

impl Default for FormatSelector {
    fn default() -> Self {
        Self::builtin()
    }
}
