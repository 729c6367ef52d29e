//! Ordered registry of format providers
//!
//! Registration order is selection priority: the first provider that can
//! produce a requested format wins. The registry is built once at startup
//! and never mutated afterwards.

use std::env;

use crate::provider::FormatProvider;
use crate::providers::{
    DEFAULT_IMAGEMAGICK_COMMAND, ImageMagickProvider, ImageProvider, PdfProvider,
    ScalableImageProvider,
};

/// Environment variable that opts into the ImageMagick provider.
pub const USE_IMAGEMAGICK_ENV: &str = "USE_IMAGEMAGICK";

/// Environment variable overriding the ImageMagick executable.
pub const IMAGEMAGICK_CMD_ENV: &str = "IMAGEMAGICK_CMD";

/// Startup options controlling which built-in providers are registered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryOptions {
    /// Register the ImageMagick provider ahead of the generic image providers
    pub use_imagemagick: bool,
    /// Executable probed by the ImageMagick provider
    pub imagemagick_command: String,
}

impl RegistryOptions {
    /// Read options from `USE_IMAGEMAGICK` and `IMAGEMAGICK_CMD`.
    pub fn from_env() -> Self {
        Self::from_values(
            env::var(USE_IMAGEMAGICK_ENV).ok().as_deref(),
            env::var(IMAGEMAGICK_CMD_ENV).ok().as_deref(),
        )
    }

    /// Build options from raw flag values, as they would appear in the environment.
    ///
    /// Only `true` (any case) enables ImageMagick; anything else, including
    /// an absent value, leaves it disabled.
    pub fn from_values(use_imagemagick: Option<&str>, command: Option<&str>) -> Self {
        let use_imagemagick = use_imagemagick.is_some_and(|v| v.trim().eq_ignore_ascii_case("true"));
        let imagemagick_command = command
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .unwrap_or(DEFAULT_IMAGEMAGICK_COMMAND)
            .to_string();
        Self {
            use_imagemagick,
            imagemagick_command,
        }
    }

    pub fn with_imagemagick(mut self, enabled: bool) -> Self {
        self.use_imagemagick = enabled;
        self
    }
}

impl Default for RegistryOptions {
    fn default() -> Self {
        Self::from_values(None, None)
    }
}

/// Immutable, ordered list of format providers.
#[derive(Debug)]
pub struct ProviderRegistry {
    providers: Vec<Box<dyn FormatProvider>>,
}

impl ProviderRegistry {
    /// Create a registry from providers in priority order.
    pub fn new(providers: Vec<Box<dyn FormatProvider>>) -> Self {
        Self { providers }
    }

    /// Create a registry with the built-in providers.
    ///
    /// Order: PDF, ImageMagick (only when enabled by `options`), scalable
    /// images, then the default image provider.
    pub fn builtin(options: &RegistryOptions) -> Self {
        let mut providers: Vec<Box<dyn FormatProvider>> = vec![Box::new(PdfProvider::new())];
        if options.use_imagemagick {
            providers.push(Box::new(ImageMagickProvider::with_command(
                options.imagemagick_command.clone(),
            )));
        }
        providers.push(Box::new(ScalableImageProvider::new()));
        providers.push(Box::new(ImageProvider::new()));

        tracing::debug!(
            "Registered output providers: {}",
            providers
                .iter()
                .map(|p| p.name())
                .collect::<Vec<_>>()
                .join(", ")
        );
        Self::new(providers)
    }

    /// Iterate providers in priority order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn FormatProvider> {
        self.providers.iter().map(|p| p.as_ref())
    }

    /// Provider names in priority order.
    pub fn names(&self) -> Vec<&str> {
        self.iter().map(|p| p.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

impl Default for ProviderRegistry {
    fn default() -> Self {
        Self::builtin(&RegistryOptions::from_env())
    }
}
