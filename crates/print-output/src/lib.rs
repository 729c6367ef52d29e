//! Output format selection for the print server.
//!
//! Given a requested format identifier and the server configuration, the
//! [`FormatSelector`] picks the first enabled provider in the
//! [`ProviderRegistry`] that supports the format and is permitted by the
//! configuration's allow-list.
//!
//! # Example
//!
//! ```
//! use print_output::{FormatSelector, ProviderRegistry, RegistryOptions, ServerConfig};
//! use std::sync::Arc;
//!
//! let registry = ProviderRegistry::builtin(&RegistryOptions::default());
//! let selector = FormatSelector::new(Arc::new(registry));
//!
//! let config = ServerConfig::with_formats(["pdf", "png"]);
//! let handler = selector.create(&config, Some("png")).unwrap();
//! assert_eq!(handler.content_type(), "image/png");
//!
//! let err = selector.create(&config, Some("gif")).unwrap_err();
//! assert_eq!(
//!     err.to_string(),
//!     "gif is not a supported format. Supported formats: pdf, png"
//! );
//! ```

pub mod config;
pub mod error;
pub mod format;
pub mod logging;
pub mod permission;
pub mod provider;
pub mod providers;
pub mod registry;
pub mod request;
pub mod selector;

pub use config::ServerConfig;
pub use error::{Error, Result};
pub use format::{DEFAULT_FORMAT, FormatId, WILDCARD};
pub use permission::{PermissionPolicy, permitted};
pub use provider::{FormatProvider, OutputFormat, SimpleOutputFormat, content_type_for};
pub use providers::{ImageMagickProvider, ImageProvider, PdfProvider, ScalableImageProvider};
pub use registry::{ProviderRegistry, RegistryOptions};
pub use request::PrintRequest;
pub use selector::FormatSelector;
