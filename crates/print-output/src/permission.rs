//! Configuration-based output format permissions

use std::collections::BTreeSet;

use crate::config::ServerConfig;
use crate::format::{DEFAULT_FORMAT, WILDCARD};

/// How a configuration's allow-list gates output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionPolicy<'a> {
    /// The allow-list is exactly `["*"]`.
    All,
    /// The allow-list is empty; only the default format is permitted.
    DefaultOnly,
    /// Only the listed formats are permitted, compared case-insensitively.
    Listed(&'a BTreeSet<String>),
}

impl<'a> PermissionPolicy<'a> {
    /// Derive the policy for a configuration.
    pub fn from_config(config: &'a ServerConfig) -> PermissionPolicy<'a> {
        let formats = config.formats();
        if formats.len() == 1 && formats.iter().all(|f| f.trim() == WILDCARD) {
            PermissionPolicy::All
        } else if formats.is_empty() {
            PermissionPolicy::DefaultOnly
        } else {
            PermissionPolicy::Listed(formats)
        }
    }

    pub fn allows(&self, format: &str) -> bool {
        match self {
            PermissionPolicy::All => true,
            PermissionPolicy::DefaultOnly => format.eq_ignore_ascii_case(DEFAULT_FORMAT),
            PermissionPolicy::Listed(formats) => {
                formats.iter().any(|f| f.eq_ignore_ascii_case(format))
            }
        }
    }
}

/// Whether `format` may be produced under `config`.
pub fn permitted(format: &str, config: &ServerConfig) -> bool {
    PermissionPolicy::from_config(config).allows(format)
}
