// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

use log::LevelFilter;
use serde::{Deserialize, Serialize};

/// Represents options provided to the encoder. Options are read from a toml source; the
/// command line flags override them.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Options {
    /// SMT-LIB name of the theory fragment to encode for.
    pub logic: String,
    /// Whether to print `set-logic` and the declarations before the assertions.
    pub emit_preamble: bool,
    /// Whether a skipped statement makes the run fail. Valid statements are encoded anyway.
    pub fail_on_error: bool,
    /// Verbosity level for logging.
    pub verbosity_level: LevelFilter,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            logic: "QF_IDL".to_string(),
            emit_preamble: false,
            fail_on_error: false,
            verbosity_level: LevelFilter::Info,
        }
    }
}

impl Options {
    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}
