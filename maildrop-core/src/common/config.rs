/*
 * Copyright (c) 2024. Maildrop Contributors
 *
 * Licensed under either of
 *   * Apache License, Version 2.0 (the "License");
 *     you may not use this file except in compliance with the License.
 *     You may obtain a copy of the License at http://www.apache.org/licenses/LICENSE-2.0
 *   * MIT license: http://opensource.org/licenses/MIT
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the applicable License for the specific language governing permissions and
 * limitations under that License.
 */

use std::time::Duration;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

/// Configuration for the Maildrop mailbox system
///
/// This struct contains all configurable values for Maildrop, loaded from
/// TOML files in XDG-compliant directories.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct MaildropConfig {
    /// Timing configuration
    pub timing: TimingConfig,
    /// Limits and capacity configuration
    pub limits: LimitsConfig,
    /// Default values configuration
    pub defaults: DefaultsConfig,
}

/// Timing-related configuration values
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimingConfig {
    /// Interval between queue scans when the notifier runs in polling mode,
    /// in milliseconds
    pub polling_interval_ms: u64,
}

/// Limits and capacity configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LimitsConfig {
    /// Ring-buffer capacity of an in-process notification channel
    pub channel_capacity: usize,
}

/// Default configuration values
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Default queue name when none is provided
    pub queue_name: String,
    /// Prefix applied to a queue name to form its collection identity in the
    /// durable store
    pub collection_prefix: String,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            polling_interval_ms: 50,
        }
    }
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            channel_capacity: 64,
        }
    }
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            queue_name: "ACTOR-MESSAGES".to_string(),
            collection_prefix: "ACTOR-DATABASE".to_string(),
        }
    }
}

impl MaildropConfig {
    /// Convert the polling interval to a Duration
    pub const fn polling_interval(&self) -> Duration {
        Duration::from_millis(self.timing.polling_interval_ms)
    }

    /// Load configuration from XDG-compliant locations
    ///
    /// This function attempts to load configuration from
    /// `$XDG_CONFIG_HOME/maildrop/config.toml` (with the usual per-platform
    /// fallbacks the `xdg` crate provides).
    ///
    /// If no configuration file is found, returns the default configuration.
    /// If a configuration file exists but is malformed, logs an error and uses defaults.
    pub fn load() -> Self {
        use tracing::{error, info};

        // Get the XDG base directories
        let xdg_dirs = match xdg::BaseDirectories::with_prefix("maildrop") {
            Ok(dirs) => dirs,
            Err(e) => {
                error!("Failed to initialize XDG directories: {}", e);
                return Self::default();
            }
        };

        // Try to find the configuration file
        let config_path = xdg_dirs.find_config_file("config.toml");

        if let Some(path) = config_path {
            info!("Loading configuration from: {}", path.display());
            match std::fs::read_to_string(&path) {
                Ok(config_str) => match toml::from_str::<Self>(&config_str) {
                    Ok(config) => {
                        info!("Successfully loaded configuration");
                        config
                    }
                    Err(e) => {
                        error!("Failed to parse configuration file {}: {}", path.display(), e);
                        Self::default()
                    }
                },
                Err(e) => {
                    error!("Failed to read configuration file {}: {}", path.display(), e);
                    Self::default()
                }
            }
        } else {
            info!("No configuration file found, using defaults");
            Self::default()
        }
    }
}

lazy_static! {
    /// Global configuration instance loaded from XDG-compliant locations
    pub static ref CONFIG: MaildropConfig = MaildropConfig::load();
}
