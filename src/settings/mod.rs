/*
 * Copyright (c):
 * 2026 zephyrj
 * zephyrj@protonmail.com
 *
 * This file is part of shift-planner.
 *
 * shift-planner is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * shift-planner is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with shift-planner. If not, see <https://www.gnu.org/licenses/>.
 */

use std::fs;
use config::{Config, ConfigError, FileFormat};
use config::builder::DefaultState;
use serde::{Deserialize, Serialize};
use tracing::{error, warn};
use crate::error::PlannerError;

pub const DEFAULT_FRONT_COGS: [u32; 2] = [38, 30];
pub const DEFAULT_REAR_COGS: [u32; 4] = [28, 23, 19, 16];

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Settings {
    front_cogs: Vec<u32>,
    rear_cogs: Vec<u32>,
    verbose: bool
}

impl Settings {
    const FRONT_COGS: &'static str = "front_cogs";
    const REAR_COGS: &'static str = "rear_cogs";
    const VERBOSE: &'static str = "verbose";
    const CONFIG_FILENAME: &'static str = "shift-planner-conf";
    const ENV_PREFIX: &'static str = "SHIFT_PLANNER";

    pub fn default() -> Self {
        Settings {
            front_cogs: DEFAULT_FRONT_COGS.to_vec(),
            rear_cogs: DEFAULT_REAR_COGS.to_vec(),
            verbose: false
        }
    }

    fn builder_with_defaults() -> Result<config::ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default(Settings::FRONT_COGS, to_config_list(&DEFAULT_FRONT_COGS))?
            .set_default(Settings::REAR_COGS, to_config_list(&DEFAULT_REAR_COGS))?
            .set_default(Settings::VERBOSE, false)
    }

    /// Load settings from `shift-planner-conf.toml` in the current directory
    /// and `SHIFT_PLANNER_*` environment variables, falling back to the
    /// defaults (and writing them out) if that fails
    pub fn load() -> Result<Self, ConfigError> {
        let builder = Settings::builder_with_defaults()?;
        return match builder
            .add_source(config::File::with_name(Settings::CONFIG_FILENAME))
            .add_source(config::Environment::with_prefix(Settings::ENV_PREFIX)
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key(Settings::FRONT_COGS)
                .with_list_parse_key(Settings::REAR_COGS))
            .build() {
            Ok(settings) => {
                settings.try_deserialize()
            }
            Err(e) => {
                warn!("Failed to load settings. {}", e.to_string());
                let ret: Settings = Settings::builder_with_defaults()?.build()?.try_deserialize()?;
                ret.write().unwrap_or_else(|e| { error!("Failed to write settings. {}", e.to_string())});
                Ok(ret)
            }
        }
    }

    pub fn from_toml_str(toml_data: &str) -> Result<Self, ConfigError> {
        Settings::builder_with_defaults()?
            .add_source(config::File::from_str(toml_data, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    pub fn front_cogs(&self) -> &[u32] {
        &self.front_cogs
    }

    pub fn rear_cogs(&self) -> &[u32] {
        &self.rear_cogs
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }

    pub fn write(&self) -> Result<(), PlannerError> {
        fs::write(format!("{}.toml", Settings::CONFIG_FILENAME), toml::to_string(&self)?)?;
        Ok(())
    }
}

fn to_config_list(cogs: &[u32]) -> Vec<i64> {
    cogs.iter().map(|teeth| *teeth as i64).collect()
}
