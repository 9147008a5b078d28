/* This file is part of the YTBrowse project
*
*  Copyright (C) 2025 mini_bomba
*  
*  This program is free software: you can redistribute it and/or modify
*  it under the terms of the GNU Affero General Public License as published by
*  the Free Software Foundation, either version 3 of the License, or
*  (at your option) any later version.
*
*  This program is distributed in the hope that it will be useful,
*  but WITHOUT ANY WARRANTY; without even the implied warranty of
*  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
*  GNU Affero General Public License for more details.
*
*  You should have received a copy of the GNU Affero General Public License
*  along with this program.  If not, see <https://www.gnu.org/licenses/>.
*/

use std::{collections::BTreeMap, fs, io, path::{Path, PathBuf}};

use cloneable_errors::{bail, ErrContext, ErrorContext, ResContext};
use log::info;
use serde_json::Value;

pub const API_KEY_ENTRY: &str = "youtube-api-key";
pub const DARK_MODE_ENTRY: &str = "dark-mode";
pub const INVALID_API_KEY_MSG: &str = "Please enter a valid API key";

/// Flat key-value store for user settings, persisted as a single JSON object.
///
/// Every mutation is written to disk before it returns.
#[derive(Debug)]
pub struct SettingsStore {
    path: PathBuf,
    entries: BTreeMap<String, Value>,
}

/// Trims user input, rejecting keys that are blank
pub fn validate_api_key(input: &str) -> Option<&str> {
    Some(input.trim()).filter(|k| !k.is_empty())
}

impl SettingsStore {
    pub fn open(path: impl Into<PathBuf>) -> Result<SettingsStore, ErrorContext> {
        let path = path.into();
        let entries = match fs::read(&path) {
            Ok(contents) => serde_json::from_slice(&contents).with_context(|| format!("Failed to deserialize contents of {}", path.display()))?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.context(format!("Failed to read {}", path.display()))),
        };
        Ok(SettingsStore { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn api_key(&self) -> Option<&str> {
        self.entries.get(API_KEY_ENTRY)
            .and_then(Value::as_str)
            .filter(|k| !k.is_empty())
    }

    pub fn set_api_key(&mut self, input: &str) -> Result<(), ErrorContext> {
        let Some(key) = validate_api_key(input) else {
            bail!(INVALID_API_KEY_MSG);
        };
        self.entries.insert(API_KEY_ENTRY.to_owned(), Value::String(key.to_owned()));
        self.persist()
    }

    /// Dark mode is on unless explicitly turned off
    pub fn dark_mode(&self) -> bool {
        self.entries.get(DARK_MODE_ENTRY)
            .and_then(Value::as_bool)
            .unwrap_or(true)
    }

    pub fn set_dark_mode(&mut self, enabled: bool) -> Result<(), ErrorContext> {
        self.entries.insert(DARK_MODE_ENTRY.to_owned(), Value::Bool(enabled));
        self.persist()
    }

    /// Drops every entry, including ones this version doesn't know about
    pub fn clear(&mut self) -> Result<(), ErrorContext> {
        self.entries.clear();
        self.persist()?;
        info!("Cleared all settings");
        Ok(())
    }

    fn persist(&self) -> Result<(), ErrorContext> {
        let serialized = serde_json::to_vec_pretty(&self.entries).context("Failed to serialize settings")?;
        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, serialized).with_context(|| format!("Failed to write {}", tmp_path.display()))?;
        fs::rename(&tmp_path, &self.path).with_context(|| format!("Failed to replace {}", self.path.display()))?;
        Ok(())
    }
}
