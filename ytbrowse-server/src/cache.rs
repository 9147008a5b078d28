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

use std::{collections::HashMap, sync::Mutex, time::{Duration, Instant}};

use cloneable_errors::ErrorContext;
use ytbrowse_api::sync::Records;
use ytbrowse_client::FetchOptions;

use crate::constants::CACHE_LOCK_ERR;

/// Everything that can change the outcome of a fetch
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub mode: String,
    pub query: String,
    pub max_results: u32,
    pub api_key: String,
}

impl From<&FetchOptions> for CacheKey {
    fn from(options: &FetchOptions) -> Self {
        CacheKey {
            mode: options.mode.clone(),
            query: options.query.clone(),
            max_results: options.max_results,
            api_key: options.credential().unwrap_or_default().to_owned(),
        }
    }
}

struct CacheEntry {
    records: Records,
    fetched_at: Instant,
}

/// Short-lived cache of successful fetches
pub struct ResponseCache {
    ttl: Duration,
    entries: Mutex<HashMap<CacheKey, CacheEntry>>,
}

impl ResponseCache {
    pub fn new(ttl: Duration) -> ResponseCache {
        ResponseCache {
            ttl,
            entries: Mutex::default(),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn get(&self, key: &CacheKey) -> Result<Option<Records>, ErrorContext> {
        let entries = self.entries.lock().map_err(|_| CACHE_LOCK_ERR.clone())?;
        Ok(entries.get(key)
            .filter(|entry| entry.fetched_at.elapsed() < self.ttl)
            .map(|entry| entry.records.clone()))
    }

    /// Stores a fresh result, dropping any expired entries along the way
    pub fn insert(&self, key: CacheKey, records: Records) -> Result<(), ErrorContext> {
        if self.ttl.is_zero() {
            return Ok(());
        }
        let mut entries = self.entries.lock().map_err(|_| CACHE_LOCK_ERR.clone())?;
        entries.retain(|_, entry| entry.fetched_at.elapsed() < self.ttl);
        entries.insert(key, CacheEntry { records, fetched_at: Instant::now() });
        Ok(())
    }

    pub fn len(&self) -> Result<usize, ErrorContext> {
        Ok(self.entries.lock().map_err(|_| CACHE_LOCK_ERR.clone())?.len())
    }
}
