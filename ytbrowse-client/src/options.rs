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

use crate::request::DEFAULT_MAX_RESULTS;

/// Options for [`crate::YouTubeClient::fetch_data`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOptions {
    pub api_key: Option<String>,
    /// Kept as the raw tag so that unknown modes can be reported back verbatim
    pub mode: String,
    pub query: String,
    pub max_results: u32,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            api_key: None,
            mode: "trending".to_owned(),
            query: String::new(),
            max_results: DEFAULT_MAX_RESULTS,
        }
    }
}

impl FetchOptions {
    pub fn new<K: Into<String>>(api_key: Option<K>) -> FetchOptions {
        FetchOptions {
            api_key: api_key.map(Into::into),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn mode(mut self, mode: impl AsRef<str>) -> FetchOptions {
        mode.as_ref().clone_into(&mut self.mode);
        self
    }

    #[must_use]
    pub fn query(mut self, query: impl Into<String>) -> FetchOptions {
        self.query = query.into();
        self
    }

    #[must_use]
    pub fn max_results(mut self, max_results: u32) -> FetchOptions {
        self.max_results = max_results;
        self
    }

    /// The API key, if one was supplied and isn't blank
    pub fn credential(&self) -> Option<&str> {
        self.api_key.as_deref().map(str::trim).filter(|k| !k.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use ytbrowse_api::Mode;

    use super::*;

    #[test]
    fn defaults() {
        let opts = FetchOptions::new(Some("K"));
        assert_eq!(opts.mode, "trending");
        assert_eq!(opts.query, "");
        assert_eq!(opts.max_results, 20);
        assert_eq!(opts.credential(), Some("K"));
    }

    #[test]
    fn builder() {
        let opts = FetchOptions::new(Some(" K ")).mode(Mode::Channel).query("lofi").max_results(5);
        assert_eq!(opts.mode, "channel");
        assert_eq!(opts.query, "lofi");
        assert_eq!(opts.max_results, 5);
        assert_eq!(opts.credential(), Some("K"));
    }

    #[test]
    fn blank_credentials() {
        assert_eq!(FetchOptions::new(None::<String>).credential(), None);
        assert_eq!(FetchOptions::new(Some("")).credential(), None);
        assert_eq!(FetchOptions::new(Some("   ")).credential(), None);
    }
}
