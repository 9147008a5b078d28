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

use std::borrow::Cow;

use cloneable_errors::{ErrorContext, ResContext};
use reqwest::Url;
use ytbrowse_api::Mode;

use crate::errors::{FetchError, MISSING_QUERY_MSG};

pub const PART_SNIPPET: &str = "snippet";
/// search.list rejects the statistics part
pub const PART_SNIPPET_STATISTICS: &str = "snippet,statistics";
pub const DEFAULT_REGION_CODE: &str = "US";
pub const DEFAULT_MAX_RESULTS: u32 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// videos.list
    Videos,
    /// search.list
    Search,
}

impl Endpoint {
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::Videos => "videos",
            Endpoint::Search => "search",
        }
    }
}

/// A planned GET request against the Data API, not yet bound to a base url
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub endpoint: Endpoint,
    pub params: Vec<(&'static str, String)>,
}

impl ApiRequest {
    /// The hydration lookup for a comma separated list of video ids
    pub fn video_details(api_key: &str, ids: &str) -> ApiRequest {
        ApiRequest {
            endpoint: Endpoint::Videos,
            params: vec![
                ("key", api_key.to_owned()),
                ("part", PART_SNIPPET_STATISTICS.to_owned()),
                ("id", ids.to_owned()),
            ],
        }
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.iter().find(|(k, _)| *k == name).map(|(_, v)| v.as_str())
    }

    pub fn url(&self, base: &Url) -> Result<Url, ErrorContext> {
        let mut url = base.join(self.endpoint.path()).with_context(|| format!("Failed to resolve the {} endpoint", self.endpoint.path()))?;
        url.query_pairs_mut().extend_pairs(self.params.iter().map(|(k, v)| (*k, v.as_str())));
        Ok(url)
    }
}

/// Picks the endpoint and builds the parameters for a fetch
pub fn plan_request(api_key: &str, mode: Mode, query: &str, max_results: u32, region_code: &str) -> Result<ApiRequest, FetchError> {
    if mode.requires_query() && query.is_empty() {
        return Err(FetchError::InvalidRequest(MISSING_QUERY_MSG));
    }

    let (endpoint, part) = match mode {
        Mode::Trending => (Endpoint::Videos, PART_SNIPPET_STATISTICS),
        Mode::Search | Mode::Video | Mode::Channel | Mode::Playlist => (Endpoint::Search, PART_SNIPPET),
    };
    let mut params = vec![
        ("key", api_key.to_owned()),
        ("part", part.to_owned()),
        ("maxResults", max_results.to_string()),
        ("regionCode", region_code.to_owned()),
    ];
    match mode {
        Mode::Trending => params.push(("chart", "mostPopular".to_owned())),
        _ => {
            params.push(("q", query.to_owned()));
            if let Some(search_type) = mode.search_type() {
                params.push(("type", search_type.to_owned()));
            }
        },
    }

    Ok(ApiRequest { endpoint, params })
}

/// Copy of the url that is safe to log
pub fn redact_key(url: &Url) -> Url {
    let mut redacted = url.clone();
    let pairs: Vec<(Cow<str>, Cow<str>)> = url.query_pairs()
        .map(|(k, v)| if k == "key" { (k, Cow::Borrowed("REDACTED")) } else { (k, v) })
        .collect();
    redacted.query_pairs_mut().clear().extend_pairs(pairs);
    redacted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://www.googleapis.com/youtube/v3/").unwrap()
    }

    #[test]
    fn trending() {
        let req = plan_request("K", Mode::Trending, "", 5, DEFAULT_REGION_CODE).unwrap();
        assert_eq!(req.endpoint, Endpoint::Videos);
        assert_eq!(req.param("part"), Some("snippet,statistics"));
        assert_eq!(req.param("chart"), Some("mostPopular"));
        assert_eq!(req.param("maxResults"), Some("5"));
        assert_eq!(req.param("regionCode"), Some("US"));
        assert_eq!(req.param("q"), None);
        assert_eq!(
            req.url(&base()).unwrap().as_str(),
            "https://www.googleapis.com/youtube/v3/videos?key=K&part=snippet%2Cstatistics&maxResults=5&regionCode=US&chart=mostPopular",
        );
    }

    #[test]
    fn search_family() {
        for (mode, search_type) in [
            (Mode::Search, None),
            (Mode::Video, Some("video")),
            (Mode::Channel, Some("channel")),
            (Mode::Playlist, Some("playlist")),
        ] {
            let req = plan_request("K", mode, "lofi beats", 20, DEFAULT_REGION_CODE).unwrap();
            assert_eq!(req.endpoint, Endpoint::Search);
            assert_eq!(req.param("part"), Some("snippet"), "{mode} must not request statistics");
            assert_eq!(req.param("q"), Some("lofi beats"));
            assert_eq!(req.param("type"), search_type);
            assert_eq!(req.param("chart"), None);
            assert_eq!(req.params.iter().filter(|(k, _)| *k == "part").count(), 1);
        }
        let url = plan_request("K", Mode::Channel, "lofi beats", 20, "GB").unwrap().url(&base()).unwrap();
        assert_eq!(url.path(), "/youtube/v3/search");
        assert_eq!(url.query(), Some("key=K&part=snippet&maxResults=20&regionCode=GB&q=lofi+beats&type=channel"));
    }

    #[test]
    fn empty_query() {
        for mode in [Mode::Search, Mode::Video, Mode::Channel, Mode::Playlist] {
            assert!(matches!(plan_request("K", mode, "", 20, DEFAULT_REGION_CODE), Err(FetchError::InvalidRequest(MISSING_QUERY_MSG))));
        }
    }

    #[test]
    fn video_details() {
        let req = ApiRequest::video_details("K", "a,b");
        assert_eq!(req.endpoint, Endpoint::Videos);
        assert_eq!(req.param("id"), Some("a,b"));
        assert_eq!(req.param("part"), Some("snippet,statistics"));
        assert_eq!(req.param("regionCode"), None);
        assert_eq!(req.url(&base()).unwrap().query(), Some("key=K&part=snippet%2Cstatistics&id=a%2Cb"));
    }

    #[test]
    fn redaction() {
        let url = plan_request("secret", Mode::Trending, "", 20, DEFAULT_REGION_CODE).unwrap().url(&base()).unwrap();
        let redacted = redact_key(&url);
        assert!(!redacted.as_str().contains("secret"));
        assert!(redacted.as_str().contains("key=REDACTED"));
        assert!(redacted.as_str().contains("chart=mostPopular"));
    }
}
