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

//! YouTube Data API v3 adapter.
//!
//! Turns a [`FetchOptions`] into one or two GET requests and reshapes the responses into
//! fully-defaulted [`ytbrowse_api::sync::Records`].

use std::{str::FromStr, sync::{Arc, LazyLock}};

use chrono::Utc;
use cloneable_errors::{bail, ErrorContext, ResContext};
use log::{debug, warn};
use reqwest::Url;
use ytbrowse_api::{sync::{Records, VideoRecord}, Mode};

pub mod errors;
pub mod hydrate;
pub mod normalize;
pub mod options;
pub mod raw;
pub mod request;
pub mod transport;

pub use errors::FetchError;
pub use options::FetchOptions;
pub use transport::{RawResponse, Transport};

use errors::{GENERIC_DETAILS_MSG, GENERIC_FETCH_MSG};
use raw::{ErrorResponse, ListResponse};
use request::{plan_request, redact_key, ApiRequest, DEFAULT_REGION_CODE};

pub const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/youtube/v3/";

static DEFAULT_CLIENT: LazyLock<YouTubeClient> = LazyLock::new(|| YouTubeClient::new(reqwest::Client::new()));

/// Runs [`YouTubeClient::fetch_data`] on a shared client with the default settings
pub async fn fetch_data(options: &FetchOptions) -> Result<Records, FetchError> {
    DEFAULT_CLIENT.fetch_data(options).await
}

#[derive(Clone)]
pub struct YouTubeClient<T = reqwest::Client> {
    transport: T,
    base_url: Url,
    region_code: Arc<str>,
}

impl<T: Transport> YouTubeClient<T> {
    pub fn new(transport: T) -> YouTubeClient<T> {
        YouTubeClient {
            transport,
            base_url: Url::parse(DEFAULT_BASE_URL).expect("Should be able to parse the DEFAULT_BASE_URL"),
            region_code: DEFAULT_REGION_CODE.into(),
        }
    }

    /// Points the client at a different API root, e.g. a proxy
    pub fn with_base_url(mut self, base_url: &str) -> Result<YouTubeClient<T>, ErrorContext> {
        let mut url = Url::parse(base_url).with_context(|| format!("Invalid YouTube API base url: {base_url}"))?;
        if url.cannot_be_a_base() {
            bail!("Invalid YouTube API base url: {base_url}");
        }
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        self.base_url = url;
        Ok(self)
    }

    #[must_use]
    pub fn with_region_code(mut self, region_code: &str) -> YouTubeClient<T> {
        self.region_code = region_code.into();
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn region_code(&self) -> &str {
        &self.region_code
    }

    pub async fn fetch_data(&self, options: &FetchOptions) -> Result<Records, FetchError> {
        let api_key = options.credential().ok_or(FetchError::MissingCredential)?;
        let mode = Mode::from_str(&options.mode).map_err(|_| FetchError::UnsupportedMode(options.mode.clone()))?;
        let request = plan_request(api_key, mode, &options.query, options.max_results, &self.region_code)?;

        let response = self.execute(&request, GENERIC_FETCH_MSG).await?;

        if mode.hydrates() {
            return Ok(Records::Videos(self.hydrate(api_key, &response).await?));
        }
        Ok(match mode {
            Mode::Channel => Records::Channels(normalize::channels(&response)),
            Mode::Playlist => Records::Playlists(normalize::playlists(&response)),
            Mode::Trending | Mode::Search | Mode::Video => Records::Videos(normalize::videos(&response, Utc::now())),
        })
    }

    /// Looks up statistics for the videos of a search response.
    ///
    /// Only the second response is normalized, anything the search response carried besides the
    /// video ids is discarded.
    pub async fn hydrate(&self, api_key: &str, search: &ListResponse) -> Result<Vec<VideoRecord>, FetchError> {
        let Some(ids) = hydrate::collect_video_ids(search) else {
            debug!("Search returned no video ids, skipping the details lookup");
            return Ok(Vec::new());
        };
        let details = self.execute(&ApiRequest::video_details(api_key, &ids), GENERIC_DETAILS_MSG).await?;
        Ok(normalize::videos(&details, Utc::now()))
    }

    async fn execute(&self, request: &ApiRequest, generic_error: &'static str) -> Result<ListResponse, FetchError> {
        let url = request.url(&self.base_url).map_err(FetchError::Network)?;
        debug!("GET {}", redact_key(&url));

        let resp = self.transport.fetch(url).await.map_err(FetchError::Network)?;
        if !resp.is_success() {
            let error = serde_json::from_slice::<ErrorResponse>(&resp.body).ok();
            let message = error.as_ref().and_then(ErrorResponse::message).unwrap_or(generic_error);
            warn!("YouTube API request to {} failed with status {}: {message}", request.endpoint.path(), resp.status);
            return Err(FetchError::UpstreamRequest {
                status: resp.status,
                message: message.to_owned(),
            });
        }

        serde_json::from_slice(&resp.body)
            .context("Failed to decode the YouTube Data API response")
            .map_err(FetchError::InvalidResponse)
    }
}
