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

use std::future::Future;

use cloneable_errors::{ErrorContext, ResContext};
use reqwest::Url;

/// A fully received upstream response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Performs a single GET request.
///
/// Errors returned from here are transport failures only, any response that arrived
/// (whatever its status) must be returned as a [`RawResponse`].
pub trait Transport: Send + Sync {
    fn fetch(&self, url: Url) -> impl Future<Output = Result<RawResponse, ErrorContext>> + Send;
}

impl Transport for reqwest::Client {
    async fn fetch(&self, url: Url) -> Result<RawResponse, ErrorContext> {
        // reqwest errors carry the request url, which contains the API key
        let resp = self.get(url).send().await
            .map_err(reqwest::Error::without_url)
            .context("Failed to send YouTube Data API request")?;
        let status = resp.status().as_u16();
        let body = resp.bytes().await
            .map_err(reqwest::Error::without_url)
            .context("Failed to receive the YouTube Data API response")?;
        Ok(RawResponse {
            status,
            body: body.to_vec(),
        })
    }
}
