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

//! Loosely-typed upstream response model.
//!
//! Every field is optional and every field tolerates a value of the wrong type, so decoding a
//! list response only fails when the body isn't JSON at all.

use serde::Deserialize;
use serde_with::{serde_as, DefaultOnError};

// https://developers.google.com/youtube/v3/docs/videos/list#response
// https://developers.google.com/youtube/v3/docs/search/list#response
#[serde_as]
#[derive(Deserialize, Default, Debug, Clone)]
pub struct ListResponse {
    #[serde_as(as = "DefaultOnError<Vec<DefaultOnError>>")]
    #[serde(default)]
    pub items: Vec<Item>,
}

#[serde_as]
#[derive(Deserialize, Default, Debug, Clone)]
pub struct Item {
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub id: Option<ItemId>,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub snippet: Option<Snippet>,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub statistics: Option<Statistics>,
}

/// videos.list returns plain string ids, search.list returns a resource id object
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum ItemId {
    Plain(String),
    Resource(ResourceId),
}

#[serde_as]
#[derive(Deserialize, Default, Debug, Clone, PartialEq, Eq)]
pub struct ResourceId {
    #[serde_as(as = "DefaultOnError")]
    #[serde(default, rename = "videoId")]
    pub video_id: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default, rename = "channelId")]
    pub channel_id: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default, rename = "playlistId")]
    pub playlist_id: Option<String>,
}

#[serde_as]
#[derive(Deserialize, Default, Debug, Clone)]
pub struct Snippet {
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub title: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub description: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default, rename = "channelTitle")]
    pub channel_title: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default, rename = "publishedAt")]
    pub published_at: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub thumbnails: Option<Thumbnails>,
}

#[serde_as]
#[derive(Deserialize, Default, Debug, Clone)]
pub struct Thumbnails {
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub maxres: Option<Thumbnail>,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub high: Option<Thumbnail>,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub medium: Option<Thumbnail>,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default, rename = "default")]
    pub fallback: Option<Thumbnail>,
}

#[serde_as]
#[derive(Deserialize, Default, Debug, Clone)]
pub struct Thumbnail {
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub url: Option<String>,
}

#[serde_as]
#[derive(Deserialize, Default, Debug, Clone)]
pub struct Statistics {
    #[serde_as(as = "DefaultOnError")]
    #[serde(default, rename = "viewCount")]
    pub view_count: Option<String>,
}

// https://developers.google.com/youtube/v3/docs/errors
#[serde_as]
#[derive(Deserialize, Default, Debug, Clone)]
pub struct ErrorResponse {
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub error: Option<ErrorBody>,
}

#[serde_as]
#[derive(Deserialize, Default, Debug, Clone)]
pub struct ErrorBody {
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ThumbnailSize {
    Maxres,
    High,
    Medium,
    Default,
}

/// Treats empty strings the same as missing values
pub(crate) fn non_empty(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|s| !s.is_empty())
}

impl Item {
    pub fn snippet_field<F>(&self, f: F) -> Option<&str>
    where F: FnOnce(&Snippet) -> Option<&String>
    {
        non_empty(self.snippet.as_ref().and_then(f))
    }

    pub fn view_count(&self) -> Option<&str> {
        non_empty(self.statistics.as_ref().and_then(|s| s.view_count.as_ref()))
    }

    /// The nested `id.videoId`, ignoring plain string ids
    pub fn search_video_id(&self) -> Option<&str> {
        match self.id {
            Some(ItemId::Resource(ref res)) => non_empty(res.video_id.as_ref()),
            _ => None,
        }
    }

    /// Picks the id using the given resource field, falling back to a plain string id
    pub fn resource_id<F>(&self, f: F) -> Option<&str>
    where F: FnOnce(&ResourceId) -> Option<&String>
    {
        match self.id {
            Some(ItemId::Plain(ref id)) => non_empty(Some(id)),
            Some(ItemId::Resource(ref res)) => non_empty(f(res)),
            None => None,
        }
    }

    /// The first non-empty thumbnail url, in the given order of preference
    pub fn thumbnail(&self, priority: &[ThumbnailSize]) -> Option<&str> {
        let thumbnails = self.snippet.as_ref()?.thumbnails.as_ref()?;
        priority.iter()
            .filter_map(|size| match size {
                ThumbnailSize::Maxres => thumbnails.maxres.as_ref(),
                ThumbnailSize::High => thumbnails.high.as_ref(),
                ThumbnailSize::Medium => thumbnails.medium.as_ref(),
                ThumbnailSize::Default => thumbnails.fallback.as_ref(),
            })
            .find_map(|thumb| non_empty(thumb.url.as_ref()))
    }
}

impl ErrorResponse {
    pub fn message(&self) -> Option<&str> {
        non_empty(self.error.as_ref().and_then(|e| e.message.as_ref()))
    }
}
