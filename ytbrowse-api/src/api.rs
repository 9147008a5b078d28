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

// NOTE: This file is used as a template for the ytbrowse-api::sync module.
//       The RcStr type will be defined externally with the correct smart pointer variant for the
//       module.

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct VideoRecord {
    pub id: RcStr,
    pub title: RcStr,
    pub description: RcStr,
    pub thumbnail_url: RcStr,
    pub channel_title: RcStr,
    /// numeric string, verbatim from upstream statistics
    pub view_count: RcStr,
    pub published_at: RcStr,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ChannelRecord {
    pub id: RcStr,
    pub title: RcStr,
    pub description: RcStr,
    pub thumbnail_url: RcStr,
    pub subscriber_count: RcStr,
    pub video_count: RcStr,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistRecord {
    pub id: RcStr,
    pub title: RcStr,
    pub description: RcStr,
    pub thumbnail_url: RcStr,
    pub channel_title: RcStr,
    pub item_count: RcStr,
}

/// The result of a single fetch, always one record shape per call
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
#[serde(tag = "kind", content = "items", rename_all = "lowercase")]
pub enum Records {
    Videos(Vec<VideoRecord>),
    Channels(Vec<ChannelRecord>),
    Playlists(Vec<PlaylistRecord>),
}

impl Records {
    pub fn len(&self) -> usize {
        match self {
            Records::Videos(v) => v.len(),
            Records::Channels(c) => c.len(),
            Records::Playlists(p) => p.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
pub struct ApiError {
    pub kind: ErrorKind,
    pub message: RcStr,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug, Default)]
#[serde(default)]
pub struct SettingsResponse {
    pub has_api_key: bool,
    pub dark_mode: bool,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
pub struct ApiKeyUpdate {
    pub api_key: RcStr,
}

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub struct DarkModeUpdate {
    pub enabled: bool,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Default, Debug)]
#[serde(default)]
pub struct StatusResponse {
    pub api_key_configured: bool,
    pub region_code: Option<RcStr>,
    pub cached_responses: Option<u64>,
    // general server build data
    pub server_version: Option<RcStr>,
    pub server_git_hash: Option<RcStr>,
    pub server_git_dirty: Option<bool>,
    pub server_build_timestamp: Option<i64>,
    pub server_commit_timestamp: Option<i64>,
    pub server_startup_timestamp: Option<i64>,
}
