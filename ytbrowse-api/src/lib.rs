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

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantNames};

#[cfg(feature = "sync")]
pub mod sync {
    use std::sync::Arc;
    use super::ErrorKind;
    pub type RcStr = Arc<str>;

    include!("api.rs");
}

/// Request type selector, picks the upstream endpoint and the record shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumString, AsRefStr, VariantNames)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Mode {
    #[default]
    Trending,
    Search,
    Video,
    Channel,
    Playlist,
}

impl Mode {
    /// Every mode except trending needs a non-empty search query
    pub fn requires_query(self) -> bool {
        !matches!(self, Mode::Trending)
    }

    /// Search-derived video results lack statistics and need a second lookup
    pub fn hydrates(self) -> bool {
        matches!(self, Mode::Search | Mode::Video)
    }

    /// The `type` filter sent to the search endpoint
    pub fn search_type(self) -> Option<&'static str> {
        match self {
            Mode::Trending | Mode::Search => None,
            Mode::Video => Some("video"),
            Mode::Channel => Some("channel"),
            Mode::Playlist => Some("playlist"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ErrorKind {
    MissingCredential,
    InvalidRequest,
    UnsupportedMode,
    UpstreamRequest,
    Network,
    InvalidResponse,
}
