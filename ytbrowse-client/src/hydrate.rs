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

use crate::raw::{Item, ListResponse};

/// Joins the video ids of a search response into the `id` parameter of a videos.list lookup.
///
/// Items without a nested video id (channels or playlists mixed into the results) are dropped.
/// Returns [`None`] when there is nothing to look up.
pub fn collect_video_ids(search: &ListResponse) -> Option<String> {
    let ids: Vec<&str> = search.items.iter().filter_map(Item::search_video_id).collect();
    if ids.is_empty() {
        None
    } else {
        Some(ids.join(","))
    }
}
