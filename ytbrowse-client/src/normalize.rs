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

use chrono::{DateTime, SecondsFormat, Utc};
use ytbrowse_api::sync::{ChannelRecord, PlaylistRecord, VideoRecord};

use crate::raw::{Item, ListResponse, ThumbnailSize};

pub const UNTITLED_VIDEO: &str = "Untitled Video";
pub const UNNAMED_CHANNEL: &str = "Unnamed Channel";
pub const UNTITLED_PLAYLIST: &str = "Untitled Playlist";
pub const UNKNOWN_CHANNEL: &str = "Unknown Channel";
pub const NO_VIEWS: &str = "0";
/// search.list never returns statistics for channels and playlists
pub const NOT_AVAILABLE: &str = "N/A";

const VIDEO_THUMBNAILS: &[ThumbnailSize] = &[ThumbnailSize::Maxres, ThumbnailSize::High, ThumbnailSize::Medium, ThumbnailSize::Default];
const LISTING_THUMBNAILS: &[ThumbnailSize] = &[ThumbnailSize::High, ThumbnailSize::Medium, ThumbnailSize::Default];

/// Formats a timestamp the way the API formats `publishedAt`, with millisecond precision
pub fn timestamp(time: DateTime<Utc>) -> String {
    time.to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub fn video(item: &Item, fallback_published_at: &str) -> VideoRecord {
    VideoRecord {
        id: item.search_video_id()
            .or_else(|| item.resource_id(|_| None))
            .unwrap_or_default().into(),
        title: item.snippet_field(|s| s.title.as_ref()).unwrap_or(UNTITLED_VIDEO).into(),
        description: item.snippet_field(|s| s.description.as_ref()).unwrap_or_default().into(),
        thumbnail_url: item.thumbnail(VIDEO_THUMBNAILS).unwrap_or_default().into(),
        channel_title: item.snippet_field(|s| s.channel_title.as_ref()).unwrap_or(UNKNOWN_CHANNEL).into(),
        view_count: item.view_count().unwrap_or(NO_VIEWS).into(),
        published_at: item.snippet_field(|s| s.published_at.as_ref()).unwrap_or(fallback_published_at).into(),
    }
}

pub fn channel(item: &Item) -> ChannelRecord {
    ChannelRecord {
        id: item.resource_id(|r| r.channel_id.as_ref()).unwrap_or_default().into(),
        title: item.snippet_field(|s| s.title.as_ref()).unwrap_or(UNNAMED_CHANNEL).into(),
        description: item.snippet_field(|s| s.description.as_ref()).unwrap_or_default().into(),
        thumbnail_url: item.thumbnail(LISTING_THUMBNAILS).unwrap_or_default().into(),
        subscriber_count: NOT_AVAILABLE.into(),
        video_count: NOT_AVAILABLE.into(),
    }
}

pub fn playlist(item: &Item) -> PlaylistRecord {
    PlaylistRecord {
        id: item.resource_id(|r| r.playlist_id.as_ref()).unwrap_or_default().into(),
        title: item.snippet_field(|s| s.title.as_ref()).unwrap_or(UNTITLED_PLAYLIST).into(),
        description: item.snippet_field(|s| s.description.as_ref()).unwrap_or_default().into(),
        thumbnail_url: item.thumbnail(LISTING_THUMBNAILS).unwrap_or_default().into(),
        channel_title: item.snippet_field(|s| s.channel_title.as_ref()).unwrap_or(UNKNOWN_CHANNEL).into(),
        item_count: NOT_AVAILABLE.into(),
    }
}

/// `now` is only used as the `publishedAt` fallback
pub fn videos(response: &ListResponse, now: DateTime<Utc>) -> Vec<VideoRecord> {
    let fallback = timestamp(now);
    response.items.iter().map(|item| video(item, &fallback)).collect()
}

pub fn channels(response: &ListResponse) -> Vec<ChannelRecord> {
    response.items.iter().map(channel).collect()
}

pub fn playlists(response: &ListResponse) -> Vec<PlaylistRecord> {
    response.items.iter().map(playlist).collect()
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use serde_json::json;

    use super::*;

    fn parse(value: serde_json::Value) -> ListResponse {
        serde_json::from_value(value).unwrap()
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap()
    }

    #[test]
    fn missing_items() {
        assert!(videos(&parse(json!({"kind": "youtube#videoListResponse"})), now()).is_empty());
        assert!(channels(&parse(json!({"items": []}))).is_empty());
        assert!(playlists(&parse(json!({"items": {}}))).is_empty());
    }

    #[test]
    fn fully_defaulted_video() {
        let records = videos(&parse(json!({"items": [{}]})), now());
        assert_eq!(records, vec![VideoRecord {
            id: "".into(),
            title: UNTITLED_VIDEO.into(),
            description: "".into(),
            thumbnail_url: "".into(),
            channel_title: UNKNOWN_CHANNEL.into(),
            view_count: NO_VIEWS.into(),
            published_at: "2024-05-01T12:30:00.000Z".into(),
        }]);
    }

    #[test]
    fn fully_defaulted_channel_and_playlist() {
        let resp = parse(json!({"items": [{"id": {"kind": "youtube#channel"}}]}));
        let channel = &channels(&resp)[0];
        assert_eq!(&*channel.id, "");
        assert_eq!(&*channel.title, UNNAMED_CHANNEL);
        assert_eq!(&*channel.subscriber_count, NOT_AVAILABLE);
        assert_eq!(&*channel.video_count, NOT_AVAILABLE);

        let playlist = &playlists(&resp)[0];
        assert_eq!(&*playlist.title, UNTITLED_PLAYLIST);
        assert_eq!(&*playlist.channel_title, UNKNOWN_CHANNEL);
        assert_eq!(&*playlist.item_count, NOT_AVAILABLE);
    }

    #[test]
    fn empty_strings_count_as_missing() {
        let resp = parse(json!({"items": [{
            "id": "abc",
            "snippet": {"title": "", "channelTitle": "", "publishedAt": ""},
            "statistics": {"viewCount": ""},
        }]}));
        let video = &videos(&resp, now())[0];
        assert_eq!(&*video.id, "abc");
        assert_eq!(&*video.title, UNTITLED_VIDEO);
        assert_eq!(&*video.channel_title, UNKNOWN_CHANNEL);
        assert_eq!(&*video.view_count, NO_VIEWS);
        assert_eq!(&*video.published_at, "2024-05-01T12:30:00.000Z");
    }

    #[test]
    fn full_video() {
        let resp = parse(json!({"items": [{
            "kind": "youtube#video",
            "id": "dQw4w9WgXcQ",
            "snippet": {
                "publishedAt": "2009-10-25T06:57:33Z",
                "title": "Never Gonna Give You Up",
                "description": "The official video",
                "channelTitle": "Rick Astley",
                "thumbnails": {
                    "default": {"url": "https://i.ytimg.com/vi/dQw4w9WgXcQ/default.jpg"},
                    "high": {"url": "https://i.ytimg.com/vi/dQw4w9WgXcQ/hqdefault.jpg"},
                    "maxres": {"url": "https://i.ytimg.com/vi/dQw4w9WgXcQ/maxresdefault.jpg"},
                },
            },
            "statistics": {"viewCount": "1500000000", "likeCount": "17000000"},
        }]}));
        assert_eq!(videos(&resp, now()), vec![VideoRecord {
            id: "dQw4w9WgXcQ".into(),
            title: "Never Gonna Give You Up".into(),
            description: "The official video".into(),
            thumbnail_url: "https://i.ytimg.com/vi/dQw4w9WgXcQ/maxresdefault.jpg".into(),
            channel_title: "Rick Astley".into(),
            view_count: "1500000000".into(),
            published_at: "2009-10-25T06:57:33Z".into(),
        }]);
    }

    #[test]
    fn thumbnail_priority() {
        let resp = parse(json!({"items": [
            {"snippet": {"thumbnails": {"medium": {"url": "m"}, "default": {"url": "d"}}}},
            {"snippet": {"thumbnails": {"maxres": {"url": "x"}, "high": {"url": "h"}}}},
            {"snippet": {"thumbnails": {"maxres": {"url": ""}, "high": {}, "default": {"url": "d"}}}},
        ]}));
        let urls: Vec<String> = videos(&resp, now()).into_iter().map(|v| v.thumbnail_url.to_string()).collect();
        assert_eq!(urls, ["m", "x", "d"]);

        // channels and playlists never use the maxres thumbnail
        let urls: Vec<String> = channels(&resp).into_iter().map(|c| c.thumbnail_url.to_string()).collect();
        assert_eq!(urls, ["m", "h", "d"]);
    }

    #[test]
    fn search_result_shapes() {
        let resp = parse(json!({"items": [
            {
                "id": {"kind": "youtube#channel", "channelId": "UCSJ4gkVC6NrvII8umztf0Ow"},
                "snippet": {"title": "Lofi Girl", "description": "beats to relax to", "channelTitle": "Lofi Girl"},
            },
            {
                "id": {"kind": "youtube#playlist", "playlistId": "PLOzDu-MXXLliO9fBNZOQTBDddoA3FzZUo"},
                "snippet": {"title": "lofi hip hop radio", "channelTitle": "Lofi Girl"},
            },
        ]}));
        let channel = &channels(&resp)[0];
        assert_eq!(&*channel.id, "UCSJ4gkVC6NrvII8umztf0Ow");
        assert_eq!(&*channel.description, "beats to relax to");

        let playlist = &playlists(&resp)[1];
        assert_eq!(&*playlist.id, "PLOzDu-MXXLliO9fBNZOQTBDddoA3FzZUo");
        assert_eq!(&*playlist.channel_title, "Lofi Girl");
        // the channel item has no playlistId
        assert_eq!(&*playlists(&resp)[0].id, "");
    }
}
