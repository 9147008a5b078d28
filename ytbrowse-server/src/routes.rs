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

use actix_web::{delete, get, post, web, Responder};
use chrono::DateTime;
use cloneable_errors::ResContext;
use log::{debug, info};
use serde::Deserialize;
use ytbrowse_api::sync::{ApiKeyUpdate, DarkModeUpdate, Records, SettingsResponse, StatusResponse};
use ytbrowse_client::FetchOptions;

use crate::{built_info, cache::CacheKey, constants::*, errors::{self, Error}, settings::{validate_api_key, SettingsStore, INVALID_API_KEY_MSG}, state::*};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(helo)
       .service(get_status)
       .service(get_youtube)
       .service(get_settings)
       .service(set_api_key)
       .service(set_dark_mode)
       .service(clear_settings);
}

type JsonResult<T> = errors::Result<web::Json<T>>;

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct YouTubeParams {
    pub mode: Option<String>,
    pub q: Option<String>,
    pub max_results: Option<u32>,
}

fn settings_response(settings: &SettingsStore) -> SettingsResponse {
    SettingsResponse {
        has_api_key: settings.api_key().is_some(),
        dark_mode: settings.dark_mode(),
    }
}

#[get("/")]
async fn helo() -> impl Responder {
    "hi"
}

#[get("/status")]
async fn get_status(settings: SettingsLock, cache: CacheData, config: web::Data<AppConfig>) -> JsonResult<StatusResponse> {
    let api_key_configured = settings.read().map_err(|_| SETTINGS_READ_ERR.clone())?.api_key().is_some();
    Ok(web::Json(StatusResponse {
        api_key_configured,
        region_code: Some(config.youtube.region_code.as_str().into()),
        cached_responses: u64::try_from(cache.len()?).ok(),
        server_version: Some(built_info::PKG_VERSION.into()),
        server_git_hash: built_info::GIT_COMMIT_HASH.map(std::convert::Into::into),
        server_git_dirty: built_info::GIT_DIRTY,
        server_build_timestamp: DateTime::parse_from_rfc2822(built_info::BUILT_TIME_UTC).ok().map(|t| t.timestamp()),
        server_commit_timestamp: built_info::GIT_COMMIT_TIMESTAMP.and_then(|t| DateTime::parse_from_rfc3339(t).ok()).map(|t| t.timestamp()),
        server_startup_timestamp: Some(config.startup_timestamp.timestamp()),
    }))
}

#[get("/youtube")]
async fn get_youtube(params: web::Query<YouTubeParams>, settings: SettingsLock, client: ClientData, cache: CacheData, config: web::Data<AppConfig>) -> JsonResult<Records> {
    let max_results = params.max_results.unwrap_or(config.youtube.default_max_results);
    if max_results > MAX_RESULTS_LIMIT {
        return Err(Error::BadRequest(format!("Too many requested results. You requested {max_results} results, but the max is {MAX_RESULTS_LIMIT}.")));
    }
    let api_key = settings.read().map_err(|_| SETTINGS_READ_ERR.clone())?.api_key().map(str::to_owned);

    let mut options = FetchOptions::new(api_key)
        .query(params.q.as_deref().unwrap_or_default())
        .max_results(max_results);
    if let Some(ref mode) = params.mode {
        options = options.mode(mode);
    }

    let key = CacheKey::from(&options);
    if let Some(records) = cache.get(&key)? {
        debug!("Serving {} {} records from the response cache", records.len(), options.mode);
        return Ok(web::Json(records));
    }
    let records = client.fetch_data(&options).await?;
    cache.insert(key, records.clone())?;
    Ok(web::Json(records))
}

#[get("/settings")]
async fn get_settings(settings: SettingsLock) -> JsonResult<SettingsResponse> {
    let settings = settings.read().map_err(|_| SETTINGS_READ_ERR.clone())?;
    Ok(web::Json(settings_response(&settings)))
}

#[post("/settings/api_key")]
async fn set_api_key(settings: SettingsLock, body: web::Json<ApiKeyUpdate>) -> JsonResult<SettingsResponse> {
    let Some(api_key) = validate_api_key(&body.api_key) else {
        return Err(Error::BadRequest(INVALID_API_KEY_MSG.to_owned()));
    };
    let mut settings = settings.write().map_err(|_| SETTINGS_WRITE_ERR.clone())?;
    settings.set_api_key(api_key).context("Failed to save the API key")?;
    info!("YouTube API key updated");
    Ok(web::Json(settings_response(&settings)))
}

#[post("/settings/dark_mode")]
async fn set_dark_mode(settings: SettingsLock, body: web::Json<DarkModeUpdate>) -> JsonResult<SettingsResponse> {
    let mut settings = settings.write().map_err(|_| SETTINGS_WRITE_ERR.clone())?;
    settings.set_dark_mode(body.enabled).context("Failed to save the dark mode setting")?;
    Ok(web::Json(settings_response(&settings)))
}

#[delete("/settings")]
async fn clear_settings(settings: SettingsLock) -> JsonResult<SettingsResponse> {
    let mut settings = settings.write().map_err(|_| SETTINGS_WRITE_ERR.clone())?;
    settings.clear().context("Failed to clear settings")?;
    Ok(web::Json(settings_response(&settings)))
}
