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

use std::{fs::{set_permissions, Permissions}, os::unix::prelude::PermissionsExt, path::Path, sync::RwLock};

use actix_files::{Files, NamedFile};
use actix_web::{dev::{fn_service, ServiceRequest, ServiceResponse}, middleware::NormalizePath, web, App, HttpServer};
use cloneable_errors::{ErrorContext, ResContext};
use env_logger::Env;
use log::info;

mod cache;
mod constants;
mod errors;
mod middleware;
mod routes;
mod settings;
mod state;
use settings::SettingsStore;
use state::*;

const CONFIG_PATH: &str = "config.toml";

#[actix_web::main]
async fn main() -> Result<(), ErrorContext> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let config = web::Data::new(AppConfig::load_or_create(Path::new(CONFIG_PATH))?);

    let settings = SettingsStore::open(config.settings_path.as_path()).context("Failed to load the settings store")?;
    info!("Loaded settings from {} (API key {})",
        settings.path().display(),
        if settings.api_key().is_some() { "configured" } else { "not configured" },
    );
    let settings: SettingsLock = web::Data::new(RwLock::new(settings));
    let client: ClientData = web::Data::new(config.build_client()?);
    info!("Using the Data API at {} with region code {}", client.base_url(), client.region_code());
    let cache: CacheData = web::Data::new(config.build_cache());
    info!("Caching successful responses for {}s", cache.ttl().as_secs());

    let mut server = {
        let config = config.clone();
        HttpServer::new(move || {
            let config2 = config.clone();
            App::new()
                .wrap(middleware::Timings)
                .wrap(NormalizePath::trim())
                .app_data(config.clone())
                .app_data(settings.clone())
                .app_data(client.clone())
                .app_data(cache.clone())
                .service(web::scope("/api")
                    .configure(routes::configure)
                )
                .service(
                    Files::new("/", config.static_content_path.as_path())
                        .index_file("index.html")
                        .default_handler(fn_service(move |req: ServiceRequest| {
                            let config = config2.clone();
                            async move {
                                let (req, _) = req.into_parts();
                                let index_file = config.static_content_path.join("index.html");
                                let file = NamedFile::open_async(index_file.as_path()).await?;
                                let resp = file.into_response(&req);
                                Ok(ServiceResponse::new(req, resp))
                            }
                        }))
                )
        })
    };
    if let Some((ref ip, port)) = config.listen.tcp {
        let ip_str = ip.as_str();
        server = server.bind((ip_str, port)).with_context(|| format!("Failed to bind to tcp port {ip_str}:{port}"))?;
        info!("Listening on {ip_str}:{port}");
    }
    if let Some(ref path) = config.listen.unix {
        let path_str = path.as_str();
        server = server.bind_uds(path_str).with_context(|| format!("Failed to bind to unix socket {path_str}"))?;
        if let Some(mode) = config.listen.unix_mode {
            let perms = Permissions::from_mode(mode);
            set_permissions(path_str, perms).with_context(|| format!("Failed to change mode of unix socket {path_str} to {mode}"))?;
        }
        info!("Listening on {path_str}");
    }
    server.run()
    .await
    .context("Error while running the server")
}

mod built_info {
    // Contents generated by buildscript, using built
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}
