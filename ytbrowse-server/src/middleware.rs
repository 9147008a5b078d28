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

use std::{future::{ready, Ready}, time::{Duration, Instant}};

use actix_web::{dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform}, error::{Error, HttpError}, http::header::{HeaderName, TryIntoHeaderValue}, web};
use futures::{future::LocalBoxFuture, FutureExt};
use log::error;

use crate::state::AppConfig;

pub const TIME_SPENT_HEADER: HeaderName = HeaderName::from_static("x-time-spent");

/// Appends an `X-Time-Spent` header when `enable_timings_header` is set.
pub struct Timings;

impl<S, B> Transform<S, ServiceRequest> for Timings
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = TimingsInstance<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(TimingsInstance { service }))
    }
}

pub struct TimingsInstance<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for TimingsInstance<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let enabled = req.app_data::<web::Data<AppConfig>>().is_some_and(|cfg| cfg.enable_timings_header);
        if !enabled {
            return self.service.call(req).boxed_local();
        }
        let start = Instant::now();
        let srv = self.service.call(req);

        async move {
            let mut resp = srv.await?;
            match render_duration(start.elapsed()).try_into_value() {
                Ok(value) => { resp.headers_mut().append(TIME_SPENT_HEADER, value); },
                Err(e) => error!("Failed to append the X-Time-Spent header: {}", HttpError::from(e)),
            }
            Ok(resp)
        }.boxed_local()
    }
}

fn render_duration(duration: Duration) -> String {
    format!("{:.3} ms", duration.as_secs_f64() * 1000.)
}
