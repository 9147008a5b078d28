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

use std::fmt::{Debug, Display};

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use cloneable_errors::{ErrorContext, IntoErrorIterator};
use ytbrowse_api::{sync::ApiError, ErrorKind};
use ytbrowse_client::FetchError;

pub enum Error {
    /// Failures of the YouTube adapter, rendered as [`ApiError`]
    Fetch(FetchError),
    /// Rejected user input, rendered as [`ApiError`]
    BadRequest(String),
    /// Anything else, rendered as a serialized error stack
    #[allow(clippy::enum_variant_names)]
    ErrorContext(ErrorContext, StatusCode),
}

impl Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Fetch(ref err) => Debug::fmt(err, f),
            Error::BadRequest(ref msg) => f.debug_tuple("Error::BadRequest").field(msg).finish(),
            Error::ErrorContext(ref err, _) => Debug::fmt(err, f),
        }
    }
}
impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Fetch(ref err) => Display::fmt(err, f),
            Error::BadRequest(ref msg) => write!(f, "{msg}"),
            Error::ErrorContext(ref err, _) => Display::fmt(err, f),
        }
    }
}
impl From<ErrorContext> for Error {
    fn from(value: ErrorContext) -> Self {
        Error::ErrorContext(value, StatusCode::INTERNAL_SERVER_ERROR)
    }
}
impl From<FetchError> for Error {
    fn from(value: FetchError) -> Self {
        Error::Fetch(value)
    }
}
impl std::error::Error for Error {}
impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Error::Fetch(err) => match err.kind() {
                ErrorKind::MissingCredential => StatusCode::UNAUTHORIZED,
                ErrorKind::InvalidRequest | ErrorKind::UnsupportedMode => StatusCode::BAD_REQUEST,
                ErrorKind::UpstreamRequest | ErrorKind::InvalidResponse => StatusCode::BAD_GATEWAY,
                ErrorKind::Network => StatusCode::GATEWAY_TIMEOUT,
            },
            Error::BadRequest(..) => StatusCode::BAD_REQUEST,
            Error::ErrorContext(_, status) => *status,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        match self {
            Error::Fetch(err) => builder.json(ApiError {
                kind: err.kind(),
                message: err.to_string().into(),
            }),
            Error::BadRequest(msg) => builder.json(ApiError {
                kind: ErrorKind::InvalidRequest,
                message: msg.as_str().into(),
            }),
            Error::ErrorContext(err, _) => builder.json(err.serializable_copy()),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
