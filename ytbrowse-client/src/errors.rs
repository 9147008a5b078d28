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

use std::fmt::Display;

use cloneable_errors::ErrorContext;
use ytbrowse_api::ErrorKind;

pub const MISSING_CREDENTIAL_MSG: &str = "YouTube API key is required. Please add your API key in Settings.";
pub const MISSING_QUERY_MSG: &str = "Search query is required";
pub const GENERIC_FETCH_MSG: &str = "Failed to fetch YouTube data";
pub const GENERIC_DETAILS_MSG: &str = "Failed to fetch video details";

#[derive(Debug, Clone)]
pub enum FetchError {
    /// No API key was supplied
    MissingCredential,
    /// A query-dependent mode was invoked without a query
    InvalidRequest(&'static str),
    /// The mode string is not one of the recognized tags
    UnsupportedMode(String),
    /// The API answered with a non-success status
    UpstreamRequest {
        status: u16,
        message: String,
    },
    /// No response at all
    Network(ErrorContext),
    /// A success response whose body could not be decoded
    InvalidResponse(ErrorContext),
}

impl FetchError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            FetchError::MissingCredential => ErrorKind::MissingCredential,
            FetchError::InvalidRequest(..) => ErrorKind::InvalidRequest,
            FetchError::UnsupportedMode(..) => ErrorKind::UnsupportedMode,
            FetchError::UpstreamRequest { .. } => ErrorKind::UpstreamRequest,
            FetchError::Network(..) => ErrorKind::Network,
            FetchError::InvalidResponse(..) => ErrorKind::InvalidResponse,
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FetchError::Network(ref err) | FetchError::InvalidResponse(ref err) => Some(err),
            _ => None,
        }
    }
}

impl Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchError::MissingCredential => write!(f, "{MISSING_CREDENTIAL_MSG}"),
            FetchError::InvalidRequest(msg) => write!(f, "{msg}"),
            FetchError::UnsupportedMode(ref mode) => write!(f, "Unsupported search type: {mode}"),
            FetchError::UpstreamRequest { ref message, .. } => write!(f, "{message}"),
            FetchError::Network(ref err) | FetchError::InvalidResponse(ref err) => write!(f, "{err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use cloneable_errors::anyhow;

    use super::*;

    #[test]
    fn messages() {
        assert_eq!(FetchError::MissingCredential.to_string(), MISSING_CREDENTIAL_MSG);
        assert_eq!(FetchError::UnsupportedMode("shorts".into()).to_string(), "Unsupported search type: shorts");
        assert_eq!(
            FetchError::UpstreamRequest { status: 403, message: "quota exceeded".into() }.to_string(),
            "quota exceeded",
        );
        assert_eq!(FetchError::Network(anyhow!("connection refused")).to_string(), "connection refused");
    }

    #[test]
    fn kinds() {
        assert_eq!(FetchError::MissingCredential.kind(), ErrorKind::MissingCredential);
        assert_eq!(FetchError::InvalidRequest(MISSING_QUERY_MSG).kind(), ErrorKind::InvalidRequest);
        assert_eq!(FetchError::InvalidResponse(anyhow!("bad json")).kind(), ErrorKind::InvalidResponse);
    }
}
