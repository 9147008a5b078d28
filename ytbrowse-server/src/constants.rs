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

use std::sync::LazyLock;
use cloneable_errors::{ErrorContext, anyhow};

pub static SETTINGS_READ_ERR:  LazyLock<ErrorContext> = LazyLock::new(|| anyhow!("Failed to acquire SettingsStore for reading"));
pub static SETTINGS_WRITE_ERR: LazyLock<ErrorContext> = LazyLock::new(|| anyhow!("Failed to acquire SettingsStore for writing"));
pub static CACHE_LOCK_ERR:     LazyLock<ErrorContext> = LazyLock::new(|| anyhow!("Failed to acquire the response cache lock"));

/// The Data API rejects larger pages
pub const MAX_RESULTS_LIMIT: u32 = 50;
