/* This file is part of the YTBrowse project
*
*  Copyright (C) 2025 mini_bomba
*
*  Some code was copied and adapted from the built library: https://github.com/lukaslueg/built,
*  which is licensed under the MIT license.
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

use std::{env, fs::File, io::{BufWriter, Write}, path::Path};

use chrono::{DateTime, FixedOffset, TimeZone};
use cloneable_errors::{ErrContext, ErrorContext, ResContext};
use git2::Repository;

fn main() -> Result<(), ErrorContext> {
    let built_file = Path::new(&env::var("OUT_DIR").context("OUT_DIR not set")?).join("built.rs");
    let manifest_location = env::var("CARGO_MANIFEST_DIR").context("CARGO_MANIFEST_DIR not set")?;
    let manifest_location: &Path = manifest_location.as_ref();

    built::write_built_file_with_opts(
        Some(manifest_location),
        &built_file,
    ).context("Failed to compile build-time info")?;

    let commit_time = head_commit_time(manifest_location).context("Failed to read the HEAD commit time")?;
    let commit_time = match commit_time {
        Some(time) => format!("Some(\"{}\")", time.to_rfc3339().escape_default()),
        None => "None".to_owned(),
    };

    let mut file = BufWriter::new(File::options().append(true).open(&built_file).context("Failed to open the build-time info file")?);
    writeln!(file, "\
        #[allow(clippy::needless_raw_string_hashes)]\n\
        #[doc=r#\"The commit time in RFC3339/ISO8601.\"#]\n\
        pub const GIT_COMMIT_TIMESTAMP: Option<&str> = {commit_time};"
    ).context("Failed to write data to file")?;
    file.flush().context("Failed to flush the build-time info file")?;
    Ok(())
}

/// `None` when building outside of a git checkout (e.g. from a source tarball)
fn head_commit_time(manifest_loc: &Path) -> Result<Option<DateTime<FixedOffset>>, ErrorContext> {
    let repo = match Repository::discover(manifest_loc) {
        Err(e) if e.class() == git2::ErrorClass::Repository && e.code() == git2::ErrorCode::NotFound => return Ok(None),
        Err(e) => return Err(e.context("Failed to read git repo")),
        Ok(repo) => repo,
    };
    let head = repo
        .head().context("Failed to read repo head")?
        .peel_to_commit().context("Failed to peel reference to commit")?;
    let time = head.time();
    let tz = FixedOffset::east_opt(time.offset_minutes() * 60).context("Commit timestamp had an invalid timezone offset")?;
    let datetime = tz.timestamp_opt(time.seconds(), 0).single().context("Commit timestamp was out of range")?;
    Ok(Some(datetime))
}
