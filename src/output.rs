// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::path::{Path, PathBuf};

use rss::Channel;
use tracing::info;

use crate::error::OutputError;

/// File name of the feed for a programme number
pub fn feed_filename(brand: &str) -> String {
    sanitize_filename::sanitize(format!("radiorus-{brand}.rss"))
}

/// Write the serialized channel into `output_dir`, returning the file path
pub fn write_feed(channel: &Channel, output_dir: &Path, brand: &str) -> Result<PathBuf, OutputError> {
    if !output_dir.is_dir() {
        return Err(OutputError::DirectoryNotFound(output_dir.to_path_buf()));
    }

    let path = output_dir.join(feed_filename(brand));
    std::fs::write(&path, channel.to_string()).map_err(|e| OutputError::WriteFailed {
        path: path.clone(),
        source: e,
    })?;

    info!(path = %path.display(), items = channel.items().len(), "Wrote feed");
    Ok(path)
}
