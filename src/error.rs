// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::path::PathBuf;
use thiserror::Error;

/// Discriminant for everything that can go wrong while reading page markup
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseError {
    /// The programme title could not be found with any strategy
    #[error("bad programme page: title not found")]
    BadProgrammePage,

    /// An episode block has no link marker or more than one of them.
    /// Usually means the page was captured while the site was updating it.
    #[error("bad episode")]
    BadEpisode,

    /// A single field could not be extracted
    #[error("could not parse page")]
    CantParse,
}

/// Errors that can occur when fetching a page
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Failed to fetch {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP error {status} for {url}")]
    HttpStatus { url: String, status: u16 },
}

/// Errors that abort building a feed
#[derive(Error, Debug)]
pub enum FeedError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("could not process {url}: {source}")]
    Parse {
        url: String,
        #[source]
        source: ParseError,
    },
}

impl FeedError {
    /// The markup discriminant behind this error, if it came from parsing
    pub fn kind(&self) -> Option<ParseError> {
        match self {
            FeedError::Parse { source, .. } => Some(*source),
            FeedError::Fetch(_) => None,
        }
    }
}

/// Errors that can occur when writing the generated feed
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Output directory does not exist: {0}")]
    DirectoryNotFound(PathBuf),

    #[error("Failed to write feed file {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
