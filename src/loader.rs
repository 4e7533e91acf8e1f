// src/loader.rs

use serde::de::DeserializeOwned;
use std::{fs, path::Path};
use tracing::debug;

use crate::{
    error::LoadError,
    model::{ReportsRoot, SummaryRoot},
};

/// Read `path` as UTF-8 and deserialize its JSON content.
///
/// The whole file is buffered before parsing; inputs are small review
/// documents, not data dumps.
#[tracing::instrument(level = "debug", skip(path), fields(path = %path.as_ref().display()))]
pub fn load_json<T, P>(path: P) -> Result<T, LoadError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let raw = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(bytes = raw.len(), "read input");

    serde_json::from_str(&raw).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub fn load_reports<P: AsRef<Path>>(path: P) -> Result<ReportsRoot, LoadError> {
    load_json(path)
}

pub fn load_summary<P: AsRef<Path>>(path: P) -> Result<SummaryRoot, LoadError> {
    load_json(path)
}
