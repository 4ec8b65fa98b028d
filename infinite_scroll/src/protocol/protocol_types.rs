// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

use crate::{FetchError, Record};

/// Tags every request and response with the search session that produced it. The
/// controller bumps it on each new search and drops responses whose generation does not
/// match its own, since there is no way to cancel a request that is already in flight.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Generation(pub u64);

impl Generation {
    #[must_use]
    pub fn next(self) -> Self { Self(self.0.wrapping_add(1)) }
}

impl Display for Generation {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult { write!(f, "gen#{}", self.0) }
}

/// Controller → fetcher: "give me `page` of `page_size` records matching
/// `search_term`".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadRequest {
    /// 1-based.
    pub page: u64,
    pub page_size: u64,
    /// Empty means no filter.
    #[serde(default)]
    pub search_term: String,
    #[serde(default)]
    pub generation: Generation,
}

impl LoadRequest {
    /// # Errors
    ///
    /// Returns [`FetchError::InvalidRequest`] if `page` or `page_size` is zero.
    pub fn validate(&self) -> Result<(), FetchError> {
        if self.page == 0 {
            return Err(FetchError::InvalidRequest {
                reason: "page numbers start at 1".into(),
            });
        }
        if self.page_size == 0 {
            return Err(FetchError::InvalidRequest {
                reason: "page size must be greater than zero".into(),
            });
        }
        Ok(())
    }
}

/// Everything the controller sends to the fetcher task.
///
/// Wire format: `{"type":"load","page":1,"pageSize":50,"searchTerm":"","generation":0}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ControllerMessage {
    Load(LoadRequest),
}

impl From<LoadRequest> for ControllerMessage {
    fn from(request: LoadRequest) -> Self { Self::Load(request) }
}

/// Everything the fetcher task sends back. Exactly one of these is produced for each
/// [`ControllerMessage::Load`].
///
/// Wire format:
/// - `{"type":"data","data":[...],"generation":0}`
/// - `{"type":"error","error":"...","generation":0}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, strum_macros::AsRefStr)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum FetcherResponse {
    /// Possibly empty, in the order the records were fetched.
    Data {
        data: Vec<Record>,
        #[serde(default)]
        generation: Generation,
    },
    Error {
        error: String,
        #[serde(default)]
        generation: Generation,
    },
}

impl FetcherResponse {
    #[must_use]
    pub fn generation(&self) -> Generation {
        match self {
            FetcherResponse::Data { generation, .. }
            | FetcherResponse::Error { generation, .. } => *generation,
        }
    }
}
