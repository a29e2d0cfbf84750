//! Wire types for the HashDB JSON API.
//!
//! Every response field carries `#[serde(default)]` so that a missing or
//! unexpected key decodes to an empty value instead of failing. The server
//! is authoritative for shapes; the client stays tolerant.

use serde::{Deserialize, Serialize};

/// `GET /hash`
#[derive(Debug, Default, Deserialize)]
pub struct AlgorithmsResponse {
    #[serde(default)]
    pub algorithms: Vec<AlgorithmInfo>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct AlgorithmInfo {
    #[serde(default)]
    pub algorithm: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, rename = "type")]
    pub kind: String,
}

/// `GET /hash/{algorithm}/{hash}` and the `hashes` list of `POST /string`.
#[derive(Debug, Default, Deserialize)]
pub struct HashesResponse {
    #[serde(default)]
    pub hashes: Vec<HashStringResult>,
}

#[derive(Debug, Default, Deserialize)]
pub struct HashStringResult {
    #[serde(default)]
    pub hash: u128,
    #[serde(default)]
    pub string: StringRecord,
}

#[derive(Debug, Default, Deserialize)]
pub struct StringRecord {
    #[serde(default)]
    pub string: String,
    #[serde(default)]
    pub is_api: bool,
    #[serde(default)]
    pub permutation: String,
    #[serde(default)]
    pub api: String,
    #[serde(default)]
    pub modules: Vec<String>,
}

/// `POST /hunt`
#[derive(Debug, Serialize)]
pub struct HuntRequest {
    pub hashes: Vec<u128>,
}

#[derive(Debug, Default, Deserialize)]
pub struct HuntResponse {
    #[serde(default)]
    pub hits: Vec<HuntHit>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct HuntHit {
    #[serde(default)]
    pub algorithm: String,
    #[serde(default)]
    pub count: u64,
}

/// `POST /string`
#[derive(Debug, Serialize)]
pub struct AddStringRequest<'a> {
    pub string: &'a str,
}

/// `GET /string/{text}`
#[derive(Debug, Default, Deserialize)]
pub struct StringInfoResponse {
    #[serde(default)]
    pub string: StringRecord,
    #[serde(default)]
    pub hashes: Vec<HashStringResult>,
}
