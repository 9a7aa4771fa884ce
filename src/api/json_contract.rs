use serde::{Deserialize, Serialize};

use crate::error::{RangeError, RangeResult};

use super::RangeSnapshot;

pub const RANGE_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

/// Versioned wrapper written by `to_json_contract_v1_pretty`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: RangeSnapshot,
}

impl RangeSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> RangeResult<String> {
        let payload = RangeSnapshotJsonContractV1 {
            schema_version: RANGE_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            RangeError::InvalidData(format!("failed to serialize range snapshot: {e}"))
        })
    }

    /// Reads a bare snapshot or a v1 contract, then rejects snapshots that no
    /// selector could have produced.
    pub fn from_json_compat_str(input: &str) -> RangeResult<Self> {
        let snapshot = decode_snapshot(input)?;
        snapshot.validate()?;
        Ok(snapshot)
    }
}

fn decode_snapshot(input: &str) -> RangeResult<RangeSnapshot> {
    if let Ok(snapshot) = serde_json::from_str::<RangeSnapshot>(input) {
        return Ok(snapshot);
    }
    let payload: RangeSnapshotJsonContractV1 = serde_json::from_str(input).map_err(|e| {
        RangeError::InvalidData(format!("failed to parse range snapshot json: {e}"))
    })?;
    match payload.schema_version {
        RANGE_SNAPSHOT_JSON_SCHEMA_V1 => Ok(payload.snapshot),
        other => Err(RangeError::InvalidData(format!(
            "unsupported range snapshot schema version: {other}"
        ))),
    }
}
