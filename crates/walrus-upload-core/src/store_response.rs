//! Wire format of the publisher's `PUT /v1/store` response.
//!
//! A successful store carries exactly one of two shapes: the blob was
//! certified by an earlier transaction, or it was created by this request.
//! The response is modeled as an externally tagged enum so a body with
//! neither field fails to decode instead of producing a half-empty struct.

use serde::{Deserialize, Serialize};

/// Storage receipt returned by the publisher.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StoreResponse {
    /// The blob already exists and was certified in a previous transaction.
    AlreadyCertified(AlreadyCertified),
    /// The blob was stored for the first time by this request.
    NewlyCreated(NewlyCreated),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlreadyCertified {
    pub blob_id: String,
    pub end_epoch: u64,
    pub event: EventRef,
}

/// Reference to the Sui event that certified the blob.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRef {
    pub tx_digest: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewlyCreated {
    pub blob_object: BlobObject,
}

/// The on-chain object tracking the stored blob.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlobObject {
    pub blob_id: String,
    pub id: String,
    pub storage: StorageInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageInfo {
    pub end_epoch: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_already_certified() {
        let body = r#"{
            "alreadyCertified": {
                "blobId": "abc123",
                "endEpoch": 42,
                "event": { "txDigest": "0xdeadbeef" }
            }
        }"#;
        let response: StoreResponse = serde_json::from_str(body).unwrap();
        match response {
            StoreResponse::AlreadyCertified(info) => {
                assert_eq!(info.blob_id, "abc123");
                assert_eq!(info.end_epoch, 42);
                assert_eq!(info.event.tx_digest, "0xdeadbeef");
            }
            other => panic!("expected AlreadyCertified, got {:?}", other),
        }
    }

    #[test]
    fn decode_newly_created() {
        let body = r#"{
            "newlyCreated": {
                "blobObject": {
                    "blobId": "B1",
                    "id": "O1",
                    "storage": { "endEpoch": 10 }
                }
            }
        }"#;
        let response: StoreResponse = serde_json::from_str(body).unwrap();
        match response {
            StoreResponse::NewlyCreated(info) => {
                assert_eq!(info.blob_object.blob_id, "B1");
                assert_eq!(info.blob_object.id, "O1");
                assert_eq!(info.blob_object.storage.end_epoch, 10);
            }
            other => panic!("expected NewlyCreated, got {:?}", other),
        }
    }

    #[test]
    fn decode_ignores_extra_fields() {
        let body = r#"{
            "newlyCreated": {
                "blobObject": {
                    "blobId": "B1",
                    "id": "O1",
                    "registeredEpoch": 3,
                    "storage": { "endEpoch": 10, "startEpoch": 3 }
                },
                "cost": 12345
            }
        }"#;
        let response: StoreResponse = serde_json::from_str(body).unwrap();
        assert!(matches!(response, StoreResponse::NewlyCreated(_)));
    }

    #[test]
    fn decode_rejects_neither_variant() {
        assert!(serde_json::from_str::<StoreResponse>("{}").is_err());
        assert!(serde_json::from_str::<StoreResponse>(r#"{"somethingElse":{}}"#).is_err());
    }
}
