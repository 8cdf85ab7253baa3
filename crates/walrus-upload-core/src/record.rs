//! Normalized upload records.
//!
//! A store response is normalized into an `UploadedBlob` display record the
//! moment it arrives. The retrieval and explorer links are derived here and
//! frozen into the record; they are never recomputed, even if the endpoint
//! configuration changes afterwards.

use std::fmt;

use serde::Serialize;

use crate::config::ExplorerLinks;
use crate::store_response::StoreResponse;

/// Whether the publisher stored the blob now or found it already certified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BlobStatus {
    AlreadyCertified,
    NewlyCreated,
}

impl BlobStatus {
    pub fn label(&self) -> &'static str {
        match self {
            BlobStatus::AlreadyCertified => "Already certified",
            BlobStatus::NewlyCreated => "Newly created",
        }
    }
}

impl fmt::Display for BlobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// What the Sui reference on a record points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SuiRefKind {
    /// Transaction digest of the event that certified the blob earlier.
    CertifiedEvent,
    /// Identifier of the Sui object created for a new blob.
    AssociatedObject,
}

impl SuiRefKind {
    pub fn label(&self) -> &'static str {
        match self {
            SuiRefKind::CertifiedEvent => "Previous Sui Certified Event",
            SuiRefKind::AssociatedObject => "Associated Sui Object",
        }
    }
}

impl fmt::Display for SuiRefKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One entry in the upload history.
#[derive(Debug, Clone, Serialize)]
pub struct UploadedBlob {
    pub status: BlobStatus,
    pub blob_id: String,
    /// The blob is guaranteed stored through this epoch.
    pub end_epoch: u64,
    pub sui_ref_kind: SuiRefKind,
    pub sui_ref: String,
    /// Retrieval link on the aggregator, frozen at normalization time.
    pub blob_url: String,
    /// Explorer link for the Sui reference, frozen at normalization time.
    pub sui_url: String,
    /// Media type of the uploaded file, as reported by the caller.
    pub media_type: String,
}

impl UploadedBlob {
    /// Normalize a store response into a display record.
    ///
    /// An `alreadyCertified` response references the certifying transaction
    /// and links against the tx explorer base; a `newlyCreated` response
    /// references the blob's own Sui object and links against the object
    /// explorer base.
    pub fn from_response(
        response: StoreResponse,
        aggregator_url: &str,
        links: &ExplorerLinks,
        media_type: &str,
    ) -> Self {
        let (status, blob_id, end_epoch, sui_ref_kind, sui_ref, sui_base) = match response {
            StoreResponse::AlreadyCertified(info) => (
                BlobStatus::AlreadyCertified,
                info.blob_id,
                info.end_epoch,
                SuiRefKind::CertifiedEvent,
                info.event.tx_digest,
                &links.view_tx_url,
            ),
            StoreResponse::NewlyCreated(info) => (
                BlobStatus::NewlyCreated,
                info.blob_object.blob_id,
                info.blob_object.storage.end_epoch,
                SuiRefKind::AssociatedObject,
                info.blob_object.id,
                &links.view_object_url,
            ),
        };

        let blob_url = format!("{}/v1/{}", aggregator_url.trim_end_matches('/'), blob_id);
        let sui_url = format!("{}/{}", sui_base, sui_ref);

        Self {
            status,
            blob_id,
            end_epoch,
            sui_ref_kind,
            sui_ref,
            blob_url,
            sui_url,
            media_type: media_type.to_string(),
        }
    }
}
