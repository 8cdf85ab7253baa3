//! Walrus Upload Core Library
//!
//! This crate provides the domain models shared by the client and CLI:
//! the publisher's store-response wire format, the normalized upload record
//! with its derived links, endpoint configuration, and error types.

pub mod config;
pub mod error;
pub mod record;
pub mod store_response;

// Re-export commonly used types
pub use config::{EndpointConfig, ExplorerLinks};
pub use error::UploadError;
pub use record::{BlobStatus, SuiRefKind, UploadedBlob};
pub use store_response::{
    AlreadyCertified, BlobObject, EventRef, NewlyCreated, StorageInfo, StoreResponse,
};
