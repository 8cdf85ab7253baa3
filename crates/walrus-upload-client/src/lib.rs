//! HTTP client for the Walrus publisher.
//!
//! `PublisherClient` issues the raw-bytes `PUT /v1/store` request and decodes
//! the storage receipt. The upload form controller built on top of it lives
//! in [`uploader`].

pub mod uploader;

use walrus_upload_core::{StoreResponse, UploadError};

pub use uploader::{BlobUploader, SelectedFile, SubmitOutcome, UploadForm};

/// HTTP client for a single Walrus publisher endpoint.
///
/// No request timeout is set: a store request runs to completion or failure,
/// and cancellation is not supported.
#[derive(Clone, Debug)]
pub struct PublisherClient {
    client: reqwest::Client,
    publisher_url: String,
}

impl PublisherClient {
    pub fn new(publisher_url: &str) -> Result<Self, UploadError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|err| UploadError::ClientBuild(err.to_string()))?;

        Ok(Self {
            client,
            publisher_url: publisher_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn publisher_url(&self) -> &str {
        &self.publisher_url
    }

    /// PUT raw blob bytes to `/v1/store`, requesting storage for `epochs`
    /// epochs, and decode the storage receipt.
    ///
    /// The body is sent as-is with no content-type override. A non-success
    /// status maps to `UploadError::Http` with the response body as detail;
    /// a success body that matches neither receipt variant maps to
    /// `UploadError::UnexpectedResponse`.
    pub async fn store(&self, bytes: Vec<u8>, epochs: u64) -> Result<StoreResponse, UploadError> {
        let url = format!("{}/v1/store", self.publisher_url);
        let response = self
            .client
            .put(&url)
            .query(&[("epochs", epochs.to_string())])
            .body(bytes)
            .send()
            .await
            .map_err(|err| UploadError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(UploadError::Http {
                status: status.as_u16(),
                detail,
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|err| UploadError::Transport(err.to_string()))?;

        serde_json::from_slice(&body).map_err(|err| UploadError::UnexpectedResponse(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    use axum::body::Bytes;
    use axum::extract::{Query, State};
    use axum::routing::put;
    use axum::Router;
    use tokio::net::TcpListener;
    use walrus_upload_core::StoreResponse;

    #[derive(Clone, Default)]
    struct Recorded {
        bodies: Arc<Mutex<Vec<Vec<u8>>>>,
        epochs: Arc<Mutex<Vec<String>>>,
    }

    async fn spawn_publisher(recorded: Recorded) -> String {
        async fn store(
            State(recorded): State<Recorded>,
            Query(params): Query<HashMap<String, String>>,
            body: Bytes,
        ) -> &'static str {
            recorded.bodies.lock().unwrap().push(body.to_vec());
            recorded
                .epochs
                .lock()
                .unwrap()
                .push(params.get("epochs").cloned().unwrap_or_default());
            r#"{"newlyCreated":{"blobObject":{"blobId":"B1","id":"O1","storage":{"endEpoch":10}}}}"#
        }

        let app = Router::new()
            .route("/v1/store", put(store))
            .with_state(recorded);
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn store_sends_raw_bytes_and_epochs_query() {
        let recorded = Recorded::default();
        let base = spawn_publisher(recorded.clone()).await;

        // Trailing slash on the endpoint must not produce a double slash.
        let client = PublisherClient::new(&format!("{}/", base)).unwrap();
        let response = client.store(b"blob bytes".to_vec(), 3).await.unwrap();

        assert!(matches!(response, StoreResponse::NewlyCreated(_)));
        assert_eq!(recorded.bodies.lock().unwrap().as_slice(), &[b"blob bytes".to_vec()]);
        assert_eq!(recorded.epochs.lock().unwrap().as_slice(), &["3".to_string()]);
    }
}
