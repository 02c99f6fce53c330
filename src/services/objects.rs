//! Objects service for object operations.

use crate::encoding::build_query;
use crate::error::StorageError;
use crate::headers::HeaderSet;
use crate::session::StorageSession;
use crate::transport::{HttpRequest, HttpTransport, HttpResponse};
use crate::types::*;
use std::sync::Arc;
use tracing::{debug, trace};

/// Accept value requesting a newline-delimited name listing.
pub const PLAIN_TEXT: &str = "text/plain";

/// Service for object operations.
///
/// Every call fetches the session headers, merges the call's headers and
/// metadata over them, and issues exactly one request. Responses are not
/// interpreted; status handling belongs to the transport.
pub struct ObjectsService {
    session: Arc<dyn StorageSession>,
    transport: Arc<dyn HttpTransport>,
}

impl ObjectsService {
    /// Create a new objects service.
    pub fn new(session: Arc<dyn StorageSession>, transport: Arc<dyn HttpTransport>) -> Self {
        Self { session, transport }
    }

    /// List the objects in a container.
    ///
    /// Unless `opts.full` is set the listing is requested as `text/plain`,
    /// one object name per line.
    pub async fn list(&self, opts: ListOpts) -> Result<ObjectResponse, StorageError> {
        let headers = self.base_headers().await?.with_custom(&opts.headers);

        let url = format!(
            "{}{}",
            self.session.container_url(&opts.container),
            build_query(&opts.params)
        );

        let mut request = HttpRequest::new("GET", url).with_headers(headers.into_map());
        if !opts.full {
            request = request.with_accept(PLAIN_TEXT);
        }

        self.execute(request).await.map(ObjectResponse::from)
    }

    /// Download an object's content and metadata.
    pub async fn download(&self, opts: DownloadOpts) -> Result<ObjectResponse, StorageError> {
        let headers = self.base_headers().await?.with_custom(&opts.headers);

        let url = format!(
            "{}{}",
            self.session.object_url(&opts.container, &opts.name),
            build_query(&opts.params)
        );

        let request = HttpRequest::new("GET", url).with_headers(headers.into_map());

        self.execute(request).await.map(ObjectResponse::from)
    }

    /// Create a new object or replace an existing one.
    ///
    /// The content is read into memory in full before the request is sent.
    pub async fn create(&self, opts: CreateOpts) -> Result<(), StorageError> {
        let headers = self
            .base_headers()
            .await?
            .with_custom(&opts.headers)
            .with_metadata(&opts.metadata);

        let url = format!(
            "{}{}",
            self.session.object_url(&opts.container, &opts.name),
            build_query(&opts.params)
        );

        let body = match opts.content {
            Some(content) => content.drain().await?,
            None => bytes::Bytes::new(),
        };

        let request = HttpRequest::new("PUT", url)
            .with_headers(headers.into_map())
            .with_body(body);

        self.execute(request).await?;
        Ok(())
    }

    /// Copy an object to `/<new_container>/<new_name>`.
    pub async fn copy(&self, opts: CopyOpts) -> Result<(), StorageError> {
        let headers = self
            .base_headers()
            .await?
            .with_custom(&opts.headers)
            .with_metadata(&opts.metadata)
            .with("Destination", opts.destination());

        let url = self.session.object_url(&opts.container, &opts.name);

        let request = HttpRequest::new("COPY", url).with_headers(headers.into_map());

        self.execute(request).await?;
        Ok(())
    }

    /// Delete an object.
    pub async fn delete(&self, opts: DeleteOpts) -> Result<(), StorageError> {
        let headers = self.base_headers().await?.with_custom(&opts.headers);

        let url = format!(
            "{}{}",
            self.session.object_url(&opts.container, &opts.name),
            build_query(&opts.params)
        );

        let request = HttpRequest::new("DELETE", url).with_headers(headers.into_map());

        self.execute(request).await?;
        Ok(())
    }

    /// Fetch an object's metadata without its content.
    pub async fn get(&self, opts: GetOpts) -> Result<ObjectResponse, StorageError> {
        let headers = self.base_headers().await?.with_custom(&opts.headers);

        let url = self.session.object_url(&opts.container, &opts.name);

        let request = HttpRequest::new("HEAD", url).with_headers(headers.into_map());

        self.execute(request).await.map(ObjectResponse::from)
    }

    /// Set, replace or clear an object's custom metadata.
    pub async fn update(&self, opts: UpdateOpts) -> Result<(), StorageError> {
        let headers = self
            .base_headers()
            .await?
            .with_custom(&opts.headers)
            .with_metadata(&opts.metadata);

        let url = self.session.object_url(&opts.container, &opts.name);

        let request = HttpRequest::new("POST", url).with_headers(headers.into_map());

        self.execute(request).await?;
        Ok(())
    }

    async fn base_headers(&self) -> Result<HeaderSet, StorageError> {
        let defaults = self.session.headers().await?;
        Ok(HeaderSet::from_defaults(defaults))
    }

    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, StorageError> {
        debug!(
            method = %request.method,
            url = %request.url,
            headers = request.headers.len(),
            body_len = request.body.as_ref().map_or(0, |b| b.len()),
            "Sending object request"
        );
        trace!(header_names = ?request.headers.keys().collect::<Vec<_>>(), "Request headers");

        let response = self.transport.send(request).await?;

        debug!(status = response.status, "Object request completed");
        Ok(response)
    }
}

impl std::fmt::Debug for ObjectsService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObjectsService").finish_non_exhaustive()
    }
}
