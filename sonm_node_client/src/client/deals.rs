use thiserror::Error;
use tonic::codec::CompressionEncoding;
use tracing::debug;

use self::generated_types::{deal_management_client::DealManagementClient, *};

use crate::connection::Connection;

/// Re-export generated_types
pub mod generated_types {
    pub use generated_types::*;
}

/// Errors returned by Client::list
#[derive(Debug, Error)]
pub enum ListError {
    /// Client received an unexpected error from the server
    #[error("Unexpected server error: {}: {}", .0.code(), .0.message())]
    ServerError(tonic::Status),
}

/// Errors returned by Client::status
#[derive(Debug, Error)]
pub enum StatusError {
    /// Deal not found
    #[error("Deal not found")]
    DealNotFound,

    /// Client received an unexpected error from the server
    #[error("Unexpected server error: {}: {}", .0.code(), .0.message())]
    ServerError(tonic::Status),
}

/// Errors returned by Client::finish
#[derive(Debug, Error)]
pub enum FinishError {
    /// Deal not found
    #[error("Deal not found")]
    DealNotFound,

    /// Client received an unexpected error from the server
    #[error("Unexpected server error: {}: {}", .0.code(), .0.message())]
    ServerError(tonic::Status),
}

/// A node Deal Management API client.
///
/// This client wraps the underlying `tonic` generated client with a
/// more ergonomic interface.
///
/// ```no_run
/// #[tokio::main]
/// # async fn main() {
/// use sonm_node_client::{
///     deals::{Client, generated_types::DealStatus},
///     connection::Builder,
/// };
///
/// let connection = Builder::default()
///     .build_unix("/tmp/sonm_node.sock")
///     .await
///     .unwrap();
///
/// let mut client = Client::new(connection);
///
/// // List every deal the node's account takes part in.
/// let deals = client
///     .list("0x8125721c2413d99a33e351e1f6bb4e56b1b633ab", DealStatus::AnyStatus)
///     .await
///     .expect("failed to list deals");
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Client {
    inner: DealManagementClient<Connection>,
}

impl Client {
    /// Creates a new client with the provided connection.
    ///
    /// Requests and responses are gzip-compressed.
    pub fn new(connection: Connection) -> Self {
        Self {
            inner: DealManagementClient::new(connection)
                .send_compressed(CompressionEncoding::Gzip)
                .accept_compressed(CompressionEncoding::Gzip),
        }
    }

    /// List the deals the given address takes part in, optionally narrowed
    /// to a single status ([`DealStatus::AnyStatus`] matches all of them).
    pub async fn list(
        &mut self,
        owner: impl Into<String> + Send,
        status: DealStatus,
    ) -> Result<Vec<Deal>, ListError> {
        let owner = owner.into();
        debug!(%owner, ?status, "listing deals");

        let response = self
            .inner
            .list(DealListRequest {
                owner,
                status: status as i32,
            })
            .await
            .map_err(ListError::ServerError)?;

        Ok(response.into_inner().deal)
    }

    /// Fetch the current state of a single deal.
    pub async fn status(&mut self, id: impl Into<String> + Send) -> Result<Deal, StatusError> {
        let id = id.into();
        debug!(%id, "fetching deal status");

        let response = self
            .inner
            .status(Id { id })
            .await
            .map_err(|status| match status.code() {
                tonic::Code::NotFound => StatusError::DealNotFound,
                _ => StatusError::ServerError(status),
            })?;

        Ok(response.into_inner())
    }

    /// Close the deal with the given identifier.
    pub async fn finish(&mut self, id: impl Into<String> + Send) -> Result<(), FinishError> {
        let id = id.into();
        debug!(%id, "finishing deal");

        self.inner
            .finish(Id { id })
            .await
            .map_err(|status| match status.code() {
                tonic::Code::NotFound => FinishError::DealNotFound,
                _ => FinishError::ServerError(status),
            })?;

        Ok(())
    }
}
