//! Connection management for the node gRPC clients.

use std::path::Path;
use std::time::Duration;

use http::header::{HeaderName, InvalidHeaderValue, USER_AGENT as USER_AGENT_HEADER};
use http::HeaderValue;
use thiserror::Error;
use tokio::net::UnixStream;
use tonic::transport::{Channel, Endpoint, Uri};
use tower::service_fn;
use tracing::debug;

pub use crate::tower::SetRequestHeadersService;

/// The default User-Agent header sent by the gRPC client.
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// The default connect timeout.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(1);

/// The default request timeout.
///
/// The node API is unary-only, so every call carries this deadline
/// rather than blocking indefinitely on an unresponsive node.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Placeholder endpoint URI for Unix-socket connections. The HTTP/2 layer
/// requires one, but the connector dials the socket path instead.
const UNIX_SOCKET_ENDPOINT: &str = "http://sonm.node";

/// The connection type used for clients: a tonic channel wrapped in a
/// service that sets the default headers on every request.
pub type Connection = SetRequestHeadersService<Channel>;

/// Errors returned by the [`Builder`]
#[derive(Debug, Error)]
pub enum Error {
    /// A header value provided to the builder contains invalid characters
    #[error("invalid header value: {0}")]
    InvalidHeaderValue(#[from] InvalidHeaderValue),

    /// The endpoint could not be parsed or the transport failed to connect
    #[error("transport error: {0}")]
    Transport(#[from] tonic::transport::Error),
}

/// Configure and construct a [`Connection`] for talking to a node.
///
/// ```no_run
/// # #[tokio::main]
/// # async fn main() {
/// use client_util::connection::Builder;
/// use std::time::Duration;
///
/// let connection = Builder::default()
///     .timeout(Duration::from_secs(42))
///     .build_unix("/tmp/sonm_node.sock")
///     .await
///     .expect("connection must be valid");
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Builder {
    user_agent: String,
    headers: Vec<(HeaderName, HeaderValue)>,
    connect_timeout: Duration,
    timeout: Duration,
}

impl std::default::Default for Builder {
    fn default() -> Self {
        Self {
            user_agent: USER_AGENT.into(),
            headers: vec![],
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl Builder {
    /// Construct the [`Connection`] instance using the specified base URL.
    pub async fn build(self, dst: impl Into<String> + Send) -> Result<Connection, Error> {
        let endpoint = self.endpoint(dst.into())?;
        let channel = endpoint.connect().await?;
        self.compose(channel)
    }

    /// Construct a [`Connection`] to a node listening on a Unix domain
    /// socket at the given filesystem path.
    ///
    /// Fails fast when nothing is listening at `path`.
    pub async fn build_unix(self, path: impl AsRef<Path> + Send) -> Result<Connection, Error> {
        let path = path.as_ref().to_path_buf();
        debug!(path = %path.display(), "connecting to node socket");

        let endpoint = self.endpoint(UNIX_SOCKET_ENDPOINT.to_string())?;
        let channel = endpoint
            .connect_with_connector(service_fn(move |_: Uri| {
                UnixStream::connect(path.clone())
            }))
            .await?;

        self.compose(channel)
    }

    /// Set the `User-Agent` header sent by this client.
    pub fn user_agent(self, user_agent: impl Into<String>) -> Self {
        Self {
            user_agent: user_agent.into(),
            ..self
        }
    }

    /// Sets a header to be included on all requests.
    pub fn header(self, header: HeaderName, value: HeaderValue) -> Self {
        let mut headers = self.headers;
        headers.push((header, value));
        Self { headers, ..self }
    }

    /// Sets the maximum duration of time the client will wait for the node
    /// to accept the connection before aborting the request.
    ///
    /// Note this does not bound the request duration - see
    /// [`timeout`][Self::timeout].
    pub fn connect_timeout(self, timeout: Duration) -> Self {
        Self {
            connect_timeout: timeout,
            ..self
        }
    }

    /// Bounds the total amount of time a single request can take before
    /// being aborted.
    ///
    /// This timeout includes establishing the connection, sending the
    /// request and waiting for, and receiving the entire response.
    pub fn timeout(self, timeout: Duration) -> Self {
        Self { timeout, ..self }
    }

    fn endpoint(&self, dst: String) -> Result<Endpoint, Error> {
        let endpoint = Endpoint::from_shared(dst)?
            .connect_timeout(self.connect_timeout)
            .timeout(self.timeout);

        Ok(endpoint)
    }

    fn compose(self, channel: Channel) -> Result<Connection, Error> {
        let mut headers = self.headers;
        headers.push((USER_AGENT_HEADER, HeaderValue::from_str(&self.user_agent)?));

        Ok(SetRequestHeadersService::new(channel, headers))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_timeouts() {
        let builder = Builder::default();

        assert_eq!(builder.connect_timeout, DEFAULT_CONNECT_TIMEOUT);
        assert_eq!(builder.timeout, DEFAULT_TIMEOUT);
        assert!(builder.user_agent.starts_with("client_util/"));
    }

    #[test]
    fn overrides() {
        let builder = Builder::default()
            .user_agent("my_awesome_client")
            .connect_timeout(Duration::from_secs(2))
            .timeout(Duration::from_secs(3));

        assert_eq!(builder.user_agent, "my_awesome_client");
        assert_eq!(builder.connect_timeout, Duration::from_secs(2));
        assert_eq!(builder.timeout, Duration::from_secs(3));
    }

    #[tokio::test]
    async fn missing_socket_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("does_not_exist.sock");

        let result = Builder::default().build_unix(&path).await;

        assert!(matches!(result, Err(Error::Transport(_))));
    }
}
