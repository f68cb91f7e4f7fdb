use http::header::HeaderName;
use http::{HeaderValue, Request};
use std::sync::Arc;
use std::task::{Context, Poll};
use tower::Service;

/// A [`Service`] that wraps another service, setting the provided headers
/// on every request flowing through it.
#[derive(Debug, Clone)]
pub struct SetRequestHeadersService<S> {
    service: S,
    headers: Arc<Vec<(HeaderName, HeaderValue)>>,
}

impl<S> SetRequestHeadersService<S> {
    /// Wraps `service`, attaching `headers` to every request.
    pub fn new(service: S, headers: Vec<(HeaderName, HeaderValue)>) -> Self {
        Self {
            service,
            headers: Arc::new(headers),
        }
    }
}

impl<S, R> Service<Request<R>> for SetRequestHeadersService<S>
where
    S: Service<Request<R>>,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&mut self, mut request: Request<R>) -> Self::Future {
        let headers = request.headers_mut();
        for (name, value) in self.headers.iter() {
            headers.insert(name, value.clone());
        }
        self.service.call(request)
    }
}
