pub use client_util::connection::{
    Builder, Connection, Error, SetRequestHeadersService, DEFAULT_CONNECT_TIMEOUT,
    DEFAULT_TIMEOUT, USER_AGENT,
};
