//! HTTP server configuration object.

use std::net::SocketAddr;

use pagination::PaginationConfig;

use crate::inbound::http::session_config::SessionSettings;

/// Everything `create_server` needs, validated up front.
pub struct ServerConfig {
    pub(crate) session: SessionSettings,
    pub(crate) bind_addr: SocketAddr,
    pub(crate) pagination: PaginationConfig,
}

impl ServerConfig {
    #[must_use]
    pub fn new(
        session: SessionSettings,
        bind_addr: SocketAddr,
        pagination: PaginationConfig,
    ) -> Self {
        Self {
            session,
            bind_addr,
            pagination,
        }
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
