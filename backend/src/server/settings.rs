//! Application settings loaded via OrthoConfig.
//!
//! Values merge from `COOKBOOK_*` environment variables and command-line
//! flags; unset values fall back to the defaults below.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use ortho_config::OrthoConfig;
use pagination::{PaginationConfig, PaginationError};
use serde::Deserialize;

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

/// Listener and catalogue settings for the server binary.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "COOKBOOK")]
pub struct AppSettings {
    /// Interface to bind; all interfaces when unset.
    pub host: Option<IpAddr>,
    /// TCP port to bind.
    #[ortho_config(default = 8080)]
    pub port: u16,
    /// Recipes per catalogue page.
    #[ortho_config(default = 6)]
    pub per_page: usize,
    /// Page links shown in catalogue navigation.
    #[ortho_config(default = 4)]
    pub page_window: usize,
}

impl AppSettings {
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host.unwrap_or(DEFAULT_HOST), self.port)
    }

    /// Validated pagination settings.
    ///
    /// # Errors
    /// Fails when either size is configured as zero.
    pub fn pagination(&self) -> Result<PaginationConfig, PaginationError> {
        PaginationConfig::new(self.per_page, self.page_window)
    }
}
