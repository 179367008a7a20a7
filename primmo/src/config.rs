use std::net::SocketAddr;

use leptos::prelude::*;
use tracing::debug;

use crate::error::ServerError;

/// Everything the server needs to start listening.
pub(crate) struct ServerConfig {
    pub(crate) leptos_options: LeptosOptions,
    pub(crate) addr: SocketAddr,
}

impl ServerConfig {
    /// Leptos options come from `[workspace.metadata.leptos]` and `LEPTOS_*`; `PORT` overrides the port.
    pub(crate) fn load() -> Result<Self, ServerError> {
        let conf = get_configuration(None).map_err(|e| ServerError::Config(e.to_string()))?;
        let leptos_options = conf.leptos_options;
        let port = std::env::var("PORT").ok();
        let addr = resolve_addr(leptos_options.site_addr, port.as_deref())?;
        debug!(site_root = %leptos_options.site_root, %addr, "loaded configuration");
        Ok(Self {
            leptos_options,
            addr,
        })
    }
}

pub(crate) fn parse_port(value: &str) -> Result<u16, ServerError> {
    value
        .trim()
        .parse::<u16>()
        .map_err(|source| ServerError::InvalidPort {
            value: value.to_string(),
            source,
        })
}

pub(crate) fn resolve_addr(
    mut site_addr: SocketAddr,
    port: Option<&str>,
) -> Result<SocketAddr, ServerError> {
    if let Some(port) = port {
        site_addr.set_port(parse_port(port)?);
    }
    Ok(site_addr)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site_addr() -> SocketAddr {
        "127.0.0.1:8080".parse().unwrap()
    }

    #[test]
    fn keeps_site_addr_without_port() {
        assert_eq!(resolve_addr(site_addr(), None).unwrap(), site_addr());
    }

    #[test]
    fn port_overrides_site_port() {
        let addr = resolve_addr(site_addr(), Some("3000")).unwrap();
        assert_eq!(addr, "127.0.0.1:3000".parse::<SocketAddr>().unwrap());
        assert_eq!(parse_port(" 9090\n").unwrap(), 9090);
    }

    #[test]
    fn bad_port_is_an_error() {
        for value in ["", "http", "70000", "-1"] {
            let err = resolve_addr(site_addr(), Some(value)).unwrap_err();
            assert!(matches!(err, ServerError::InvalidPort { .. }), "{value}");
        }
        let err = parse_port("abc").unwrap_err();
        assert!(err.to_string().starts_with("Invalid PORT \"abc\""));
    }
}
