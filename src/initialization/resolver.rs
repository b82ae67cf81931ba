//! DNS resolver initialization.
//!
//! This module provides functions to initialize the DNS resolver with proper
//! timeout configuration.

use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use hickory_resolver::config::{NameServerConfigGroup, ResolverConfig, ResolverOpts};
use hickory_resolver::TokioAsyncResolver;
use log::{debug, warn};

use crate::config::{Config, DNS_ATTEMPTS, DNS_PORT};
use crate::dns::HickoryTxtResolver;
use crate::error_handling::InitializationError;

/// Initializes the DNS resolver used for TXT lookups.
///
/// Without `--nameserver`, the host's resolver configuration (`/etc/resolv.conf`
/// or the platform equivalent) is used, falling back to the library default
/// (Google DNS) if it cannot be read. With `--nameserver`, only that server is
/// queried.
///
/// Timeouts come from `config.dns_timeout_secs`. Each query is attempted once.
///
/// # Errors
///
/// Returns `InitializationError::DnsResolverError` if the configured
/// nameserver is not a valid `IP` or `IP:PORT`.
pub fn init_resolver(config: &Config) -> Result<HickoryTxtResolver, InitializationError> {
    let (resolver_config, mut opts) = match &config.nameserver {
        Some(nameserver) => {
            let addr = parse_nameserver(nameserver)?;
            debug!("Using nameserver {addr}");
            let group = NameServerConfigGroup::from_ips_clear(&[addr.ip()], addr.port(), true);
            (
                ResolverConfig::from_parts(None, vec![], group),
                ResolverOpts::default(),
            )
        }
        None => match hickory_resolver::system_conf::read_system_conf() {
            Ok((resolver_config, opts)) => (resolver_config, opts),
            Err(e) => {
                warn!("Could not read system DNS configuration, using defaults: {e}");
                (ResolverConfig::default(), ResolverOpts::default())
            }
        },
    };

    opts.timeout = Duration::from_secs(config.dns_timeout_secs);
    opts.attempts = DNS_ATTEMPTS;
    // Names are queried fully qualified; never append search domains
    opts.ndots = 0;

    Ok(HickoryTxtResolver::new(TokioAsyncResolver::tokio(
        resolver_config,
        opts,
    )))
}

/// Parses a `--nameserver` value: `IP`, `IP:PORT` or `[IPv6]:PORT`.
///
/// # Errors
///
/// Returns `InitializationError::DnsResolverError` naming the bad value.
pub fn parse_nameserver(value: &str) -> Result<SocketAddr, InitializationError> {
    let value = value.trim();
    if let Ok(ip) = value.parse::<IpAddr>() {
        return Ok(SocketAddr::new(ip, DNS_PORT));
    }
    value.parse::<SocketAddr>().map_err(|_| {
        InitializationError::DnsResolverError(format!(
            "invalid nameserver address '{value}' (expected IP or IP:PORT)"
        ))
    })
}
