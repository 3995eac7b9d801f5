//! Host facts: hostname and primary IPv4 address.
//!
//! Both lookups are infallible by contract; when the underlying query
//! cannot be answered they return the literal `"unknown"` and log why.

use std::env;
use std::fs;
use std::net::{IpAddr, Ipv4Addr, UdpSocket};

/// Sentinel returned when a fact cannot be determined.
pub const UNKNOWN: &str = "unknown";

/// Current hostname.
///
/// Reads the kernel hostname, falling back to the HOSTNAME environment
/// variable (set by most container runtimes).
pub fn hostname() -> String {
    if let Ok(name) = fs::read_to_string("/proc/sys/kernel/hostname") {
        let name = name.trim();
        if !name.is_empty() {
            return name.to_string();
        }
    }
    match env::var("HOSTNAME") {
        Ok(name) if !name.is_empty() => name,
        _ => {
            tracing::warn!("Could not determine hostname");
            UNKNOWN.to_string()
        }
    }
}

/// First non-loopback IPv4 address of the host, or `"unknown"`.
pub fn ipv4_address() -> String {
    match primary_ipv4() {
        Some(ip) => ip.to_string(),
        None => {
            tracing::warn!("No non-loopback IPv4 address found");
            UNKNOWN.to_string()
        }
    }
}

/// Resolve the address the host would use for outbound traffic.
///
/// Connecting a UDP socket performs route selection without sending any
/// packet; the socket's local address is then the primary interface
/// address.
fn primary_ipv4() -> Option<Ipv4Addr> {
    let socket = UdpSocket::bind(("0.0.0.0", 0)).ok()?;
    socket.connect(("8.8.8.8", 80)).ok()?;
    match socket.local_addr().ok()?.ip() {
        IpAddr::V4(ip) if !ip.is_loopback() && !ip.is_unspecified() => Some(ip),
        _ => None,
    }
}
