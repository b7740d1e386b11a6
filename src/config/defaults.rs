//! Default configuration values

/// User-Agent sent with every request
pub const USER_AGENT: &str = concat!("qib-bootstrap/", env!("CARGO_PKG_VERSION"));
