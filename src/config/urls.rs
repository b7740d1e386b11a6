//! Remote source URLs

/// Raw file host (GitHub raw)
pub const RAW_CONTENT_HOST: &str = "https://raw.githubusercontent.com";

/// Branch every descriptor is fetched from
pub const DEFAULT_BRANCH: &str = "master";
