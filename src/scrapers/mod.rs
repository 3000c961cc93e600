//! HTTP clients for the two external services.
//!
//! | Service | Module | Method |
//! |---------|--------|--------|
//! | Wikimedia pageviews | [`wikipedia`] | REST API, JSON |
//! | Al Jazeera search | [`aljazeera`] | HTML scraping |
//!
//! Both share one [`reqwest::Client`] per run, built by [`build_client`].

use reqwest::Client;

pub mod aljazeera;
pub mod wikipedia;

/// Browser-like User-Agent. Both services reject or degrade requests from
/// unidentified clients.
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/115.0.0.0 Safari/537.36";

/// Build the client shared by the fetcher and every coverage probe.
pub fn build_client() -> reqwest::Result<Client> {
    Client::builder().user_agent(USER_AGENT).build()
}
