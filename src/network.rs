use crate::config::HttpClientConfig;
use anyhow::Context;
use reqwest::Method;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{RetryTransientMiddleware, policies::ExponentialBackoff};
use reqwest_tracing::TracingMiddleware;

/// Network utilities.
#[derive(Clone)]
pub struct Network {
    /// Traced client for requests that change state, these are never retried.
    pub http_client: ClientWithMiddleware,
    /// Traced client for reads, retries transient failures with exponential backoff.
    pub read_http_client: ClientWithMiddleware,
}

impl Network {
    /// Creates a new `Network` instance.
    pub fn new(http_client: ClientWithMiddleware, read_http_client: ClientWithMiddleware) -> Self {
        Self {
            http_client,
            read_http_client,
        }
    }

    /// Creates a `Network` instance from the configuration. Both clients share one connection
    /// pool.
    pub fn create(config: &HttpClientConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .pool_idle_timeout(config.pool_idle_timeout)
            .connection_verbose(config.verbose)
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .context("Cannot build HTTP client.")?;

        let http_client = ClientBuilder::new(client.clone())
            .with(TracingMiddleware::default())
            .build();

        let mut read_builder = ClientBuilder::new(client).with(TracingMiddleware::default());
        if config.read_retries > 0 {
            read_builder = read_builder.with(RetryTransientMiddleware::new_with_policy(
                ExponentialBackoff::builder().build_with_max_retries(config.read_retries),
            ));
        }

        Ok(Self::new(http_client, read_builder.build()))
    }

    /// Picks the client for the request method, only safe methods may be retried.
    pub fn client_for(&self, method: &Method) -> &ClientWithMiddleware {
        if matches!(*method, Method::GET | Method::HEAD) {
            &self.read_http_client
        } else {
            &self.http_client
        }
    }
}
