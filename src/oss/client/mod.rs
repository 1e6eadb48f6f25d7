// Alibaba Cloud OSS Rust Library for Bucket Configuration
// Copyright 2026 The alioss-rs Authors.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! OSS client to perform bucket configuration operations

use crate::oss::error::{Error, NetworkError, ValidationErr};
use crate::oss::http::BaseUrl;
use crate::oss::multimap_ext::MultimapExt;
use crate::oss::oss_error_response::OssErrorResponse;
use crate::oss::transport::{HttpTransport, Transport, TransportRequest, TransportResponse};
use std::sync::Arc;

pub use crate::oss::client::hooks::RequestHooks;

pub mod hooks;

mod bucket_exists;
mod create_bucket;
mod delete_bucket;
mod delete_bucket_cors;
mod delete_bucket_lifecycle;
mod delete_bucket_logging;
mod delete_bucket_website;
mod get_bucket_acl;
mod get_bucket_cors;
mod get_bucket_lifecycle;
mod get_bucket_location;
mod get_bucket_logging;
mod get_bucket_referer;
mod get_bucket_website;
mod list_buckets;
mod put_bucket_acl;
mod put_bucket_cors;
mod put_bucket_lifecycle;
mod put_bucket_logging;
mod put_bucket_referer;
mod put_bucket_website;

/// Configuration for the HTTP connection pool.
///
/// # Example
///
/// ```
/// use alioss::oss::client::ConnectionPoolConfig;
/// use std::time::Duration;
///
/// let config = ConnectionPoolConfig::default()
///     .max_idle_per_host(8)
///     .idle_timeout(Duration::from_secs(30));
/// ```
#[derive(Debug, Clone)]
pub struct ConnectionPoolConfig {
    /// Maximum number of idle connections per host. Default: 32
    pub max_idle_per_host: usize,

    /// How long idle connections are kept in the pool. Default: 90 seconds
    pub idle_timeout: std::time::Duration,

    /// TCP keepalive interval. Default: 60 seconds
    pub tcp_keepalive: std::time::Duration,

    /// Enable TCP_NODELAY (disable Nagle's algorithm). Default: true
    pub tcp_nodelay: bool,
}

impl Default for ConnectionPoolConfig {
    fn default() -> Self {
        Self {
            max_idle_per_host: 32,
            idle_timeout: std::time::Duration::from_secs(90),
            tcp_keepalive: std::time::Duration::from_secs(60),
            tcp_nodelay: true,
        }
    }
}

impl ConnectionPoolConfig {
    pub fn max_idle_per_host(mut self, max: usize) -> Self {
        self.max_idle_per_host = max;
        self
    }

    pub fn idle_timeout(mut self, timeout: std::time::Duration) -> Self {
        self.idle_timeout = timeout;
        self
    }

    pub fn tcp_keepalive(mut self, interval: std::time::Duration) -> Self {
        self.tcp_keepalive = interval;
        self
    }

    pub fn tcp_nodelay(mut self, enable: bool) -> Self {
        self.tcp_nodelay = enable;
        self
    }
}

/// Client Builder manufactures an [`OssClient`] talking HTTP(S) to the given endpoint.
#[derive(Debug)]
pub struct OssClientBuilder {
    base_url: BaseUrl,
    client_hooks: Vec<Arc<dyn RequestHooks + Send + Sync + 'static>>,
    /// Set flag to ignore certificate check. This is insecure and should only be used for testing.
    ignore_cert_check: Option<bool>,
    /// Set the app info as an Option of (app_name, app_version) pair. This will show up in the client's user-agent.
    app_info: Option<(String, String)>,
    connection_pool_config: ConnectionPoolConfig,
}

impl OssClientBuilder {
    pub fn new(base_url: BaseUrl) -> Self {
        Self {
            base_url,
            client_hooks: Vec::new(),
            ignore_cert_check: None,
            app_info: None,
            connection_pool_config: ConnectionPoolConfig::default(),
        }
    }

    /// Add a client hook to the builder. Hooks will be called after each other in
    /// order they were added.
    pub fn hook(mut self, hooks: Arc<dyn RequestHooks + Send + Sync + 'static>) -> Self {
        self.client_hooks.push(hooks);
        self
    }

    /// Set the app info as an Option of (app_name, app_version) pair. This will
    /// show up in the client's user-agent.
    pub fn app_info(mut self, app_info: Option<(String, String)>) -> Self {
        self.app_info = app_info;
        self
    }

    /// Set flag to ignore certificate check. This is insecure and should only
    /// be used for testing.
    pub fn ignore_cert_check(mut self, ignore_cert_check: Option<bool>) -> Self {
        self.ignore_cert_check = ignore_cert_check;
        self
    }

    pub fn connection_pool_config(mut self, config: ConnectionPoolConfig) -> Self {
        self.connection_pool_config = config;
        self
    }

    /// Build the Client.
    pub fn build(self) -> Result<OssClient, Error> {
        let pool_config = &self.connection_pool_config;
        let mut builder = reqwest::Client::builder()
            .no_gzip()
            .tcp_nodelay(pool_config.tcp_nodelay)
            .tcp_keepalive(pool_config.tcp_keepalive)
            .pool_max_idle_per_host(pool_config.max_idle_per_host)
            .pool_idle_timeout(pool_config.idle_timeout);

        #[cfg(feature = "http2")]
        {
            builder = builder.http2_adaptive_window(true);
        }

        let mut user_agent = String::from("aliyun-sdk-rust/")
            + env!("CARGO_PKG_VERSION")
            + " ("
            + std::env::consts::OS
            + "; "
            + std::env::consts::ARCH
            + ")";

        if let Some((app_name, app_version)) = self.app_info {
            user_agent.push_str(format!(" {app_name}/{app_version}").as_str());
        }
        builder = builder.user_agent(user_agent);

        #[cfg(any(
            feature = "default-tls",
            feature = "native-tls",
            feature = "rustls-tls"
        ))]
        if let Some(v) = self.ignore_cert_check {
            builder = builder.danger_accept_invalid_certs(v);
        }

        let http_client = builder.build().map_err(NetworkError::from)?;
        Ok(OssClient::with_transport(Arc::new(HttpTransport::new(
            http_client,
            self.base_url,
            self.client_hooks,
        ))))
    }
}

/// Object Storage Service (aka OSS) client to perform bucket configuration operations.
///
/// Cloning is cheap: clones share the transport.
#[derive(Clone, Debug)]
pub struct OssClient {
    transport: Arc<dyn Transport>,
}

impl OssClient {
    /// Returns an HTTP client for the given endpoint with default settings.
    ///
    /// # Examples
    ///
    /// ```
    /// use alioss::oss::OssClient;
    /// use alioss::oss::http::BaseUrl;
    ///
    /// let base_url: BaseUrl = "https://oss-cn-hangzhou.aliyuncs.com".parse().unwrap();
    /// let client = OssClient::new(base_url).unwrap();
    /// ```
    pub fn new(base_url: BaseUrl) -> Result<Self, Error> {
        OssClientBuilder::new(base_url).build()
    }

    /// Returns a client sending its requests through `transport`.
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Sends `request` and maps a non-2xx response to [`Error::Service`].
    pub(crate) async fn execute(
        &self,
        request: TransportRequest,
    ) -> Result<TransportResponse, Error> {
        let method = request.method.clone();
        let bucket = request.bucket.clone();
        log::debug!(
            "{method} bucket={} ?{}",
            bucket.as_deref().unwrap_or("-"),
            request.query_params.to_query_string()
        );

        let resp = self.transport.send(request).await?;
        log::debug!(
            "{method} bucket={} -> {}",
            bucket.as_deref().unwrap_or("-"),
            resp.status
        );

        if resp.status.is_success() {
            return Ok(resp);
        }
        Err(error_from_response(resp, bucket))
    }
}

fn error_from_response(resp: TransportResponse, bucket: Option<String>) -> Error {
    let content_type = resp.content_type();
    let TransportResponse {
        status,
        headers,
        body,
    } = resp;

    if body.is_empty() {
        return match OssErrorResponse::from_status(status, headers, bucket) {
            Some(e) => Error::Service(Box::new(e)),
            None => Error::InvalidResponse {
                status,
                content_type,
            },
        };
    }

    log::trace!("error response body: {}", String::from_utf8_lossy(&body));
    match OssErrorResponse::new_from_body(status, body, headers) {
        Ok(e) => Error::Service(Box::new(e)),
        Err(ValidationErr::XmlParseError(_) | ValidationErr::UnexpectedRootElement { .. }) => {
            Error::InvalidResponse {
                status,
                content_type,
            }
        }
        Err(e) => Error::Validation(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oss::oss_error_response::OssErrorCode;
    use bytes::Bytes;
    use http::{HeaderMap, StatusCode};

    #[test]
    fn test_error_from_xml_body() {
        let resp = TransportResponse::new(
            StatusCode::NOT_FOUND,
            HeaderMap::new(),
            Bytes::from_static(
                b"<Error><Code>NoSuchLifecycle</Code><RequestId>1</RequestId></Error>",
            ),
        );
        let err = error_from_response(resp, Some("b1".into()));
        assert_eq!(err.service_code(), Some(&OssErrorCode::NoSuchLifecycle));
    }

    #[test]
    fn test_error_from_empty_body() {
        let resp = TransportResponse::new(StatusCode::FORBIDDEN, HeaderMap::new(), Bytes::new());
        let err = error_from_response(resp, Some("b1".into()));
        assert!(err.is_service_code(&OssErrorCode::AccessDenied));

        let resp = TransportResponse::new(StatusCode::BAD_GATEWAY, HeaderMap::new(), Bytes::new());
        assert!(matches!(
            error_from_response(resp, None),
            Error::InvalidResponse {
                status: StatusCode::BAD_GATEWAY,
                ..
            }
        ));
    }

    #[test]
    fn test_error_from_garbage_body() {
        let resp = TransportResponse::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            HeaderMap::new(),
            Bytes::from_static(b"<html>oops"),
        );
        assert!(matches!(
            error_from_response(resp, None),
            Error::InvalidResponse { .. }
        ));
    }
}
