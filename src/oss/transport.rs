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

//! The request/response exchange with the service.

use crate::oss::client::hooks::RequestHooks;
use crate::oss::error::{Error, NetworkError};
use crate::oss::header_constants::{CONTENT_LENGTH, CONTENT_TYPE, DATE, HOST};
use crate::oss::http::{BaseUrl, Url};
use crate::oss::multimap_ext::{Multimap, MultimapExt};
use crate::oss::types::BucketResource;
use crate::oss::utils::{to_http_header_value, utc_now};
use async_trait::async_trait;
use bytes::Bytes;
use http::{HeaderMap, Method, StatusCode};
use std::fmt::{Debug, Write};
use std::mem;
use std::sync::Arc;

/// A request as handed to a [`Transport`]: everything except the endpoint, which the transport owns.
#[derive(Clone, Debug)]
pub struct TransportRequest {
    pub method: Method,
    /// `None` addresses the service itself (bucket listing).
    pub bucket: Option<String>,
    pub query_params: Multimap,
    pub headers: Multimap,
    pub body: Option<Bytes>,
}

impl TransportRequest {
    /// The bucket sub-resource addressed by the query string, e.g. `lifecycle` in `?lifecycle`.
    pub fn sub_resource(&self) -> Option<BucketResource> {
        self.query_params
            .keys()
            .find_map(|k| BucketResource::from_query_key(k))
    }
}

/// Status, headers and the complete body of a response.
#[derive(Clone, Debug)]
pub struct TransportResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl TransportResponse {
    pub fn new(status: StatusCode, headers: HeaderMap, body: Bytes) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    pub fn content_type(&self) -> String {
        self.headers
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_owned()
    }
}

/// Sends one request and returns the response, whatever its status.
///
/// A non-2xx status is a successful exchange at this level; only failures to talk to the
/// service at all are errors. Mapping statuses to [`Error::Service`] happens in the client.
#[async_trait]
pub trait Transport: Debug + Send + Sync {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, Error>;
}

/// [`Transport`] over HTTP(S) using `reqwest`.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    http_client: reqwest::Client,
    base_url: BaseUrl,
    hooks: Vec<Arc<dyn RequestHooks + Send + Sync + 'static>>,
}

impl HttpTransport {
    pub fn new(
        http_client: reqwest::Client,
        base_url: BaseUrl,
        hooks: Vec<Arc<dyn RequestHooks + Send + Sync + 'static>>,
    ) -> Self {
        Self {
            http_client,
            base_url,
            hooks,
        }
    }

    pub fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    async fn run_before_send_hooks(
        &self,
        method: &Method,
        url: &mut Url,
        headers: &mut Multimap,
        query_params: &Multimap,
        bucket_name: Option<&str>,
        body: Option<&Bytes>,
        extensions: &mut http::Extensions,
    ) -> Result<(), Error> {
        for hook in self.hooks.iter() {
            hook.before_send_mut(
                method,
                url,
                headers,
                query_params,
                bucket_name,
                body,
                extensions,
            )
            .await
            .inspect_err(|e| log::warn!("Hook {} failed {e}", hook.name()))?;
        }
        Ok(())
    }

    async fn run_after_execute_hooks(
        &self,
        method: &Method,
        url: &Url,
        headers: &Multimap,
        query_params: &Multimap,
        bucket_name: Option<&str>,
        resp: &Result<reqwest::Response, reqwest::Error>,
        extensions: &mut http::Extensions,
    ) {
        for hook in self.hooks.iter() {
            hook.after_execute(
                method,
                url,
                headers,
                query_params,
                bucket_name,
                resp,
                extensions,
            )
            .await;
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, Error> {
        let TransportRequest {
            method,
            bucket,
            query_params,
            mut headers,
            body,
        } = request;
        let bucket_name = bucket.as_deref();

        let mut url = self.base_url.build_url(&query_params, bucket_name);
        let mut extensions = http::Extensions::default();

        headers.add(HOST, url.host_header_value());
        headers.add(DATE, to_http_header_value(utc_now()));
        if matches!(method, Method::PUT | Method::POST) {
            headers.add(CONTENT_LENGTH, body.as_ref().map_or(0, Bytes::len).to_string());
        }

        self.run_before_send_hooks(
            &method,
            &mut url,
            &mut headers,
            &query_params,
            bucket_name,
            body.as_ref(),
            &mut extensions,
        )
        .await?;

        let target = request_target(&url)?;
        let mut req = self.http_client.request(method.clone(), target);
        for (key, values) in headers.iter_all() {
            for value in values {
                req = req.header(key, value);
            }
        }
        if let Some(body) = body {
            req = req.body(body);
        }

        let resp = req.send().await;

        self.run_after_execute_hooks(
            &method,
            &url,
            &headers,
            &query_params,
            bucket_name,
            &resp,
            &mut extensions,
        )
        .await;

        let mut resp = resp.map_err(NetworkError::from)?;
        let status = resp.status();
        let headers: HeaderMap = mem::take(resp.headers_mut());
        let body: Bytes = resp.bytes().await.map_err(NetworkError::from)?;

        Ok(TransportResponse::new(status, headers, body))
    }
}

/// Renders `url` as hooks left it; a hook may have emptied or mangled the host.
fn request_target(url: &Url) -> Result<reqwest::Url, NetworkError> {
    let mut rendered = String::new();
    write!(rendered, "{url}").map_err(|_| NetworkError::InvalidUrl("empty host".into()))?;
    reqwest::Url::parse(&rendered).map_err(|e| NetworkError::InvalidUrl(format!("{rendered}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oss::client::hooks::Extensions;

    #[derive(Debug)]
    struct SetHost(&'static str);

    #[async_trait]
    impl RequestHooks for SetHost {
        fn name(&self) -> &'static str {
            "set-host"
        }

        async fn before_send_mut(
            &self,
            _method: &Method,
            url: &mut Url,
            _headers: &mut Multimap,
            _query_params: &Multimap,
            _bucket_name: Option<&str>,
            _body: Option<&Bytes>,
            _extensions: &mut Extensions,
        ) -> Result<(), Error> {
            url.host = self.0.to_owned();
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_hook_breaking_url_is_network_error() {
        for host in ["", "exa mple.com"] {
            let hooks: Vec<Arc<dyn RequestHooks + Send + Sync>> = vec![Arc::new(SetHost(host))];
            let transport = HttpTransport::new(
                reqwest::Client::new(),
                "http://localhost:9000".parse().unwrap(),
                hooks,
            );
            let req = TransportRequest {
                method: Method::GET,
                bucket: Some("my-bucket".to_owned()),
                query_params: Multimap::new(),
                headers: Multimap::new(),
                body: None,
            };
            assert!(
                matches!(
                    transport.send(req).await,
                    Err(Error::Network(NetworkError::InvalidUrl(_)))
                ),
                "host {host:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_sub_resource() {
        let mut query_params = Multimap::new();
        query_params.add("website", "");
        let req = TransportRequest {
            method: Method::GET,
            bucket: Some("my-bucket".to_owned()),
            query_params,
            headers: Multimap::new(),
            body: None,
        };
        assert_eq!(req.sub_resource(), Some(BucketResource::Website));

        let mut query_params = Multimap::new();
        query_params.add("prefix", "logs");
        let req = TransportRequest {
            query_params,
            bucket: None,
            ..req
        };
        assert_eq!(req.sub_resource(), None);
    }
}
