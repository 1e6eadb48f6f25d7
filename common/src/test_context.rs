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

use crate::cleanup_guard::CleanupGuard;
use crate::memory_transport::MemoryTransport;
use crate::utils::rand_bucket_name;
use alioss::oss::OssClient;
use alioss::oss::OssClientBuilder;
use alioss::oss::http::BaseUrl;
use alioss::oss::types::OssApi;
use std::sync::Arc;

#[derive(Clone)]
pub struct TestContext {
    pub client: OssClient,
    /// Endpoint of the live service, `None` when running against [`MemoryTransport`].
    pub base_url: Option<BaseUrl>,
    /// The in-memory service, when no endpoint is configured.
    pub memory: Option<Arc<MemoryTransport>>,
}

impl TestContext {
    /// Builds the context from `OSS_ENDPOINT`, `OSS_ENABLE_HTTPS` and `OSS_IGNORE_CERT_CHECK`.
    ///
    /// Without `OSS_ENDPOINT` the tests run against a fresh [`MemoryTransport`]. Requests to a
    /// live endpoint are unsigned; register a signing hook on the client for authenticated access.
    pub fn new_from_env() -> Self {
        let _ = env_logger::builder().is_test(true).try_init();

        match std::env::var("OSS_ENDPOINT") {
            Ok(host) if !host.is_empty() => {
                const DEFAULT_ENABLE_HTTPS: &str = "true";
                const DEFAULT_IGNORE_CERT_CHECK: &str = "false";

                log::debug!("OSS_ENDPOINT={host}");
                let secure: bool = std::env::var("OSS_ENABLE_HTTPS")
                    .unwrap_or(DEFAULT_ENABLE_HTTPS.to_string())
                    .parse()
                    .unwrap_or(false);
                log::debug!("OSS_ENABLE_HTTPS={secure}");
                let ignore_cert_check: bool = std::env::var("OSS_IGNORE_CERT_CHECK")
                    .unwrap_or(DEFAULT_IGNORE_CERT_CHECK.to_string())
                    .parse()
                    .unwrap_or(true);
                log::debug!("OSS_IGNORE_CERT_CHECK={ignore_cert_check}");

                let mut base_url: BaseUrl = host.parse().unwrap();
                base_url.https = secure;

                let client = OssClientBuilder::new(base_url.clone())
                    .ignore_cert_check(Some(ignore_cert_check))
                    .app_info(Some(("alioss-tests".into(), env!("CARGO_PKG_VERSION").into())))
                    .build()
                    .unwrap();

                Self {
                    client,
                    base_url: Some(base_url),
                    memory: None,
                }
            }
            _ => {
                log::debug!("OSS_ENDPOINT not set, using the in-memory service");
                Self::in_memory(MemoryTransport::new())
            }
        }
    }

    /// A context backed by the given in-memory service.
    pub fn in_memory(transport: MemoryTransport) -> Self {
        let memory = Arc::new(transport);
        Self {
            client: OssClient::with_transport(memory.clone()),
            base_url: None,
            memory: Some(memory),
        }
    }

    /// Number of requests the in-memory service received, `None` against a live endpoint.
    pub fn request_count(&self) -> Option<usize> {
        self.memory.as_ref().map(|m| m.request_count())
    }

    /// Creates a temporary bucket with an automatic cleanup guard.
    ///
    /// This function creates a new bucket and returns both its name and a `CleanupGuard`
    /// that deletes the bucket on [`CleanupGuard::cleanup`].
    ///
    /// # Example
    /// ```ignore
    /// let (bucket_name, guard) = ctx.create_bucket_helper().await;
    /// println!("Created temporary bucket: {}", bucket_name);
    /// guard.cleanup().await;
    /// ```
    pub async fn create_bucket_helper(&self) -> (String, CleanupGuard) {
        let bucket_name = rand_bucket_name();
        let _resp = self
            .client
            .create_bucket(&bucket_name)
            .build()
            .send()
            .await
            .unwrap();
        let guard = CleanupGuard::new(self.client.clone(), &bucket_name);
        (bucket_name, guard)
    }
}
