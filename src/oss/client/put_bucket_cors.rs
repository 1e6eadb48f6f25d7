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

use crate::oss::builders::{PutBucketConfig, PutBucketConfigBldr};
use crate::oss::client::OssClient;
use crate::oss::types::CorsConfig;

impl OssClient {
    /// Creates a [`PutBucketConfig`] request builder replacing all CORS rules.
    ///
    /// To execute the request, call [`send()`](crate::oss::types::OssApi::send),
    /// which returns a [`Result`] containing a
    /// [`PutBucketConfigResponse<CorsConfig>`](crate::oss::response::PutBucketConfigResponse).
    ///
    /// # Example
    ///
    /// ```no_run
    /// use alioss::oss::OssClient;
    /// use alioss::oss::http::BaseUrl;
    /// use alioss::oss::types::{CorsConfig, CorsMethod, CorsRule, OssApi};
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let base_url: BaseUrl = "https://oss-cn-hangzhou.aliyuncs.com".parse().unwrap();
    ///     let client = OssClient::new(base_url).unwrap();
    ///     let rule = CorsRule::new(["https://www.example.com"], [CorsMethod::Get, CorsMethod::Put])
    ///         .with_allowed_headers(["Authorization"])
    ///         .with_max_age_seconds(100);
    ///     client
    ///         .put_bucket_cors("bucket-name")
    ///         .config(CorsConfig::new(vec![rule]))
    ///         .build()
    ///         .send()
    ///         .await
    ///         .unwrap();
    /// }
    /// ```
    pub fn put_bucket_cors<S: Into<String>>(&self, bucket: S) -> PutBucketConfigBldr<CorsConfig> {
        PutBucketConfig::<CorsConfig>::builder()
            .client(self.clone())
            .bucket(bucket)
    }
}
