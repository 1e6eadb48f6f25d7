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
use crate::oss::types::LifecycleConfig;

impl OssClient {
    /// Creates a [`PutBucketConfig`] request builder replacing all lifecycle rules.
    ///
    /// To execute the request, call [`send()`](crate::oss::types::OssApi::send),
    /// which returns a [`Result`] containing a
    /// [`PutBucketConfigResponse<LifecycleConfig>`](crate::oss::response::PutBucketConfigResponse).
    ///
    /// # Example
    ///
    /// ```no_run
    /// use alioss::oss::OssClient;
    /// use alioss::oss::http::BaseUrl;
    /// use alioss::oss::response::response_traits::HasBucket;
    /// use alioss::oss::types::{LifecycleConfig, LifecycleExpiration, LifecycleRule, OssApi, RuleStatus};
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let base_url: BaseUrl = "https://oss-cn-hangzhou.aliyuncs.com".parse().unwrap();
    ///     let client = OssClient::new(base_url).unwrap();
    ///     let rules = vec![
    ///         LifecycleRule::new("expire-logs", "logs/", RuleStatus::Enabled)
    ///             .with_expiration(LifecycleExpiration::Days(365)),
    ///     ];
    ///     let resp = client
    ///         .put_bucket_lifecycle("bucket-name")
    ///         .config(LifecycleConfig::new(rules))
    ///         .build()
    ///         .send()
    ///         .await
    ///         .unwrap();
    ///     println!("set lifecycle rules on bucket '{}'", resp.bucket());
    /// }
    /// ```
    pub fn put_bucket_lifecycle<S: Into<String>>(
        &self,
        bucket: S,
    ) -> PutBucketConfigBldr<LifecycleConfig> {
        PutBucketConfig::<LifecycleConfig>::builder()
            .client(self.clone())
            .bucket(bucket)
    }
}
