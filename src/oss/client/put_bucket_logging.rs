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
use crate::oss::types::LoggingConfig;

impl OssClient {
    /// Creates a [`PutBucketConfig`] request builder replacing the access logging configuration.
    ///
    /// To execute the request, call [`send()`](crate::oss::types::OssApi::send),
    /// which returns a [`Result`] containing a
    /// [`PutBucketConfigResponse<LoggingConfig>`](crate::oss::response::PutBucketConfigResponse).
    ///
    /// # Example
    ///
    /// ```no_run
    /// use alioss::oss::OssClient;
    /// use alioss::oss::http::BaseUrl;
    /// use alioss::oss::types::{LoggingConfig, OssApi};
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let base_url: BaseUrl = "https://oss-cn-hangzhou.aliyuncs.com".parse().unwrap();
    ///     let client = OssClient::new(base_url).unwrap();
    ///     client
    ///         .put_bucket_logging("bucket-name")
    ///         .config(LoggingConfig::new("log-bucket", "access/"))
    ///         .build()
    ///         .send()
    ///         .await
    ///         .unwrap();
    /// }
    /// ```
    pub fn put_bucket_logging<S: Into<String>>(
        &self,
        bucket: S,
    ) -> PutBucketConfigBldr<LoggingConfig> {
        PutBucketConfig::<LoggingConfig>::builder()
            .client(self.clone())
            .bucket(bucket)
    }
}
