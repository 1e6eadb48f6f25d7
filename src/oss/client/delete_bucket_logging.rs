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

use crate::oss::builders::{DeleteBucketConfig, DeleteBucketConfigBldr};
use crate::oss::client::OssClient;
use crate::oss::types::LoggingConfig;

impl OssClient {
    /// Creates a [`DeleteBucketConfig`] request builder removing the access logging configuration, which disables logging.
    ///
    /// Removing a configuration that is not set succeeds. To execute the request, call
    /// [`send()`](crate::oss::types::OssApi::send), which returns a [`Result`] containing a
    /// [`DeleteBucketConfigResponse<LoggingConfig>`](crate::oss::response::DeleteBucketConfigResponse).
    ///
    /// # Example
    ///
    /// ```no_run
    /// use alioss::oss::OssClient;
    /// use alioss::oss::http::BaseUrl;
    /// use alioss::oss::types::OssApi;
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let base_url: BaseUrl = "https://oss-cn-hangzhou.aliyuncs.com".parse().unwrap();
    ///     let client = OssClient::new(base_url).unwrap();
    ///     client.delete_bucket_logging("bucket-name").build().send().await.unwrap();
    /// }
    /// ```
    pub fn delete_bucket_logging<S: Into<String>>(
        &self,
        bucket: S,
    ) -> DeleteBucketConfigBldr<LoggingConfig> {
        DeleteBucketConfig::<LoggingConfig>::builder()
            .client(self.clone())
            .bucket(bucket)
    }
}
