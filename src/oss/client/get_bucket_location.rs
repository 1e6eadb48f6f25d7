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

use crate::oss::builders::{GetBucketConfig, GetBucketConfigBldr};
use crate::oss::client::OssClient;
use crate::oss::types::LocationConfig;

impl OssClient {
    /// Creates a [`GetBucketConfig`] request builder reading the region of a bucket.
    ///
    /// To execute the request, call [`send()`](crate::oss::types::OssApi::send),
    /// which returns a [`Result`] containing a
    /// [`GetBucketConfigResponse<LocationConfig>`](crate::oss::response::GetBucketConfigResponse).
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
    ///     let resp = client.get_bucket_location("bucket-name").build().send().await.unwrap();
    ///     println!("bucket lives in {}", resp.config().location);
    /// }
    /// ```
    pub fn get_bucket_location<S: Into<String>>(
        &self,
        bucket: S,
    ) -> GetBucketConfigBldr<LocationConfig> {
        GetBucketConfig::<LocationConfig>::builder()
            .client(self.clone())
            .bucket(bucket)
    }
}
