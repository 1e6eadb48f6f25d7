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

use crate::oss::builders::{BucketExists, BucketExistsBldr};
use crate::oss::client::OssClient;

impl OssClient {
    /// Creates a [`BucketExists`] request builder to check if a bucket exists and is owned by the caller.
    ///
    /// To execute the request, call [`BucketExists::send()`](crate::oss::types::OssApi::send),
    /// which returns a [`Result`] containing a [`BucketExistsResponse`](crate::oss::response::BucketExistsResponse).
    ///
    /// # Example
    ///
    /// ```no_run
    /// use alioss::oss::OssClient;
    /// use alioss::oss::http::BaseUrl;
    /// use alioss::oss::response::response_traits::HasBucket;
    /// use alioss::oss::types::OssApi;
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let base_url: BaseUrl = "https://oss-cn-hangzhou.aliyuncs.com".parse().unwrap();
    ///     let client = OssClient::new(base_url).unwrap();
    ///     let resp = client.bucket_exists("bucket-name").build().send().await.unwrap();
    ///     println!("bucket '{}' exists: {}", resp.bucket(), resp.exists());
    /// }
    /// ```
    pub fn bucket_exists<S: Into<String>>(&self, bucket: S) -> BucketExistsBldr {
        BucketExists::builder().client(self.clone()).bucket(bucket)
    }
}
