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

use crate::oss::builders::{CreateBucket, CreateBucketBldr};
use crate::oss::client::OssClient;

impl OssClient {
    /// Creates a [`CreateBucket`] request builder.
    ///
    /// To execute the request, call [`CreateBucket::send()`](crate::oss::types::OssApi::send),
    /// which returns a [`Result`] containing a [`CreateBucketResponse`](crate::oss::response::CreateBucketResponse).
    ///
    /// # Example
    ///
    /// ```no_run
    /// use alioss::oss::OssClient;
    /// use alioss::oss::http::BaseUrl;
    /// use alioss::oss::types::{BucketAcl, OssApi, StorageClass};
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let base_url: BaseUrl = "https://oss-cn-hangzhou.aliyuncs.com".parse().unwrap();
    ///     let client = OssClient::new(base_url).unwrap();
    ///     client
    ///         .create_bucket("bucket-name")
    ///         .acl(BucketAcl::PublicRead)
    ///         .storage_class(StorageClass::IA)
    ///         .build()
    ///         .send()
    ///         .await
    ///         .unwrap();
    /// }
    /// ```
    pub fn create_bucket<S: Into<String>>(&self, bucket: S) -> CreateBucketBldr {
        CreateBucket::builder().client(self.clone()).bucket(bucket)
    }
}
