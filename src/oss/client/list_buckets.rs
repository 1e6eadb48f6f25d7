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

use crate::oss::builders::{ListBuckets, ListBucketsBldr};
use crate::oss::client::OssClient;

impl OssClient {
    /// Creates a [`ListBuckets`] request builder to list the buckets of the authenticated account.
    ///
    /// To execute the request, call [`ListBuckets::send()`](crate::oss::types::OssApi::send),
    /// which returns a [`Result`] containing a [`ListBucketsResponse`](crate::oss::response::ListBucketsResponse).
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
    ///     let mut marker: Option<String> = None;
    ///     loop {
    ///         let resp = client
    ///             .list_buckets()
    ///             .marker(marker.take())
    ///             .max_keys(Some(100))
    ///             .build()
    ///             .send()
    ///             .await
    ///             .unwrap();
    ///         for bucket in resp.buckets() {
    ///             println!("{} ({})", bucket.name, bucket.location);
    ///         }
    ///         match resp.next_marker() {
    ///             Some(next) if resp.is_truncated() => marker = Some(next.to_owned()),
    ///             _ => break,
    ///         }
    ///     }
    /// }
    /// ```
    pub fn list_buckets(&self) -> ListBucketsBldr {
        ListBuckets::builder().client(self.clone())
    }
}
