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

use crate::oss::client::OssClient;
use crate::oss::error::Error;
use crate::oss::multimap_ext::Multimap;
use crate::oss::transport::{TransportRequest, TransportResponse};
use bytes::Bytes;
use http::Method;
use typed_builder::TypedBuilder;

#[derive(Clone, Debug, TypedBuilder)]
/// Generic OssRequest
pub struct OssRequest {
    #[builder(!default)] // force required
    pub(crate) client: OssClient,

    #[builder(!default)] // force required
    method: Method,

    #[builder(default, setter(into))]
    pub(crate) bucket: Option<String>,

    #[builder(default)]
    pub(crate) query_params: Multimap,

    #[builder(default)]
    headers: Multimap,

    #[builder(default, setter(into))]
    body: Option<Bytes>,
}

impl OssRequest {
    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn headers(&self) -> &Multimap {
        &self.headers
    }

    /// Execute the request, returning the response. Only used in [`OssApi::send()`](super::OssApi::send)
    pub async fn execute(&mut self) -> Result<TransportResponse, Error> {
        self.client
            .execute(TransportRequest {
                method: self.method.clone(),
                bucket: self.bucket.clone(),
                query_params: self.query_params.clone(),
                headers: self.headers.clone(),
                body: self.body.clone(),
            })
            .await
    }
}
