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

use crate::oss::error::Error;
use crate::oss::oss_error_response::OssErrorCode;
use crate::oss::response::response_traits::{HasBucket, HasRequestId};
use crate::oss::transport::TransportResponse;
use crate::oss::types::{FromOssResponse, OssRequest};
use crate::impl_has_oss_fields;
use async_trait::async_trait;
use bytes::Bytes;
use http::HeaderMap;

/// Represents the response of the [bucket_exists()](crate::oss::client::OssClient::bucket_exists) API call.
///
/// A bucket that does not exist and a bucket owned by another account both read as absent.
#[derive(Clone, Debug)]
pub struct BucketExistsResponse {
    request: OssRequest,
    headers: HeaderMap,
    body: Bytes,

    exists: bool,
}
impl_has_oss_fields!(BucketExistsResponse);

impl HasBucket for BucketExistsResponse {}
impl HasRequestId for BucketExistsResponse {}

#[async_trait]
impl FromOssResponse for BucketExistsResponse {
    async fn from_oss_response(
        request: OssRequest,
        response: Result<TransportResponse, Error>,
    ) -> Result<Self, Error> {
        match response {
            Ok(resp) => Ok(Self {
                request,
                headers: resp.headers,
                body: resp.body,
                exists: true,
            }),
            Err(Error::Service(mut e))
                if matches!(
                    e.code(),
                    OssErrorCode::NoSuchBucket | OssErrorCode::AccessDenied
                ) =>
            {
                Ok(Self {
                    request,
                    headers: e.take_headers(),
                    body: Bytes::new(),
                    exists: false,
                })
            }
            Err(e) => Err(e),
        }
    }
}

impl BucketExistsResponse {
    /// Returns `true` if the bucket exists and is owned by the caller, `false` otherwise.
    pub fn exists(&self) -> bool {
        self.exists
    }
}
