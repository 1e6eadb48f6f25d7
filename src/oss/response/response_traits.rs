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

use crate::oss::header_constants::X_OSS_REQUEST_ID;
use crate::oss::types::OssRequest;
use bytes::Bytes;
use http::HeaderMap;

#[macro_export]
/// Implements the `FromOssResponse` trait for responses that only keep the raw request, headers and body.
macro_rules! impl_from_oss_response {
    ($($ty:ty),* $(,)?) => {
        $(
            #[async_trait::async_trait]
            impl $crate::oss::types::FromOssResponse for $ty {
                async fn from_oss_response(
                    request: $crate::oss::types::OssRequest,
                    response: Result<
                        $crate::oss::transport::TransportResponse,
                        $crate::oss::error::Error,
                    >,
                ) -> Result<Self, $crate::oss::error::Error> {
                    let resp = response?;
                    Ok(Self {
                        request,
                        headers: resp.headers,
                        body: resp.body,
                    })
                }
            }
        )*
    };
}

#[macro_export]
/// Implements the `HasOssFields` trait for the specified types.
macro_rules! impl_has_oss_fields {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::oss::response::response_traits::HasOssFields for $ty {
                fn request(&self) -> &$crate::oss::types::OssRequest {
                    &self.request
                }

                fn headers(&self) -> &http::HeaderMap {
                    &self.headers
                }

                fn body(&self) -> &bytes::Bytes {
                    &self.body
                }
            }
        )*
    };
}

pub trait HasOssFields {
    /// The request that was sent to the OSS API.
    fn request(&self) -> &OssRequest;
    /// HTTP headers returned by the server.
    fn headers(&self) -> &HeaderMap;
    /// The raw response body returned by the server.
    fn body(&self) -> &Bytes;
}

/// Returns the name of the bucket the request addressed.
pub trait HasBucket: HasOssFields {
    #[inline]
    fn bucket(&self) -> &str {
        self.request().bucket.as_deref().unwrap_or_default()
    }
}

/// Returns the `x-oss-request-id` the service assigned to the request, if any.
pub trait HasRequestId: HasOssFields {
    #[inline]
    fn request_id(&self) -> Option<&str> {
        self.headers()
            .get(X_OSS_REQUEST_ID)
            .and_then(|v| v.to_str().ok())
    }
}
