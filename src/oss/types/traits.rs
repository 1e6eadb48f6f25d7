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

//! Core traits for OSS request and response handling.

use super::oss_request::OssRequest;
use crate::oss::error::{Error, ValidationErr};
use crate::oss::transport::TransportResponse;
use async_trait::async_trait;

/// Trait for converting a request builder into a concrete [`OssRequest`].
///
/// All validation of the builder's arguments happens here, so an invalid request
/// fails before anything is sent.
pub trait ToOssRequest: Sized {
    /// Consumes this request builder and returns an [`OssRequest`].
    fn to_oss_request(self) -> Result<OssRequest, ValidationErr>;
}

/// Trait for converting the outcome of an executed request into a typed response.
///
/// Implementations see the error as well as the success case, which is where
/// service errors with an expected meaning (a missing configuration, a missing bucket)
/// are translated.
#[async_trait]
pub trait FromOssResponse: Sized {
    async fn from_oss_response(
        request: OssRequest,
        response: Result<TransportResponse, Error>,
    ) -> Result<Self, Error>;
}

/// Common interface of all request builders.
///
/// ```no_run
/// use alioss::oss::OssClient;
/// use alioss::oss::types::OssApi;
///
/// # async fn run(client: OssClient) -> Result<(), alioss::oss::error::Error> {
/// let resp = client.get_bucket_cors("my-bucket").build().send().await?;
/// println!("{:?}", resp.config());
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait OssApi: ToOssRequest {
    /// The response type associated with this request builder.
    type OssResponse: FromOssResponse;

    /// Sends the request and returns the corresponding typed response.
    async fn send(self) -> Result<Self::OssResponse, Error> {
        let mut req: OssRequest = self.to_oss_request()?;
        let resp: Result<TransportResponse, Error> = req.execute().await;
        Self::OssResponse::from_oss_response(req, resp).await
    }
}
