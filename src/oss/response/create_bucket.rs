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

use crate::oss::response::response_traits::{HasBucket, HasRequestId};
use crate::oss::types::OssRequest;
use crate::{impl_from_oss_response, impl_has_oss_fields};
use bytes::Bytes;
use http::HeaderMap;

/// Response of the [create_bucket()](crate::oss::client::OssClient::create_bucket) API
#[derive(Clone, Debug)]
pub struct CreateBucketResponse {
    request: OssRequest,
    headers: HeaderMap,
    body: Bytes,
}

impl_from_oss_response!(CreateBucketResponse);
impl_has_oss_fields!(CreateBucketResponse);

impl HasBucket for CreateBucketResponse {}
impl HasRequestId for CreateBucketResponse {}
