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

/// Response of the [put_bucket_acl()](crate::oss::client::OssClient::put_bucket_acl) API
#[derive(Clone, Debug)]
pub struct PutBucketAclResponse {
    request: OssRequest,
    headers: HeaderMap,
    body: Bytes,
}

impl_from_oss_response!(PutBucketAclResponse);
impl_has_oss_fields!(PutBucketAclResponse);

impl HasBucket for PutBucketAclResponse {}
impl HasRequestId for PutBucketAclResponse {}
