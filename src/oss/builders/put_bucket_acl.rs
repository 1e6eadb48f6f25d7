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
use crate::oss::error::ValidationErr;
use crate::oss::header_constants::X_OSS_ACL;
use crate::oss::multimap_ext::{Multimap, MultimapExt};
use crate::oss::response::PutBucketAclResponse;
use crate::oss::types::{BucketAcl, BucketResource, OssApi, OssRequest, ToOssRequest};
use crate::oss::utils::{check_bucket_name, insert};
use http::Method;
use typed_builder::TypedBuilder;

/// Argument builder for the `PutBucketAcl` OSS API operation.
///
/// The ACL travels in the `x-oss-acl` header; the request has no body.
#[derive(Clone, Debug, TypedBuilder)]
pub struct PutBucketAcl {
    #[builder(!default)] // force required
    client: OssClient,
    #[builder(default, setter(into))]
    extra_headers: Option<Multimap>,
    #[builder(default, setter(into))]
    extra_query_params: Option<Multimap>,
    #[builder(setter(into))] // force required + accept Into<String>
    bucket: String,
    #[builder(!default)] // force required
    acl: BucketAcl,
}

/// Builder type alias for [`PutBucketAcl`].
pub type PutBucketAclBldr = PutBucketAclBuilder<((OssClient,), (), (), (String,), ())>;

impl OssApi for PutBucketAcl {
    type OssResponse = PutBucketAclResponse;
}

impl ToOssRequest for PutBucketAcl {
    fn to_oss_request(self) -> Result<OssRequest, ValidationErr> {
        check_bucket_name(&self.bucket)?;

        let mut headers: Multimap = self.extra_headers.unwrap_or_default();
        headers.add(X_OSS_ACL, self.acl.as_str());

        Ok(OssRequest::builder()
            .client(self.client)
            .method(Method::PUT)
            .bucket(self.bucket)
            .query_params(insert(
                self.extra_query_params,
                BucketResource::Acl.query_key(),
            ))
            .headers(headers)
            .build())
    }
}
