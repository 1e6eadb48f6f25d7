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
use crate::oss::multimap_ext::Multimap;
use crate::oss::response::BucketExistsResponse;
use crate::oss::types::{BucketResource, OssApi, OssRequest, ToOssRequest};
use crate::oss::utils::{check_bucket_name, insert};
use http::Method;
use typed_builder::TypedBuilder;

/// Argument builder for checking whether a bucket exists and is accessible.
///
/// The check reads the bucket ACL (`GET /?acl`), which every bucket has.
#[derive(Clone, Debug, TypedBuilder)]
pub struct BucketExists {
    #[builder(!default)] // force required
    client: OssClient,
    #[builder(default, setter(into))]
    extra_headers: Option<Multimap>,
    #[builder(default, setter(into))]
    extra_query_params: Option<Multimap>,
    #[builder(setter(into))] // force required + accept Into<String>
    bucket: String,
}

/// Builder type alias for [`BucketExists`].
pub type BucketExistsBldr = BucketExistsBuilder<((OssClient,), (), (), (String,))>;

impl OssApi for BucketExists {
    type OssResponse = BucketExistsResponse;
}

impl ToOssRequest for BucketExists {
    fn to_oss_request(self) -> Result<OssRequest, ValidationErr> {
        check_bucket_name(&self.bucket)?;

        Ok(OssRequest::builder()
            .client(self.client)
            .method(Method::GET)
            .bucket(self.bucket)
            .query_params(insert(
                self.extra_query_params,
                BucketResource::Acl.query_key(),
            ))
            .headers(self.extra_headers.unwrap_or_default())
            .build())
    }
}
