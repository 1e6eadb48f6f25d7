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
use crate::oss::header_constants::{APPLICATION_XML, CONTENT_MD5, CONTENT_TYPE, X_OSS_ACL};
use crate::oss::multimap_ext::{Multimap, MultimapExt};
use crate::oss::response::CreateBucketResponse;
use crate::oss::types::{BucketAcl, OssApi, OssRequest, StorageClass, ToOssRequest};
use crate::oss::utils::{
    check_bucket_name, md5sum_hash, parent_element, text_element, write_xml_document,
};
use bytes::Bytes;
use http::Method;
use typed_builder::TypedBuilder;

/// Argument builder for the `PutBucket` OSS API operation.
///
/// This struct constructs the parameters required for the [`OssClient::create_bucket`] method.
#[derive(Clone, Debug, TypedBuilder)]
pub struct CreateBucket {
    #[builder(!default)] // force required
    client: OssClient,
    #[builder(default, setter(into))]
    extra_headers: Option<Multimap>,
    #[builder(default, setter(into))]
    extra_query_params: Option<Multimap>,
    #[builder(setter(into))] // force required + accept Into<String>
    bucket: String,
    /// Canned ACL of the new bucket, sent as `x-oss-acl`
    #[builder(default, setter(into))]
    acl: Option<BucketAcl>,
    #[builder(default, setter(into))]
    storage_class: Option<StorageClass>,
}

/// Builder type alias for [`CreateBucket`].
///
/// Constructed via [`CreateBucket::builder()`](CreateBucket::builder) and used to build a [`CreateBucket`] instance.
pub type CreateBucketBldr = CreateBucketBuilder<((OssClient,), (), (), (String,), (), ())>;

impl OssApi for CreateBucket {
    type OssResponse = CreateBucketResponse;
}

impl ToOssRequest for CreateBucket {
    fn to_oss_request(self) -> Result<OssRequest, ValidationErr> {
        check_bucket_name(&self.bucket)?;

        let mut headers: Multimap = self.extra_headers.unwrap_or_default();
        if let Some(acl) = self.acl {
            headers.add(X_OSS_ACL, acl.as_str());
        }

        let body: Option<Bytes> = match self.storage_class {
            Some(storage_class) => {
                let root = parent_element(
                    "CreateBucketConfiguration",
                    [text_element("StorageClass", storage_class.as_str())],
                );
                let bytes: Bytes = write_xml_document(&root)?.into();
                headers.add(CONTENT_MD5, md5sum_hash(&bytes));
                headers.add(CONTENT_TYPE, APPLICATION_XML);
                Some(bytes)
            }
            None => None,
        };

        Ok(OssRequest::builder()
            .client(self.client)
            .method(Method::PUT)
            .bucket(self.bucket)
            .query_params(self.extra_query_params.unwrap_or_default())
            .headers(headers)
            .body(body)
            .build())
    }
}
