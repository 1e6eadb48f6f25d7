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
use crate::oss::multimap_ext::{Multimap, MultimapExt};
use crate::oss::response::ListBucketsResponse;
use crate::oss::types::{OssApi, OssRequest, ToOssRequest};
use http::Method;
use typed_builder::TypedBuilder;

/// Maximum value of `max-keys` accepted by the service
pub const MAX_LIST_BUCKETS_KEYS: u16 = 1000;

/// Argument builder for the `ListBuckets` (`GetService`) OSS API operation.
///
/// Results are paged: pass the returned `next_marker` as `marker` to continue.
#[derive(Clone, Debug, TypedBuilder)]
pub struct ListBuckets {
    #[builder(!default)] // force required
    client: OssClient,
    #[builder(default, setter(into))]
    extra_headers: Option<Multimap>,
    #[builder(default, setter(into))]
    extra_query_params: Option<Multimap>,
    /// Only list buckets whose name starts with this prefix
    #[builder(default, setter(into))]
    prefix: Option<String>,
    /// List buckets after this name, in lexicographic order
    #[builder(default, setter(into))]
    marker: Option<String>,
    #[builder(default, setter(into))]
    max_keys: Option<u16>,
}

/// Builder type alias for [`ListBuckets`].
pub type ListBucketsBldr = ListBucketsBuilder<((OssClient,), (), (), (), (), ())>;

impl OssApi for ListBuckets {
    type OssResponse = ListBucketsResponse;
}

impl ToOssRequest for ListBuckets {
    fn to_oss_request(self) -> Result<OssRequest, ValidationErr> {
        let mut query_params: Multimap = self.extra_query_params.unwrap_or_default();
        if let Some(prefix) = self.prefix {
            query_params.add("prefix", prefix);
        }
        if let Some(marker) = self.marker {
            query_params.add("marker", marker);
        }
        if let Some(max_keys) = self.max_keys {
            if !(1..=MAX_LIST_BUCKETS_KEYS).contains(&max_keys) {
                return Err(ValidationErr::InvalidMaxKeys {
                    value: max_keys,
                    max: MAX_LIST_BUCKETS_KEYS,
                });
            }
            query_params.add("max-keys", max_keys.to_string());
        }

        Ok(OssRequest::builder()
            .client(self.client)
            .method(Method::GET)
            .query_params(query_params)
            .headers(self.extra_headers.unwrap_or_default())
            .build())
    }
}
