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
use alioss::oss::response::{GetBucketConfigResponse, PutBucketAclResponse};
use alioss::oss::response::response_traits::{HasBucket, HasRequestId};
use alioss::oss::types::{AccessControlPolicy, BucketAcl, OssApi};
use alioss_common::test_context::TestContext;

#[alioss_macros::test(acl = "public-read")]
async fn bucket_acl_created_public_read(ctx: TestContext, bucket_name: String) {
    let resp: GetBucketConfigResponse<AccessControlPolicy> = ctx
        .client
        .get_bucket_acl(&bucket_name)
        .build()
        .send()
        .await
        .unwrap();
    assert_eq!(resp.config().acl, BucketAcl::PublicRead);
    assert!(!resp.config().owner.id.is_empty());
}

#[alioss_macros::test]
async fn put_get_bucket_acl(ctx: TestContext, bucket_name: String) {
    for acl in [
        BucketAcl::PublicRead,
        BucketAcl::Private,
        BucketAcl::PublicReadWrite,
        BucketAcl::Private,
    ] {
        let resp: PutBucketAclResponse = ctx
            .client
            .put_bucket_acl(&bucket_name)
            .acl(acl)
            .build()
            .send()
            .await
            .unwrap();
        assert_eq!(resp.bucket(), bucket_name);
        assert!(resp.request_id().is_some());

        let policy: AccessControlPolicy = ctx
            .client
            .get_bucket_acl(&bucket_name)
            .build()
            .send()
            .await
            .unwrap()
            .into_config();
        assert_eq!(policy.acl, acl);
    }
}
