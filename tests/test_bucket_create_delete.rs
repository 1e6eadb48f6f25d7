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
use alioss::oss::error::{Error, ValidationErr};
use alioss::oss::oss_error_response::OssErrorCode;
use alioss::oss::response::response_traits::HasBucket;
use alioss::oss::response::{CreateBucketResponse, DeleteBucketResponse};
use alioss::oss::types::{AccessControlPolicy, BucketAcl, OssApi, StorageClass};
use alioss_common::test_context::TestContext;
use alioss_common::utils::rand_bucket_name;

#[alioss_macros::test(no_bucket)]
async fn bucket_create_and_delete(ctx: TestContext) {
    let bucket_name = rand_bucket_name();

    let resp: CreateBucketResponse = ctx
        .client
        .create_bucket(&bucket_name)
        .acl(BucketAcl::PublicRead)
        .storage_class(StorageClass::IA)
        .build()
        .send()
        .await
        .unwrap();
    assert_eq!(resp.bucket(), bucket_name);

    let policy: AccessControlPolicy = ctx
        .client
        .get_bucket_acl(&bucket_name)
        .build()
        .send()
        .await
        .unwrap()
        .into_config();
    assert_eq!(policy.acl, BucketAcl::PublicRead);

    let err = ctx
        .client
        .create_bucket(&bucket_name)
        .build()
        .send()
        .await
        .unwrap_err();
    assert!(err.is_service_code(&OssErrorCode::BucketAlreadyExists));

    let resp: DeleteBucketResponse = ctx
        .client
        .delete_bucket(&bucket_name)
        .build()
        .send()
        .await
        .unwrap();
    assert_eq!(resp.bucket(), bucket_name);

    let exists = ctx
        .client
        .bucket_exists(&bucket_name)
        .build()
        .send()
        .await
        .unwrap()
        .exists();
    assert!(!exists);

    match ctx.client.delete_bucket(&bucket_name).build().send().await {
        Err(Error::Service(e)) => assert_eq!(e.code(), &OssErrorCode::NoSuchBucket),
        v => panic!("expected NoSuchBucket, got {v:?}"),
    }
}

#[alioss_macros::test(no_bucket)]
async fn bucket_create_invalid_name(ctx: TestContext) {
    for name in ["ab", "-leading-dash", "UpperCase", "under_score"] {
        match ctx.client.create_bucket(name).build().send().await {
            Err(Error::Validation(ValidationErr::InvalidBucketName { name: n, .. })) => {
                assert_eq!(n, name)
            }
            v => panic!("expected invalid bucket name for '{name}', got {v:?}"),
        }
    }
}
