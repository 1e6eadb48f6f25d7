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
use alioss::oss::error::Error;
use alioss::oss::response::response_traits::HasBucket;
use alioss::oss::response::{
    DeleteBucketConfigResponse, GetBucketConfigResponse, PutBucketConfigResponse,
};
use alioss::oss::types::{BucketResource, LifecycleConfig, LifecycleExpiration, OssApi};
use alioss_common::example::{
    create_bucket_lifecycle_config_examples,
    create_bucket_lifecycle_config_with_transitions_example,
};
use alioss_common::test_context::TestContext;
use chrono::NaiveDate;

#[alioss_macros::test]
async fn put_get_delete_bucket_lifecycle(ctx: TestContext, bucket_name: String) {
    let config: LifecycleConfig = create_bucket_lifecycle_config_examples();

    let resp: PutBucketConfigResponse<LifecycleConfig> = ctx
        .client
        .put_bucket_lifecycle(&bucket_name)
        .config(config.clone())
        .build()
        .send()
        .await
        .unwrap();
    assert_eq!(resp.bucket(), bucket_name);

    let resp: GetBucketConfigResponse<LifecycleConfig> = ctx
        .client
        .get_bucket_lifecycle(&bucket_name)
        .build()
        .send()
        .await
        .unwrap();
    assert_eq!(resp.bucket(), bucket_name);
    assert_eq!(resp.config(), &config);

    let rules = &resp.config().rules;
    assert_eq!(rules[0].expiration, Some(LifecycleExpiration::Days(356)));
    assert_eq!(
        rules[1].expiration,
        Some(LifecycleExpiration::Date(
            NaiveDate::from_ymd_opt(2100, 12, 25).unwrap()
        ))
    );

    let resp: DeleteBucketConfigResponse<LifecycleConfig> = ctx
        .client
        .delete_bucket_lifecycle(&bucket_name)
        .build()
        .send()
        .await
        .unwrap();
    assert_eq!(resp.bucket(), bucket_name);

    let err = ctx
        .client
        .get_bucket_lifecycle(&bucket_name)
        .build()
        .send()
        .await
        .unwrap_err();
    assert_eq!(err.not_found_resource(), Some(BucketResource::Lifecycle));
}

#[alioss_macros::test]
async fn bucket_lifecycle_put_replaces(ctx: TestContext, bucket_name: String) {
    ctx.client
        .put_bucket_lifecycle(&bucket_name)
        .config(create_bucket_lifecycle_config_examples())
        .build()
        .send()
        .await
        .unwrap();

    let config = create_bucket_lifecycle_config_with_transitions_example();
    ctx.client
        .put_bucket_lifecycle(&bucket_name)
        .config(config.clone())
        .build()
        .send()
        .await
        .unwrap();

    let resp: GetBucketConfigResponse<LifecycleConfig> = ctx
        .client
        .get_bucket_lifecycle(&bucket_name)
        .build()
        .send()
        .await
        .unwrap();
    assert_eq!(resp.into_config(), config);
}

#[alioss_macros::test]
async fn bucket_lifecycle_delete_is_idempotent(ctx: TestContext, bucket_name: String) {
    for _ in 0..2 {
        ctx.client
            .delete_bucket_lifecycle(&bucket_name)
            .build()
            .send()
            .await
            .unwrap();
    }

    let resp = ctx
        .client
        .get_bucket_lifecycle(&bucket_name)
        .build()
        .send()
        .await;
    match resp {
        Err(Error::NotFound(e)) => {
            assert_eq!(e.resource, BucketResource::Lifecycle);
            assert_eq!(e.bucket, bucket_name);
        }
        v => panic!("expected lifecycle to be absent, got {v:?}"),
    }
}
