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
use alioss::oss::response::GetBucketConfigResponse;
use alioss::oss::types::{BucketResource, CorsConfig, CorsMethod, CorsRule, OssApi};
use alioss_common::example::create_bucket_cors_config_example;
use alioss_common::test_context::TestContext;

#[alioss_macros::test]
async fn put_get_delete_bucket_cors(ctx: TestContext, bucket_name: String) {
    let config: CorsConfig = create_bucket_cors_config_example();

    ctx.client
        .put_bucket_cors(&bucket_name)
        .config(config.clone())
        .build()
        .send()
        .await
        .unwrap();

    let resp: GetBucketConfigResponse<CorsConfig> = ctx
        .client
        .get_bucket_cors(&bucket_name)
        .build()
        .send()
        .await
        .unwrap();
    assert_eq!(resp.config(), &config);
    assert_eq!(resp.config().rules[0].max_age_seconds, Some(100));

    for _ in 0..2 {
        ctx.client
            .delete_bucket_cors(&bucket_name)
            .build()
            .send()
            .await
            .unwrap();
    }

    let err: Error = ctx
        .client
        .get_bucket_cors(&bucket_name)
        .build()
        .send()
        .await
        .unwrap_err();
    assert_eq!(err.not_found_resource(), Some(BucketResource::Cors));
}

#[alioss_macros::test]
async fn bucket_cors_sets_compare_unordered(ctx: TestContext, bucket_name: String) {
    let rule = CorsRule::new(
        ["https://b.example.com", "https://a.example.com"],
        [CorsMethod::Put, CorsMethod::Get],
    )
    .with_allowed_headers(["x-oss-meta-b", "x-oss-meta-a"]);
    let reordered = CorsRule::new(
        ["https://a.example.com", "https://b.example.com"],
        [CorsMethod::Get, CorsMethod::Put],
    )
    .with_allowed_headers(["x-oss-meta-a", "x-oss-meta-b"]);

    ctx.client
        .put_bucket_cors(&bucket_name)
        .config(CorsConfig::new(vec![rule]))
        .build()
        .send()
        .await
        .unwrap();

    let resp: GetBucketConfigResponse<CorsConfig> = ctx
        .client
        .get_bucket_cors(&bucket_name)
        .build()
        .send()
        .await
        .unwrap();
    assert_eq!(resp.into_config(), CorsConfig::new(vec![reordered]));
}
