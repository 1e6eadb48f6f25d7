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
use alioss::oss::response::GetBucketConfigResponse;
use alioss::oss::types::{OssApi, RefererConfig};
use alioss_common::example::create_bucket_referer_config_example;
use alioss_common::test_context::TestContext;

#[alioss_macros::test]
async fn put_get_bucket_referer(ctx: TestContext, bucket_name: String) {
    let config: RefererConfig = create_bucket_referer_config_example();

    ctx.client
        .put_bucket_referer(&bucket_name)
        .config(config.clone())
        .build()
        .send()
        .await
        .unwrap();

    let resp: GetBucketConfigResponse<RefererConfig> = ctx
        .client
        .get_bucket_referer(&bucket_name)
        .build()
        .send()
        .await
        .unwrap();
    assert_eq!(resp.config(), &config);
    assert!(!resp.config().allow_empty_referer);
    assert!(resp.config().referers.contains("http://阿里云.com"));
}

#[alioss_macros::test]
async fn bucket_referer_default_and_reset(ctx: TestContext, bucket_name: String) {
    let resp: GetBucketConfigResponse<RefererConfig> = ctx
        .client
        .get_bucket_referer(&bucket_name)
        .build()
        .send()
        .await
        .unwrap();
    assert_eq!(resp.config(), &RefererConfig::default());

    ctx.client
        .put_bucket_referer(&bucket_name)
        .config(create_bucket_referer_config_example())
        .build()
        .send()
        .await
        .unwrap();

    // the referer whitelist cannot be deleted, an empty list resets it
    let reset = RefererConfig::new(true, Vec::<String>::new());
    ctx.client
        .put_bucket_referer(&bucket_name)
        .config(reset.clone())
        .build()
        .send()
        .await
        .unwrap();

    let resp: GetBucketConfigResponse<RefererConfig> = ctx
        .client
        .get_bucket_referer(&bucket_name)
        .build()
        .send()
        .await
        .unwrap();
    assert_eq!(resp.into_config(), reset);
}
