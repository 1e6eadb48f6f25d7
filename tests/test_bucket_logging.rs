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
use alioss::oss::types::{LoggingConfig, OssApi};
use alioss_common::example::create_bucket_logging_config_example;
use alioss_common::test_context::TestContext;

#[alioss_macros::test]
async fn put_get_delete_bucket_logging(ctx: TestContext, bucket_name: String) {
    // logs are written into the bucket itself
    let config: LoggingConfig = create_bucket_logging_config_example(&bucket_name);

    ctx.client
        .put_bucket_logging(&bucket_name)
        .config(config.clone())
        .build()
        .send()
        .await
        .unwrap();

    let resp: GetBucketConfigResponse<LoggingConfig> = ctx
        .client
        .get_bucket_logging(&bucket_name)
        .build()
        .send()
        .await
        .unwrap();
    assert_eq!(resp.config(), &config);
    assert!(resp.config().is_enabled());

    for _ in 0..2 {
        ctx.client
            .delete_bucket_logging(&bucket_name)
            .build()
            .send()
            .await
            .unwrap();
    }

    let resp: GetBucketConfigResponse<LoggingConfig> = ctx
        .client
        .get_bucket_logging(&bucket_name)
        .build()
        .send()
        .await
        .unwrap();
    assert_eq!(resp.config(), &LoggingConfig::new("", ""));
    assert!(!resp.config().is_enabled());
}

#[alioss_macros::test]
async fn bucket_logging_unset_reads_empty(ctx: TestContext, bucket_name: String) {
    let logging: LoggingConfig = ctx
        .client
        .get_bucket_logging(&bucket_name)
        .build()
        .send()
        .await
        .unwrap()
        .into_config();
    assert_eq!(logging.target_bucket, "");
    assert_eq!(logging.target_prefix, "");
}
