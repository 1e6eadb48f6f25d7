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
use alioss::oss::types::{
    CorsConfig, CorsMethod, CorsRule, LifecycleConfig, LifecycleRule, LoggingConfig, OssApi,
    RuleStatus, WebsiteConfig,
};
use alioss_common::test_context::TestContext;

#[alioss_macros::test(memory_only)]
async fn invalid_configs_never_reach_the_service(ctx: TestContext, bucket_name: String) {
    let before = ctx.request_count();

    let err = ctx
        .client
        .put_bucket_cors(&bucket_name)
        .config(CorsConfig::new(vec![]))
        .build()
        .send()
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Validation(ValidationErr::EmptyRules { .. })));

    let err = ctx
        .client
        .put_bucket_cors(&bucket_name)
        .config(CorsConfig::new(vec![CorsRule::new(
            Vec::<String>::new(),
            [CorsMethod::Get],
        )]))
        .build()
        .send()
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Validation(ValidationErr::InvalidCorsRule(_))));

    let err = ctx
        .client
        .put_bucket_lifecycle(&bucket_name)
        .config(LifecycleConfig::new(vec![LifecycleRule::new(
            "no-action",
            "logs/",
            RuleStatus::Enabled,
        )]))
        .build()
        .send()
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Validation(ValidationErr::MissingLifecycleAction(_))
    ));

    let err = ctx
        .client
        .put_bucket_website(&bucket_name)
        .config(WebsiteConfig::new("", "error.html"))
        .build()
        .send()
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Validation(ValidationErr::InvalidWebsiteConfig(_))
    ));

    let err = ctx
        .client
        .put_bucket_logging(&bucket_name)
        .config(LoggingConfig::new("", "prefix/"))
        .build()
        .send()
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Validation(ValidationErr::InvalidLoggingConfig(_))
    ));

    let err = ctx
        .client
        .get_bucket_lifecycle("Not_A_Bucket")
        .build()
        .send()
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Validation(ValidationErr::InvalidBucketName { .. })
    ));

    assert_eq!(ctx.request_count(), before);
}

#[alioss_macros::test]
async fn resources_are_independent(ctx: TestContext, bucket_name: String) {
    ctx.client
        .put_bucket_website(&bucket_name)
        .config(WebsiteConfig::new("index.html", "error.html"))
        .build()
        .send()
        .await
        .unwrap();

    ctx.client
        .delete_bucket_cors(&bucket_name)
        .build()
        .send()
        .await
        .unwrap();
    ctx.client
        .delete_bucket_lifecycle(&bucket_name)
        .build()
        .send()
        .await
        .unwrap();

    let website: WebsiteConfig = ctx
        .client
        .get_bucket_website(&bucket_name)
        .build()
        .send()
        .await
        .unwrap()
        .into_config();
    assert_eq!(website.index_file, "index.html");
}
