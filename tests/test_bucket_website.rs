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
use alioss::oss::oss_error_response::OssErrorCode;
use alioss::oss::response::GetBucketConfigResponse;
use alioss::oss::types::{BucketResource, OssApi, WebsiteConfig};
use alioss_common::example::create_bucket_website_config_example;
use alioss_common::test_context::TestContext;

#[alioss_macros::test]
async fn put_get_delete_bucket_website(ctx: TestContext, bucket_name: String) {
    let config: WebsiteConfig = create_bucket_website_config_example();

    ctx.client
        .put_bucket_website(&bucket_name)
        .config(config.clone())
        .build()
        .send()
        .await
        .unwrap();

    let resp: GetBucketConfigResponse<WebsiteConfig> = ctx
        .client
        .get_bucket_website(&bucket_name)
        .build()
        .send()
        .await
        .unwrap();
    assert_eq!(resp.config(), &config);

    ctx.client
        .delete_bucket_website(&bucket_name)
        .build()
        .send()
        .await
        .unwrap();
    ctx.client
        .delete_bucket_website(&bucket_name)
        .build()
        .send()
        .await
        .unwrap();

    let resp = ctx
        .client
        .get_bucket_website(&bucket_name)
        .build()
        .send()
        .await;
    match resp {
        Err(Error::NotFound(e)) => {
            assert_eq!(e.resource, BucketResource::Website);
            assert_eq!(e.code, OssErrorCode::NoSuchWebsiteConfiguration);
        }
        v => panic!("expected website configuration to be absent, got {v:?}"),
    }
}

#[alioss_macros::test]
async fn bucket_website_index_only(ctx: TestContext, bucket_name: String) {
    let config = WebsiteConfig::new("index.html", "");

    ctx.client
        .put_bucket_website(&bucket_name)
        .config(config.clone())
        .build()
        .send()
        .await
        .unwrap();

    let resp: GetBucketConfigResponse<WebsiteConfig> = ctx
        .client
        .get_bucket_website(&bucket_name)
        .build()
        .send()
        .await
        .unwrap();
    assert_eq!(resp.config().index_file, "index.html");
    assert_eq!(resp.config().error_file, "");
}
