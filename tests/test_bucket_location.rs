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
use alioss::oss::types::{LocationConfig, OssApi};
use alioss_common::test_context::TestContext;

#[alioss_macros::test]
async fn get_bucket_location(ctx: TestContext, bucket_name: String) {
    let resp: GetBucketConfigResponse<LocationConfig> = ctx
        .client
        .get_bucket_location(&bucket_name)
        .build()
        .send()
        .await
        .unwrap();
    assert!(!resp.config().location.is_empty());
    assert!(resp.config().location.starts_with("oss-"));
}
