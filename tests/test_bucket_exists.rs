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
use alioss::oss::response::BucketExistsResponse;
use alioss::oss::response::response_traits::HasBucket;
use alioss::oss::types::OssApi;
use alioss_common::memory_transport::MemoryTransport;
use alioss_common::test_context::TestContext;
use alioss_common::utils::rand_bucket_name;

#[alioss_macros::test]
async fn bucket_exists(ctx: TestContext, bucket_name: String) {
    let resp: BucketExistsResponse = ctx
        .client
        .bucket_exists(&bucket_name)
        .build()
        .send()
        .await
        .unwrap();
    assert!(resp.exists());
    assert_eq!(resp.bucket(), bucket_name);
}

#[alioss_macros::test(no_bucket)]
async fn bucket_exists_never_created(ctx: TestContext) {
    let bucket_name = rand_bucket_name();
    let resp: BucketExistsResponse = ctx
        .client
        .bucket_exists(&bucket_name)
        .build()
        .send()
        .await
        .unwrap();
    assert!(!resp.exists());
}

#[tokio::test]
async fn bucket_exists_not_owned() {
    let ctx = TestContext::in_memory(MemoryTransport::new().with_foreign_bucket("someone-elses"));
    let resp: BucketExistsResponse = ctx
        .client
        .bucket_exists("someone-elses")
        .build()
        .send()
        .await
        .unwrap();
    assert!(!resp.exists());
}
