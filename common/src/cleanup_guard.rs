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

use alioss::oss::OssClient;
use alioss::oss::error::Error;
use alioss::oss::types::OssApi;

/// Cleanup guard that removes the bucket and its configurations
pub struct CleanupGuard {
    client: OssClient,
    bucket_name: String,
}

impl CleanupGuard {
    pub fn new<S: Into<String>>(client: OssClient, bucket_name: S) -> Self {
        Self {
            client,
            bucket_name: bucket_name.into(),
        }
    }

    pub async fn cleanup(&self) {
        cleanup(self.client.clone(), &self.bucket_name).await;
    }
}

async fn delete_configs_and_bucket(client: &OssClient, bucket_name: &str) -> Result<(), Error> {
    client
        .delete_bucket_lifecycle(bucket_name)
        .build()
        .send()
        .await?;
    client.delete_bucket_cors(bucket_name).build().send().await?;
    client
        .delete_bucket_website(bucket_name)
        .build()
        .send()
        .await?;
    client
        .delete_bucket_logging(bucket_name)
        .build()
        .send()
        .await?;
    client.delete_bucket(bucket_name).build().send().await?;
    Ok(())
}

pub async fn cleanup(client: OssClient, bucket_name: &str) {
    tokio::select!(
        _ = tokio::time::sleep(std::time::Duration::from_secs(60)) => {
            eprintln!("Cleanup timeout after 60s while removing bucket {bucket_name}");
        },
        outcome = delete_configs_and_bucket(&client, bucket_name) => {
            if let Err(e) = outcome {
                eprintln!("Error removing bucket '{bucket_name}':\n{e}");
            }
        }
    );
}
