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

use alioss::oss::types::{
    CorsConfig, CorsMethod, CorsRule, LifecycleConfig, LifecycleExpiration, LifecycleRule,
    LoggingConfig, RefererConfig, RuleStatus, StorageClass, WebsiteConfig,
};
use chrono::NaiveDate;

pub fn create_bucket_lifecycle_config_examples() -> LifecycleConfig {
    LifecycleConfig::new(vec![
        LifecycleRule::new("delete-after-days", "logs/", RuleStatus::Enabled)
            .with_expiration(LifecycleExpiration::Days(356)),
        LifecycleRule::new("delete-on-date", "tmp/", RuleStatus::Disabled)
            .with_expiration(LifecycleExpiration::Date(
                NaiveDate::from_ymd_opt(2100, 12, 25).unwrap(),
            )),
    ])
}

pub fn create_bucket_lifecycle_config_with_transitions_example() -> LifecycleConfig {
    LifecycleConfig::new(vec![
        LifecycleRule::new("tiering", "archive/", RuleStatus::Enabled)
            .with_transition(LifecycleExpiration::Days(30), StorageClass::IA)
            .with_transition(LifecycleExpiration::Days(180), StorageClass::Archive)
            .with_abort_multipart_upload(LifecycleExpiration::Days(7)),
    ])
}

pub fn create_bucket_cors_config_example() -> CorsConfig {
    CorsConfig::new(vec![
        CorsRule::new(
            ["http://www.example.com", "https://*.example.com"],
            [CorsMethod::Get, CorsMethod::Put, CorsMethod::Head],
        )
        .with_allowed_headers(["Authorization", "x-oss-*"])
        .with_expose_headers(["ETag", "x-oss-request-id"])
        .with_max_age_seconds(100),
        CorsRule::new(["*"], [CorsMethod::Get]),
    ])
}

pub fn create_bucket_website_config_example() -> WebsiteConfig {
    WebsiteConfig::new("index.html", "error.html")
}

pub fn create_bucket_logging_config_example(target_bucket: &str) -> LoggingConfig {
    LoggingConfig::new(target_bucket, "access-log/")
}

pub fn create_bucket_referer_config_example() -> RefererConfig {
    RefererConfig::new(
        false,
        ["http://www.aliyun.com", "https://*.example.com", "http://阿里云.com"],
    )
}
