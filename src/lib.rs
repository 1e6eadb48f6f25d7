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

//! # OSS bucket configuration SDK (`alioss`)
//!
//! This crate provides a strongly-typed, async interface to the bucket management APIs of
//! Alibaba Cloud OSS and compatible object storage services: ACLs, lifecycle rules, CORS,
//! referer whitelists, static website hosting, access logging, location and bucket existence.
//!
//! Every bucket sub-resource follows the same round trip. A typed configuration value is
//! serialized to the service's XML schema and sent with [`PutBucketConfig`](oss::builders::PutBucketConfig),
//! read back and decoded with [`GetBucketConfig`](oss::builders::GetBucketConfig), and removed with
//! the idempotent [`DeleteBucketConfig`](oss::builders::DeleteBucketConfig).
//!
//! ## Basic Usage
//!
//! ```no_run
//! use alioss::oss::OssClient;
//! use alioss::oss::http::BaseUrl;
//! use alioss::oss::types::{LifecycleConfig, LifecycleExpiration, LifecycleRule, OssApi, RuleStatus};
//!
//! #[tokio::main]
//! async fn main() {
//!     let base_url: BaseUrl = "https://oss-cn-hangzhou.aliyuncs.com".parse().unwrap();
//!     let client = OssClient::new(base_url).unwrap();
//!
//!     let rule = LifecycleRule::new("expire-logs", "logs/", RuleStatus::Enabled)
//!         .with_expiration(LifecycleExpiration::Days(30));
//!     client
//!         .put_bucket_lifecycle("my-bucket")
//!         .config(LifecycleConfig::new(vec![rule]))
//!         .build()
//!         .send()
//!         .await
//!         .expect("request failed");
//! }
//! ```
//!
//! ## Design
//! - Each API method on [`oss::OssClient`] returns a builder struct
//! - Builders implement [`oss::types::ToOssRequest`] for request conversion and [`oss::types::OssApi`] for execution
//! - Responses implement [`oss::types::FromOssResponse`] for consistent deserialization
//! - Requests travel through a pluggable [`oss::transport::Transport`]

#![allow(clippy::result_large_err)]
#![allow(clippy::too_many_arguments)]
pub mod oss;

#[cfg(test)]
#[macro_use]
extern crate quickcheck;
