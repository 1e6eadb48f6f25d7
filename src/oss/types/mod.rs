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

//! Configuration types and the request/response traits

pub mod acl_config;
pub mod basic_types;
pub mod bucket_config;
pub mod cors_config;
pub mod lifecycle_config;
pub mod location_config;
pub mod logging_config;
pub mod oss_request;
pub mod referer_config;
pub mod traits;
pub mod website_config;

pub use acl_config::{AccessControlPolicy, BucketAcl};
pub use basic_types::{BucketInfo, Owner, StorageClass};
pub use bucket_config::{
    AbsencePolicy, BucketConfig, BucketResource, DeletableConfig, WritableConfig, decode_config,
};
pub use cors_config::{CorsConfig, CorsMethod, CorsRule};
pub use lifecycle_config::{
    LifecycleConfig, LifecycleExpiration, LifecycleRule, RuleStatus, StorageTransition,
};
pub use location_config::LocationConfig;
pub use logging_config::LoggingConfig;
pub use oss_request::OssRequest;
pub use referer_config::RefererConfig;
pub use traits::{FromOssResponse, OssApi, ToOssRequest};
pub use website_config::WebsiteConfig;
