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

//! Argument builders for [`OssClient`](crate::oss::client::OssClient) APIs

mod bucket_config;
mod bucket_exists;
mod create_bucket;
mod delete_bucket;
mod list_buckets;
mod put_bucket_acl;

pub use bucket_config::*;
pub use bucket_exists::*;
pub use create_bucket::*;
pub use delete_bucket::*;
pub use list_buckets::*;
pub use put_bucket_acl::*;
