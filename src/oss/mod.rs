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

//! Implementation of the Object Storage Service (aka OSS) bucket management client

pub mod builders;
pub mod client;
pub mod error;
pub mod header_constants;
pub mod http;
pub mod multimap_ext;
pub mod oss_error_response;
pub mod response;
pub mod transport;
pub mod types;
pub mod utils;

pub use client::{OssClient, OssClientBuilder};
