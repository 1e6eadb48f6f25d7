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

//! Request lifecycle hooks for the HTTP transport.
//!
//! Hooks observe and mutate every request [`HttpTransport`](crate::oss::transport::HttpTransport)
//! sends. They are registered with [`OssClientBuilder::hook`](crate::oss::OssClientBuilder::hook)
//! and run in registration order. The typical use is request signing: this crate does not
//! sign requests itself, so a hook that computes the `Authorization` header from the final
//! URL, headers and body is where credentials plug in.
//!
//! # Example
//!
//! ```no_run
//! use alioss::oss::client::hooks::{Extensions, RequestHooks};
//! use alioss::oss::error::Error;
//! use alioss::oss::header_constants::AUTHORIZATION;
//! use alioss::oss::http::Url;
//! use alioss::oss::multimap_ext::{Multimap, MultimapExt};
//! use bytes::Bytes;
//! use http::Method;
//!
//! #[derive(Debug)]
//! struct StaticToken(String);
//!
//! #[async_trait::async_trait]
//! impl RequestHooks for StaticToken {
//!     fn name(&self) -> &'static str {
//!         "static-token"
//!     }
//!
//!     async fn before_send_mut(
//!         &self,
//!         _method: &Method,
//!         _url: &mut Url,
//!         headers: &mut Multimap,
//!         _query_params: &Multimap,
//!         _bucket_name: Option<&str>,
//!         _body: Option<&Bytes>,
//!         _extensions: &mut Extensions,
//!     ) -> Result<(), Error> {
//!         headers.add(AUTHORIZATION, format!("OSS {}", self.0));
//!         Ok(())
//!     }
//! }
//! ```

pub use http::Extensions;

use crate::oss::error::Error;
use crate::oss::http::Url;
use crate::oss::multimap_ext::Multimap;
use bytes::Bytes;
use http::Method;
use reqwest::Response;
use std::fmt::Debug;

#[async_trait::async_trait]
pub trait RequestHooks: Debug {
    /// Name used in log messages when the hook fails.
    fn name(&self) -> &'static str;

    /// Called after the URL and the standard headers are set, right before the request is sent.
    ///
    /// Returning an error aborts the request.
    async fn before_send_mut(
        &self,
        _method: &Method,
        _url: &mut Url,
        _headers: &mut Multimap,
        _query_params: &Multimap,
        _bucket_name: Option<&str>,
        _body: Option<&Bytes>,
        _extensions: &mut Extensions,
    ) -> Result<(), Error> {
        Ok(())
    }

    /// Called with the raw result of the HTTP exchange, before any error mapping.
    async fn after_execute(
        &self,
        _method: &Method,
        _url: &Url,
        _headers: &Multimap,
        _query_params: &Multimap,
        _bucket_name: Option<&str>,
        _resp: &Result<Response, reqwest::Error>,
        _extensions: &mut Extensions,
    ) {
    }
}
