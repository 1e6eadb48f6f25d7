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

use crate::oss::error::ValidationErr;
use crate::oss::multimap_ext::{Multimap, MultimapExt};
use http::Uri;
use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Debug)]
/// Represents HTTP URL
pub struct Url {
    pub https: bool,
    pub host: String,
    pub port: u16,
    pub path: String,
    pub query: Multimap,
}

impl Url {
    pub fn host_header_value(&self) -> String {
        if self.port > 0 {
            return format!("{}:{}", self.host, self.port);
        }
        self.host.clone()
    }
}

impl Default for Url {
    fn default() -> Self {
        Self {
            https: true,
            host: String::default(),
            port: u16::default(),
            path: String::from("/"),
            query: Multimap::default(),
        }
    }
}

impl fmt::Display for Url {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.host.is_empty() {
            return Err(fmt::Error);
        }

        f.write_str(if self.https { "https://" } else { "http://" })?;
        f.write_str(&self.host_header_value())?;

        if !self.path.starts_with('/') {
            f.write_str("/")?;
        }
        f.write_str(&self.path)?;

        if !self.query.is_empty() {
            f.write_str("?")?;
            f.write_str(&self.query.to_query_string())?;
        }

        Ok(())
    }
}

/// Checks if given value is a DNS host name (as opposed to an IP address)
pub fn match_hostname(value: &str) -> bool {
    lazy_static! {
        static ref HOSTNAME_REGEX: Regex =
            Regex::new(r"^([a-z_\d-]{1,63}\.)*([a-z_\d-]{1,63})$").unwrap();
    }

    if !HOSTNAME_REGEX.is_match(value.to_lowercase().as_str()) {
        return false;
    }

    value.split('.').all(|token| {
        !(token.starts_with('-')
            || token.starts_with('_')
            || token.ends_with('-')
            || token.ends_with('_'))
    })
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// Base URL of the service endpoint, e.g. `https://oss-cn-hangzhou.aliyuncs.com`
pub struct BaseUrl {
    pub https: bool,
    host: String,
    port: u16,
    /// Address buckets as `bucket.host` rather than `host/bucket`
    pub virtual_style: bool,
}

impl Default for BaseUrl {
    fn default() -> Self {
        Self {
            https: true,
            host: "oss-cn-hangzhou.aliyuncs.com".to_string(),
            port: 0,
            virtual_style: true,
        }
    }
}

impl FromStr for BaseUrl {
    type Err = ValidationErr;

    /// Convert a string to a BaseUrl.
    ///
    /// # Examples
    ///
    /// ```
    /// use alioss::oss::http::BaseUrl;
    ///
    /// let base_url: BaseUrl = "https://oss-cn-hangzhou.aliyuncs.com".parse().unwrap();
    /// assert!(base_url.virtual_style);
    /// // IP addresses and localhost fall back to path-style addressing
    /// let base_url: BaseUrl = "http://127.0.0.1:9000".parse().unwrap();
    /// assert!(!base_url.virtual_style);
    /// ```
    fn from_str(s: &str) -> Result<Self, ValidationErr> {
        let url = s
            .parse::<Uri>()
            .map_err(|e| ValidationErr::InvalidBaseUrl(e.to_string()))?;

        let https = match url.scheme_str() {
            None | Some("https") => true,
            Some("http") => false,
            Some(_) => {
                return Err(ValidationErr::InvalidBaseUrl(
                    "scheme must be http or https".into(),
                ));
            }
        };

        let host = match url.host() {
            Some(h) if !h.is_empty() => h,
            _ => {
                return Err(ValidationErr::InvalidBaseUrl(
                    "valid host must be provided".into(),
                ));
            }
        };

        let mut port = url.port_u16().unwrap_or(0);
        if (https && port == 443) || (!https && port == 80) {
            port = 0;
        }

        if url.path() != "/" && !url.path().is_empty() {
            return Err(ValidationErr::InvalidBaseUrl(
                "path must be empty for base URL".into(),
            ));
        }
        if url.query().is_some() {
            return Err(ValidationErr::InvalidBaseUrl(
                "query must be none for base URL".into(),
            ));
        }

        let virtual_style = match_hostname(host)
            && host.parse::<std::net::Ipv4Addr>().is_err()
            && !host.eq_ignore_ascii_case("localhost");

        Ok(BaseUrl {
            https,
            host: host.to_string(),
            port,
            virtual_style,
        })
    }
}

impl BaseUrl {
    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Builds the request URL. `bucket_name = None` addresses the service itself, as
    /// `list_buckets` does.
    pub fn build_url(&self, query: &Multimap, bucket_name: Option<&str>) -> Url {
        let mut url = Url {
            https: self.https,
            host: self.host.clone(),
            port: self.port,
            path: String::from("/"),
            query: query.clone(),
        };

        if let Some(bucket) = bucket_name {
            if self.virtual_style {
                url.host = format!("{}.{}", bucket, self.host);
            } else {
                url.path = format!("/{bucket}/");
            }
        }
        url
    }
}
