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

//! Error definitions for OSS bucket operations

use crate::oss::oss_error_response::{OssErrorCode, OssErrorResponse};
use crate::oss::types::BucketResource;
use http::StatusCode;
use thiserror::Error;

/// Errors raised on the client side before a request is sent, or while decoding a response body.
#[derive(Error, Debug)]
pub enum ValidationErr {
    #[error("invalid bucket name '{name}': {reason}")]
    InvalidBucketName { name: String, reason: String },

    #[error("{0}")]
    InvalidDateAndDays(String),

    #[error("{resource} configuration must contain at least one rule")]
    EmptyRules { resource: BucketResource },

    #[error("{resource} configuration allows at most {max} rules, got {count}")]
    TooManyRules {
        resource: BucketResource,
        max: usize,
        count: usize,
    },

    #[error("at least one action (expiration, abort multipart upload or transition) must be specified in lifecycle rule '{0}'")]
    MissingLifecycleAction(String),

    #[error("lifecycle rule id must not exceed 255 characters")]
    InvalidLifecycleRuleId,

    #[error("invalid lifecycle rule: {0}")]
    InvalidLifecycleRule(String),

    #[error("invalid CORS rule: {0}")]
    InvalidCorsRule(String),

    #[error("invalid CORS method '{0}'")]
    InvalidCorsMethod(String),

    #[error("invalid website configuration: {0}")]
    InvalidWebsiteConfig(String),

    #[error("invalid logging configuration: {0}")]
    InvalidLoggingConfig(String),

    #[error("invalid canned ACL '{0}'")]
    InvalidAcl(String),

    #[error("invalid storage class '{0}'")]
    InvalidStorageClass(String),

    #[error("XML parse error: {0}")]
    XmlParseError(#[from] xmltree::ParseError),

    #[error("XML error: {0}")]
    XmlError(String),

    #[error("unexpected root element: expected <{expected}>, found <{found}>")]
    UnexpectedRootElement {
        expected: &'static str,
        found: String,
    },

    #[error("invalid date '{value}': {source}")]
    InvalidDate {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("integer parsing error: {0}")]
    IntError(#[from] std::num::ParseIntError),

    #[error("max-keys must be between 1 and {max}, got {value}")]
    InvalidMaxKeys { value: u16, max: u16 },

    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),
}

impl ValidationErr {
    pub(crate) fn xml_error(message: impl Into<String>) -> Self {
        ValidationErr::XmlError(message.into())
    }
}

/// Errors raised while talking to the service.
#[derive(Error, Debug)]
pub enum NetworkError {
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("invalid URL: {0}")]
    InvalidUrl(String),
}

/// A `Get` of a bucket sub-resource that has never been configured (or was deleted).
///
/// The raw response is kept so callers can still inspect the request id and headers.
#[derive(Error, Debug)]
#[error("{resource} configuration not found on bucket '{bucket}' (code: {code})")]
pub struct ResourceNotFound {
    pub resource: BucketResource,
    pub bucket: String,
    pub code: OssErrorCode,
    pub response: Box<OssErrorResponse>,
}

impl ResourceNotFound {
    pub fn request_id(&self) -> &str {
        self.response.request_id()
    }
}

/// The error type of every operation of this crate.
#[derive(Error, Debug)]
pub enum Error {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationErr),

    #[error("{0}")]
    NotFound(#[from] ResourceNotFound),

    #[error("{0}")]
    Service(#[from] Box<OssErrorResponse>),

    #[error("network error: {0}")]
    Network(#[from] NetworkError),

    #[error("invalid response received; status code: {status}; content-type: {content_type}")]
    InvalidResponse {
        status: StatusCode,
        content_type: String,
    },
}

impl Error {
    /// Returns the sub-resource if this is a [`Error::NotFound`].
    pub fn not_found_resource(&self) -> Option<BucketResource> {
        match self {
            Error::NotFound(e) => Some(e.resource),
            _ => None,
        }
    }

    /// Returns the service error code if the server rejected the request.
    pub fn service_code(&self) -> Option<&OssErrorCode> {
        match self {
            Error::Service(e) => Some(e.code()),
            Error::NotFound(e) => Some(&e.code),
            _ => None,
        }
    }

    /// Whether this is a service error carrying `code`.
    pub fn is_service_code(&self, code: &OssErrorCode) -> bool {
        self.service_code() == Some(code)
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Network(NetworkError::HttpError(err))
    }
}

impl From<xmltree::ParseError> for Error {
    fn from(err: xmltree::ParseError) -> Self {
        Error::Validation(ValidationErr::XmlParseError(err))
    }
}

