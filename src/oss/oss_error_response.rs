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
use crate::oss::header_constants::X_OSS_REQUEST_ID;
use crate::oss::utils::{get_text_default, get_text_option};
use bytes::{Buf, Bytes};
use http::{HeaderMap, StatusCode};
use std::convert::Infallible;
use std::str::FromStr;
use xmltree::Element;

/// Error codes returned by the service in the `<Code>` element of an error body.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum OssErrorCode {
    /// The specified bucket does not exist
    NoSuchBucket,
    /// The specified key does not exist
    NoSuchKey,
    /// The bucket has no lifecycle configuration
    NoSuchLifecycle,
    /// The bucket has no CORS configuration
    NoSuchCORSConfiguration,
    /// The bucket has no static website configuration
    NoSuchWebsiteConfiguration,
    /// Access denied, which is also what a bucket owned by another account reports
    AccessDenied,
    /// The bucket you tried to delete is not empty
    BucketNotEmpty,
    /// The requested bucket name is not available
    BucketAlreadyExists,
    InvalidBucketName,
    InvalidArgument,
    MalformedXML,
    /// The Content-MD5 you specified is not valid
    InvalidDigest,
    TooManyBuckets,
    SignatureDoesNotMatch,
    InvalidAccessKeyId,
    /// The specified method is not allowed against this resource
    MethodNotAllowed,
    NotImplemented,
    InternalError,

    OtherError(String), // catch-all for codes not listed above, original spelling kept
}

#[allow(dead_code)]
const ALL_OSS_ERROR_CODES: &[OssErrorCode] = &[
    OssErrorCode::NoSuchBucket,
    OssErrorCode::NoSuchKey,
    OssErrorCode::NoSuchLifecycle,
    OssErrorCode::NoSuchCORSConfiguration,
    OssErrorCode::NoSuchWebsiteConfiguration,
    OssErrorCode::AccessDenied,
    OssErrorCode::BucketNotEmpty,
    OssErrorCode::BucketAlreadyExists,
    OssErrorCode::InvalidBucketName,
    OssErrorCode::InvalidArgument,
    OssErrorCode::MalformedXML,
    OssErrorCode::InvalidDigest,
    OssErrorCode::TooManyBuckets,
    OssErrorCode::SignatureDoesNotMatch,
    OssErrorCode::InvalidAccessKeyId,
    OssErrorCode::MethodNotAllowed,
    OssErrorCode::NotImplemented,
    OssErrorCode::InternalError,
];

impl FromStr for OssErrorCode {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Infallible> {
        Ok(match s.to_lowercase().as_str() {
            "nosuchbucket" => OssErrorCode::NoSuchBucket,
            "nosuchkey" => OssErrorCode::NoSuchKey,
            "nosuchlifecycle" => OssErrorCode::NoSuchLifecycle,
            "nosuchcorsconfiguration" => OssErrorCode::NoSuchCORSConfiguration,
            "nosuchwebsiteconfiguration" => OssErrorCode::NoSuchWebsiteConfiguration,
            "accessdenied" => OssErrorCode::AccessDenied,
            "bucketnotempty" => OssErrorCode::BucketNotEmpty,
            "bucketalreadyexists" => OssErrorCode::BucketAlreadyExists,
            "invalidbucketname" => OssErrorCode::InvalidBucketName,
            "invalidargument" => OssErrorCode::InvalidArgument,
            "malformedxml" => OssErrorCode::MalformedXML,
            "invaliddigest" => OssErrorCode::InvalidDigest,
            "toomanybuckets" => OssErrorCode::TooManyBuckets,
            "signaturedoesnotmatch" => OssErrorCode::SignatureDoesNotMatch,
            "invalidaccesskeyid" => OssErrorCode::InvalidAccessKeyId,
            "methodnotallowed" => OssErrorCode::MethodNotAllowed,
            "notimplemented" => OssErrorCode::NotImplemented,
            "internalerror" => OssErrorCode::InternalError,
            _ => OssErrorCode::OtherError(s.to_owned()),
        })
    }
}

impl std::fmt::Display for OssErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            OssErrorCode::NoSuchBucket => "NoSuchBucket",
            OssErrorCode::NoSuchKey => "NoSuchKey",
            OssErrorCode::NoSuchLifecycle => "NoSuchLifecycle",
            OssErrorCode::NoSuchCORSConfiguration => "NoSuchCORSConfiguration",
            OssErrorCode::NoSuchWebsiteConfiguration => "NoSuchWebsiteConfiguration",
            OssErrorCode::AccessDenied => "AccessDenied",
            OssErrorCode::BucketNotEmpty => "BucketNotEmpty",
            OssErrorCode::BucketAlreadyExists => "BucketAlreadyExists",
            OssErrorCode::InvalidBucketName => "InvalidBucketName",
            OssErrorCode::InvalidArgument => "InvalidArgument",
            OssErrorCode::MalformedXML => "MalformedXML",
            OssErrorCode::InvalidDigest => "InvalidDigest",
            OssErrorCode::TooManyBuckets => "TooManyBuckets",
            OssErrorCode::SignatureDoesNotMatch => "SignatureDoesNotMatch",
            OssErrorCode::InvalidAccessKeyId => "InvalidAccessKeyId",
            OssErrorCode::MethodNotAllowed => "MethodNotAllowed",
            OssErrorCode::NotImplemented => "NotImplemented",
            OssErrorCode::InternalError => "InternalError",
            OssErrorCode::OtherError(code) => code,
        };
        f.write_str(s)
    }
}

/// OssErrorResponse is the typed error returned when the service rejects a request.
#[derive(Clone, Debug)]
pub struct OssErrorResponse {
    status: StatusCode,
    headers: HeaderMap,
    code: OssErrorCode,
    message: Option<String>,
    request_id: String,
    host_id: String,
    bucket_name: Option<String>,
}

impl OssErrorResponse {
    pub fn new(
        status: StatusCode,
        headers: HeaderMap,
        code: OssErrorCode,
        message: Option<String>,
        request_id: String,
        host_id: String,
        bucket_name: Option<String>,
    ) -> Self {
        Self {
            status,
            headers,
            code,
            message,
            request_id,
            host_id,
            bucket_name,
        }
    }

    /// Parses the `<Error>` document the service sends with a non-2xx status.
    pub fn new_from_body(
        status: StatusCode,
        body: Bytes,
        headers: HeaderMap,
    ) -> Result<Self, ValidationErr> {
        let root = Element::parse(body.reader())?;
        if root.name != "Error" {
            return Err(ValidationErr::UnexpectedRootElement {
                expected: "Error",
                found: root.name,
            });
        }
        let mut request_id = get_text_default(&root, "RequestId");
        if request_id.is_empty() {
            request_id = request_id_header(&headers);
        }
        // parsing never fails, unknown codes land in OtherError
        let code: OssErrorCode = get_text_default(&root, "Code")
            .parse()
            .unwrap_or_else(|e: Infallible| match e {});
        Ok(Self {
            status,
            code,
            message: get_text_option(&root, "Message"),
            request_id,
            host_id: get_text_default(&root, "HostId"),
            bucket_name: get_text_option(&root, "BucketName"),
            headers,
        })
    }

    /// Synthesizes an error for a body-less rejection, e.g. the answer to a HEAD-like probe.
    pub fn from_status(
        status: StatusCode,
        headers: HeaderMap,
        bucket: Option<String>,
    ) -> Option<Self> {
        let code = match status {
            StatusCode::FORBIDDEN => OssErrorCode::AccessDenied,
            StatusCode::NOT_FOUND => OssErrorCode::NoSuchBucket,
            StatusCode::METHOD_NOT_ALLOWED => OssErrorCode::MethodNotAllowed,
            _ => return None,
        };
        let request_id = request_id_header(&headers);
        Some(Self {
            status,
            headers,
            code,
            message: None,
            request_id,
            host_id: String::new(),
            bucket_name: bucket,
        })
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }
    /// Take ownership of the headers as returned by the server.
    pub fn take_headers(&mut self) -> HeaderMap {
        std::mem::take(&mut self.headers)
    }
    pub fn code(&self) -> &OssErrorCode {
        &self.code
    }
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
    pub fn request_id(&self) -> &str {
        &self.request_id
    }
    pub fn host_id(&self) -> &str {
        &self.host_id
    }
    pub fn bucket_name(&self) -> Option<&str> {
        self.bucket_name.as_deref()
    }
}

fn request_id_header(headers: &HeaderMap) -> String {
    headers
        .get(X_OSS_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_owned()
}

impl std::fmt::Display for OssErrorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "OSS operation failed: status: {}, code: {}, message: {}, request_id: {}, host_id: {}, bucket_name: {}",
            self.status.as_u16(),
            self.code,
            self.message.as_deref().unwrap_or_default(),
            self.request_id,
            self.host_id,
            self.bucket_name.as_deref().unwrap_or_default(),
        )
    }
}

impl std::error::Error for OssErrorResponse {}
