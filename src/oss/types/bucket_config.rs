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

//! Identity and XML codec contract shared by all bucket sub-resources.
//!
//! Every configuration a bucket carries (lifecycle, CORS, referer, ...) is addressed the
//! same way: `?<resource>` on the bucket URL, an XML document with a fixed root element, and
//! one of three behaviors when nothing is configured ([`AbsencePolicy`]). A configuration type
//! states which [`BucketResource`] it is and how it maps to XML; the generic builders in
//! [`crate::oss::builders`] do the rest.

use crate::oss::error::ValidationErr;
use crate::oss::oss_error_response::OssErrorCode;
use crate::oss::utils::write_xml_document;
use std::fmt;
use xmltree::Element;

/// A bucket-scoped configuration sub-resource.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BucketResource {
    Acl,
    Logging,
    Website,
    Lifecycle,
    Cors,
    Referer,
    Location,
}

/// How a `Get` reports a resource that was never configured.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AbsencePolicy {
    /// The service answers with this error code; surfaced as [`Error::NotFound`](crate::oss::error::Error::NotFound).
    NotFound(OssErrorCode),
    /// The service answers with an empty document; decoded as the type's empty value.
    EmptyDefault,
    /// The resource always has a value.
    AlwaysPresent,
}

impl BucketResource {
    pub const ALL: [BucketResource; 7] = [
        BucketResource::Acl,
        BucketResource::Logging,
        BucketResource::Website,
        BucketResource::Lifecycle,
        BucketResource::Cors,
        BucketResource::Referer,
        BucketResource::Location,
    ];

    /// The query-string key selecting this resource.
    pub fn query_key(self) -> &'static str {
        match self {
            BucketResource::Acl => "acl",
            BucketResource::Logging => "logging",
            BucketResource::Website => "website",
            BucketResource::Lifecycle => "lifecycle",
            BucketResource::Cors => "cors",
            BucketResource::Referer => "referer",
            BucketResource::Location => "location",
        }
    }

    pub fn from_query_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.query_key() == key)
    }

    /// Root element of the resource's XML document.
    pub fn root_element(self) -> &'static str {
        match self {
            BucketResource::Acl => "AccessControlPolicy",
            BucketResource::Logging => "BucketLoggingStatus",
            BucketResource::Website => "WebsiteConfiguration",
            BucketResource::Lifecycle => "LifecycleConfiguration",
            BucketResource::Cors => "CORSConfiguration",
            BucketResource::Referer => "RefererConfiguration",
            BucketResource::Location => "LocationConstraint",
        }
    }

    pub fn absence_policy(self) -> AbsencePolicy {
        match self {
            BucketResource::Lifecycle => AbsencePolicy::NotFound(OssErrorCode::NoSuchLifecycle),
            BucketResource::Cors => AbsencePolicy::NotFound(OssErrorCode::NoSuchCORSConfiguration),
            BucketResource::Website => {
                AbsencePolicy::NotFound(OssErrorCode::NoSuchWebsiteConfiguration)
            }
            BucketResource::Logging => AbsencePolicy::EmptyDefault,
            BucketResource::Acl | BucketResource::Referer | BucketResource::Location => {
                AbsencePolicy::AlwaysPresent
            }
        }
    }

    /// The error code meaning "not configured", if this resource has one.
    pub fn not_found_code(self) -> Option<OssErrorCode> {
        match self.absence_policy() {
            AbsencePolicy::NotFound(code) => Some(code),
            _ => None,
        }
    }
}

impl fmt::Display for BucketResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.query_key())
    }
}

/// A configuration value that can be read from a bucket.
pub trait BucketConfig: Sized + Clone + fmt::Debug + Send + Sync + 'static {
    const RESOURCE: BucketResource;

    /// Decodes the value from its root element. The root name has already been checked.
    fn from_xml(root: &Element) -> Result<Self, ValidationErr>;

    /// The value an [`AbsencePolicy::EmptyDefault`] resource decodes to when unset.
    fn empty() -> Option<Self> {
        None
    }
}

/// A configuration value that can be written to a bucket.
pub trait WritableConfig: BucketConfig {
    /// Local checks run before the value is sent.
    fn validate(&self) -> Result<(), ValidationErr> {
        Ok(())
    }

    fn to_xml_element(&self) -> Element;

    /// Serializes to a complete XML document with the resource's root element.
    fn to_xml(&self) -> Result<String, ValidationErr> {
        write_xml_document(&self.to_xml_element())
    }
}

/// A configuration that the service can remove (`DELETE /?<resource>`).
pub trait DeletableConfig: BucketConfig {}

/// Decodes the body of a `GET /?<resource>` response into `C`.
pub fn decode_config<C: BucketConfig>(body: &[u8]) -> Result<C, ValidationErr> {
    if body.iter().all(u8::is_ascii_whitespace)
        && C::RESOURCE.absence_policy() == AbsencePolicy::EmptyDefault
        && let Some(empty) = C::empty()
    {
        return Ok(empty);
    }

    let root = Element::parse(body)?;
    let expected = C::RESOURCE.root_element();
    if root.name != expected {
        return Err(ValidationErr::UnexpectedRootElement {
            expected,
            found: root.name,
        });
    }
    C::from_xml(&root)
}
