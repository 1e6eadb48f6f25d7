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
use crate::oss::types::basic_types::Owner;
use crate::oss::types::bucket_config::{BucketConfig, BucketResource};
use crate::oss::utils::get_text_result;
use std::fmt;
use std::str::FromStr;
use xmltree::Element;

/// Canned access control level of a bucket
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BucketAcl {
    #[default]
    Private,
    PublicRead,
    PublicReadWrite,
}

impl BucketAcl {
    pub fn as_str(&self) -> &'static str {
        match self {
            BucketAcl::Private => "private",
            BucketAcl::PublicRead => "public-read",
            BucketAcl::PublicReadWrite => "public-read-write",
        }
    }
}

impl FromStr for BucketAcl {
    type Err = ValidationErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "private" => Ok(BucketAcl::Private),
            "public-read" => Ok(BucketAcl::PublicRead),
            "public-read-write" => Ok(BucketAcl::PublicReadWrite),
            other => Err(ValidationErr::InvalidAcl(other.to_owned())),
        }
    }
}

impl fmt::Display for BucketAcl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decoded `GET /?acl` document
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AccessControlPolicy {
    pub owner: Owner,
    pub acl: BucketAcl,
}

impl BucketConfig for AccessControlPolicy {
    const RESOURCE: BucketResource = BucketResource::Acl;

    fn from_xml(root: &Element) -> Result<Self, ValidationErr> {
        let owner = root.get_child("Owner").map(Owner::from_xml).unwrap_or_default();
        let list = root
            .get_child("AccessControlList")
            .ok_or(ValidationErr::xml_error("<AccessControlList> tag not found"))?;
        Ok(AccessControlPolicy {
            owner,
            acl: get_text_result(list, "Grant")?.parse()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oss::types::bucket_config::decode_config;

    #[test]
    fn test_decode() {
        let xml = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
            <AccessControlPolicy>\
              <Owner><ID>0022012****</ID><DisplayName>user_example</DisplayName></Owner>\
              <AccessControlList><Grant>public-read</Grant></AccessControlList>\
            </AccessControlPolicy>";
        let policy: AccessControlPolicy = decode_config(xml.as_bytes()).unwrap();
        assert_eq!(policy.acl, BucketAcl::PublicRead);
        assert_eq!(policy.owner.id, "0022012****");
        assert_eq!(policy.owner.display_name, "user_example");
    }

    #[test]
    fn test_decode_unknown_grant() {
        let xml = "<AccessControlPolicy><AccessControlList><Grant>everyone</Grant>\
            </AccessControlList></AccessControlPolicy>";
        assert!(matches!(
            decode_config::<AccessControlPolicy>(xml.as_bytes()),
            Err(ValidationErr::InvalidAcl(g)) if g == "everyone"
        ));
    }

    #[test]
    fn test_acl_strings() {
        for acl in [BucketAcl::Private, BucketAcl::PublicRead, BucketAcl::PublicReadWrite] {
            assert_eq!(acl.as_str().parse::<BucketAcl>().unwrap(), acl);
        }
    }
}
