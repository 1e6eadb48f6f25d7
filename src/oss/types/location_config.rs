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
use crate::oss::types::bucket_config::{BucketConfig, BucketResource};
use xmltree::Element;

/// Region a bucket lives in, e.g. `oss-cn-hangzhou`
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LocationConfig {
    pub location: String,
}

impl BucketConfig for LocationConfig {
    const RESOURCE: BucketResource = BucketResource::Location;

    fn from_xml(root: &Element) -> Result<Self, ValidationErr> {
        Ok(LocationConfig {
            location: root.get_text().unwrap_or_default().trim().to_owned(),
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
            <LocationConstraint>oss-cn-hangzhou</LocationConstraint>";
        let location: LocationConfig = decode_config(xml.as_bytes()).unwrap();
        assert_eq!(location.location, "oss-cn-hangzhou");
    }
}
