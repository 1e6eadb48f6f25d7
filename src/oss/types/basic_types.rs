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
use crate::oss::utils::{UtcTime, from_iso8601utc, get_text_default, get_text_result};
use std::fmt;
use std::str::FromStr;
use xmltree::Element;

/// Storage class of a bucket, or the target class of a lifecycle transition
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StorageClass {
    #[default]
    Standard,
    /// Infrequent access
    IA,
    Archive,
    ColdArchive,
}

impl StorageClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageClass::Standard => "Standard",
            StorageClass::IA => "IA",
            StorageClass::Archive => "Archive",
            StorageClass::ColdArchive => "ColdArchive",
        }
    }
}

impl FromStr for StorageClass {
    type Err = ValidationErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Standard" => Ok(StorageClass::Standard),
            "IA" => Ok(StorageClass::IA),
            "Archive" => Ok(StorageClass::Archive),
            "ColdArchive" => Ok(StorageClass::ColdArchive),
            other => Err(ValidationErr::InvalidStorageClass(other.to_owned())),
        }
    }
}

impl fmt::Display for StorageClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Owner of a bucket
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Owner {
    pub id: String,
    pub display_name: String,
}

impl Owner {
    pub(crate) fn from_xml(element: &Element) -> Self {
        Owner {
            id: get_text_default(element, "ID"),
            display_name: get_text_default(element, "DisplayName"),
        }
    }
}

/// One entry of a bucket listing
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BucketInfo {
    pub name: String,
    pub location: String,
    pub creation_date: UtcTime,
    pub extranet_endpoint: String,
    pub intranet_endpoint: String,
    pub storage_class: Option<StorageClass>,
}

impl BucketInfo {
    pub(crate) fn from_xml(element: &Element) -> Result<Self, ValidationErr> {
        let storage_class = match get_text_default(element, "StorageClass").as_str() {
            "" => None,
            s => Some(s.parse()?),
        };
        Ok(BucketInfo {
            name: get_text_result(element, "Name")?,
            location: get_text_default(element, "Location"),
            creation_date: from_iso8601utc(&get_text_result(element, "CreationDate")?)?,
            extranet_endpoint: get_text_default(element, "ExtranetEndpoint"),
            intranet_endpoint: get_text_default(element, "IntranetEndpoint"),
            storage_class,
        })
    }
}
