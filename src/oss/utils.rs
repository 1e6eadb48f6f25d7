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

//! Various utility and helper functions

use crate::oss::error::ValidationErr;
use crate::oss::multimap_ext::{Multimap, MultimapExt};
use base64::engine::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use chrono::{DateTime, NaiveDate, Utc};
use lazy_static::lazy_static;
use regex::Regex;
use xmltree::{Element, EmitterConfig, XMLNode};

pub use urlencoding::encode as url_encode;

/// Date and time with UTC timezone
pub type UtcTime = DateTime<Utc>;

/// Encodes data using base64 algorithm
pub fn b64encode<T: AsRef<[u8]>>(input: T) -> String {
    BASE64.encode(input)
}

/// Gets base64 encoded MD5 hash of given data, as expected by the `Content-MD5` header
pub fn md5sum_hash(data: &[u8]) -> String {
    b64encode(md5::compute(data).as_slice())
}

/// Gets current UTC time
pub fn utc_now() -> UtcTime {
    chrono::offset::Utc::now()
}

/// Gets HTTP header value of given time
pub fn to_http_header_value(time: UtcTime) -> String {
    time.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

/// Gets ISO8601 UTC formatted value of given time
pub fn to_iso8601utc(time: UtcTime) -> String {
    time.format("%Y-%m-%dT%H:%M:%S.%3fZ").to_string()
}

/// Parses ISO8601 UTC formatted value to time
pub fn from_iso8601utc(s: &str) -> Result<UtcTime, ValidationErr> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|source| ValidationErr::InvalidDate {
            value: s.to_owned(),
            source,
        })
}

/// Formats a calendar date the way OSS lifecycle rules carry it: midnight UTC of that day.
pub fn to_iso8601_date(date: NaiveDate) -> String {
    format!("{}T00:00:00.000Z", date.format("%Y-%m-%d"))
}

/// Parses a lifecycle date, either `2100-12-25` or `2100-12-25T00:00:00.000Z`.
pub fn from_iso8601_date(s: &str) -> Result<NaiveDate, ValidationErr> {
    let s = s.trim();
    let (day, rest) = match s.find('T') {
        Some(pos) => s.split_at(pos),
        None => (s, ""),
    };
    if !rest.is_empty() {
        // the time part must be a valid timestamp even though only the day is kept
        from_iso8601utc(s)?;
    }
    NaiveDate::parse_from_str(day, "%Y-%m-%d").map_err(|source| ValidationErr::InvalidDate {
        value: s.to_owned(),
        source,
    })
}

/// Validates given bucket name against the OSS naming rules.
pub fn check_bucket_name(bucket_name: &str) -> Result<(), ValidationErr> {
    let fail = |reason: &str| {
        Err(ValidationErr::InvalidBucketName {
            name: bucket_name.to_owned(),
            reason: reason.to_owned(),
        })
    };

    if bucket_name.trim().is_empty() {
        return fail("bucket name cannot be empty");
    }
    if bucket_name.len() < 3 {
        return fail("bucket name cannot be less than 3 characters");
    }
    if bucket_name.len() > 63 {
        return fail("bucket name cannot be greater than 63 characters");
    }

    lazy_static! {
        static ref VALID_BUCKET_NAME_REGEX: Regex =
            Regex::new("^[a-z0-9][a-z0-9\\-]{1,61}[a-z0-9]$").unwrap();
    }

    if !VALID_BUCKET_NAME_REGEX.is_match(bucket_name) {
        return fail(
            "bucket name may only contain lowercase letters, digits and hyphens, and must start and end with a letter or digit",
        );
    }

    Ok(())
}

/// Returns a copy of `extra` (or an empty multimap) with the sub-resource `key` added.
pub fn insert(extra: Option<Multimap>, key: impl Into<String>) -> Multimap {
    let mut result: Multimap = extra.unwrap_or_default();
    result.add(key, "");
    result
}

/// Gets text value of given XML element for given tag.
pub fn get_text_result(element: &Element, tag: &str) -> Result<String, ValidationErr> {
    Ok(element
        .get_child(tag)
        .ok_or(ValidationErr::xml_error(format!("<{tag}> tag not found")))?
        .get_text()
        .unwrap_or_default()
        .to_string())
}

/// Gets optional text value of given XML element for given tag.
pub fn get_text_option(element: &Element, tag: &str) -> Option<String> {
    element
        .get_child(tag)
        .map(|v| v.get_text().unwrap_or_default().to_string())
}

/// Gets text value of given XML element for given tag or empty string if not found.
pub fn get_text_default(element: &Element, tag: &str) -> String {
    get_text_option(element, tag).unwrap_or_default()
}

/// Iterates over the direct children of `element` named `tag`, in document order.
pub fn children_named<'a>(element: &'a Element, tag: &'a str) -> impl Iterator<Item = &'a Element> {
    element
        .children
        .iter()
        .filter_map(XMLNode::as_element)
        .filter(move |e| e.name == tag)
}

/// Creates an element holding a single text node.
pub fn text_element(name: &str, text: impl Into<String>) -> Element {
    let mut element = Element::new(name);
    let text = text.into();
    if !text.is_empty() {
        element.children.push(XMLNode::Text(text));
    }
    element
}

/// Creates an element from the given child elements.
pub fn parent_element(name: &str, children: impl IntoIterator<Item = Element>) -> Element {
    let mut element = Element::new(name);
    element
        .children
        .extend(children.into_iter().map(XMLNode::Element));
    element
}

/// Writes `root` as a complete XML document. Text content is escaped by the writer and
/// non-ASCII characters are emitted as UTF-8.
pub fn write_xml_document(root: &Element) -> Result<String, ValidationErr> {
    let mut buf: Vec<u8> = Vec::new();
    root.write_with_config(&mut buf, EmitterConfig::new().perform_indent(false))
        .map_err(|e| ValidationErr::xml_error(e.to_string()))?;
    String::from_utf8(buf).map_err(|e| ValidationErr::xml_error(e.to_string()))
}

/// Parses an XML text value as a boolean, accepting the case variants OSS emits.
pub fn parse_bool(tag: &str, value: &str) -> Result<bool, ValidationErr> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ValidationErr::xml_error(format!(
            "<{tag}> must be true or false, got '{value}'"
        ))),
    }
}
