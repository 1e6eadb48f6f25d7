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

use crate::oss::utils::url_encode;
use std::collections::BTreeMap;

/// Multimap for string key and string value
pub type Multimap = multimap::MultiMap<String, String>;

pub trait MultimapExt {
    /// Adds a key-value pair to the multimap
    fn add<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V);

    /// Adds a multimap to the current multimap
    fn add_multimap(&mut self, other: Multimap);

    /// Returns the first value stored for `key`, if any.
    fn first_value(&self, key: &str) -> Option<&str>;

    /// Converts multimap to HTTP query string.
    ///
    /// Keys are emitted in sorted order. A key with an empty value is emitted bare
    /// (`?acl` rather than `?acl=`), which is how OSS addresses bucket sub-resources.
    fn to_query_string(&self) -> String;
}

impl MultimapExt for Multimap {
    fn add<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        self.insert(key.into(), value.into());
    }

    fn add_multimap(&mut self, other: Multimap) {
        for (key, values) in other.into_iter() {
            self.insert_many(key, values);
        }
    }

    fn first_value(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }

    fn to_query_string(&self) -> String {
        let mut sorted: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
        for (key, values) in self.iter_all() {
            sorted
                .entry(key.as_str())
                .or_default()
                .extend(values.iter().map(|s| s.as_str()));
        }

        let mut query = String::new();
        for (key, values) in sorted {
            for value in values {
                if !query.is_empty() {
                    query.push('&');
                }
                query.push_str(&url_encode(key));
                if !value.is_empty() {
                    query.push('=');
                    query.push_str(&url_encode(value));
                }
            }
        }
        query
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_string_bare_sub_resource() {
        let mut query = Multimap::new();
        query.add("acl", "");
        assert_eq!(query.to_query_string(), "acl");
    }

    #[test]
    fn test_query_string_sorted_and_encoded() {
        let mut query = Multimap::new();
        query.add("prefix", "logs/2026 a");
        query.add("max-keys", "10");
        query.add("marker", "");
        assert_eq!(
            query.to_query_string(),
            "marker&max-keys=10&prefix=logs%2F2026%20a"
        );
    }

    #[test]
    fn test_add_multimap() {
        let mut a = Multimap::new();
        a.add("x-oss-acl", "private");
        let mut b = Multimap::new();
        b.add("Content-Type", "application/xml");
        a.add_multimap(b);
        assert_eq!(a.first_value("Content-Type"), Some("application/xml"));
        assert_eq!(a.first_value("x-oss-acl"), Some("private"));
        assert_eq!(a.first_value("missing"), None);
    }
}
