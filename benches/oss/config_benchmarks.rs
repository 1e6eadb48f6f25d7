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

use alioss::oss::types::{
    CorsConfig, LifecycleConfig, RefererConfig, WritableConfig, decode_config,
};
use alioss::oss::utils::check_bucket_name;
use alioss_common::example::{
    create_bucket_cors_config_example, create_bucket_lifecycle_config_examples,
    create_bucket_referer_config_example,
};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn bench_check_bucket_name(c: &mut Criterion) {
    c.bench_function("check_bucket_name", |b| {
        b.iter(|| check_bucket_name(black_box("my-example-bucket-name")))
    });
}

fn bench_lifecycle(c: &mut Criterion) {
    let config = create_bucket_lifecycle_config_examples();
    let xml = config.to_xml().unwrap();
    c.bench_function("lifecycle to_xml", |b| b.iter(|| black_box(&config).to_xml()));
    c.bench_function("lifecycle decode", |b| {
        b.iter(|| decode_config::<LifecycleConfig>(black_box(xml.as_bytes())))
    });
}

fn bench_cors(c: &mut Criterion) {
    let config = create_bucket_cors_config_example();
    let xml = config.to_xml().unwrap();
    c.bench_function("cors to_xml", |b| b.iter(|| black_box(&config).to_xml()));
    c.bench_function("cors decode", |b| {
        b.iter(|| decode_config::<CorsConfig>(black_box(xml.as_bytes())))
    });
}

fn bench_referer(c: &mut Criterion) {
    let config = create_bucket_referer_config_example();
    let xml = config.to_xml().unwrap();
    c.bench_function("referer decode", |b| {
        b.iter(|| decode_config::<RefererConfig>(black_box(xml.as_bytes())))
    });
}

criterion_group!(
    benches,
    bench_check_bucket_name,
    bench_lifecycle,
    bench_cors,
    bench_referer
);
criterion_main!(benches);
