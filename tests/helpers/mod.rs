// ABOUTME: Shared test helpers and utilities for integration tests
// ABOUTME: Exports the HTTP request helper and store doubles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
// Each test binary uses a different subset of the helpers
#![allow(dead_code)]

pub mod axum_test;
pub mod stores;
