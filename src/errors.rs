// ABOUTME: Error types re-exported from oilwatch-core for use across the server crate
// ABOUTME: Keeps crate::errors paths stable for routes, services and stores
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

pub use oilwatch_core::errors::{
    AppError, AppResult, DatabaseError, ErrorCode, ErrorResponse, RegistryError, RequiredField,
};
