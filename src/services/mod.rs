// ABOUTME: Domain service layer for registry business logic
// ABOUTME: Submission validation and search ordering, independent of the HTTP surface
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Domain service layer
//!
//! Services hold a shared store handle and nothing else, so route handlers
//! build them per request.

/// Name search with risk annotation
pub mod search;

/// Validated restaurant creation
pub mod submission;

pub use search::{SearchOutcome, SearchService};
pub use submission::SubmissionService;
