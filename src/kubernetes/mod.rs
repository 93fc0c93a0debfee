// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes utilities for client creation, namespace checks, and job listing.

pub mod client;
pub mod jobs;
pub mod namespaces;

pub use client::create_client;
pub use jobs::list_jobs;
pub use namespaces::{ensure_namespace, namespace_exists};
