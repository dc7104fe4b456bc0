// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes object wrappers used by the reloader.

pub mod workload;

pub use workload::{Workload, WorkloadKind, WorkloadRef};
