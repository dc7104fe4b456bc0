// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! ConfigMap reference matching and workload restart propagation.

pub mod references;
pub mod reloader;
pub mod workloads;

pub use references::references_config_map;
pub use reloader::{now_rfc3339, reload_dependents, ReloadOutcome};
pub use workloads::{list_workloads, marker_patch, patch_marker};
