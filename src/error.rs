// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::types::workload::{WorkloadKind, WorkloadRef};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReloaderError {
    #[error("Failed to get ConfigMap {namespace}/{name}: {source}")]
    GetFailed {
        namespace: String,
        name: String,
        #[source]
        source: kube::Error,
    },

    #[error("Failed to list {kind}s in namespace {namespace}: {source}")]
    ListFailed {
        kind: WorkloadKind,
        namespace: String,
        #[source]
        source: kube::Error,
    },

    #[error("Conflict patching {workload}, object changed since it was read: {source}")]
    Conflict {
        workload: WorkloadRef,
        #[source]
        source: kube::Error,
    },

    #[error("Failed to patch {workload}: {source}")]
    PatchFailed {
        workload: WorkloadRef,
        #[source]
        source: kube::Error,
    },
}

impl ReloaderError {
    /// True when the stored object changed between read and patch
    pub fn is_conflict(&self) -> bool {
        matches!(self, ReloaderError::Conflict { .. })
    }
}

pub type Result<T> = std::result::Result<T, ReloaderError>;
