// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Kubernetes annotation keys used by the reloader
pub mod annotations {
    /// Pod template annotation carrying the RFC3339 time of the last reload.
    /// Owned exclusively by this operator.
    pub const UPDATED_AT: &str = "configmap-reloader/updatedAt";
}

/// The operator name used as field manager on merge patches
pub const OPERATOR_NAME: &str = "configmap-reloader";

/// Requeue delays applied by the controller's error policy
pub mod requeue {
    /// Delay after a failed reconciliation in seconds
    pub const ERROR_SECS: u64 = 60;
    /// Delay after an optimistic-concurrency conflict in seconds
    pub const CONFLICT_SECS: u64 = 5;
}
