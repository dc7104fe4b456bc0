// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Propagates a ConfigMap change to every workload that references it.

use crate::constants::annotations;
use crate::error::{ReloaderError, Result};
use crate::reload::references::references_config_map;
use crate::reload::workloads::{list_workloads, patch_marker};
use crate::types::workload::{WorkloadKind, WorkloadRef};
use chrono::{SecondsFormat, Utc};
use k8s_openapi::api::core::v1::ConfigMap;
use kube::{Api, Client};
use tracing::{debug, info, instrument};

/// Result of a successful reload pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReloadOutcome {
    /// The ConfigMap no longer exists, nothing was touched
    ConfigMapAbsent,
    /// Workloads whose pod template was stamped, in patch order
    Reloaded { patched: Vec<WorkloadRef> },
}

impl ReloadOutcome {
    pub fn patched(&self) -> &[WorkloadRef] {
        match self {
            ReloadOutcome::ConfigMapAbsent => &[],
            ReloadOutcome::Reloaded { patched } => patched,
        }
    }
}

/// Current time in the marker's RFC3339 format, e.g. `2025-06-01T12:00:00Z`
pub fn now_rfc3339() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Stamp `timestamp` on the pod template of every Deployment and StatefulSet
/// in `namespace` that references the ConfigMap `name`.
///
/// Deployments are handled before StatefulSets and the first failure aborts
/// the pass. Workloads patched before the failure stay patched; running the
/// pass again is safe.
#[instrument(skip(client, timestamp), fields(config_map = %format!("{}/{}", namespace, name)))]
pub async fn reload_dependents(
    client: &Client,
    namespace: &str,
    name: &str,
    timestamp: &str,
) -> Result<ReloadOutcome> {
    let config_maps: Api<ConfigMap> = Api::namespaced(client.clone(), namespace);

    match config_maps.get(name).await {
        Ok(_) => {}
        Err(kube::Error::Api(err)) if err.code == 404 => {
            debug!("ConfigMap {}/{} not found, nothing to do", namespace, name);
            return Ok(ReloadOutcome::ConfigMapAbsent);
        }
        Err(source) => {
            return Err(ReloaderError::GetFailed {
                namespace: namespace.to_string(),
                name: name.to_string(),
                source,
            });
        }
    }

    let mut patched = Vec::new();

    for kind in WorkloadKind::ALL {
        let workloads = list_workloads(client, namespace, kind).await?;

        for workload in workloads
            .iter()
            .filter(|w| w.pod_spec().is_some_and(|spec| references_config_map(spec, name)))
        {
            if let Some(previous) = workload.template_annotation(annotations::UPDATED_AT) {
                debug!("{} was last marked at {}", workload.reference(), previous);
            }
            if let Err(e) = patch_marker(client, workload, timestamp).await {
                debug!("Aborting reload at {}: {}", workload.reference(), e);
                return Err(e);
            }
            info!(
                "Marked {} for restart after change of ConfigMap {}/{}",
                workload.reference(),
                namespace,
                name
            );
            patched.push(workload.reference());
        }
    }

    if patched.is_empty() {
        debug!("No workloads reference ConfigMap {}/{}", namespace, name);
    }

    Ok(ReloadOutcome::Reloaded { patched })
}
