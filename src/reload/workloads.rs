// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Listing workloads and patching the reload marker onto their pod templates

use crate::constants::{annotations, OPERATOR_NAME};
use crate::error::{ReloaderError, Result};
use crate::types::workload::{Workload, WorkloadKind};
use k8s_openapi::api::apps::v1::{Deployment, StatefulSet};
use kube::{
    api::{ListParams, Patch, PatchParams},
    Api, Client,
};
use serde_json::{json, Value};
use tracing::{debug, instrument};

/// List all workloads of one kind in a namespace, in API server order
#[instrument(skip(client))]
pub async fn list_workloads(
    client: &Client,
    namespace: &str,
    kind: WorkloadKind,
) -> Result<Vec<Workload>> {
    let lp = ListParams::default();
    let listed = match kind {
        WorkloadKind::Deployment => Api::<Deployment>::namespaced(client.clone(), namespace)
            .list(&lp)
            .await
            .map(|l| l.items.into_iter().map(Workload::from).collect::<Vec<_>>()),
        WorkloadKind::StatefulSet => Api::<StatefulSet>::namespaced(client.clone(), namespace)
            .list(&lp)
            .await
            .map(|l| l.items.into_iter().map(Workload::from).collect::<Vec<_>>()),
    };

    let workloads = listed.map_err(|source| ReloaderError::ListFailed {
        kind,
        namespace: namespace.to_string(),
        source,
    })?;

    debug!("Found {} {}s in {}", workloads.len(), kind, namespace);
    Ok(workloads)
}

/// Build the JSON merge patch that stamps the reload marker on the pod template.
///
/// The resourceVersion captured at read time is part of the patch, so the
/// API server refuses it with 409 Conflict if the workload was modified in
/// the meantime.
pub fn marker_patch(workload: &Workload, timestamp: &str) -> Value {
    json!({
        "metadata": {
            "resourceVersion": workload.resource_version(),
        },
        "spec": {
            "template": {
                "metadata": {
                    "annotations": {
                        annotations::UPDATED_AT: timestamp,
                    }
                }
            }
        }
    })
}

/// Submit the reload marker patch for a single workload
#[instrument(skip(client, workload), fields(workload = %workload.reference()))]
pub async fn patch_marker(client: &Client, workload: &Workload, timestamp: &str) -> Result<()> {
    let name = workload.name();
    let namespace = workload.namespace();
    let patch = marker_patch(workload, timestamp);
    let pp = PatchParams {
        field_manager: Some(OPERATOR_NAME.to_string()),
        ..Default::default()
    };

    let result = match workload {
        Workload::Deployment(_) => Api::<Deployment>::namespaced(client.clone(), &namespace)
            .patch(&name, &pp, &Patch::Merge(&patch))
            .await
            .map(|_| ()),
        Workload::StatefulSet(_) => Api::<StatefulSet>::namespaced(client.clone(), &namespace)
            .patch(&name, &pp, &Patch::Merge(&patch))
            .await
            .map(|_| ()),
    };

    result.map_err(|source| {
        let workload = workload.reference();
        if matches!(&source, kube::Error::Api(err) if err.code == 409) {
            ReloaderError::Conflict { workload, source }
        } else {
            ReloaderError::PatchFailed { workload, source }
        }
    })
}
