// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! ConfigMap reconciler - watches ConfigMaps and restarts the workloads that use them.

use crate::config::Config;
use crate::error::{ReloaderError, Result};
use crate::reload::{now_rfc3339, reload_dependents, ReloadOutcome};
use futures::StreamExt;
use k8s_openapi::api::core::v1::ConfigMap;
use kube::{
    runtime::{controller::Action, Controller},
    Api, Client, ResourceExt,
};
use kube_runtime::watcher::Config as WatcherConfig;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

pub struct ConfigMapReconciler {
    client: Client,
    config: Config,
}

impl ConfigMapReconciler {
    pub fn new(client: Client, config: Config) -> Self {
        Self { client, config }
    }

    pub async fn run(self) -> anyhow::Result<()> {
        let config_maps: Api<ConfigMap> = match &self.config.watch_namespace {
            Some(ns) => Api::namespaced(self.client.clone(), ns),
            None => Api::all(self.client.clone()),
        };
        let context = Arc::new(self);

        Controller::new(config_maps, WatcherConfig::default())
            .run(reconcile, error_policy, context)
            .for_each(|res| async move {
                match res {
                    Ok(o) => debug!("Reconciled configmap: {:?}", o),
                    Err(e) => warn!("Reconciliation error: {:?}", e),
                }
            })
            .await;

        Ok(())
    }
}

async fn reconcile(config_map: Arc<ConfigMap>, ctx: Arc<ConfigMapReconciler>) -> Result<Action> {
    let name = config_map.name_any();
    let namespace = config_map.namespace().unwrap_or_default();

    debug!("Reconciling configmap: {}/{}", namespace, name);

    let outcome = reload_dependents(&ctx.client, &namespace, &name, &now_rfc3339()).await?;

    if let ReloadOutcome::Reloaded { patched } = &outcome {
        if !patched.is_empty() {
            info!(
                "ConfigMap {}/{} changed, marked {} workload(s) for restart",
                namespace,
                name,
                patched.len()
            );
        }
    }

    // The next change to the ConfigMap triggers the next reload
    Ok(Action::await_change())
}

fn error_policy(
    _config_map: Arc<ConfigMap>,
    error: &ReloaderError,
    ctx: Arc<ConfigMapReconciler>,
) -> Action {
    if error.is_conflict() {
        warn!("Workload changed while reloading, retrying: {}", error);
        Action::requeue(ctx.config.conflict_requeue)
    } else {
        error!("Reconciliation error: {}", error);
        Action::requeue(ctx.config.error_requeue)
    }
}
