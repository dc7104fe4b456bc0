// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Deployments and StatefulSets behind one workload type.

use k8s_openapi::api::apps::v1::{Deployment, StatefulSet};
use k8s_openapi::api::core::v1::PodSpec;
use k8s_openapi::api::core::v1::PodTemplateSpec;
use kube::ResourceExt;
use std::fmt;

/// Workload kinds whose pods are restarted when a referenced ConfigMap changes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkloadKind {
    Deployment,
    StatefulSet,
}

impl WorkloadKind {
    /// All kinds, in the order they are reconciled
    pub const ALL: [WorkloadKind; 2] = [WorkloadKind::Deployment, WorkloadKind::StatefulSet];
}

impl fmt::Display for WorkloadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkloadKind::Deployment => write!(f, "Deployment"),
            WorkloadKind::StatefulSet => write!(f, "StatefulSet"),
        }
    }
}

/// Identity of a workload, used in logs, errors and reload outcomes
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WorkloadRef {
    pub kind: WorkloadKind,
    pub namespace: String,
    pub name: String,
}

impl fmt::Display for WorkloadRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}/{}", self.kind, self.namespace, self.name)
    }
}

/// A Deployment or StatefulSet as read from the API server
#[derive(Debug, Clone)]
pub enum Workload {
    Deployment(Deployment),
    StatefulSet(StatefulSet),
}

impl Workload {
    pub fn kind(&self) -> WorkloadKind {
        match self {
            Workload::Deployment(_) => WorkloadKind::Deployment,
            Workload::StatefulSet(_) => WorkloadKind::StatefulSet,
        }
    }

    pub fn name(&self) -> String {
        match self {
            Workload::Deployment(d) => d.name_any(),
            Workload::StatefulSet(s) => s.name_any(),
        }
    }

    pub fn namespace(&self) -> String {
        let namespace = match self {
            Workload::Deployment(d) => d.namespace(),
            Workload::StatefulSet(s) => s.namespace(),
        };
        namespace.unwrap_or_default()
    }

    /// The resourceVersion captured when this object was read
    pub fn resource_version(&self) -> Option<String> {
        match self {
            Workload::Deployment(d) => d.resource_version(),
            Workload::StatefulSet(s) => s.resource_version(),
        }
    }

    fn template(&self) -> Option<&PodTemplateSpec> {
        match self {
            Workload::Deployment(d) => d.spec.as_ref().map(|s| &s.template),
            Workload::StatefulSet(s) => s.spec.as_ref().map(|s| &s.template),
        }
    }

    /// The pod spec of the workload's pod template, if it has one
    pub fn pod_spec(&self) -> Option<&PodSpec> {
        self.template().and_then(|t| t.spec.as_ref())
    }

    /// Look up an annotation on the pod template (not on the workload itself)
    pub fn template_annotation(&self, key: &str) -> Option<&str> {
        self.template()
            .and_then(|t| t.metadata.as_ref())
            .and_then(|m| m.annotations.as_ref())
            .and_then(|a| a.get(key))
            .map(|v| v.as_str())
    }

    pub fn reference(&self) -> WorkloadRef {
        WorkloadRef {
            kind: self.kind(),
            namespace: self.namespace(),
            name: self.name(),
        }
    }
}

impl From<Deployment> for Workload {
    fn from(deployment: Deployment) -> Self {
        Workload::Deployment(deployment)
    }
}

impl From<StatefulSet> for Workload {
    fn from(stateful_set: StatefulSet) -> Self {
        Workload::StatefulSet(stateful_set)
    }
}
