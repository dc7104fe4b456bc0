// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Detection of ConfigMap references in a pod spec

use k8s_openapi::api::core::v1::{Container, PodSpec, Volume};

/// Check if a pod spec depends on the named ConfigMap, either as a mounted
/// volume or through a container's `env` / `envFrom` entries.
pub fn references_config_map(pod_spec: &PodSpec, name: &str) -> bool {
    pod_spec
        .volumes
        .iter()
        .flatten()
        .any(|v| volume_references(v, name))
        || pod_spec
            .containers
            .iter()
            .any(|c| container_references(c, name))
}

fn volume_references(volume: &Volume, name: &str) -> bool {
    volume
        .config_map
        .as_ref()
        .is_some_and(|cm| cm.name == name)
}

fn container_references(container: &Container, name: &str) -> bool {
    let in_env = container.env.iter().flatten().any(|e| {
        e.value_from
            .as_ref()
            .and_then(|vf| vf.config_map_key_ref.as_ref())
            .is_some_and(|r| r.name == name)
    });

    in_env
        || container
            .env_from
            .iter()
            .flatten()
            .any(|ef| ef.config_map_ref.as_ref().is_some_and(|r| r.name == name))
}
