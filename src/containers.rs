use std::collections::HashMap;

use k8s_openapi::api::core::v1::{Container, ContainerState, ContainerStatus, Pod};

use crate::model::{ContainerKind, ContainerRow};

/* ============================= STATE CLASSIFICATION ============================= */

/// Map a container state variant to (readiness, state label).
///
/// Terminated counts as ready only when it completed; an absent state
/// is reported as Unknown.
pub fn state_info(state: Option<&ContainerState>) -> (bool, String) {
    let Some(state) = state else {
        return (false, "Unknown".to_string());
    };

    if state.running.is_some() {
        (true, "Running".to_string())
    } else if let Some(waiting) = state.waiting.as_ref() {
        (false, waiting.reason.clone().unwrap_or_else(|| "Waiting".to_string()))
    } else if let Some(terminated) = state.terminated.as_ref() {
        let reason = terminated.reason.clone().unwrap_or_else(|| "Terminated".to_string());
        (reason == "Completed", reason)
    } else {
        (false, "Unknown".to_string())
    }
}

/* ============================= ROW DERIVATION ============================= */

fn pod_name(pod: &Pod) -> &str {
    pod.metadata.name.as_deref().unwrap_or("unknown")
}

fn by_name(statuses: Option<&[ContainerStatus]>) -> HashMap<&str, &ContainerStatus> {
    statuses
        .unwrap_or(&[])
        .iter()
        .map(|cs| (cs.name.as_str(), cs))
        .collect()
}

fn image_of(container: &Container) -> String {
    container.image.clone().unwrap_or_default()
}

/// Rows for a pod's init containers, in spec order. Containers without
/// a reported status are skipped.
///
/// Readiness here is termination-completed, full stop: a Running init
/// container reads false even though the general state rule would say
/// true.
pub fn init_rows(pod: &Pod) -> Vec<ContainerRow> {
    let Some(spec) = pod.spec.as_ref() else {
        return Vec::new();
    };
    let statuses = by_name(
        pod.status
            .as_ref()
            .and_then(|s| s.init_container_statuses.as_deref()),
    );

    spec.init_containers
        .as_deref()
        .unwrap_or(&[])
        .iter()
        .filter_map(|container| {
            let cs = statuses.get(container.name.as_str())?;
            let (_, state) = state_info(cs.state.as_ref());
            let ready = cs
                .state
                .as_ref()
                .and_then(|s| s.terminated.as_ref())
                .is_some_and(|t| t.reason.as_deref() == Some("Completed"));
            Some(ContainerRow {
                pod: pod_name(pod).to_string(),
                name: container.name.clone(),
                kind: ContainerKind::Init,
                ready,
                state,
                image: image_of(container),
            })
        })
        .collect()
}

/// Rows for a pod's regular containers, in spec order.
///
/// Readiness is the status `ready` flag as reported, while the state
/// label still comes from the state variant. The two are deliberately
/// sourced independently; see the container table tests.
pub fn regular_rows(pod: &Pod) -> Vec<ContainerRow> {
    let Some(spec) = pod.spec.as_ref() else {
        return Vec::new();
    };
    let statuses = by_name(
        pod.status
            .as_ref()
            .and_then(|s| s.container_statuses.as_deref()),
    );

    spec.containers
        .iter()
        .filter_map(|container| {
            let cs = statuses.get(container.name.as_str())?;
            let (_, state) = state_info(cs.state.as_ref());
            Some(ContainerRow {
                pod: pod_name(pod).to_string(),
                name: container.name.clone(),
                kind: ContainerKind::Regular,
                ready: cs.ready,
                state,
                image: image_of(container),
            })
        })
        .collect()
}
