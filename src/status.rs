use chrono::{DateTime, Utc};
use k8s_openapi::api::core::v1::{ContainerStatus, Pod};

/* ============================= STATUS ACCESSORS ============================= */

fn init_statuses(pod: &Pod) -> &[ContainerStatus] {
    pod.status
        .as_ref()
        .and_then(|s| s.init_container_statuses.as_deref())
        .unwrap_or(&[])
}

fn container_statuses(pod: &Pod) -> &[ContainerStatus] {
    pod.status
        .as_ref()
        .and_then(|s| s.container_statuses.as_deref())
        .unwrap_or(&[])
}

fn phase(pod: &Pod) -> &str {
    pod.status
        .as_ref()
        .and_then(|s| s.phase.as_deref())
        .unwrap_or("Unknown")
}

/* ============================= POD STATUS ============================= */

/// Derive the status column the way `kubectl get pods` does.
///
/// Precedence: deletion marker, then init container problems, then
/// regular container problems, then the phase.
pub fn pod_status(pod: &Pod) -> String {
    if pod.metadata.deletion_timestamp.is_some() {
        return "Terminating".to_string();
    }

    let init = init_statuses(pod);
    for (i, cs) in init.iter().enumerate() {
        let Some(state) = cs.state.as_ref() else {
            continue;
        };
        if let Some(waiting) = state.waiting.as_ref() {
            let reason = waiting.reason.as_deref().unwrap_or("PodInitializing");
            if reason == "PodInitializing" {
                return format!("Init:{}/{}", i, init.len());
            }
            return format!("Init:{reason}");
        }
        if let Some(terminated) = state.terminated.as_ref() {
            let reason = terminated.reason.as_deref().unwrap_or("Error");
            if reason != "Completed" {
                return format!("Init:{reason}");
            }
        }
    }

    let statuses = container_statuses(pod);
    let mut ready = 0;
    for cs in statuses {
        if cs.ready {
            ready += 1;
        }
        let Some(state) = cs.state.as_ref() else {
            continue;
        };
        if let Some(waiting) = state.waiting.as_ref() {
            if let Some(reason) = waiting.reason.as_deref() {
                return reason.to_string();
            }
        } else if let Some(terminated) = state.terminated.as_ref() {
            if terminated.exit_code != 0 {
                return terminated.reason.as_deref().unwrap_or("Error").to_string();
            }
        }
    }

    match phase(pod) {
        "Running" if ready == statuses.len() => "Running".to_string(),
        "Running" => "NotReady".to_string(),
        "Succeeded" => "Completed".to_string(),
        "Failed" => "Error".to_string(),
        other => other.to_string(),
    }
}

/* ============================= COUNTS ============================= */

/// Completed init containers plus regular containers whose ready flag
/// is set.
pub fn ready_count(pod: &Pod) -> usize {
    let init_done = init_statuses(pod)
        .iter()
        .filter(|cs| {
            cs.state
                .as_ref()
                .and_then(|s| s.terminated.as_ref())
                .is_some_and(|t| t.reason.as_deref() == Some("Completed"))
        })
        .count();

    let regular_ready = container_statuses(pod).iter().filter(|cs| cs.ready).count();

    init_done + regular_ready
}

/// Containers declared in the spec, counting init and regular alike.
/// Status lists do not matter here: a container that has not reported
/// yet still counts toward the total.
pub fn total_containers(pod: &Pod) -> usize {
    let Some(spec) = pod.spec.as_ref() else {
        return 0;
    };
    let init = spec.init_containers.as_ref().map_or(0, Vec::len);
    init + spec.containers.len()
}

/// Restarts summed over regular container statuses. Init container
/// restarts are not counted.
pub fn restart_count(pod: &Pod) -> i32 {
    container_statuses(pod).iter().map(|cs| cs.restart_count).sum()
}

/* ============================= AGE ============================= */

/// Age of a pod in seconds, relative to `now`.
///
/// A pod carrying a deletion marker reports its lifespan (start time,
/// or creation time when absent, up to the deletion timestamp) rather
/// than time since deletion. Missing timestamps yield zero.
pub fn age_seconds(pod: &Pod, now: DateTime<Utc>) -> i64 {
    let meta = &pod.metadata;

    if let Some(deleted) = meta.deletion_timestamp.as_ref() {
        let started = pod
            .status
            .as_ref()
            .and_then(|s| s.start_time.as_ref())
            .or(meta.creation_timestamp.as_ref());
        return match started {
            Some(start) => (deleted.0 - start.0).num_seconds(),
            None => 0,
        };
    }

    match meta.creation_timestamp.as_ref() {
        Some(created) => (now - created.0).num_seconds(),
        None => 0,
    }
}

/// Compact kubectl-style duration: "45s", "2m5s", "2h5m", "1d3h".
/// Components are floored; negative input is clamped to zero.
pub fn format_duration(seconds: i64) -> String {
    let secs = seconds.max(0);
    if secs < 60 {
        format!("{secs}s")
    } else if secs < 3600 {
        format!("{}m{}s", secs / 60, secs % 60)
    } else if secs < 86400 {
        format!("{}h{}m", secs / 3600, (secs % 3600) / 60)
    } else {
        format!("{}d{}h", secs / 86400, (secs % 86400) / 3600)
    }
}
