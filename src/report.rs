use chrono::{DateTime, Utc};
use k8s_openapi::api::core::v1::Pod;

use crate::containers;
use crate::model::{ContainerRow, PodRow, PodTable};
use crate::status;

/// Both derived tables for one snapshot, rows in document order.
#[derive(Debug, Default)]
pub struct Report {
    pub pods: Vec<PodRow>,
    pub containers: Vec<ContainerRow>,
}

fn pod_row(pod: &Pod, now: DateTime<Utc>) -> PodRow {
    PodRow {
        name: pod.metadata.name.clone().unwrap_or_else(|| "unknown".to_string()),
        ready: status::ready_count(pod),
        total: status::total_containers(pod),
        status: status::pod_status(pod),
        restarts: status::restart_count(pod),
        age: status::format_duration(status::age_seconds(pod, now)),
    }
}

/// Walk the snapshot once: one pod row per item, then that pod's init
/// container rows followed by its regular container rows. `now` is
/// captured by the caller so a run is a pure function of its input.
pub fn build_report(table: &PodTable, now: DateTime<Utc>) -> Report {
    let mut report = Report::default();

    for pod in &table.items {
        report.pods.push(pod_row(pod, now));
        report.containers.extend(containers::init_rows(pod));
        report.containers.extend(containers::regular_rows(pod));
    }

    report
}
