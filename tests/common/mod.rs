use chrono::{TimeZone, Utc};
use k8s_openapi::api::core::v1::{
    Container, ContainerState, ContainerStateRunning, ContainerStateTerminated,
    ContainerStateWaiting, ContainerStatus, Pod, PodSpec, PodStatus,
};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::{ObjectMeta, Time};

#[allow(dead_code)]
pub fn ts(secs: i64) -> Time {
    Time(Utc.timestamp_opt(secs, 0).unwrap())
}

#[allow(dead_code)]
pub fn running_state() -> ContainerState {
    ContainerState {
        running: Some(ContainerStateRunning::default()),
        ..Default::default()
    }
}

#[allow(dead_code)]
pub fn waiting_state(reason: Option<&str>) -> ContainerState {
    ContainerState {
        waiting: Some(ContainerStateWaiting {
            reason: reason.map(str::to_string),
            ..Default::default()
        }),
        ..Default::default()
    }
}

#[allow(dead_code)]
pub fn terminated_state(reason: Option<&str>, exit_code: i32) -> ContainerState {
    ContainerState {
        terminated: Some(ContainerStateTerminated {
            reason: reason.map(str::to_string),
            exit_code,
            ..Default::default()
        }),
        ..Default::default()
    }
}

#[allow(dead_code)]
pub fn spec_container(name: &str, image: &str) -> Container {
    Container {
        name: name.to_string(),
        image: Some(image.to_string()),
        ..Default::default()
    }
}

#[allow(dead_code)]
pub fn container_status(
    name: &str,
    ready: bool,
    restart_count: i32,
    state: Option<ContainerState>,
) -> ContainerStatus {
    ContainerStatus {
        name: name.to_string(),
        ready,
        restart_count,
        state,
        ..Default::default()
    }
}

/// A pod whose spec containers mirror its status entries one to one.
#[allow(dead_code)]
pub fn make_test_pod(
    name: &str,
    phase: &str,
    init_statuses: Vec<ContainerStatus>,
    regular_statuses: Vec<ContainerStatus>,
) -> Pod {
    let mirror = |statuses: &[ContainerStatus]| -> Vec<Container> {
        statuses
            .iter()
            .map(|cs| spec_container(&cs.name, &format!("registry.local/{}:v1", cs.name)))
            .collect()
    };

    Pod {
        metadata: ObjectMeta {
            name: Some(name.to_string()),
            creation_timestamp: Some(ts(1000)),
            ..Default::default()
        },
        spec: Some(PodSpec {
            init_containers: Some(mirror(&init_statuses)),
            containers: mirror(&regular_statuses),
            ..Default::default()
        }),
        status: Some(PodStatus {
            phase: Some(phase.to_string()),
            init_container_statuses: Some(init_statuses),
            container_statuses: Some(regular_statuses),
            ..Default::default()
        }),
    }
}

/// A realistic `kubectl get pods -o json` snapshot: a healthy pod with
/// a completed init container, a crash-looping pod, and a finished job.
#[allow(dead_code)]
pub fn sample_snapshot() -> &'static str {
    r#"{
  "apiVersion": "v1",
  "kind": "List",
  "items": [
    {
      "metadata": {
        "name": "web-0",
        "creationTimestamp": "2024-05-01T10:00:00Z"
      },
      "spec": {
        "initContainers": [
          {"name": "init-db", "image": "busybox:1.36"}
        ],
        "containers": [
          {"name": "web", "image": "nginx:1.25"},
          {"name": "sidecar", "image": "envoy:1.29"}
        ]
      },
      "status": {
        "phase": "Running",
        "startTime": "2024-05-01T10:00:05Z",
        "initContainerStatuses": [
          {
            "name": "init-db",
            "ready": false,
            "restartCount": 0,
            "image": "busybox:1.36",
            "imageID": "",
            "state": {"terminated": {"reason": "Completed", "exitCode": 0}}
          }
        ],
        "containerStatuses": [
          {
            "name": "web",
            "ready": true,
            "restartCount": 0,
            "image": "nginx:1.25",
            "imageID": "",
            "state": {"running": {"startedAt": "2024-05-01T10:00:10Z"}}
          },
          {
            "name": "sidecar",
            "ready": true,
            "restartCount": 1,
            "image": "envoy:1.29",
            "imageID": "",
            "state": {"running": {"startedAt": "2024-05-01T10:00:12Z"}}
          }
        ]
      }
    },
    {
      "metadata": {
        "name": "worker-1",
        "creationTimestamp": "2024-05-01T09:00:00Z"
      },
      "spec": {
        "containers": [
          {"name": "worker", "image": "worker:latest"}
        ]
      },
      "status": {
        "phase": "Running",
        "containerStatuses": [
          {
            "name": "worker",
            "ready": false,
            "restartCount": 7,
            "image": "worker:latest",
            "imageID": "",
            "state": {"waiting": {"reason": "CrashLoopBackOff"}}
          }
        ]
      }
    },
    {
      "metadata": {
        "name": "migrate-job",
        "creationTimestamp": "2024-05-01T08:00:00Z"
      },
      "spec": {
        "containers": [
          {"name": "migrate", "image": "migrate:v2"}
        ]
      },
      "status": {
        "phase": "Succeeded",
        "containerStatuses": [
          {
            "name": "migrate",
            "ready": false,
            "restartCount": 0,
            "image": "migrate:v2",
            "imageID": "",
            "state": {"terminated": {"reason": "Completed", "exitCode": 0}}
          }
        ]
      }
    }
  ]
}"#
}
