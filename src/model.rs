use std::fmt;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use anyhow::{Context, Result};
use k8s_openapi::api::core::v1::Pod;
use serde::Deserialize;

/* ============================= INPUT DOCUMENT ============================= */

/// A decoded pod-list snapshot, the shape emitted by
/// `kubectl get pods -o json`. Everything beyond `items` is ignored,
/// and a document without `items` is an empty list, not an error.
#[derive(Debug, Default, Deserialize)]
pub struct PodTable {
    #[serde(default)]
    pub items: Vec<Pod>,
}

/// Read and decode a pod list from a file, or from stdin when no path
/// (or `-`) is given.
///
/// A missing file or malformed JSON fails the whole run; an
/// incomplete-but-valid document does not.
pub fn load_table(input: Option<&Path>) -> Result<PodTable> {
    let path = input.filter(|p| p.as_os_str() != "-");

    let raw = match path {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open input file '{}'", path.display()))?;
            let mut buf = String::new();
            BufReader::new(file)
                .read_to_string(&mut buf)
                .with_context(|| format!("Failed to read input file '{}'", path.display()))?;
            buf
        }
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read pod list from stdin")?;
            buf
        }
    };

    serde_json::from_str(&raw).context("Input is not a valid pod list JSON document")
}

/* ============================= DERIVED ROWS ============================= */

/// One line of the pod table. Computed once per pod per run and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PodRow {
    pub name: String,
    /// Containers counted as ready. Never exceeds `total`.
    pub ready: usize,
    /// Containers declared in the spec (init + regular), whether or
    /// not they have reported a status yet.
    pub total: usize,
    pub status: String,
    pub restarts: i32,
    pub age: String,
}

impl PodRow {
    pub fn ready_display(&self) -> String {
        format!("{}/{}", self.ready, self.total)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerKind {
    Init,
    Regular,
}

impl fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContainerKind::Init => write!(f, "init"),
            ContainerKind::Regular => write!(f, "container"),
        }
    }
}

/// One line of the container table. Only containers that have reported
/// a status get a row; spec-only containers are skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerRow {
    pub pod: String,
    pub name: String,
    pub kind: ContainerKind,
    pub ready: bool,
    pub state: String,
    pub image: String,
}

impl ContainerRow {
    pub fn ready_display(&self) -> &'static str {
        if self.ready { "true" } else { "false" }
    }
}
