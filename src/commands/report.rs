use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use tracing::info;

use kube_report::model::load_table;
use kube_report::report::build_report;
use kube_report::table::{RenderMode, Renderer};

/// Render both tables into `output_dir/pods` and
/// `output_dir/containers`. Input is fully decoded before anything is
/// written, so a bad snapshot never leaves partial output behind.
pub fn run(input: Option<&Path>, output_dir: &Path, no_color: bool) -> Result<()> {
    let table = load_table(input)?;
    let report = build_report(&table, Utc::now());

    let renderer = Renderer::new(RenderMode::Grid, !no_color);
    let pods = renderer.pod_table(&report.pods);
    let containers = renderer.container_table(&report.containers);

    fs::create_dir_all(output_dir).with_context(|| {
        format!("Failed to create output directory '{}'", output_dir.display())
    })?;

    let pods_path = output_dir.join("pods");
    fs::write(&pods_path, pods)
        .with_context(|| format!("Failed to write '{}'", pods_path.display()))?;

    let containers_path = output_dir.join("containers");
    fs::write(&containers_path, containers)
        .with_context(|| format!("Failed to write '{}'", containers_path.display()))?;

    info!(
        pods = report.pods.len(),
        containers = report.containers.len(),
        dir = %output_dir.display(),
        "report written"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SNAPSHOT: &str = r#"{
      "items": [
        {
          "metadata": {"name": "web-0", "creationTimestamp": "2024-05-01T10:00:00Z"},
          "spec": {"containers": [{"name": "web", "image": "nginx:1.25"}]},
          "status": {
            "phase": "Running",
            "containerStatuses": [
              {
                "name": "web",
                "ready": true,
                "restartCount": 0,
                "image": "nginx:1.25",
                "imageID": "",
                "state": {"running": {}}
              }
            ]
          }
        }
      ]
    }"#;

    fn snapshot_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(contents.as_bytes()).expect("write");
        file
    }

    #[test]
    fn test_report_writes_both_tables() {
        let input = snapshot_file(SNAPSHOT);
        let dir = tempfile::tempdir().expect("temp dir");
        let out = dir.path().join("cache");

        run(Some(input.path()), &out, true).expect("report succeeds");

        let pods = fs::read_to_string(out.join("pods")).expect("pods file");
        assert!(pods.starts_with("NAME"));
        assert!(pods.contains("web-0"));
        assert!(pods.ends_with('\n'));

        let containers = fs::read_to_string(out.join("containers")).expect("containers file");
        assert!(containers.starts_with("POD\t"));
        assert!(containers.contains("nginx:1.25"));
        assert!(containers.ends_with('\n'));
    }

    #[test]
    fn test_invalid_input_leaves_no_output_behind() {
        let input = snapshot_file("{not json");
        let dir = tempfile::tempdir().expect("temp dir");
        let out = dir.path().join("cache");

        run(Some(input.path()), &out, true).expect_err("invalid JSON must fail");

        assert!(!out.exists());
    }

    #[test]
    fn test_missing_input_file_fails_before_writing() {
        let dir = tempfile::tempdir().expect("temp dir");
        let out = dir.path().join("cache");

        run(Some(Path::new("/nonexistent/pods.json")), &out, true)
            .expect_err("missing file must fail");

        assert!(!out.exists());
    }
}
