use std::path::Path;

use anyhow::Result;
use chrono::Utc;
use tracing::info;

use kube_report::model::load_table;
use kube_report::report::build_report;
use kube_report::table::{self, RenderMode, Renderer};

pub fn run(input: Option<&Path>, output: Option<&Path>, tsv: bool, no_color: bool) -> Result<()> {
    let table = load_table(input)?;
    let report = build_report(&table, Utc::now());
    info!(pods = report.pods.len(), "derived pod rows");

    let text = if tsv {
        table::pod_table_tsv(&report.pods)
    } else {
        Renderer::new(RenderMode::Lines, !no_color).pod_table(&report.pods)
    };

    super::write_output(output, &text)
}
