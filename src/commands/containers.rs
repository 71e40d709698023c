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
    info!(containers = report.containers.len(), "derived container rows");

    let text = if tsv {
        table::container_table_tsv(&report.containers)
    } else {
        Renderer::new(RenderMode::Lines, !no_color).container_table(&report.containers)
    };

    super::write_output(output, &text)
}
