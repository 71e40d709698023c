use crate::model::{ContainerRow, PodRow};

/* ============================= COLORS ============================= */

/// Presentation colors for table cells. `Plain` renders no escape
/// codes at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Green,
    Yellow,
    White,
    Gray,
    Plain,
}

impl Color {
    fn code(self) -> Option<&'static str> {
        match self {
            Color::Red => Some("\x1b[91m"),
            Color::Green => Some("\x1b[92m"),
            Color::Yellow => Some("\x1b[93m"),
            Color::White => Some("\x1b[97m"),
            Color::Gray => Some("\x1b[90m"),
            Color::Plain => None,
        }
    }
}

const RESET: &str = "\x1b[0m";

/// Whether escape codes are emitted at all. `--no-color` swaps in a
/// disabled palette; classification and alignment are untouched.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub fn new(enabled: bool) -> Self {
        Palette { enabled }
    }

    /// Wrap already-padded text in a color directive. Padding must be
    /// applied before this call so escape codes never count toward
    /// column widths.
    fn paint(&self, color: Color, text: &str) -> String {
        match color.code() {
            Some(code) if self.enabled => format!("{code}{text}{RESET}"),
            _ => text.to_string(),
        }
    }
}

/// The visible text of a rendered line, escape codes removed. Colored
/// and plain renders of the same rows differ only by what this strips.
pub fn strip_ansi(text: &str) -> String {
    let mut out = String::new();
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            for t in chars.by_ref() {
                if t == 'm' {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}

/* ============================= CLASSIFICATION ============================= */

const ALERT_MARKERS: [&str; 4] = ["Error", "Failed", "CrashLoopBackOff", "OOMKilled"];
const MUTED_MARKERS: [&str; 3] = ["Completed", "Terminated", "Succeeded"];

/// A whole-row color override, taking precedence over per-cell colors:
/// red for failure states, gray for finished ones.
pub fn row_color(label: &str) -> Option<Color> {
    if ALERT_MARKERS.iter().any(|m| label.contains(m)) {
        Some(Color::Red)
    } else if MUTED_MARKERS.iter().any(|m| label.contains(m)) {
        Some(Color::Gray)
    } else {
        None
    }
}

pub fn ready_color(ready: usize, total: usize) -> Color {
    if ready == total && total > 0 {
        Color::Green
    } else {
        Color::Yellow
    }
}

pub fn status_color(status: &str) -> Color {
    if status == "Running" { Color::Green } else { Color::Yellow }
}

pub fn restarts_color(restarts: i32) -> Color {
    if restarts > 0 { Color::Yellow } else { Color::White }
}

pub fn container_ready_color(ready: bool) -> Color {
    if ready { Color::Green } else { Color::Red }
}

pub fn container_state_color(state: &str) -> Color {
    if state == "Running" { Color::Green } else { Color::Yellow }
}

/* ============================= RENDERING ============================= */

/// How the renderer assembles its output. Both modes share one column
/// and color contract and must produce byte-identical text; `Lines`
/// streams row by row while `Grid` lays the whole table out first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    Lines,
    Grid,
}

// Minimum widths; 0 means natural width (no padding).
const POD_COLUMNS: [usize; 5] = [50, 10, 20, 10, 0];
const CONTAINER_COLUMNS: [usize; 4] = [50, 10, 20, 0];

/// A cell that has been classified but not yet padded or painted.
struct Cell {
    text: String,
    color: Color,
}

impl Cell {
    fn new(text: impl Into<String>, color: Color) -> Self {
        Cell { text: text.into(), color }
    }
}

/// How a line is painted. Headers are painted white as one piece,
/// prefix included; a row override covers the aligned cells but leaves
/// the prefix alone; otherwise each cell carries its own color.
#[derive(Clone, Copy)]
enum Tone {
    Header,
    Override(Color),
    PerCell,
}

/// One table line: an optional tab-separated prefix (the container
/// table's pod column), the aligned cells, and how to paint them.
struct Line {
    prefix: Option<String>,
    cells: Vec<Cell>,
    tone: Tone,
}

fn layout(line: &Line, widths: &[usize], palette: &Palette) -> String {
    let padded: Vec<String> = line
        .cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{:<width$}", cell.text))
        .collect();

    let with_prefix = |body: String| match &line.prefix {
        Some(prefix) => format!("{prefix}\t{body}"),
        None => body,
    };

    match line.tone {
        Tone::Header => palette.paint(Color::White, &with_prefix(padded.join(" "))),
        Tone::Override(color) => with_prefix(palette.paint(color, &padded.join(" "))),
        Tone::PerCell => with_prefix(
            padded
                .iter()
                .zip(&line.cells)
                .map(|(text, cell)| palette.paint(cell.color, text))
                .collect::<Vec<_>>()
                .join(" "),
        ),
    }
}

fn render(lines: Vec<Line>, widths: &[usize], mode: RenderMode, palette: &Palette) -> String {
    match mode {
        RenderMode::Lines => {
            let mut out = String::new();
            for line in &lines {
                out.push_str(&layout(line, widths, palette));
                out.push('\n');
            }
            out
        }
        RenderMode::Grid => {
            let grid: Vec<String> =
                lines.iter().map(|line| layout(line, widths, palette)).collect();
            let mut out = grid.join("\n");
            out.push('\n');
            out
        }
    }
}

pub struct Renderer {
    pub mode: RenderMode,
    pub palette: Palette,
}

impl Renderer {
    pub fn new(mode: RenderMode, color: bool) -> Self {
        Renderer { mode, palette: Palette::new(color) }
    }

    /// Render the pod table, header first, one line per row.
    pub fn pod_table(&self, rows: &[PodRow]) -> String {
        let mut lines = vec![Line {
            prefix: None,
            cells: ["NAME", "READY", "STATUS", "RESTARTS", "AGE"]
                .into_iter()
                .map(|h| Cell::new(h, Color::Plain))
                .collect(),
            tone: Tone::Header,
        }];

        for row in rows {
            lines.push(Line {
                prefix: None,
                cells: vec![
                    Cell::new(row.name.clone(), Color::White),
                    Cell::new(row.ready_display(), ready_color(row.ready, row.total)),
                    Cell::new(row.status.clone(), status_color(&row.status)),
                    Cell::new(row.restarts.to_string(), restarts_color(row.restarts)),
                    Cell::new(row.age.clone(), Color::Plain),
                ],
                tone: row_color(&row.status).map_or(Tone::PerCell, Tone::Override),
            });
        }

        render(lines, &POD_COLUMNS, self.mode, &self.palette)
    }

    /// Render the container table. The pod column sits before a tab;
    /// row-level red/gray covers the aligned cells only, while the
    /// header is painted whole, pod column included.
    pub fn container_table(&self, rows: &[ContainerRow]) -> String {
        let mut lines = vec![Line {
            prefix: Some("POD".to_string()),
            cells: ["NAME", "READY", "STATUS", "IMAGE"]
                .into_iter()
                .map(|h| Cell::new(h, Color::Plain))
                .collect(),
            tone: Tone::Header,
        }];

        for row in rows {
            lines.push(Line {
                prefix: Some(row.pod.clone()),
                cells: vec![
                    Cell::new(row.name.clone(), Color::White),
                    Cell::new(row.ready_display(), container_ready_color(row.ready)),
                    Cell::new(row.state.clone(), container_state_color(&row.state)),
                    Cell::new(row.image.clone(), Color::Gray),
                ],
                tone: row_color(&row.state).map_or(Tone::PerCell, Tone::Override),
            });
        }

        render(lines, &CONTAINER_COLUMNS, self.mode, &self.palette)
    }
}

/* ============================= TSV ============================= */

/// Plain tab-separated pod rows, no header and no color. The shape fed
/// to downstream scripts.
pub fn pod_table_tsv(rows: &[PodRow]) -> String {
    let mut out = String::new();
    for row in rows {
        out.push_str(&format!(
            "{}\t{}\t{}\t{}\t{}\n",
            row.name,
            row.ready_display(),
            row.status,
            row.restarts,
            row.age
        ));
    }
    out
}

/// Plain tab-separated container rows, including the container kind
/// column the aligned table leaves out.
pub fn container_table_tsv(rows: &[ContainerRow]) -> String {
    let mut out = String::new();
    for row in rows {
        out.push_str(&format!(
            "{}\t{}\t{}\t{}\t{}\t{}\n",
            row.pod,
            row.name,
            row.kind,
            row.ready_display(),
            row.state,
            row.image
        ));
    }
    out
}
