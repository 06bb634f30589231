use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use deskset_core::layout::schema::{EntitySchema, Presence};
use deskset_core::{Application, Monitor, Project};

/// Box-drawn table with per-column width caps.
pub struct Table {
    headers: Vec<&'static str>,
    max_widths: Vec<usize>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: &[(&'static str, usize)]) -> Self {
        Self {
            headers: columns.iter().map(|(h, _)| *h).collect(),
            max_widths: columns.iter().map(|(_, w)| *w).collect(),
            rows: Vec::new(),
        }
    }

    pub fn row(&mut self, cells: Vec<String>) {
        debug_assert_eq!(cells.len(), self.headers.len());
        self.rows.push(cells);
    }

    fn widths(&self) -> Vec<usize> {
        self.headers
            .iter()
            .enumerate()
            .map(|(idx, header)| {
                self.rows
                    .iter()
                    .map(|row| row[idx].width())
                    .chain(std::iter::once(header.width()))
                    .max()
                    .unwrap_or(0)
                    .min(self.max_widths[idx])
            })
            .collect()
    }

    pub fn render(&self) -> String {
        let widths = self.widths();
        let rule = |left: &str, mid: &str, right: &str| {
            let parts: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
            format!("{}{}{}\n", left, parts.join(mid), right)
        };
        let line = |cells: &[String]| {
            let parts: Vec<String> = cells
                .iter()
                .zip(&widths)
                .map(|(cell, width)| format!(" {} ", truncate(cell, *width)))
                .collect();
            format!("│{}│\n", parts.join("│"))
        };

        let headers: Vec<String> = self.headers.iter().map(|h| h.to_string()).collect();
        let mut out = rule("┌", "┬", "┐");
        out.push_str(&line(&headers));
        out.push_str(&rule("├", "┼", "┤"));
        for row in &self.rows {
            out.push_str(&line(row));
        }
        out.push_str(&rule("└", "┴", "┘"));
        out
    }
}

pub fn print_projects_table(projects: &[Project]) {
    let mut table = Table::new(&[
        ("ID", 38),
        ("Name", 30),
        ("Created", 16),
        ("Last launched", 16),
        ("Monitors", 8),
        ("Apps", 4),
    ]);
    for project in projects {
        table.row(vec![
            project.id.clone(),
            project.name.clone(),
            format_time(Some(project.creation_time)),
            format_time(project.last_launched_time),
            project.monitors.len().to_string(),
            project.apps.len().to_string(),
        ]);
    }
    print!("{}", table.render());
    println!("\nTotal: {} layout(s)", projects.len());
}

pub fn print_monitors_table(monitors: &[Monitor]) {
    let mut table = Table::new(&[
        ("#", 3),
        ("Id", 40),
        ("DPI", 4),
        ("Bounds (DPI aware)", 24),
        ("Bounds (DPI unaware)", 24),
    ]);
    for monitor in monitors {
        let aware = monitor.rect_dpi_aware;
        let unaware = monitor.rect_dpi_unaware;
        table.row(vec![
            monitor.number.to_string(),
            monitor.id.clone(),
            monitor.dpi.to_string(),
            format!("{}x{} @ {},{}", aware.width, aware.height, aware.left, aware.top),
            format!(
                "{}x{} @ {},{}",
                unaware.width, unaware.height, unaware.left, unaware.top
            ),
        ]);
    }
    print!("{}", table.render());
}

pub fn print_apps_table(apps: &[Application]) {
    let mut table = Table::new(&[
        ("Title", 30),
        ("Application", 40),
        ("Monitor", 7),
        ("Position", 24),
        ("State", 9),
    ]);
    for app in apps {
        let p = app.position;
        let state = match (app.is_minimized, app.is_maximized) {
            (true, _) => "minimized",
            (false, true) => "maximized",
            (false, false) => "normal",
        };
        table.row(vec![
            app.title.clone(),
            app.path.clone(),
            app.monitor.to_string(),
            format!("{}x{} @ {},{}", p.width, p.height, p.x, p.y),
            state.to_string(),
        ]);
    }
    print!("{}", table.render());
}

pub fn print_schema_table(schema: &EntitySchema) {
    let mut table = Table::new(&[("Field", 28), ("Kind", 7), ("Presence", 8)]);
    for field in schema.fields {
        let presence = match field.presence {
            Presence::Required => "required",
            Presence::Optional => "optional",
        };
        table.row(vec![
            field.name.to_string(),
            field.kind.to_string(),
            presence.to_string(),
        ]);
    }
    print!("{}", table.render());
}

fn format_time(secs: Option<i64>) -> String {
    secs.and_then(|s| chrono::DateTime::from_timestamp(s, 0))
        .map(|dt| {
            dt.with_timezone(&chrono::Local)
                .format("%Y-%m-%d %H:%M")
                .to_string()
        })
        .unwrap_or_else(|| "-".to_string())
}

/// Pad or cut `s` to exactly `max_width` display columns.
pub fn truncate(s: &str, max_width: usize) -> String {
    let width = s.width();
    if width <= max_width {
        return format!("{}{}", s, " ".repeat(max_width - width));
    }

    let budget = max_width.saturating_sub(3);
    let mut used = 0;
    let mut out = String::new();
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    let dots = ".".repeat(max_width.min(3));
    let pad = max_width.saturating_sub(used + dots.len());
    format!("{}{}{}", out, dots, " ".repeat(pad))
}
