use std::fmt::{self, Display, Write};

use navigation::presenter::{GradeCell, GradePanel, SearchPanel, SelectorPanel, Tone};
use navigation::PanelView;

/// Text form of the visible panels, one block per panel.
pub fn render(view: &PanelView) -> String {
    let mut out = String::new();
    // Writing into a String only fails if a Display impl does.
    if let Err(err) = write_view(&mut out, view) {
        tracing::warn!(error = %err, "render: panel text truncated");
    }
    out
}

fn write_view(out: &mut impl Write, view: &PanelView) -> fmt::Result {
    if let Some(search) = &view.search {
        search_block(out, search)?;
    }
    if let Some(semesters) = &view.semesters {
        selector_block(out, "semesters", "semester", semesters)?;
    }
    if let Some(classes) = &view.classes {
        selector_block(out, "classes", "class", classes)?;
    }
    if let Some(grades) = &view.grades {
        grades_block(out, grades)?;
    }
    Ok(())
}

fn search_block(out: &mut impl Write, panel: &SearchPanel) -> fmt::Result {
    let Some(status) = &panel.status else {
        return writeln!(out, "[search] enter a student name");
    };
    let marker = match status.tone {
        Tone::Busy => "..",
        Tone::Success => "ok",
        Tone::Error => "!!",
    };
    writeln!(out, "[search] {marker} {}", status.text)
}

fn selector_block<T: Display + PartialEq>(
    out: &mut impl Write,
    title: &str,
    command: &str,
    panel: &SelectorPanel<T>,
) -> fmt::Result {
    writeln!(out, "[{title}]")?;
    for option in &panel.options {
        let (mark, pick) = match &option.value {
            None => (panel.selected.is_none(), command.to_string()),
            Some(value) => (
                panel.selected.as_ref() == Some(value),
                format!("{command} {value}"),
            ),
        };
        let mark = if mark { '>' } else { ' ' };
        writeln!(out, "  {mark} {pick:<10} {}", option.label)?;
    }
    Ok(())
}

fn grades_block(out: &mut impl Write, panel: &GradePanel) -> fmt::Result {
    match &panel.class_name {
        Some(name) => writeln!(out, "[grades] {name}")?,
        None => writeln!(out, "[grades]")?,
    }
    writeln!(out, "  midterm  {}", cell(&panel.midterm))?;
    writeln!(out, "  final    {}", cell(&panel.final_grade))?;
    writeln!(out, "  remarks  {}", panel.remarks)
}

fn cell(cell: &GradeCell) -> String {
    match cell.tier.style_class() {
        "" => cell.text.clone(),
        style => format!("{} ({}, {style})", cell.text, cell.tier.label()),
    }
}
