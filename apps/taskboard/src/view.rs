//! Terminal rendering, purely derived from state
//!
//! Nothing in this module mutates anything; it turns the task collection
//! and the open form draft into strings for the loop to print.

use domain_tasks::Task;

use crate::controller::{FieldErrors, FormDraft, FormMode};

const HEADERS: [&str; 5] = ["#", "Task Title", "Priority", "Due Date", "Status"];

/// Status column wording
pub fn status_label(status: bool) -> &'static str {
    if status {
        "Completed"
    } else {
        "Not Completed"
    }
}

/// Render the task collection as an aligned table.
///
/// The first column is the row number used by `edit <row>` / `delete <row>`.
pub fn render_table(tasks: &[Task]) -> String {
    if tasks.is_empty() {
        return "No tasks. Type 'add' to create one.\n".to_string();
    }

    let rows: Vec<[String; 5]> = tasks
        .iter()
        .enumerate()
        .map(|(index, task)| {
            [
                (index + 1).to_string(),
                task.title.clone(),
                task.priority.to_string(),
                task.due_date.to_string(),
                status_label(task.status).to_string(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &HEADERS.map(String::from), &widths);
    push_separator(&mut out, &widths);
    for row in &rows {
        push_row(&mut out, row, &widths);
    }
    out
}

/// Render the open modal: title, current draft values, field errors
pub fn render_form(mode: &FormMode, draft: &FormDraft, errors: &FieldErrors) -> String {
    let heading = match mode {
        FormMode::Create => "Add Task",
        FormMode::Edit(_) => "Edit Task",
    };

    let priority = draft
        .priority
        .map(|p| p.to_string())
        .unwrap_or_else(|| "-".to_string());
    let due_date = draft
        .due_date
        .map(|d| d.to_string())
        .unwrap_or_else(|| "-".to_string());

    let mut out = format!(
        "── {heading} ──\n\
         Task Title: {}\n\
         Priority:   {}\n\
         Due Date:   {}\n\
         Status:     {}\n",
        draft.title, priority, due_date,
        status_label(draft.status),
    );

    for message in errors.messages() {
        out.push_str("  ! ");
        out.push_str(message);
        out.push('\n');
    }
    out
}

fn push_row(out: &mut String, cells: &[String; 5], widths: &[usize; 5]) {
    let mut first = true;
    for (cell, width) in cells.iter().zip(widths.iter().copied()) {
        if !first {
            out.push_str("  ");
        }
        out.push_str(&format!("{cell:<width$}"));
        first = false;
    }
    // No trailing padding noise
    while out.ends_with(' ') {
        out.pop();
    }
    out.push('\n');
}

fn push_separator(out: &mut String, widths: &[usize; 5]) {
    let total: usize = widths.iter().sum::<usize>() + 2 * (widths.len() - 1);
    out.push_str(&"-".repeat(total));
    out.push('\n');
}
