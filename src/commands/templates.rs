//! Template catalog listing.

use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use dinehub_core::error::AppError;
use dinehub_notify::TemplateEngine;
use dinehub_notify::template::icon_for;

/// Catalog display row
#[derive(Debug, Serialize, Tabled)]
struct TemplateRow {
    /// Event
    event: String,
    /// Kind
    kind: String,
    /// Icon
    icon: String,
    /// Priority
    priority: String,
    /// Title pattern
    title: String,
    /// Message pattern
    message: String,
    /// Action pattern
    action: String,
}

/// Print every event kind with the notification it produces
pub fn execute(format: OutputFormat) -> Result<(), AppError> {
    let rows: Vec<TemplateRow> = TemplateEngine::new()
        .catalog()
        .into_iter()
        .map(|t| TemplateRow {
            event: t.event.to_string(),
            kind: t.kind.to_string(),
            icon: icon_for(t.kind).to_string(),
            priority: t.priority.to_string(),
            title: t.title.to_string(),
            message: t.message.to_string(),
            action: t.action.unwrap_or("-").to_string(),
        })
        .collect();

    output::print_list(&rows, format);
    Ok(())
}
