//! Admin view over an audit log file.

use std::sync::Arc;

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use dinehub_core::config::AppConfig;
use dinehub_core::error::{AppError, ErrorKind};
use dinehub_entity::AuditLogEntry;
use dinehub_notify::{AdminFeed, MemoryAuditLog, NotificationFeed, NotificationQuery};

/// Arguments for the audit command
#[derive(Debug, Args)]
pub struct AuditArgs {
    /// JSON file holding an array of audit log entries
    #[arg(long)]
    pub file: String,

    /// Only show entries whose text matches
    #[arg(short, long)]
    pub search: Option<String>,

    /// Only show unread (non-low severity) entries
    #[arg(long)]
    pub unread: bool,

    /// Number of results (defaults to everything)
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Audit notification display row
#[derive(Debug, Serialize, Tabled)]
struct AuditRow {
    /// Time
    time: String,
    /// Priority
    priority: String,
    /// Title
    title: String,
    /// Actor
    actor: String,
    /// IP
    ip: String,
    /// Read
    read: String,
    /// Action
    action: String,
}

/// Read an audit log JSON array from `path`.
fn load_entries(path: &str) -> Result<Vec<AuditLogEntry>, AppError> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| AppError::with_source(ErrorKind::Io, format!("Cannot read '{path}'"), e))?;
    Ok(serde_json::from_str(&raw)?)
}

/// Execute the audit command
pub fn execute(args: &AuditArgs, _config: &AppConfig, format: OutputFormat) -> Result<(), AppError> {
    let entries = load_entries(&args.file)?;
    tracing::info!(file = %args.file, entries = entries.len(), "Loaded audit log");

    let feed = AdminFeed::new(Arc::new(MemoryAuditLog::from_entries(entries)));

    let mut query = NotificationQuery::new();
    if let Some(text) = &args.search {
        query = query.text(text);
    }
    if args.unread {
        query = query.unread_only();
    }
    if let Some(limit) = args.limit {
        query = query.limit(limit);
    }
    let notifications = feed.query(&query);

    match format {
        OutputFormat::Json => output::print_json(&notifications),
        OutputFormat::Table => {
            output::print_kv("Unread", &feed.unread_count().to_string());
            println!();
            let rows: Vec<AuditRow> = notifications
                .iter()
                .map(|n| AuditRow {
                    time: output::timestamp(&n.created_at),
                    priority: n.priority.to_string(),
                    title: n.title.clone(),
                    actor: n.fields.actor_name.clone(),
                    ip: n.fields.source_ip.clone().unwrap_or_default(),
                    read: output::flag(n.is_read),
                    action: output::flag(n.action_required),
                })
                .collect();
            output::print_list(&rows, format);
        }
    }
    Ok(())
}
