//! Demo mode: play a role's sample traffic and show the bell menu.

use std::sync::Arc;

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use dinehub_core::config::AppConfig;
use dinehub_core::error::AppError;
use dinehub_entity::RoleScope;
use dinehub_notify::gateway::BellSnapshot;
use dinehub_notify::{
    BellMenu, DefaultRoutes, DemoFeed, Destination, MemoryAuditLog, Navigator,
    NotificationCenter, NotificationFeed,
};

/// Arguments for the demo command
#[derive(Debug, Args)]
pub struct DemoArgs {
    /// Role whose dashboard to simulate (admin, owner, manager, customer)
    #[arg(short, long, default_value = "customer")]
    pub role: RoleScope,

    /// Show every notification instead of the collapsed panel
    #[arg(long)]
    pub expand: bool,

    /// Open the notification at this 1-based position after the demo
    #[arg(long)]
    pub open: Option<usize>,

    /// Press "mark all as read" after the demo
    #[arg(long)]
    pub mark_all_read: bool,

    /// Override the delay between demo notifications (milliseconds)
    #[arg(long)]
    pub delay_ms: Option<u64>,
}

/// Bell panel display row
#[derive(Debug, Serialize, Tabled)]
struct BellRow {
    /// Position
    #[tabled(rename = "#")]
    position: usize,
    /// Icon
    icon: String,
    /// Priority
    priority: String,
    /// Title
    title: String,
    /// Message
    message: String,
    /// Read
    read: String,
    /// Action
    action: String,
    /// Created
    created: String,
}

/// Navigator for the console: there is no page to switch, so it logs.
#[derive(Debug, Default)]
struct ConsoleNavigator;

impl Navigator for ConsoleNavigator {
    fn navigate(&self, destination: &Destination) {
        tracing::info!(path = %destination.path, "Navigating");
    }
}

/// Execute the demo command
pub async fn execute(
    args: &DemoArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let mut settings = config.notifications.clone();
    if let Some(delay_ms) = args.delay_ms {
        settings.demo_delay_ms = delay_ms;
    }

    let center = NotificationCenter::new(Arc::new(MemoryAuditLog::new()));
    let demo = DemoFeed::new(&settings);
    let mut menu = BellMenu::new(&settings);
    if args.expand {
        menu.toggle_expanded();
    }

    tracing::info!(role = %args.role, delay_ms = settings.demo_delay_ms, "Starting demo");

    match args.role {
        RoleScope::Customer => {
            demo.run(center.customer()).await?;
            present(center.customer(), &menu, args, format)
        }
        RoleScope::Manager => {
            demo.run(center.manager()).await?;
            present(center.manager(), &menu, args, format)
        }
        RoleScope::Owner => {
            demo.run(center.owner()).await?;
            present(center.owner(), &menu, args, format)
        }
        RoleScope::Admin => {
            demo.run_audit(center.admin().log()).await;
            present(center.admin(), &menu, args, format)
        }
    }
}

/// Apply the requested bell actions to `feed` and print the result.
fn present<F: NotificationFeed>(
    feed: &F,
    menu: &BellMenu,
    args: &DemoArgs,
    format: OutputFormat,
) -> Result<(), AppError> {
    let mut opened = None;
    if let Some(position) = args.open {
        let id = feed
            .list(None)
            .get(list_index(position)?)
            .map(|n| n.id)
            .ok_or_else(|| {
                AppError::not_found(format!("No notification at position {position}"))
            })?;
        opened = menu.open(feed, id, &DefaultRoutes, &ConsoleNavigator);
    }

    if args.mark_all_read {
        menu.mark_all_read(feed);
    }

    let snapshot = menu.snapshot(feed);
    match format {
        OutputFormat::Json => output::print_json(&snapshot),
        OutputFormat::Table => print_snapshot(&snapshot, opened.as_ref()),
    }
    Ok(())
}

/// Convert a 1-based `--open` position to a list index.
fn list_index(position: usize) -> Result<usize, AppError> {
    position
        .checked_sub(1)
        .ok_or_else(|| AppError::validation("--open positions start at 1"))
}

fn print_snapshot(snapshot: &BellSnapshot, opened: Option<&Destination>) {
    output::print_kv("Role", snapshot.role.as_str());
    output::print_kv("Badge", snapshot.badge.as_deref().unwrap_or("-"));
    output::print_kv("Unread", &snapshot.unread.to_string());
    println!();

    let rows: Vec<BellRow> = snapshot
        .items
        .iter()
        .enumerate()
        .map(|(i, item)| BellRow {
            position: i + 1,
            icon: item.icon.to_string(),
            priority: item.priority.to_string(),
            title: item.title.clone(),
            message: item.message.clone(),
            read: output::flag(item.is_read),
            action: output::flag(item.action_required),
            created: output::timestamp(&item.created_at),
        })
        .collect();
    output::print_list(&rows, OutputFormat::Table);

    if snapshot.has_more {
        println!("  … show more (--expand)");
    }
    if let Some(destination) = opened {
        output::print_success(&format!("Opened {}", destination.path));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dinehub_core::error::ErrorKind;

    #[test]
    fn test_list_index_is_one_based() {
        assert_eq!(list_index(1).unwrap(), 0);
        assert_eq!(list_index(5).unwrap(), 4);
        assert_eq!(list_index(0).unwrap_err().kind, ErrorKind::Validation);
    }
}
