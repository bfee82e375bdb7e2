//! One notification feed per dashboard role.

use std::sync::Arc;

use tracing::debug;

use dinehub_core::events::{DomainEvent, EventPayload, SystemEvent};
use dinehub_core::types::id::NotificationId;
use dinehub_core::{AppError, AppResult};
use dinehub_entity::{AuditLogEntry, AuditSeverity, RoleScope};

use crate::derived::{AdminFeed, MemoryAuditLog};
use crate::scope::{CustomerScope, ManagerScope, OwnerScope};
use crate::store::NotificationStore;
use crate::template::TemplateEngine;

/// Holds an independent feed for every role. Nothing is shared between them.
#[derive(Debug)]
pub struct NotificationCenter {
    engine: TemplateEngine,
    customer: NotificationStore<CustomerScope>,
    manager: NotificationStore<ManagerScope>,
    owner: NotificationStore<OwnerScope>,
    admin: AdminFeed<MemoryAuditLog>,
}

impl NotificationCenter {
    /// Create a center whose admin feed reads `audit_log`.
    pub fn new(audit_log: Arc<MemoryAuditLog>) -> Self {
        Self {
            engine: TemplateEngine::new(),
            customer: NotificationStore::new(),
            manager: NotificationStore::new(),
            owner: NotificationStore::new(),
            admin: AdminFeed::new(audit_log),
        }
    }

    /// The template engine.
    pub fn engine(&self) -> &TemplateEngine {
        &self.engine
    }

    /// Diner feed.
    pub fn customer(&self) -> &NotificationStore<CustomerScope> {
        &self.customer
    }

    /// Venue manager feed.
    pub fn manager(&self) -> &NotificationStore<ManagerScope> {
        &self.manager
    }

    /// Business owner feed.
    pub fn owner(&self) -> &NotificationStore<OwnerScope> {
        &self.owner
    }

    /// Admin feed.
    pub fn admin(&self) -> &AdminFeed<MemoryAuditLog> {
        &self.admin
    }

    /// Route a domain event into `role`'s feed.
    ///
    /// Stored roles classify the event and add it. The admin feed only
    /// accepts audit events, which are appended to the audit log it reads.
    pub fn publish(&self, role: RoleScope, event: &DomainEvent) -> AppResult<NotificationId> {
        let id = match role {
            RoleScope::Customer => self.customer.add_event(&self.engine, event)?.id,
            RoleScope::Manager => self.manager.add_event(&self.engine, event)?.id,
            RoleScope::Owner => self.owner.add_event(&self.engine, event)?.id,
            RoleScope::Admin => self.append_audit(event)?,
        };
        debug!(%role, event = %event.kind(), %id, "Event published");
        Ok(id)
    }

    fn append_audit(&self, event: &DomainEvent) -> AppResult<NotificationId> {
        let EventPayload::System(SystemEvent::AuditRecorded {
            action,
            description,
            actor_name,
            severity,
        }) = &event.payload
        else {
            return Err(AppError::validation(format!(
                "The admin feed only accepts audit events, got '{}'",
                event.kind()
            )));
        };

        let mut entry = AuditLogEntry::new(
            action.clone(),
            description.clone(),
            event.actor_id.clone().unwrap_or_default(),
            actor_name.clone(),
            AuditSeverity::from_str_value(severity),
        );
        entry.timestamp = event.timestamp;
        let id = NotificationId::from(entry.id);
        self.admin.log().append(entry);
        Ok(id)
    }
}
