use crate::core::events::DomainEvent;
use crate::core::library::LibraryResult;
use crate::gateway::events::EventPublisher;

// LogPublisher turns every domain event into a structured tracing record.
#[derive(Debug)]
pub struct LogPublisher {
    branch_id: String,
}

impl LogPublisher {
    pub(crate) fn new(branch_id: &str) -> Self {
        Self {
            branch_id: branch_id.to_string(),
        }
    }
}

impl EventPublisher for LogPublisher {
    fn publish(&self, event: &DomainEvent) -> LibraryResult<()> {
        tracing::info!(
            branch_id = %self.branch_id,
            event_id = %event.event_id,
            name = %event.name,
            group = %event.group,
            key = %event.key,
            kind = ?event.kind,
            data = %event.json_data,
            "domain event");
        Ok(())
    }
}
