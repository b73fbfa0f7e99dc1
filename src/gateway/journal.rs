use std::cell::RefCell;
use std::rc::Rc;
use crate::core::events::DomainEvent;
use crate::core::library::LibraryResult;
use crate::gateway::events::EventPublisher;

/// Shared, append-only list of published events.
#[derive(Debug, Clone, Default)]
pub struct EventJournal {
    events: Rc<RefCell<Vec<DomainEvent>>>,
}

impl EventJournal {
    pub fn events(&self) -> Vec<DomainEvent> {
        self.events.borrow().clone()
    }

    pub fn names(&self) -> Vec<String> {
        self.events.borrow().iter().map(|e| e.name.to_string()).collect()
    }

    fn append(&self, event: &DomainEvent) {
        self.events.borrow_mut().push(event.clone());
    }
}

#[derive(Debug)]
pub struct JournalPublisher {
    journal: EventJournal,
}

impl JournalPublisher {
    pub(crate) fn new(journal: EventJournal) -> Self {
        Self {
            journal,
        }
    }
}

impl EventPublisher for JournalPublisher {
    fn publish(&self, event: &DomainEvent) -> LibraryResult<()> {
        tracing::debug!(event_id = %event.event_id, name = %event.name, "journal event");
        self.journal.append(event);
        Ok(())
    }
}
