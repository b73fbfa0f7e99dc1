use crate::gateway::journal::EventJournal;

pub mod events;
pub mod factory;
pub mod journal;
pub mod logs;

#[derive(Debug, Clone, Default)]
pub enum GatewayPublisherVia {
    #[default]
    Logs,
    Journal(EventJournal),
}
