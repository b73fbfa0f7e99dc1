use crate::core::domain::Configuration;
use crate::gateway::events::EventPublisher;
use crate::gateway::GatewayPublisherVia;
use crate::gateway::journal::JournalPublisher;
use crate::gateway::logs::LogPublisher;

pub fn create_publisher(config: &Configuration, via: &GatewayPublisherVia) -> Box<dyn EventPublisher> {
    match via {
        GatewayPublisherVia::Logs => {
            Box::new(LogPublisher::new(config.branch_id.as_str()))
        }
        GatewayPublisherVia::Journal(journal) => {
            Box::new(JournalPublisher::new(journal.clone()))
        }
    }
}
