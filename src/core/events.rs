use std::collections::HashMap;
use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::utils::date::serializer;

// DomainEventType defines type of event for circulation changes
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum DomainEventType {
    Added,
    Updated,
}

// DomainEvent abstracts domain event for data changes
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct DomainEvent {
    pub event_id: String,
    pub name: String,
    pub group: String,
    pub key: String,
    pub kind: DomainEventType,
    pub metadata: HashMap<String, String>,
    pub json_data: String,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
}

impl DomainEvent {
    pub fn added<T: Serialize>(name: &str, group: &str, key: i64, metadata: &HashMap<String, String>, data: &T) -> serde_json::Result<Self> {
        let json = serde_json::to_string(&data)?;
        Ok(Self::build(name, group, key, DomainEventType::Added, metadata, json))
    }

    pub fn updated<T: Serialize>(name: &str, group: &str, key: i64, metadata: &HashMap<String, String>, data: &T) -> serde_json::Result<Self> {
        let json = serde_json::to_string(&data)?;
        Ok(Self::build(name, group, key, DomainEventType::Updated, metadata, json))
    }

    fn build(name: &str, group: &str, key: i64, kind: DomainEventType, metadata: &HashMap<String, String>, json: String) -> DomainEvent {
        DomainEvent {
            event_id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            group: group.to_string(),
            key: key.to_string(),
            kind,
            metadata: metadata.clone(),
            json_data: json,
            created_at: Utc::now().naive_utc(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use crate::core::events::{DomainEvent, DomainEventType};

    #[test]
    fn test_should_build_added() {
        let data = HashMap::from([("title", "Dune")]);
        let event = DomainEvent::added("item_added", "catalog", 3, &HashMap::from([("k".to_string(), "v".to_string())]), &data).expect("build event");
        assert_eq!("item_added", event.name.as_str());
        assert_eq!("3", event.key.as_str());
        assert_eq!(DomainEventType::Added, event.kind);
        assert_eq!(r#"{"title":"Dune"}"#, event.json_data.as_str());
    }

    #[test]
    fn test_should_build_updated() {
        let data = HashMap::from([("holder", 1)]);
        let event = DomainEvent::updated("item_checkout", "checkout", 1, &HashMap::new(), &data).expect("build event");
        assert_eq!("checkout", event.group.as_str());
        assert_eq!(DomainEventType::Updated, event.kind);
    }

    #[test]
    fn test_should_assign_unique_event_ids() {
        let first = DomainEvent::added("a", "g", 1, &HashMap::new(), &1).expect("build event");
        let second = DomainEvent::added("a", "g", 1, &HashMap::new(), &1).expect("build event");
        assert_ne!(first.event_id, second.event_id);
    }

    #[test]
    fn test_should_round_trip_json() {
        let event = DomainEvent::added("patron_registered", "patrons", 2, &HashMap::new(), &"Bob").expect("build event");
        let json = serde_json::to_string(&event).expect("serialize");
        let loaded: DomainEvent = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(event.event_id, loaded.event_id);
        assert_eq!(event.kind, loaded.kind);
    }
}
