use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Audit record, independent of the study-planning entities.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusCheck {
    pub id: String,
    pub client_name: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatusCheckCreate {
    pub client_name: String,
}

impl From<StatusCheckCreate> for StatusCheck {
    fn from(input: StatusCheckCreate) -> Self {
        Self {
            id: super::new_id(),
            client_name: input.client_name,
            timestamp: super::now(),
        }
    }
}
