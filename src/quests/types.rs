use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestStatus {
    Pending,
    Completed,
}

/// Map position of a quest marker, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

/// A to-do item bound to a monster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quest {
    pub id: String,
    pub title: String,
    pub description: String,
    pub status: QuestStatus,
    pub monster_id: String,
    #[serde(default)]
    pub location: Option<Location>,
    /// Unix timestamp of creation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
    /// Unix timestamp of completion
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<i64>,
}

impl Quest {
    pub fn is_pending(&self) -> bool {
        self.status == QuestStatus::Pending
    }

    pub fn is_completed(&self) -> bool {
        self.status == QuestStatus::Completed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_record_without_timestamps_loads() {
        let quest: Quest = serde_json::from_str(
            r#"{"id":"t-1","title":"Laundry","description":"","status":"pending",
                "monsterId":"m2","location":{"latitude":12.5,"longitude":-40.0}}"#,
        )
        .unwrap();

        assert!(quest.is_pending());
        assert_eq!(quest.monster_id, "m2");
        assert_eq!(quest.created_at, None);
        assert_eq!(quest.location.map(|l| l.latitude), Some(12.5));
    }

    #[test]
    fn test_absent_timestamps_not_serialized() {
        let quest = Quest {
            id: "t-1".to_string(),
            title: "Dishes".to_string(),
            description: String::new(),
            status: QuestStatus::Completed,
            monster_id: "m1".to_string(),
            location: None,
            created_at: None,
            completed_at: None,
        };
        let json = serde_json::to_string(&quest).unwrap();

        assert!(!json.contains("createdAt"));
        assert!(json.contains("\"status\":\"completed\""));
        assert!(json.contains("\"monsterId\":\"m1\""));
    }
}
