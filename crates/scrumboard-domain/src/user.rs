use scrumboard_core::{ScrumboardError, ScrumboardResult};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::field_update::FieldUpdate;

pub type UserId = i64;

/// Profile fields of a user, kept as an opaque JSON object so that whatever
/// the server sends is sent back unchanged on update
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserData(Map<String, Value>);

impl UserData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.0.get(field).and_then(Value::as_str)
    }

    pub fn set_field(&mut self, field: impl Into<String>, value: Value) {
        self.0.insert(field.into(), value);
    }

    /// Clearing writes an explicit null so a partial update carries it
    pub fn apply(&mut self, field: impl Into<String>, update: FieldUpdate<Value>) {
        match update {
            FieldUpdate::NoChange => {}
            FieldUpdate::Set(value) => self.set_field(field, value),
            FieldUpdate::Clear => self.set_field(field, Value::Null),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

/// Identity of the logged-in user as persisted on the client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub id: UserId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl CurrentUser {
    pub fn new(id: UserId) -> Self {
        Self {
            id,
            username: None,
            token: None,
        }
    }

    /// Decode the persisted record. A missing record is as malformed as a
    /// record that is not valid JSON.
    pub fn from_record(record: Option<&str>) -> ScrumboardResult<Self> {
        let raw = record.ok_or_else(|| {
            ScrumboardError::MalformedSession("no current user record stored".to_string())
        })?;
        serde_json::from_str(raw).map_err(|e| ScrumboardError::MalformedSession(e.to_string()))
    }

    pub fn to_record(&self) -> ScrumboardResult<String> {
        serde_json::to_string(self).map_err(|e| ScrumboardError::Serialization(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_data_is_transparent() {
        let data: UserData = serde_json::from_value(json!({
            "id": 7,
            "username": "sara",
            "email": "sara@example.com"
        }))
        .unwrap();

        assert_eq!(data.get("id"), Some(&json!(7)));
        assert_eq!(data.get_str("email"), Some("sara@example.com"));
        assert_eq!(
            serde_json::to_value(&data).unwrap(),
            json!({"id": 7, "username": "sara", "email": "sara@example.com"})
        );
    }

    #[test]
    fn test_apply_field_updates() {
        let mut data = UserData::new();
        data.apply("first_name", FieldUpdate::Set(json!("Sara")));
        data.apply("last_name", FieldUpdate::NoChange);
        data.apply("email", FieldUpdate::Clear);

        assert_eq!(data.get_str("first_name"), Some("Sara"));
        assert!(data.get("last_name").is_none());
        assert_eq!(data.get("email"), Some(&Value::Null));
        assert_eq!(data.len(), 2);
    }

    #[test]
    fn test_current_user_round_trip_record() {
        let user = CurrentUser {
            id: 3,
            username: Some("ali".to_string()),
            token: Some("abc".to_string()),
        };
        let record = user.to_record().unwrap();
        assert_eq!(CurrentUser::from_record(Some(&record)).unwrap(), user);
    }

    #[test]
    fn test_current_user_missing_record() {
        let err = CurrentUser::from_record(None).unwrap_err();
        assert!(matches!(err, ScrumboardError::MalformedSession(_)));
    }

    #[test]
    fn test_current_user_malformed_record() {
        let err = CurrentUser::from_record(Some("{\"name\": ")).unwrap_err();
        assert!(matches!(err, ScrumboardError::MalformedSession(_)));

        let err = CurrentUser::from_record(Some("{\"username\": \"x\"}")).unwrap_err();
        assert!(matches!(err, ScrumboardError::MalformedSession(_)));
    }
}
