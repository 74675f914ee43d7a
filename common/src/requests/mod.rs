use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::model::collection::ApiCollectionRequest;
use crate::model::contact::ContactMessage;
use crate::model::project::Project;
use crate::model::user::User;

/// Success envelope around a payload of type `T`.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
    pub data: T,
    #[serde(default)]
    pub status_code: Option<u16>,
}

/// Failure envelope. Both fields are optional because the backend is not
/// consistent about them.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorEnvelope {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub errors: Option<Map<String, Value>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionPage {
    #[serde(default)]
    pub collection_requests: Vec<ApiCollectionRequest>,
    #[serde(default)]
    pub pagination: Option<Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserPage {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub pagination: Option<Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProjectPage {
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub pagination: Option<Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MessagePage {
    #[serde(default)]
    pub messages: Vec<ContactMessage>,
}

/// Body of `POST auth/login`.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// `data` of a login or refresh response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoginData {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub expires_in: Option<u64>,
    pub user: User,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_login_envelope() {
        let body = serde_json::json!({
            "success": true,
            "message": "Connexion réussie",
            "data": {
                "access_token": "tok",
                "token_type": "bearer",
                "expires_in": 3600,
                "user": {
                    "id": 1,
                    "name": "Awa Koné",
                    "email": "awa@lynays.ci",
                    "role": "ADMIN",
                    "createdAt": "2025-01-02T10:00:00Z"
                }
            },
            "status_code": 200
        });
        let envelope: Envelope<LoginData> = serde_json::from_value(body).expect("decode");
        assert!(envelope.success);
        assert_eq!(envelope.data.access_token, "tok");
        assert_eq!(envelope.data.user.id, "1");
    }

    #[test]
    fn decodes_empty_collection_page() {
        let body = r#"{"success":true,"message":"ok","data":{"collectionRequests":[],"pagination":null}}"#;
        let envelope: Envelope<CollectionPage> = serde_json::from_str(body).expect("decode");
        assert!(envelope.data.collection_requests.is_empty());
    }
}
