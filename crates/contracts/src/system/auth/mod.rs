use crate::enums::UserRole;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Payload of a successful `POST /api/auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResult {
    pub token: String,
    pub user: AdminUser,
}

/// The signed-in operator (`GET /api/auth/me`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AdminUser {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub role: UserRole,
}

impl AdminUser {
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_login_result() {
        let r: LoginResult = serde_json::from_value(json!({
            "token": "abc.def.ghi",
            "user": {
                "id": "1e2d3c4b-5a69-4788-9a0b-c1d2e3f4a5b6",
                "fullName": "Root Admin",
                "email": "root@example.com",
                "role": "Admin"
            }
        }))
        .unwrap();
        assert_eq!(r.token, "abc.def.ghi");
        assert!(r.user.is_admin());
    }
}
