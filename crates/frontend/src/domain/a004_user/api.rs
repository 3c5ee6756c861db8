use crate::shared::api_client::{ApiClient, Method};
use crate::shared::api_error::ApiError;
use crate::shared::record_lifecycle::RecordLifecycle;
use contracts::domain::a004_user::{UserActiveQuery, UserListDto, UserQuery};
use contracts::shared::PagedResult;
use uuid::Uuid;

pub const USERS_PATH: &str = "/api/users";

#[derive(Clone, Copy)]
pub struct UserService {
    client: ApiClient,
}

impl UserService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub fn list_url(&self, query: &UserQuery) -> Result<String, ApiError> {
        self.client.url_with_query(USERS_PATH, query)
    }

    pub fn set_active_url(&self, id: Uuid, is_active: bool) -> Result<String, ApiError> {
        let path = format!("{}/status", Self::record_path(id));
        self.client
            .url_with_query(&path, &UserActiveQuery { is_active })
    }

    pub async fn list(&self, query: &UserQuery) -> Result<PagedResult<UserListDto>, ApiError> {
        self.client.get(&self.list_url(query)?).await
    }

    pub async fn get(&self, id: Uuid) -> Result<UserListDto, ApiError> {
        self.client.get(&self.record_url(id)).await
    }

    pub async fn set_active(&self, id: Uuid, is_active: bool) -> Result<(), ApiError> {
        let url = self.set_active_url(id, is_active)?;
        self.client.send(Method::Put, &url).await
    }
}

impl RecordLifecycle for UserService {
    const BASE_PATH: &'static str = USERS_PATH;

    fn client(&self) -> &ApiClient {
        &self.client
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::UserRole;

    fn service() -> UserService {
        UserService::new(ApiClient::new("http://localhost:5000", 1000))
    }

    #[test]
    fn test_list_url_with_role() {
        let query = UserQuery {
            role: Some(UserRole::Seller),
            include_deleted: true,
            ..UserQuery::default()
        };
        let url = service().list_url(&query).unwrap();
        assert_eq!(
            url,
            "http://localhost:5000/api/users?pageNumber=1&pageSize=20&role=Seller&includeDeleted=true"
        );
    }

    #[test]
    fn test_set_active_url() {
        let url = service().set_active_url(Uuid::nil(), false).unwrap();
        assert_eq!(
            url,
            "http://localhost:5000/api/users/00000000-0000-0000-0000-000000000000/status?IsActive=false"
        );
    }

    #[test]
    fn test_restore_url() {
        assert_eq!(
            service().restore_url(Uuid::nil()),
            "http://localhost:5000/api/users/00000000-0000-0000-0000-000000000000/undelete"
        );
    }
}
