//! Typed fetchers, one per dashboard query.

use store::TokenStore;

use crate::client::{GraphqlClient, Transport};
use crate::models::{
    AuditInfo, ExperienceData, RecentTransaction, SkillTransaction, SkillsData, TransactionsData,
    UserIdRow, UserProfile, UsersData,
};
use crate::{queries, ApiError};

impl<T: Transport, S: TokenStore> GraphqlClient<T, S> {
    /// Id of the token's owner.
    pub async fn user_id(&self) -> Result<i64, ApiError> {
        let data: UsersData<UserIdRow> = self.query_data(queries::USER_ID).await?;
        Ok(data.into_first()?.id)
    }

    pub async fn user_details(&self, user_id: i64) -> Result<UserProfile, ApiError> {
        let data: UsersData<UserProfile> =
            self.query_data(&queries::user_details(user_id)).await?;
        data.into_first()
    }

    pub async fn audit(&self, user_id: i64) -> Result<AuditInfo, ApiError> {
        let data: UsersData<AuditInfo> = self.query_data(&queries::audit_details(user_id)).await?;
        data.into_first()
    }

    /// Total XP inside `module_path`; zero when there are no transactions.
    pub async fn experience(&self, user_id: i64, module_path: &str) -> Result<u64, ApiError> {
        let data: ExperienceData = self
            .query_data(&queries::experience(user_id, module_path))
            .await?;
        Ok(data.total())
    }

    /// Skill transactions in API order; empty when the user row is absent.
    pub async fn skills(&self) -> Result<Vec<SkillTransaction>, ApiError> {
        let data: SkillsData = self.query_data(queries::SKILLS).await?;
        Ok(data
            .user
            .into_iter()
            .next()
            .map(|row| row.transactions)
            .unwrap_or_default())
    }

    pub async fn recent_projects(&self, limit: u32) -> Result<Vec<RecentTransaction>, ApiError> {
        let data: TransactionsData = self.query_data(&queries::recent_projects(limit)).await?;
        Ok(data.transaction)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use store::MemoryTokenStore;

    use crate::client::tests::MockTransport;
    use crate::{ApiError, GraphqlClient};

    fn client(replies: Vec<serde_json::Value>) -> (GraphqlClient<MockTransport, MemoryTokenStore>, MockTransport) {
        let transport = MockTransport::replying(replies.into_iter().map(Ok).collect());
        let client = GraphqlClient::new(
            "https://example.test/graphql",
            transport.clone(),
            MemoryTokenStore::with_token("jwt"),
        );
        (client, transport)
    }

    #[tokio::test]
    async fn test_user_id_takes_first_row() {
        let (client, transport) = client(vec![json!({ "data": { "user": [{ "id": 991 }] } })]);
        assert_eq!(client.user_id().await.unwrap(), 991);
        assert_eq!(transport.calls.borrow()[0].2, "{ user { id } }");
    }

    #[tokio::test]
    async fn test_user_id_empty_array() {
        let (client, _) = client(vec![json!({ "data": { "user": [] } })]);
        let err = client.user_id().await.unwrap_err();
        assert!(matches!(err, ApiError::MissingField("user[0]")));
    }

    #[tokio::test]
    async fn test_user_details_and_audit() {
        let (client, transport) = client(vec![
            json!({ "data": { "user": [{
                "id": 5, "firstName": "Ada", "lastName": "L", "email": "a@b.c",
                "campus": "bahrain", "login": "ada"
            }] } }),
            json!({ "data": { "user": [{
                "auditRatio": 1.26, "totalUp": 80, "totalDown": 20
            }] } }),
        ]);

        let profile = client.user_details(5).await.unwrap();
        assert_eq!(profile.campus, "bahrain");
        let audit = client.audit(5).await.unwrap();
        assert_eq!(audit.audit_ratio, Some(1.26));
        assert_eq!((audit.total_up, audit.total_down), (80, 20));

        let calls = transport.calls.borrow();
        assert!(calls[0].2.contains("_eq: 5"));
        assert!(calls[1].2.contains("auditRatio"));
    }

    #[tokio::test]
    async fn test_experience_null_sum_is_zero() {
        let (client, _) = client(vec![
            json!({ "data": { "transaction_aggregate": { "aggregate": { "sum": { "amount": null } } } } }),
            json!({ "data": { "transaction_aggregate": { "aggregate": { "sum": { "amount": 412500 } } } } }),
        ]);
        assert_eq!(client.experience(1, "/m").await.unwrap(), 0);
        assert_eq!(client.experience(1, "/m").await.unwrap(), 412_500);
    }

    #[tokio::test]
    async fn test_skills_without_user_row_is_empty() {
        let (client, _) = client(vec![
            json!({ "data": { "user": [] } }),
            json!({ "data": { "user": [{ "transactions": [
                { "type": "skill_go", "amount": 3 },
                { "type": "skill_js", "amount": 10 }
            ] }] } }),
        ]);
        assert!(client.skills().await.unwrap().is_empty());
        let skills = client.skills().await.unwrap();
        assert_eq!(skills.len(), 2);
        assert_eq!(skills[1].r#type, "skill_js");
    }

    #[tokio::test]
    async fn test_recent_projects_keep_api_order() {
        let (client, _) = client(vec![json!({ "data": { "transaction": [
            { "object": { "type": "project", "name": "graphql" } },
            { "object": { "type": "exercise", "name": "quad" } }
        ] } })]);
        let recent = client.recent_projects(5).await.unwrap();
        assert_eq!(recent[0].object.name, "graphql");
        assert_eq!(recent[1].object.r#type, "exercise");
    }

    #[tokio::test]
    async fn test_unexpected_shape_is_decode_error() {
        let (client, _) = client(vec![json!({ "data": { "user": "nope" } })]);
        assert!(matches!(client.user_id().await, Err(ApiError::Decode(_))));
    }
}
