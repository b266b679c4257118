//! # Query documents
//!
//! The six GraphQL documents the dashboard sends. The platform scopes the
//! `user` table to the token's owner, so the id and skills queries need no
//! filter; the others are parameterized by the id resolved once at startup.

/// Current user's id, expected at `data.user[0].id`.
pub const USER_ID: &str = "{ user { id } }";

/// Skill transactions of the current user, oldest first.
pub const SKILLS: &str = r#"{
  user {
    transactions(where: { type: { _like: "skill_%" } }, order_by: { id: asc }) {
      type
      amount
    }
  }
}"#;

/// Profile fields of `user_id`.
pub fn user_details(user_id: i64) -> String {
    format!(
        "{{ user(where: {{ id: {{ _eq: {user_id} }} }}) {{ id firstName lastName email campus login }} }}"
    )
}

/// Audit ratio and byte totals of `user_id`.
pub fn audit_details(user_id: i64) -> String {
    format!(
        "{{ user(where: {{ id: {{ _eq: {user_id} }} }}) {{ auditRatio totalUp totalDown }} }}"
    )
}

/// Sum of XP transactions of `user_id` inside the event at `module_path`.
pub fn experience(user_id: i64, module_path: &str) -> String {
    let path = quote(module_path);
    format!(
        "{{ transaction_aggregate(where: {{ userId: {{ _eq: {user_id} }}, type: {{ _eq: \"xp\" }}, event: {{ path: {{ _eq: {path} }} }} }}) {{ aggregate {{ sum {{ amount }} }} }} }}"
    )
}

/// Latest `limit` XP transactions, newest first, with the object they were earned on.
pub fn recent_projects(limit: u32) -> String {
    format!(
        "{{ transaction(where: {{ type: {{ _eq: \"xp\" }} }}, order_by: {{ createdAt: desc }}, limit: {limit}) {{ object {{ type name }} }} }}"
    )
}

/// GraphQL string literal syntax matches JSON's.
fn quote(value: &str) -> String {
    serde_json::Value::String(value.to_string()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_id_queries_embed_the_id() {
        assert_eq!(
            user_details(42),
            "{ user(where: { id: { _eq: 42 } }) { id firstName lastName email campus login } }"
        );
        assert!(audit_details(42).contains("_eq: 42"));
        assert!(audit_details(42).contains("auditRatio totalUp totalDown"));
    }

    #[test]
    fn test_experience_quotes_module_path() {
        let q = experience(7, "/bahrain/bh-module");
        assert!(q.contains("userId: { _eq: 7 }"));
        assert!(q.contains(r#"path: { _eq: "/bahrain/bh-module" }"#));

        let q = experience(7, r#"odd"path"#);
        assert!(q.contains(r#"_eq: "odd\"path""#));
    }

    #[test]
    fn test_recent_projects_limit() {
        let q = recent_projects(5);
        assert!(q.contains("limit: 5"));
        assert!(q.contains("order_by: { createdAt: desc }"));
        assert!(q.contains("object { type name }"));
    }

    #[test]
    fn test_braces_balance() {
        for q in [
            USER_ID.to_string(),
            SKILLS.to_string(),
            user_details(1),
            audit_details(1),
            experience(1, "/x"),
            recent_projects(3),
        ] {
            let open = q.matches('{').count();
            let close = q.matches('}').count();
            assert_eq!(open, close, "unbalanced query: {q}");
        }
    }
}
