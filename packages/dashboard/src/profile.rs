use api::UserProfile;

use crate::format::capitalize;

/// Welcome banner and the label/value lines of the user-info card.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileView {
    pub banner: String,
    pub lines: Vec<String>,
}

impl From<&UserProfile> for ProfileView {
    fn from(user: &UserProfile) -> Self {
        Self {
            banner: format!("Welcome to your dashboard, {}", user.full_name()),
            lines: vec![
                format!("First Name: {}", user.first_name),
                format!("Last Name: {}", user.last_name),
                format!("Email: {}", user.email),
                format!("Campus: {}", capitalize(&user.campus)),
                format!("Campus ID: {}", user.login),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_view() {
        let user = UserProfile {
            id: 1,
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@example.com".into(),
            campus: "bahrain".into(),
            login: "alovelace".into(),
        };
        let view = ProfileView::from(&user);
        assert_eq!(view.banner, "Welcome to your dashboard, Ada Lovelace");
        assert_eq!(
            view.lines,
            vec![
                "First Name: Ada",
                "Last Name: Lovelace",
                "Email: ada@example.com",
                "Campus: Bahrain",
                "Campus ID: alovelace",
            ]
        );
    }
}
