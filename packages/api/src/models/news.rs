use serde::{Deserialize, Serialize};

/// A single recommended article as returned by the feed endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewsItem {
    pub title: String,
    pub url: String,
}

/// Username/password pair posted to the login endpoint.
///
/// Lives only as long as the login form that built it; nothing persists it.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feed_payload_deserializes_in_order() {
        let items: Vec<NewsItem> = serde_json::from_str(
            r#"[{"title":"A","url":"http://a"},{"title":"B","url":"http://b","score":3}]"#,
        )
        .unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].title, "A");
        assert_eq!(items[1].url, "http://b");
    }

    #[test]
    fn test_credentials_serialize_as_login_body() {
        let body = serde_json::to_value(Credentials::new("", "")).unwrap();
        assert_eq!(body, serde_json::json!({ "username": "", "password": "" }));
    }
}
