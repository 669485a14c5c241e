use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub age: i64,
    /// Carried for callers only; never written to or read from `comments`.
    #[serde(default)]
    pub comments: Vec<Comment>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Comment {
    pub id: i64,
    pub text: String,
    pub user_id: Option<i64>,
}

impl User {
    /// An unsaved user; `id` stays 0 until the store assigns one.
    pub fn new(name: impl Into<String>, age: i64) -> Self {
        Self {
            id: 0,
            name: name.into(),
            age,
            comments: Vec::new(),
        }
    }

    pub fn with_comments(mut self, comments: Vec<Comment>) -> Self {
        self.comments = comments;
        self
    }
}

impl Comment {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: 0,
            text: text.into(),
            user_id: None,
        }
    }
}
