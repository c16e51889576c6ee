use serde::{Deserialize, Serialize};

/// One repository from a search response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repo {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub owner: Owner,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    #[serde(rename = "avatar_url")]
    pub avatar: String,
}

/// Envelope of `GET /search/repositories`. Only `items` is read.
#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    pub items: Vec<Repo>,
}

impl Repo {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: None,
            owner: Owner {
                avatar: String::new(),
            },
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
