//! Core types for articles-api

use serde::{Deserialize, Serialize};

/// Article ID type
pub type ArticleId = u64;

/// A single article served by the API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Article {
    pub id: ArticleId,
    pub title: String,
    pub body: String,
    pub author: String,
    /// Publication date, kept as given (`YYYY-MM-DD` in the reference data)
    pub date: String,
}

impl Article {
    pub fn new(
        id: ArticleId,
        title: impl Into<String>,
        body: impl Into<String>,
        author: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            body: body.into(),
            author: author.into(),
            date: date.into(),
        }
    }
}

/// Which behaviour `GET /articles` exhibits
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Serve the catalog
    #[default]
    Healthy,
    /// Always fail with a fixed internal error
    Faulty,
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Healthy => "healthy",
            Variant::Faulty => "faulty",
        }
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Variant {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "healthy" => Ok(Variant::Healthy),
            "faulty" => Ok(Variant::Faulty),
            other => anyhow::bail!("unsupported variant: {}", other),
        }
    }
}
