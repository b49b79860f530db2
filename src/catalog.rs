//! Immutable, ordered article catalog

use std::sync::Arc;

use crate::error::{Error, Result};
use crate::types::Article;

/// Fixed set of articles, ordered by ascending id.
///
/// Cloning is cheap; all clones share the same backing slice.
#[derive(Debug, Clone)]
pub struct Catalog {
    articles: Arc<[Article]>,
}

impl Catalog {
    /// Build a catalog, checking that ids are positive and strictly
    /// ascending and that text fields are non-empty.
    pub fn new(articles: Vec<Article>) -> Result<Self> {
        let mut previous = None;
        for article in &articles {
            if article.id == 0 {
                return Err(Error::invalid_catalog("article ids must be positive"));
            }
            if let Some(prev) = previous {
                if article.id == prev {
                    return Err(Error::invalid_catalog(format!(
                        "duplicate article id {}",
                        article.id
                    )));
                }
                if article.id < prev {
                    return Err(Error::invalid_catalog(format!(
                        "article id {} follows {}; ids must be ascending",
                        article.id, prev
                    )));
                }
            }
            for (field, value) in [
                ("title", &article.title),
                ("body", &article.body),
                ("author", &article.author),
            ] {
                if value.trim().is_empty() {
                    return Err(Error::invalid_catalog(format!(
                        "article {} has an empty {}",
                        article.id, field
                    )));
                }
            }
            previous = Some(article.id);
        }

        Ok(Self {
            articles: articles.into(),
        })
    }

    /// The reference dataset served in production.
    pub fn reference() -> Result<Self> {
        let articles = vec![
            Article::new(
                1,
                "Introduction à FastAPI",
                "FastAPI est un framework web moderne et rapide.",
                "Jean Dupont",
                "2025-01-15",
            ),
            Article::new(
                2,
                "Les bases de Docker",
                "Docker permet de conteneuriser vos applications.",
                "Marie Martin",
                "2025-01-20",
            ),
            Article::new(
                3,
                "CI/CD avec GitHub Actions",
                "Automatisez vos tests et déploiements avec GitHub Actions.",
                "Pierre Durand",
                "2025-01-25",
            ),
            Article::new(
                4,
                "Orchestration avec Kubernetes",
                "Kubernetes gère le déploiement et la mise à l'échelle des conteneurs.",
                "Sophie Bernard",
                "2025-02-01",
            ),
        ];

        Self::new(articles)
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Article> {
        self.articles.iter()
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Article;
    type IntoIter = std::slice::Iter<'a, Article>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
