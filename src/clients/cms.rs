//! Blog content provider (WordPress REST v2)
//!
//! Read-only. List operations are fail-soft: on any transport or parse
//! failure they log a warning and return empty, so the blog pages
//! degrade to "no posts" rather than an error page.

use crate::error::AppError;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Rendered rich-text field as WordPress serializes it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rendered {
    pub rendered: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProtectedRendered {
    pub rendered: String,
    #[serde(default)]
    pub protected: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeaturedMedia {
    pub id: u64,
    pub source_url: String,
    #[serde(default)]
    pub alt_text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostAuthor {
    pub id: u64,
    pub name: String,
    pub link: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Term {
    pub id: u64,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub link: Option<String>,
}

/// `_embedded` resources requested with `_embed`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Embedded {
    #[serde(rename = "wp:featuredmedia", default)]
    pub featured_media: Vec<FeaturedMedia>,
    #[serde(default)]
    pub author: Vec<PostAuthor>,
    /// First element is categories, second is tags
    #[serde(rename = "wp:term", default)]
    pub terms: Vec<Vec<Term>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: u64,
    pub slug: String,
    /// ISO 8601
    pub date: String,
    pub title: Rendered,
    pub content: ProtectedRendered,
    pub excerpt: ProtectedRendered,
    pub link: String,
    #[serde(rename = "_embedded", default)]
    pub embedded: Option<Embedded>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: u64,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub link: Option<String>,
}

/// WordPress REST client
pub struct CmsClient {
    client: reqwest::Client,
    base_url: String,
}

impl CmsClient {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("CMS request: {}", url);

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(AppError::UpstreamFailed(format!(
                "WordPress API error: {}",
                response.status()
            )));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| AppError::ParseFailed(format!("Invalid WordPress payload: {}", e)))
    }

    /// Latest posts with embedded media, newest first
    pub async fn fetch_posts(&self, limit: usize) -> Vec<BlogPost> {
        match self
            .get_json::<Vec<BlogPost>>(&format!("/posts?_embed&per_page={}", limit))
            .await
        {
            Ok(posts) => posts,
            Err(e) => {
                warn!("Failed to fetch blog posts: {}", e);
                Vec::new()
            }
        }
    }

    pub async fn fetch_post_by_slug(&self, slug: &str) -> Option<BlogPost> {
        match self
            .get_json::<Vec<BlogPost>>(&format!(
                "/posts?slug={}&_embed",
                urlencoding::encode(slug)
            ))
            .await
        {
            Ok(posts) => posts.into_iter().next(),
            Err(e) => {
                warn!("Failed to fetch blog post '{}': {}", slug, e);
                None
            }
        }
    }

    /// All categories except the default "uncategorized"
    pub async fn fetch_categories(&self) -> Vec<Category> {
        match self
            .get_json::<Vec<Category>>("/categories?_fields=id,name,slug,link&per_page=100")
            .await
        {
            Ok(categories) => categories
                .into_iter()
                .filter(|c| c.slug != "uncategorized")
                .collect(),
            Err(e) => {
                warn!("Failed to fetch blog categories: {}", e);
                Vec::new()
            }
        }
    }

    pub async fn fetch_category_by_slug(&self, slug: &str) -> Option<Category> {
        match self
            .get_json::<Vec<Category>>(&format!(
                "/categories?slug={}&_fields=id,name,slug",
                urlencoding::encode(slug)
            ))
            .await
        {
            Ok(categories) => categories.into_iter().next(),
            Err(e) => {
                warn!("Failed to fetch blog category '{}': {}", slug, e);
                None
            }
        }
    }

    pub async fn fetch_posts_by_category(&self, category_id: u64) -> Vec<BlogPost> {
        match self
            .get_json::<Vec<BlogPost>>(&format!(
                "/posts?categories={}&_embed&per_page=100",
                category_id
            ))
            .await
        {
            Ok(posts) => posts,
            Err(e) => {
                warn!("Failed to fetch posts for category {}: {}", category_id, e);
                Vec::new()
            }
        }
    }
}

impl BlogPost {
    /// First embedded featured image, if any
    pub fn featured_image(&self) -> Option<&FeaturedMedia> {
        self.embedded.as_ref()?.featured_media.first()
    }

    pub fn author_name(&self) -> Option<&str> {
        self.embedded
            .as_ref()?
            .author
            .first()
            .map(|a| a.name.as_str())
    }

    /// Categories from the first `wp:term` group
    pub fn categories(&self) -> &[Term] {
        self.embedded
            .as_ref()
            .and_then(|e| e.terms.first())
            .map(|terms| terms.as_slice())
            .unwrap_or(&[])
    }
}
