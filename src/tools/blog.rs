//! Blog tool implementation
//!
//! Read-only views over the CMS. List operations inherit the client's
//! fail-soft contract: an unreachable CMS renders as "no posts".

use crate::clients::cms::{BlogPost, Category};
use crate::error::AppError;
use crate::state::SiteState;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct PostSummary {
    pub slug: String,
    pub title: String,
    pub date: String,
    pub excerpt: String,
    pub author: Option<String>,
    pub categories: Vec<String>,
    pub link: String,
    pub image: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PostDetail {
    pub slug: String,
    pub title: String,
    pub date: String,
    pub content: String,
    pub author: Option<String>,
    pub categories: Vec<String>,
    pub link: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategorySummary {
    pub slug: String,
    pub name: String,
}

fn summarize(post: &BlogPost) -> PostSummary {
    PostSummary {
        slug: post.slug.clone(),
        title: strip_tags(&post.title.rendered),
        date: post.date.clone(),
        excerpt: strip_tags(&post.excerpt.rendered),
        author: post.author_name().map(String::from),
        categories: post.categories().iter().map(|c| c.name.clone()).collect(),
        link: post.link.clone(),
        image: post.featured_image().map(|m| m.source_url.clone()),
    }
}

/// List the latest posts
pub async fn execute_blog_list(limit: usize, state: &SiteState) -> Vec<PostSummary> {
    state
        .cms()
        .fetch_posts(limit)
        .await
        .iter()
        .map(summarize)
        .collect()
}

/// Read one post by slug
pub async fn execute_blog_read(slug: &str, state: &SiteState) -> Result<PostDetail, AppError> {
    let post = state
        .cms()
        .fetch_post_by_slug(slug)
        .await
        .ok_or_else(|| AppError::NotFound(format!("No blog post with slug '{}'", slug)))?;

    Ok(PostDetail {
        slug: post.slug.clone(),
        title: strip_tags(&post.title.rendered),
        date: post.date.clone(),
        content: strip_tags(&post.content.rendered),
        author: post.author_name().map(String::from),
        categories: post.categories().iter().map(|c| c.name.clone()).collect(),
        link: post.link.clone(),
    })
}

/// List categories (the CMS client already drops "uncategorized")
pub async fn execute_blog_categories(state: &SiteState) -> Vec<CategorySummary> {
    state
        .cms()
        .fetch_categories()
        .await
        .iter()
        .map(|c: &Category| CategorySummary {
            slug: c.slug.clone(),
            name: c.name.clone(),
        })
        .collect()
}

/// List posts within one category
pub async fn execute_blog_category(
    slug: &str,
    state: &SiteState,
) -> Result<(CategorySummary, Vec<PostSummary>), AppError> {
    let cms = state.cms();
    let category = cms
        .fetch_category_by_slug(slug)
        .await
        .ok_or_else(|| AppError::NotFound(format!("No blog category with slug '{}'", slug)))?;

    let posts = cms
        .fetch_posts_by_category(category.id)
        .await
        .iter()
        .map(summarize)
        .collect();

    Ok((
        CategorySummary {
            slug: category.slug,
            name: category.name,
        },
        posts,
    ))
}

/// Drop HTML tags and collapse entities the CMS commonly emits, for
/// plain-text CLI display
fn strip_tags(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut in_tag = false;
    for ch in html.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            c if !in_tag => out.push(c),
            _ => {}
        }
    }
    out.replace("&nbsp;", " ")
        .replace("&amp;", "&")
        .replace("&#8217;", "’")
        .replace("&hellip;", "…")
        .trim()
        .to_string()
}

pub fn format_post_list(title: &str, posts: &[PostSummary]) -> String {
    let mut md = format!("# {}\n\n", title);
    if posts.is_empty() {
        md.push_str("No posts available right now.\n");
        return md;
    }
    for post in posts {
        md.push_str(&format!("## {}\n\n", post.title));
        if let Some(author) = &post.author {
            md.push_str(&format!("By {} · ", author));
        }
        md.push_str(&format!("{}\n\n{}\n\n", post.date, post.excerpt));
        if !post.categories.is_empty() {
            md.push_str(&format!("Categories: {}\n\n", post.categories.join(", ")));
        }
        md.push_str(&format!("`{}`\n\n---\n\n", post.slug));
    }
    md
}

pub fn format_post(post: &PostDetail) -> String {
    let mut md = format!("# {}\n\n", post.title);
    if let Some(author) = &post.author {
        md.push_str(&format!("By {} · ", author));
    }
    md.push_str(&format!("{}\n\n{}\n", post.date, post.content));
    md
}

pub fn format_categories(categories: &[CategorySummary]) -> String {
    let mut md = String::from("# Blog Categories\n\n");
    if categories.is_empty() {
        md.push_str("No categories available right now.\n");
        return md;
    }
    for category in categories {
        md.push_str(&format!("- {} (`{}`)\n", category.name, category.slug));
    }
    md
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_tags() {
        assert_eq!(strip_tags("<p>Beach season</p>"), "Beach season");
        assert_eq!(
            strip_tags("<p>Sun &amp; sand&nbsp;await&hellip;</p>"),
            "Sun & sand await…"
        );
        assert_eq!(strip_tags("plain text"), "plain text");
    }

    #[test]
    fn test_format_empty_post_list_degrades_gracefully() {
        let md = format_post_list("Blog", &[]);
        assert!(md.contains("No posts available"));
    }

    #[test]
    fn test_summarize_maps_embedded_fields() {
        let post: BlogPost = serde_json::from_str(
            r#"{
                "id": 1,
                "slug": "p",
                "date": "2026-01-01T00:00:00",
                "title": { "rendered": "<em>Title</em>" },
                "content": { "rendered": "body", "protected": false },
                "excerpt": { "rendered": "<p>snippet</p>", "protected": false },
                "link": "https://blog.example.com/p",
                "_embedded": {
                    "author": [ { "id": 1, "name": "Team", "link": "x" } ],
                    "wp:term": [ [ { "id": 2, "name": "News", "slug": "news" } ] ]
                }
            }"#,
        )
        .unwrap();
        let summary = summarize(&post);
        assert_eq!(summary.title, "Title");
        assert_eq!(summary.excerpt, "snippet");
        assert_eq!(summary.author.as_deref(), Some("Team"));
        assert_eq!(summary.categories, vec!["News"]);
        assert!(summary.image.is_none());
    }
}
