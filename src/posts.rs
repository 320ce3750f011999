use chrono::{DateTime, Utc};
use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[cfg(any(feature = "ssr", feature = "rss"))]
use std::sync::{LazyLock, OnceLock};

#[cfg(any(feature = "ssr", feature = "rss"))]
use dashmap::DashMap;
#[cfg(any(feature = "ssr", feature = "rss"))]
use gray_matter::{engine::YAML, Matter};
#[cfg(any(feature = "ssr", feature = "rss"))]
use regex::RegexBuilder;

#[cfg(any(feature = "ssr", feature = "rss"))]
use crate::markdown;

#[derive(Embed)]
#[folder = "posts"]
#[cfg_attr(feature = "hydrate", metadata_only = true)]
pub struct PostFiles;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostMeta {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub meta: PostMeta,
    pub html: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PostError {
    #[error("no post named {0}")]
    NotFound(String),
    #[error("bad front matter in {0}")]
    FrontMatter(String),
    #[error("invalid search pattern: {0}")]
    Pattern(String),
    #[error("couldn't render {0}: {1}")]
    Render(String, String),
}

/// Slugs of every embedded post, available in the browser build too.
pub fn slugs() -> Vec<String> {
    PostFiles::iter()
        .filter_map(|file| file.strip_suffix(".md").map(str::to_string))
        .collect()
}

#[cfg(any(feature = "ssr", feature = "rss"))]
static LISTING: OnceLock<Vec<PostMeta>> = OnceLock::new();
#[cfg(any(feature = "ssr", feature = "rss"))]
static RENDERED: LazyLock<DashMap<String, Post>> = LazyLock::new(DashMap::new);

#[cfg(any(feature = "ssr", feature = "rss"))]
#[derive(Deserialize)]
struct FrontMatter {
    title: String,
    description: String,
    date: DateTime<Utc>,
    #[serde(default)]
    tags: Vec<String>,
}

#[cfg(any(feature = "ssr", feature = "rss"))]
struct Source {
    meta: PostMeta,
    raw: String,
    body: String,
}

#[cfg(any(feature = "ssr", feature = "rss"))]
fn read_source(slug: &str) -> Result<Source, PostError> {
    let file = PostFiles::get(&format!("{slug}.md"))
        .ok_or_else(|| PostError::NotFound(slug.to_string()))?;
    let raw = String::from_utf8(file.data.into_owned())
        .map_err(|_| PostError::FrontMatter(slug.to_string()))?;
    parse_source(slug, raw)
}

#[cfg(any(feature = "ssr", feature = "rss"))]
fn parse_source(slug: &str, raw: String) -> Result<Source, PostError> {
    let parsed = Matter::<YAML>::new()
        .parse_with_struct::<FrontMatter>(&raw)
        .ok_or_else(|| PostError::FrontMatter(slug.to_string()))?;
    let fm = parsed.data;
    Ok(Source {
        meta: PostMeta {
            slug: slug.to_string(),
            title: fm.title,
            description: fm.description,
            date: fm.date,
            tags: fm.tags,
        },
        body: parsed.content,
        raw,
    })
}

/// Metadata of every post, newest first. A non-empty `pattern` keeps only
/// posts whose source matches it as a case-insensitive regex.
#[cfg(any(feature = "ssr", feature = "rss"))]
pub fn list_posts(pattern: &str) -> Result<Vec<PostMeta>, PostError> {
    let pattern = pattern.trim();
    if pattern.is_empty() {
        if let Some(all) = LISTING.get() {
            return Ok(all.clone());
        }
    }

    let re = RegexBuilder::new(pattern)
        .case_insensitive(true)
        .multi_line(true)
        .build()
        .map_err(|e| PostError::Pattern(e.to_string()))?;

    let mut posts = Vec::new();
    for slug in slugs() {
        let source = read_source(&slug)?;
        if pattern.is_empty() || re.is_match(&source.raw) {
            posts.push(source.meta);
        }
    }
    posts.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.slug.cmp(&b.slug)));

    if pattern.is_empty() {
        #[cfg(feature = "ssr")]
        tracing::debug!(count = posts.len(), "caching post listing");
        let _ = LISTING.set(posts.clone());
    }
    Ok(posts)
}

#[cfg(any(feature = "ssr", feature = "rss"))]
pub fn load_post(slug: &str) -> Result<Post, PostError> {
    if let Some(post) = RENDERED.get(slug) {
        return Ok(post.clone());
    }

    let source = read_source(slug)?;
    let html = markdown::render(&source.body).map_err(|e| {
        #[cfg(feature = "ssr")]
        tracing::error!(slug, error = %e, "failed to render post");
        PostError::Render(slug.to_string(), e.to_string())
    })?;
    let post = Post {
        meta: source.meta,
        html,
    };
    RENDERED.insert(slug.to_string(), post.clone());
    Ok(post)
}
