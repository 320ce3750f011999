pub struct SiteConfig {
    pub owner: &'static str,
    pub description: &'static str,
    pub base_url: &'static str,
    pub github: &'static str,
}

pub static SITE: SiteConfig = SiteConfig {
    owner: "Colby Chance",
    description: "My personal website",
    base_url: "https://colbychance.dev",
    github: "https://github.com/colbs255",
};

impl SiteConfig {
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub fn post_url(&self, slug: &str) -> String {
        self.url(&format!("posts/{slug}"))
    }

    /// Document title for a page below the root; the root uses `owner` alone.
    pub fn page_title(&self, page: &str) -> String {
        format!("{page} | {}", self.owner)
    }
}

/// RFC 3339 timestamp stamped by build.rs.
pub const BUILD_TIME: &str = env!("BUILD_TIME");

pub fn build_year() -> Option<i32> {
    use chrono::{DateTime, Datelike};

    DateTime::parse_from_rfc3339(BUILD_TIME).ok().map(|t| t.year())
}
