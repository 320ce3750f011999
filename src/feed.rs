use rss::{
    extension::atom::{AtomExtensionBuilder, Link},
    Channel, ChannelBuilder, GuidBuilder, ItemBuilder,
};

use crate::posts::PostMeta;
use crate::site::SITE;

pub fn build_channel(posts: &[PostMeta]) -> Channel {
    let items = posts
        .iter()
        .map(|p| {
            let link = SITE.post_url(&p.slug);
            ItemBuilder::default()
                .title(p.title.clone())
                .description(p.description.clone())
                .categories(
                    p.tags
                        .iter()
                        .map(|t| rss::Category {
                            name: t.clone(),
                            domain: None,
                        })
                        .collect::<Vec<_>>(),
                )
                .pub_date(p.date.to_rfc2822())
                .guid(GuidBuilder::default().value(&link).permalink(true).build())
                .link(link)
                .build()
        })
        .collect::<Vec<_>>();

    let mut self_link = Link::default();
    self_link.set_rel("self");
    self_link.set_href(SITE.url("rss.xml"));
    self_link.set_mime_type("application/rss+xml".to_string());

    ChannelBuilder::default()
        .title(format!("{}'s posts", SITE.owner))
        .description(SITE.description)
        .link(SITE.url("posts"))
        .language("en-us".to_string())
        .ttl("60".to_string())
        .atom_ext(AtomExtensionBuilder::default().links(vec![self_link]).build())
        .items(items)
        .build()
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    fn meta(slug: &str) -> PostMeta {
        PostMeta {
            slug: slug.to_string(),
            title: format!("Title of {slug}"),
            description: "desc".to_string(),
            date: Utc.with_ymd_and_hms(2024, 9, 14, 18, 0, 0).unwrap(),
            tags: vec!["rust".to_string()],
        }
    }

    #[test]
    fn test_channel() {
        let channel = build_channel(&[meta("a"), meta("b")]);
        assert_eq!(channel.link(), "https://colbychance.dev/posts");
        assert_eq!(channel.items().len(), 2);

        let item = &channel.items()[0];
        assert_eq!(item.link(), Some("https://colbychance.dev/posts/a"));
        assert_eq!(item.guid().map(|g| g.value()), Some("https://colbychance.dev/posts/a"));
        assert_eq!(item.pub_date(), Some("Sat, 14 Sep 2024 18:00:00 +0000"));
        assert_eq!(item.categories()[0].name(), "rust");
    }

    #[test]
    fn test_channel_from_embedded_posts() {
        let posts = crate::posts::list_posts("").unwrap();
        let xml = build_channel(&posts).to_string();
        assert!(xml.contains("<atom:link"));
        assert!(xml.contains("Hello, world"));
    }
}
