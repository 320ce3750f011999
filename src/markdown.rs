use std::sync::LazyLock;

use pulldown_cmark::{BlockQuoteKind, CodeBlockKind, CowStr, Event, Options, Parser, Tag, TagEnd};
use syntect::highlighting::{Theme, ThemeSet};
use syntect::html::highlighted_html_for_string;
use syntect::parsing::SyntaxSet;

use crate::admonition::{self, AdmonitionSchema};

const THEME: &str = "base16-ocean.dark";

static RENDERER: LazyLock<Renderer> = LazyLock::new(Renderer::new);

/// Renders markdown to HTML with highlighted code blocks and GitHub alerts
/// (`> [!NOTE]`) turned into admonitions.
pub fn render(source: &str) -> Result<String, syntect::Error> {
    RENDERER.render(source)
}

pub fn schema_for(kind: BlockQuoteKind) -> AdmonitionSchema {
    match kind {
        BlockQuoteKind::Note => admonition::NOTE,
        BlockQuoteKind::Tip => admonition::TIP,
        BlockQuoteKind::Important => admonition::IMPORTANT,
        BlockQuoteKind::Warning => admonition::WARNING,
        BlockQuoteKind::Caution => admonition::CAUTION,
    }
}

struct Renderer {
    syntaxes: SyntaxSet,
    themes: ThemeSet,
}

impl Renderer {
    fn new() -> Self {
        Self {
            syntaxes: SyntaxSet::load_defaults_newlines(),
            themes: ThemeSet::load_defaults(),
        }
    }

    fn theme(&self) -> &Theme {
        self.themes
            .themes
            .get(THEME)
            .expect("theme should ship with syntect's defaults")
    }

    fn render(&self, source: &str) -> Result<String, syntect::Error> {
        let events = self.rewrite(Parser::new_ext(source, Options::all()))?;
        let mut html = String::new();
        pulldown_cmark::html::push_html(&mut html, events.into_iter());
        Ok(html)
    }

    fn rewrite<'a>(
        &self,
        events: impl Iterator<Item = Event<'a>>,
    ) -> Result<Vec<Event<'a>>, syntect::Error> {
        let mut out = Vec::new();
        // (language token, collected source) while inside a code block
        let mut code: Option<(Option<String>, String)> = None;

        for event in events {
            match event {
                Event::Start(Tag::CodeBlock(kind)) => {
                    let lang = match kind {
                        CodeBlockKind::Fenced(lang) if !lang.is_empty() => Some(lang.to_string()),
                        _ => None,
                    };
                    code = Some((lang, String::new()));
                }
                Event::End(TagEnd::CodeBlock) => {
                    if let Some((lang, src)) = code.take() {
                        let html = self.highlight(lang.as_deref(), &src)?;
                        out.push(Event::Html(CowStr::from(html)));
                    }
                }
                Event::Text(t) if code.is_some() => {
                    if let Some((_, src)) = code.as_mut() {
                        src.push_str(&t);
                    }
                }
                Event::Start(Tag::BlockQuote(Some(kind))) => {
                    out.push(Event::Html(CowStr::from(schema_for(kind).open_html(None))));
                }
                Event::End(TagEnd::BlockQuote(Some(_))) => {
                    out.push(Event::Html(CowStr::Borrowed(admonition::BODY_CLOSE)));
                }
                e => out.push(e),
            }
        }

        Ok(out)
    }

    fn highlight(&self, lang: Option<&str>, src: &str) -> Result<String, syntect::Error> {
        let syntax = lang
            .and_then(|l| self.syntaxes.find_syntax_by_token(l))
            .unwrap_or_else(|| self.syntaxes.find_syntax_plain_text());
        highlighted_html_for_string(src, &self.syntaxes, syntax, self.theme())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_markdown() {
        let html = render("# Hello\n\nSome *text*.").unwrap();
        assert!(html.contains("<h1>Hello</h1>"));
        assert!(html.contains("<em>text</em>"));
    }

    #[test]
    fn test_code_block_highlighted() {
        let html = render("```rust\nfn main() {}\n```\n").unwrap();
        assert!(html.contains("<pre style="));
        assert!(!html.contains("<code class=\"language-rust\">"));
        assert!(html.contains("main"));
    }

    #[test]
    fn test_unknown_language_falls_back() {
        let html = render("```notalanguage\nplain\n```\n").unwrap();
        assert!(html.contains("<pre style="));
        assert!(html.contains("plain"));
    }

    #[test]
    fn test_alert_becomes_admonition() {
        let html = render("> [!WARNING]\n> Mind the gap.\n").unwrap();
        assert!(html.contains(&admonition::WARNING.frame_class()));
        assert!(html.contains("Warning</div>"));
        assert!(html.contains("Mind the gap."));
        assert!(!html.contains("<blockquote"));
    }

    #[test]
    fn test_regular_blockquote_untouched() {
        let html = render("> just a quote\n").unwrap();
        assert!(html.contains("<blockquote>"));
    }
}
