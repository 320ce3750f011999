/// How one kind of callout looks. Colors are tailwind classes, the icon is
/// inline SVG markup drawn in the title's text color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdmonitionSchema {
    pub default_title: &'static str,
    pub title_color: &'static str,
    pub border_color: &'static str,
    pub icon: &'static str,
}

pub const NOTE: AdmonitionSchema = AdmonitionSchema {
    default_title: "Note",
    title_color: "bg-blue-200 dark:bg-blue-900",
    border_color: "border-blue-400",
    icon: r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 16 16" width="16" height="16" fill="none" stroke="currentColor" stroke-width="1.5" aria-hidden="true"><circle cx="8" cy="8" r="6.5"/><path d="M8 7v4.5M8 4.5v.5"/></svg>"#,
};

pub const TIP: AdmonitionSchema = AdmonitionSchema {
    default_title: "Tip",
    title_color: "bg-green-200 dark:bg-green-900",
    border_color: "border-green-400",
    icon: r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 16 16" width="16" height="16" fill="none" stroke="currentColor" stroke-width="1.5" aria-hidden="true"><path d="M5.5 10.5a4.5 4.5 0 1 1 5 0V12h-5z"/><path d="M6 14.5h4"/></svg>"#,
};

pub const IMPORTANT: AdmonitionSchema = AdmonitionSchema {
    default_title: "Important",
    title_color: "bg-purple-200 dark:bg-purple-900",
    border_color: "border-purple-400",
    icon: r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 16 16" width="16" height="16" fill="none" stroke="currentColor" stroke-width="1.5" aria-hidden="true"><path d="M8 1.5l1.9 4 4.4.5-3.3 3 .9 4.4L8 11.2l-3.9 2.2.9-4.4-3.3-3 4.4-.5z"/></svg>"#,
};

pub const WARNING: AdmonitionSchema = AdmonitionSchema {
    default_title: "Warning",
    title_color: "bg-yellow-200 dark:bg-yellow-900",
    border_color: "border-yellow-400",
    icon: r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 16 16" width="16" height="16" fill="none" stroke="currentColor" stroke-width="1.5" aria-hidden="true"><path d="M8 1.5L15 14H1z"/><path d="M8 6v4M8 11.5v.5"/></svg>"#,
};

pub const CAUTION: AdmonitionSchema = AdmonitionSchema {
    default_title: "Caution",
    title_color: "bg-red-200 dark:bg-red-900",
    border_color: "border-red-400",
    icon: r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 16 16" width="16" height="16" fill="none" stroke="currentColor" stroke-width="1.5" aria-hidden="true"><path d="M5.2 1.5h5.6l3.7 3.7v5.6l-3.7 3.7H5.2l-3.7-3.7V5.2z"/><path d="M5.5 5.5l5 5M10.5 5.5l-5 5"/></svg>"#,
};

impl AdmonitionSchema {
    pub fn frame_class(&self) -> String {
        format!("border-1 {} rounded-lg overflow-hidden mb-2", self.border_color)
    }

    pub fn title_class(&self) -> String {
        format!(
            "{} text-black dark:text-white font-semibold px-4 py-2 text-sm flex items-center gap-2",
            self.title_color
        )
    }

    pub fn title<'a>(&self, title: Option<&'a str>) -> &'a str {
        title.unwrap_or(self.default_title)
    }

    /// Markup up to and including the opening of the body. The caller emits
    /// the body and then [`BODY_CLOSE`]. `title` is inserted verbatim.
    pub fn open_html(&self, title: Option<&str>) -> String {
        format!(
            r#"<div class="{}"><div class="{}"><span class="shrink-0 inline-flex">{}</span>{}</div><div class="p-3">"#,
            self.frame_class(),
            self.title_class(),
            self.icon,
            self.title(title),
        )
    }
}

pub const BODY_CLOSE: &str = "</div></div>";
