//! Link descriptors produced by a pagination state
//!
//! Descriptors carry everything a renderer needs and nothing about markup.

use serde::Serialize;

/// Href used by disabled controls
pub const DISABLED_HREF: &str = "#";

/// Role of a link within the pagination bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkKind {
    First,
    Previous,
    PageNumber,
    Current,
    Next,
    Last,
}

impl LinkKind {
    /// Class name every descriptor of this kind carries
    pub fn class_name(&self) -> &'static str {
        match self {
            LinkKind::First => "first",
            LinkKind::Previous => "previous",
            LinkKind::PageNumber => "number",
            LinkKind::Current => "number",
            LinkKind::Next => "next",
            LinkKind::Last => "last",
        }
    }

    /// Whether the link stands for a numbered crumb
    pub fn is_crumb(&self) -> bool {
        matches!(self, LinkKind::PageNumber | LinkKind::Current)
    }
}

/// One entry of the pagination bar
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkDescriptor {
    pub kind: LinkKind,
    /// Target page; `None` only for disabled controls
    pub page_number: Option<i64>,
    pub href: String,
    pub label: String,
    /// Ordered, duplicate-free
    pub css_classes: Vec<String>,
    pub disabled: bool,
}

impl LinkDescriptor {
    /// Enabled control or crumb pointing at `page`
    pub fn enabled(kind: LinkKind, page: i64, href: String, label: String) -> Self {
        let mut css_classes = vec![kind.class_name().to_string()];
        if kind == LinkKind::Current {
            css_classes.push("active".to_string());
        }

        Self {
            kind,
            page_number: Some(page),
            href,
            label,
            css_classes,
            disabled: false,
        }
    }

    /// Disabled control; href is always [`DISABLED_HREF`]
    pub fn disabled(kind: LinkKind, label: String) -> Self {
        Self {
            kind,
            page_number: None,
            href: DISABLED_HREF.to_string(),
            label,
            css_classes: vec![kind.class_name().to_string(), "disabled".to_string()],
            disabled: true,
        }
    }

    /// Value for a `data-pagenumber` attribute, present only on crumbs
    pub fn data_page_number(&self) -> Option<i64> {
        if self.kind.is_crumb() {
            self.page_number
        } else {
            None
        }
    }

    /// Classes joined with a single space
    pub fn class_attr(&self) -> String {
        self.css_classes.join(" ")
    }
}

/// Relation of a `<link>` tag pointing at a neighbouring page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Rel {
    Prev,
    Next,
}

impl Rel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rel::Prev => "prev",
            Rel::Next => "next",
        }
    }
}

/// Href of the previous or next page, for `<link rel=...>` tags
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelLink {
    pub rel: Rel,
    pub href: String,
}
