//! Renderers turning link descriptors into markup
//!
//! [`HtmlRenderer`] produces the pagination bar as an HTML fragment:
//!
//! ```html
//! <ul class="clearfix pagination">
//!   <li class="first disabled"><a href="#">« First</a></li>
//!   <li class="number active"><a href="/?page=1" data-pagenumber="1">1</a></li>
//!   ...
//! </ul>
//! ```
//!
//! (shown indented; the actual output has no whitespace between tags).
//! [`JsonRenderer`] serializes the same data for client-side templates.

use crate::link::{LinkDescriptor, RelLink};
use crate::Result;
use maud::{html, Markup};
use serde::Serialize;

/// Converts link descriptors and container classes into markup
pub trait RenderAdapter {
    fn render(&self, classes: &[String], links: &[LinkDescriptor]) -> Result<String>;
}

/// HTML fragment renderer
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer;

impl HtmlRenderer {
    /// Pagination bar markup; empty when there are no links
    pub fn markup(&self, classes: &[String], links: &[LinkDescriptor]) -> Markup {
        if links.is_empty() {
            return html! {};
        }

        html! {
            ul class=(classes.join(" ")) {
                @for link in links {
                    li class=(link.class_attr()) {
                        a href=(link.href) data-pagenumber=[link.data_page_number()] {
                            (link.label)
                        }
                    }
                }
            }
        }
    }

    /// `<link rel="prev|next">` tags for the document head
    pub fn render_rel_links(&self, rels: &[RelLink]) -> String {
        html! {
            @for rel in rels {
                link rel=(rel.rel.as_str()) href=(rel.href);
            }
        }
        .into_string()
    }
}

impl RenderAdapter for HtmlRenderer {
    fn render(&self, classes: &[String], links: &[LinkDescriptor]) -> Result<String> {
        Ok(self.markup(classes, links).into_string())
    }
}

/// JSON renderer: `{"classes": [...], "links": [...]}`
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

#[derive(Serialize)]
struct PaginationBar<'a> {
    classes: &'a [String],
    links: &'a [LinkDescriptor],
}

impl RenderAdapter for JsonRenderer {
    fn render(&self, classes: &[String], links: &[LinkDescriptor]) -> Result<String> {
        Ok(serde_json::to_string(&PaginationBar { classes, links })?)
    }
}
