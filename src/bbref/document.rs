//! HTML helpers: every `scraper` lookup lives here and returns owned values,
//! so no parsed document is held across an await point.

use scraper::{ElementRef, Html, Node, Selector};
use tracing::debug;

use super::table::RawTable;

/// Id of the zone shooting table on player pages.
pub const SHOOTING_TABLE_ID: &str = "shooting";

fn selector(css: &'static str) -> Selector {
    Selector::parse(css).unwrap_or_else(|_| unreachable!("static selector {css} is valid"))
}

fn element_text(element: &ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Collect every `<tr>` of a table as trimmed `<th>`/`<td>` cell texts.
pub fn raw_table(table: ElementRef<'_>) -> RawTable {
    let row_selector = selector("tr");
    let cell_selector = selector("th, td");

    let rows = table
        .select(&row_selector)
        .map(|row| {
            row.select(&cell_selector)
                .map(|cell| element_text(&cell))
                .collect::<Vec<_>>()
        })
        .collect();
    RawTable::new(rows)
}

/// Find `table#<id>`, including copies the site ships inside HTML comments.
pub fn find_table(html: &str, id: &str) -> Option<RawTable> {
    let css = format!("table#{id}");
    let table_selector = Selector::parse(&css).ok()?;
    let document = Html::parse_document(html);

    if let Some(table) = document.select(&table_selector).next() {
        return Some(raw_table(table));
    }

    for node in document.tree.values() {
        let Node::Comment(comment) = node else {
            continue;
        };
        let text: &str = comment;
        if !text.contains(id) {
            continue;
        }
        let fragment = Html::parse_fragment(text);
        if let Some(table) = fragment.select(&table_selector).next() {
            debug!(id, "table found inside an HTML comment");
            return Some(raw_table(table));
        }
    }
    None
}

/// An anchor's text and href, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub text: String,
    pub href: String,
}

/// Every `<a href>` in the document.
pub fn links(html: &str) -> Vec<Link> {
    let document = Html::parse_document(html);
    let anchor_selector = selector("a[href]");

    document
        .select(&anchor_selector)
        .filter_map(|anchor| {
            let href = anchor.value().attr("href")?;
            Some(Link {
                text: element_text(&anchor),
                href: href.trim().to_string(),
            })
        })
        .collect()
}

/// Text of the first `<h1>`, if any.
pub fn heading(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let h1 = selector("h1");
    document
        .select(&h1)
        .next()
        .map(|el| element_text(&el))
        .filter(|text| !text.is_empty())
}

/// First link (document order) to a `/<season>.html` page that mentions
/// shooting, in either its href or its text.
pub fn shooting_link(html: &str, season: &str) -> Option<String> {
    let season_marker = format!("/{season}.html");
    links(html)
        .into_iter()
        .filter(|link| link.href.contains(&season_marker))
        .find(|link| {
            link.href.to_lowercase().contains("shooting")
                || link.text.to_lowercase().contains("shooting")
        })
        .map(|link| link.href)
}
