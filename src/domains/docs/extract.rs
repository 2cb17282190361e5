//! Main-content extraction from documentation pages.
//!
//! Documentation pages wrap their body in one of a few well-known containers.
//! The first container found in [`CONTENT_SELECTORS`] order wins; if none is
//! present the page is treated as having no content.

use scraper::{ElementRef, Html, Node, Selector};

/// Content containers, most specific first.
pub const CONTENT_SELECTORS: [&str; 3] = ["main", "article", "div.content"];

/// Elements whose text is never visible.
const HIDDEN_ELEMENTS: [&str; 4] = ["script", "style", "noscript", "template"];

/// Extract the readable text of the page's main content region.
///
/// Each text node is trimmed, empty nodes are dropped and the rest are joined
/// with `\n`. Returns `None` when no content container exists or it holds no
/// visible text.
pub fn extract_main_text(html: &str) -> Option<String> {
    let document = Html::parse_document(html);

    let region = CONTENT_SELECTORS
        .iter()
        .filter_map(|s| Selector::parse(s).ok())
        .find_map(|selector| document.select(&selector).next())?;

    let text = visible_text(region);
    if text.is_empty() { None } else { Some(text) }
}

fn visible_text(element: ElementRef<'_>) -> String {
    element
        .descendants()
        .filter_map(|node| match node.value() {
            Node::Text(text) => {
                let hidden = node.ancestors().any(|ancestor| {
                    ancestor
                        .value()
                        .as_element()
                        .is_some_and(|e| HIDDEN_ELEMENTS.contains(&e.name()))
                });
                if hidden { None } else { Some(text.trim()) }
            }
            _ => None,
        })
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefers_main_over_article() {
        let html = r#"
            <html><body>
                <article><p>Article body</p></article>
                <main><h1>Main title</h1><p>Main body</p></main>
            </body></html>
        "#;
        assert_eq!(extract_main_text(html).as_deref(), Some("Main title\nMain body"));
    }

    #[test]
    fn test_falls_back_to_article() {
        let html = "<html><body><nav>Menu</nav><article><p>Only article</p></article></body></html>";
        assert_eq!(extract_main_text(html).as_deref(), Some("Only article"));
    }

    #[test]
    fn test_falls_back_to_content_div() {
        let html = r#"<html><body><div class="theme content wide"><p>Div body</p></div></body></html>"#;
        assert_eq!(extract_main_text(html).as_deref(), Some("Div body"));
    }

    #[test]
    fn test_other_divs_are_not_content() {
        let html = r#"<html><body><div class="sidebar"><p>Links</p></div></body></html>"#;
        assert_eq!(extract_main_text(html), None);
    }

    #[test]
    fn test_strips_nodes_and_joins_with_newlines() {
        let html = "<main>\n  <h2>  Title  </h2>\n\n  <ul><li> one </li><li>two</li></ul>\n</main>";
        assert_eq!(extract_main_text(html).as_deref(), Some("Title\none\ntwo"));
    }

    #[test]
    fn test_skips_script_and_style() {
        let html = r#"
            <main>
                <style>.x { color: red }</style>
                <p>Visible</p>
                <script>window.track()</script>
            </main>
        "#;
        assert_eq!(extract_main_text(html).as_deref(), Some("Visible"));
    }

    #[test]
    fn test_empty_region_is_no_content() {
        assert_eq!(extract_main_text("<main>   </main>"), None);
    }

    #[test]
    fn test_malformed_html_does_not_panic() {
        let inputs = ["", "<<<>>>", "<main><p>unclosed", "\u{0}\u{1}binary", "<article>"];
        for input in inputs {
            let _ = extract_main_text(input);
        }
        assert_eq!(
            extract_main_text("<main><p>unclosed").as_deref(),
            Some("unclosed")
        );
    }
}
