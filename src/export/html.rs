//! Markdown to HTML conversion.

use pulldown_cmark::{Event, Options, Parser, html};

/// Converts note Markdown to HTML.
///
/// Enables common markdown extensions:
/// - Tables
/// - Footnotes
/// - Strikethrough
/// - Task lists
/// - Smart punctuation
///
/// Raw HTML in the source is not passed through: it is emitted as escaped
/// text, so note content cannot inject markup into a rendered page.
///
/// # Example
///
/// ```
/// use mintmemo::export::markdown_to_html;
///
/// let html = markdown_to_html("# Hello\n\n<script>x</script>");
/// assert!(html.contains("<h1>Hello</h1>"));
/// assert!(!html.contains("<script>"));
/// ```
pub fn markdown_to_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_FOOTNOTES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);
    options.insert(Options::ENABLE_SMART_PUNCTUATION);

    let parser = Parser::new_ext(markdown, options).map(|event| match event {
        Event::Html(raw) => Event::Text(raw),
        other => other,
    });

    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_to_html_basic() {
        let markdown = "# Heading\n\nParagraph text.";
        let html = markdown_to_html(markdown);

        assert!(html.contains("<h1>Heading</h1>"));
        assert!(html.contains("<p>Paragraph text.</p>"));
    }

    #[test]
    fn test_markdown_to_html_code_block() {
        let markdown = "```rust\nfn main() {}\n```";
        let html = markdown_to_html(markdown);

        assert!(html.contains("<pre>"));
        assert!(html.contains("<code"));
        assert!(html.contains("fn main()"));
    }

    #[test]
    fn test_markdown_to_html_links() {
        let markdown = "[link](https://example.com)";
        let html = markdown_to_html(markdown);

        assert!(html.contains(r#"<a href="https://example.com">link</a>"#));
    }

    #[test]
    fn test_markdown_to_html_escapes_inline_html() {
        let markdown = "Use <em>emphasis</em> directly";
        let html = markdown_to_html(markdown);

        assert!(!html.contains("<em>"));
        assert!(html.contains("&lt;em&gt;emphasis&lt;/em&gt;"));
    }

    #[test]
    fn test_markdown_to_html_escapes_block_html() {
        let markdown = "<script>alert('x')</script>\n\nafter";
        let html = markdown_to_html(markdown);

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("<p>after</p>"));
    }

    #[test]
    fn test_markdown_to_html_escapes_ampersand() {
        let html = markdown_to_html("Use AT&T services");
        assert!(html.contains("&amp;"));
    }

    #[test]
    fn test_markdown_to_html_tables() {
        let markdown = "| A | B |\n|---|---|\n| 1 | 2 |";
        let html = markdown_to_html(markdown);

        assert!(html.contains("<table>"));
        assert!(html.contains("<th>A</th>"));
        assert!(html.contains("<td>1</td>"));
    }

    #[test]
    fn test_markdown_to_html_task_list() {
        let html = markdown_to_html("- [x] done\n- [ ] todo");

        assert!(html.contains(r#"type="checkbox""#));
        assert!(html.contains("checked"));
    }

    #[test]
    fn test_markdown_to_html_footnotes() {
        let html = markdown_to_html("Claim[^1]\n\n[^1]: Source.");
        assert!(html.contains("footnote"));
    }

    #[test]
    fn test_markdown_to_html_empty() {
        assert_eq!(markdown_to_html(""), "");
    }
}
