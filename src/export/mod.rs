//! Rendering and export: Markdown to HTML, JSON backups.

mod html;
mod json;

pub use html::markdown_to_html;
pub use json::{ExportDocument, export_to_file, write_export};
