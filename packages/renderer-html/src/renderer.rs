//! Render `Fragment` trees to HTML.
//!
//! This is the generic display layer: it interprets structure and styles,
//! escapes text at the boundary, and ignores cache metadata (that hint
//! belongs to the host pipeline, not the markup).

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;
use trellis_fragment::Fragment;

/// Errors that can occur during HTML rendering
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Rendering error: {0}")]
    Generic(String),
}

impl From<String> for RenderError {
    fn from(s: String) -> Self {
        RenderError::Generic(s)
    }
}

impl From<&str> for RenderError {
    fn from(s: &str) -> Self {
        RenderError::Generic(s.to_string())
    }
}

/// Options for HTML rendering
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderOptions {
    /// Emit inline styles from the fragment style maps
    pub inline_styles: bool,
    /// Pretty print HTML
    pub pretty: bool,
    /// Indentation string
    pub indent: String,
    /// Page title for the document head; omitted when `None`
    pub title: Option<String>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            inline_styles: true,
            pretty: true,
            indent: "  ".to_string(),
            title: None,
        }
    }
}

struct Context {
    options: RenderOptions,
    depth: usize,
    buffer: String,
}

impl Context {
    fn new(options: RenderOptions) -> Self {
        Self {
            options,
            depth: 0,
            buffer: String::new(),
        }
    }

    fn add(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn add_line(&mut self, text: &str) {
        if self.options.pretty {
            self.add_indent();
        }
        self.add(text);
        if self.options.pretty {
            self.add("\n");
        }
    }

    fn add_indent(&mut self) {
        let indent = self.options.indent.clone();
        for _ in 0..self.depth {
            self.add(&indent);
        }
    }

    fn indent(&mut self) {
        self.depth += 1;
    }

    fn dedent(&mut self) {
        if self.depth > 0 {
            self.depth -= 1;
        }
    }

    fn get_output(self) -> String {
        self.buffer
    }
}

/// Render a sequence of fragments as a full HTML page
pub fn render_page(
    fragments: &[Fragment],
    options: RenderOptions,
) -> Result<String, RenderError> {
    let mut ctx = Context::new(options);

    ctx.add_line("<!DOCTYPE html>");
    ctx.add_line("<html>");
    ctx.indent();

    render_head(&mut ctx);

    ctx.add_line("<body>");
    ctx.indent();

    for fragment in fragments {
        render_node(fragment, &mut ctx)?;
    }

    ctx.dedent();
    ctx.add_line("</body>");

    ctx.dedent();
    ctx.add_line("</html>");

    Ok(ctx.get_output())
}

/// Render a single fragment tree without the page scaffolding
pub fn render_fragment(
    fragment: &Fragment,
    options: RenderOptions,
) -> Result<String, RenderError> {
    let mut ctx = Context::new(options);
    render_node(fragment, &mut ctx)?;
    Ok(ctx.get_output())
}

fn render_head(ctx: &mut Context) {
    ctx.add_line("<head>");
    ctx.indent();

    ctx.add_line("<meta charset=\"UTF-8\">");
    ctx.add_line("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">");
    if let Some(title) = ctx.options.title.clone() {
        ctx.add_line(&format!("<title>{}</title>", escape_html(&title)));
    }

    ctx.dedent();
    ctx.add_line("</head>");
}

fn render_node(fragment: &Fragment, ctx: &mut Context) -> Result<(), RenderError> {
    match fragment {
        Fragment::Element {
            tag,
            attributes,
            styles,
            children,
            max_age: _,
        } => render_element(tag, attributes, styles, children, ctx),

        Fragment::Text { content } => {
            ctx.add(&escape_html(content));
            Ok(())
        }

        Fragment::Comment { content } => {
            ctx.add_line(&format!("<!-- {} -->", escape_html(content)));
            Ok(())
        }

        Fragment::Template { name, props } => {
            // A host template would take over here; render a classed div
            // carrying the props as data attributes so output stays
            // inspectable.
            if ctx.options.pretty {
                ctx.add_indent();
            }
            ctx.add(&format!("<div class=\"component-{}\"", name));
            for (key, value) in props {
                ctx.add(&format!(
                    " data-{}=\"{}\"",
                    key.replace('_', "-"),
                    escape_html(value)
                ));
            }
            ctx.add("></div>");
            if ctx.options.pretty {
                ctx.add("\n");
            }
            Ok(())
        }
    }
}

fn render_element(
    tag: &str,
    attributes: &HashMap<String, String>,
    styles: &HashMap<String, String>,
    children: &[Fragment],
    ctx: &mut Context,
) -> Result<(), RenderError> {
    // Opening tag
    if ctx.options.pretty {
        ctx.add_indent();
    }
    ctx.add(&format!("<{}", tag));

    for (name, value) in attributes {
        ctx.add(&format!(" {}=\"{}\"", name, escape_html(value)));
    }

    if ctx.options.inline_styles && !styles.is_empty() {
        ctx.add(" style=\"");
        for (key, value) in styles {
            ctx.add(&format!("{}: {}; ", key, value));
        }
        ctx.add("\"");
    }

    // Self-closing tags
    if children.is_empty() && is_self_closing(tag) {
        ctx.add(" />");
        if ctx.options.pretty {
            ctx.add("\n");
        }
        return Ok(());
    }

    ctx.add(">");

    // Children
    if !children.is_empty() {
        if ctx.options.pretty && has_element_children(children) {
            ctx.add("\n");
        }
        ctx.indent();

        for child in children {
            render_node(child, ctx)?;
        }

        ctx.dedent();
        if ctx.options.pretty && has_element_children(children) {
            ctx.add_indent();
        }
    }

    // Closing tag
    ctx.add(&format!("</{}>", tag));
    if ctx.options.pretty {
        ctx.add("\n");
    }

    Ok(())
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn is_self_closing(tag: &str) -> bool {
    matches!(
        tag,
        "img"
            | "input"
            | "br"
            | "hr"
            | "meta"
            | "link"
            | "area"
            | "base"
            | "col"
            | "embed"
            | "param"
            | "source"
            | "track"
            | "wbr"
    )
}

fn has_element_children(children: &[Fragment]) -> bool {
    children
        .iter()
        .any(|child| !matches!(child, Fragment::Text { .. }))
}
