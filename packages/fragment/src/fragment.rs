use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Renderer-agnostic UI-tree node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Fragment {
    /// HTML-ish element
    Element {
        tag: String,
        attributes: HashMap<String, String>,
        styles: HashMap<String, String>,
        children: Vec<Fragment>,
        /// Cacheability hint for the host pipeline. `None` defers to the
        /// host default; `Some(0)` means recompute on every view.
        #[serde(skip_serializing_if = "Option::is_none")]
        max_age: Option<u32>,
    },

    /// Text node
    Text { content: String },

    /// Comment node
    Comment { content: String },

    /// Flat descriptor handed to a host-side template. Carries its fields
    /// verbatim; no children, no interpretation here.
    Template {
        name: String,
        props: HashMap<String, String>,
    },
}

impl Fragment {
    pub fn element(tag: impl Into<String>) -> Self {
        Fragment::Element {
            tag: tag.into(),
            attributes: HashMap::new(),
            styles: HashMap::new(),
            children: Vec::new(),
            max_age: None,
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Fragment::Text {
            content: content.into(),
        }
    }

    pub fn comment(content: impl Into<String>) -> Self {
        Fragment::Comment {
            content: content.into(),
        }
    }

    pub fn template(name: impl Into<String>) -> Self {
        Fragment::Template {
            name: name.into(),
            props: HashMap::new(),
        }
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        if let Fragment::Element {
            ref mut attributes, ..
        } = self
        {
            attributes.insert(key.into(), value.into());
        }
        self
    }

    pub fn with_style(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        if let Fragment::Element { ref mut styles, .. } = self {
            styles.insert(key.into(), value.into());
        }
        self
    }

    pub fn with_child(mut self, child: Fragment) -> Self {
        if let Fragment::Element {
            ref mut children, ..
        } = self
        {
            children.push(child);
        }
        self
    }

    pub fn with_children(mut self, new_children: Vec<Fragment>) -> Self {
        if let Fragment::Element {
            ref mut children, ..
        } = self
        {
            children.extend(new_children);
        }
        self
    }

    pub fn with_prop(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        if let Fragment::Template { ref mut props, .. } = self {
            props.insert(key.into(), value.into());
        }
        self
    }

    /// Mark an element as per-view: `max_age = Some(0)`.
    pub fn uncacheable(mut self) -> Self {
        if let Fragment::Element {
            ref mut max_age, ..
        } = self
        {
            *max_age = Some(0);
        }
        self
    }

    pub fn is_element(&self) -> bool {
        matches!(self, Fragment::Element { .. })
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Fragment::Text { .. })
    }

    /// Attribute value on an element node, if present.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        match self {
            Fragment::Element { attributes, .. } => attributes.get(name).map(String::as_str),
            _ => None,
        }
    }

    /// Cache hint on an element node.
    pub fn max_age(&self) -> Option<u32> {
        match self {
            Fragment::Element { max_age, .. } => *max_age,
            _ => None,
        }
    }

    /// Concatenated text content of the tree, in document order. Template
    /// descriptors contribute nothing; their props belong to the host
    /// template.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Fragment::Element { children, .. } => {
                for child in children {
                    child.collect_text(out);
                }
            }
            Fragment::Text { content } => out.push_str(content),
            Fragment::Comment { .. } | Fragment::Template { .. } => {}
        }
    }

    /// Depth-first search for an element carrying `name="value"`.
    pub fn find_by_attr(&self, name: &str, value: &str) -> Option<&Fragment> {
        if let Fragment::Element {
            attributes,
            children,
            ..
        } = self
        {
            if attributes.get(name).map(String::as_str) == Some(value) {
                return Some(self);
            }
            for child in children {
                if let Some(found) = child.find_by_attr(name, value) {
                    return Some(found);
                }
            }
        }
        None
    }
}
