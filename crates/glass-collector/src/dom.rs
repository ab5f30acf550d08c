//! DOM snapshot source
//!
//! A flattened, document-order snapshot of text-bearing nodes with their
//! rendered geometry and computed style. The embedding host (browser bridge,
//! headless renderer) fills it in; this module only decides visibility.

use crate::CollectorError;
use glass_domain::traits::TextSource;
use glass_domain::{PositionHint, SourceElement};

/// The subset of computed style that affects visibility
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComputedStyle {
    /// `display: none`
    pub display_none: bool,
    /// `visibility: hidden`
    pub visibility_hidden: bool,
    /// `opacity`
    pub opacity: f64,
}

impl Default for ComputedStyle {
    fn default() -> Self {
        Self {
            display_none: false,
            visibility_hidden: false,
            opacity: 1.0,
        }
    }
}

/// One text-bearing node of the page
#[derive(Debug, Clone, PartialEq)]
pub struct DomNode {
    /// Lowercase tag name (`p`, `li`, `input`, ...)
    pub tag: String,
    /// Text content (or current value for fields)
    pub text: String,
    /// Bounding client rect
    pub rect: PositionHint,
    /// Computed style
    pub style: ComputedStyle,
    /// Whether the node is editable (`contenteditable="true"`)
    pub editable: bool,
    /// Whether the node belongs to the detector's own overlay UI
    pub in_overlay: bool,
}

impl DomNode {
    /// A rendered, fully opaque node
    pub fn new(tag: impl Into<String>, text: impl Into<String>, rect: PositionHint) -> Self {
        Self {
            tag: tag.into().to_lowercase(),
            text: text.into(),
            rect,
            style: ComputedStyle::default(),
            editable: false,
            in_overlay: false,
        }
    }

    /// Set the computed style
    pub fn with_style(mut self, style: ComputedStyle) -> Self {
        self.style = style;
        self
    }

    /// Mark the node as part of the overlay UI
    pub fn overlay(mut self) -> Self {
        self.in_overlay = true;
        self
    }

    /// Mark the node as contenteditable
    pub fn editable(mut self) -> Self {
        self.editable = true;
        self
    }

    /// Whether the node is a text input the user types into
    pub fn is_field(&self) -> bool {
        self.editable || matches!(self.tag.as_str(), "input" | "textarea")
    }
}

/// A DOM snapshot usable as a text source
#[derive(Debug, Clone)]
pub struct DomSource {
    nodes: Option<Vec<DomNode>>,
    viewport_height: f64,
    viewport_margin: f64,
}

impl DomSource {
    /// Create a source over `nodes` for a viewport `viewport_height` tall
    pub fn new(nodes: Vec<DomNode>, viewport_height: f64) -> Self {
        Self {
            nodes: Some(nodes),
            viewport_height,
            viewport_margin: 0.0,
        }
    }

    /// A source whose document is gone (navigated away, frame detached)
    pub fn detached() -> Self {
        Self {
            nodes: None,
            viewport_height: 0.0,
            viewport_margin: 0.0,
        }
    }

    /// Treat nodes within `margin` pixels of the viewport as visible
    pub fn with_viewport_margin(mut self, margin: f64) -> Self {
        self.viewport_margin = margin.max(0.0);
        self
    }

    /// Whether a node is rendered and within (or near) the viewport
    pub fn is_visible(&self, node: &DomNode) -> bool {
        if !node.rect.has_area() {
            return false;
        }
        if node.rect.bottom() < -self.viewport_margin
            || node.rect.top > self.viewport_height + self.viewport_margin
        {
            return false;
        }
        !(node.style.display_none || node.style.visibility_hidden || node.style.opacity == 0.0)
    }
}

impl TextSource for DomSource {
    type Error = CollectorError;

    fn enumerate(&self) -> Result<Vec<SourceElement>, Self::Error> {
        let nodes = self
            .nodes
            .as_ref()
            .ok_or_else(|| CollectorError::SourceUnavailable("document detached".to_string()))?;

        Ok(nodes
            .iter()
            .filter(|n| !n.in_overlay)
            .map(|n| SourceElement {
                text: n.text.clone(),
                visible: self.is_visible(n),
                field: n.is_field(),
                position_hint: Some(n.rect),
            })
            .collect())
    }
}
