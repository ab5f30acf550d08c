//! Source module - units of visible text and links back to them

use std::fmt;

/// Rendered bounding box of a source element
///
/// Opaque to the detector. Only the highlight collaborator reads it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PositionHint {
    /// Distance from the top of the viewport
    pub top: f64,
    /// Distance from the left of the viewport
    pub left: f64,
    /// Rendered width
    pub width: f64,
    /// Rendered height
    pub height: f64,
}

impl PositionHint {
    /// Create a new bounding box
    pub fn new(top: f64, left: f64, width: f64, height: f64) -> Self {
        Self {
            top,
            left,
            width,
            height,
        }
    }

    /// Bottom edge of the box
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Whether the box has a non-zero rendered size
    pub fn has_area(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

/// A unit of visible text enumerated from a text source
///
/// Elements are produced fresh on every scan pass and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceElement {
    /// Text content of the element
    pub text: String,

    /// Whether the element is currently rendered and on screen
    pub visible: bool,

    /// Whether the element is an editable field (search box, textarea)
    pub field: bool,

    /// Placement information for highlights
    pub position_hint: Option<PositionHint>,
}

impl SourceElement {
    /// Create a visible, non-field element with no position
    ///
    /// # Examples
    ///
    /// ```
    /// use glass_domain::SourceElement;
    ///
    /// let el = SourceElement::visible("The earth is round.");
    /// assert!(el.visible);
    /// assert!(el.position_hint.is_none());
    /// ```
    pub fn visible(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            visible: true,
            field: false,
            position_hint: None,
        }
    }

    /// Create a hidden element
    pub fn hidden(text: impl Into<String>) -> Self {
        Self {
            visible: false,
            ..Self::visible(text)
        }
    }

    /// Mark the element as an editable field
    pub fn as_field(mut self) -> Self {
        self.field = true;
        self
    }

    /// Attach a position hint
    pub fn with_position(mut self, hint: PositionHint) -> Self {
        self.position_hint = Some(hint);
        self
    }
}

/// Non-owning link from a candidate back to the element it came from
///
/// An `ElementRef` is an index into the element list of the corpus built in
/// pass `generation`. It never keeps the element alive; resolving it against a
/// corpus from another pass yields nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementRef {
    /// Scan pass that produced the element
    pub generation: u64,

    /// Position of the element within that pass's corpus
    pub index: usize,
}

impl ElementRef {
    /// Create a new element reference
    pub fn new(generation: u64, index: usize) -> Self {
        Self { generation, index }
    }
}

impl fmt::Display for ElementRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "g{}#{}", self.generation, self.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_and_hidden() {
        assert!(SourceElement::visible("a").visible);
        assert!(!SourceElement::hidden("a").visible);
        assert!(SourceElement::visible("a").as_field().field);
    }

    #[test]
    fn test_position_hint_area() {
        assert!(PositionHint::new(0.0, 0.0, 10.0, 5.0).has_area());
        assert!(!PositionHint::new(0.0, 0.0, 0.0, 5.0).has_area());
        assert_eq!(PositionHint::new(10.0, 0.0, 1.0, 5.0).bottom(), 15.0);
    }

    #[test]
    fn test_element_ref_display() {
        assert_eq!(ElementRef::new(3, 7).to_string(), "g3#7");
    }
}
