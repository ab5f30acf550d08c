//! Corpus module - the bounded text of one scan pass

use crate::{ElementRef, SourceElement};

/// Bounded, newline-joined visible text gathered for one scan pass
///
/// Invariant: `text.chars().count() <= budget`. `elements` holds only the
/// elements whose text contributed to `text`, in document order.
#[derive(Debug, Clone, PartialEq)]
pub struct Corpus {
    generation: u64,
    text: String,
    elements: Vec<SourceElement>,
    budget: usize,
}

impl Corpus {
    /// Build a corpus from contributing elements
    ///
    /// The caller is responsible for respecting the budget; element texts are
    /// joined with `\n` and the result is checked in debug builds.
    pub fn new(generation: u64, elements: Vec<SourceElement>, budget: usize) -> Self {
        let text = elements
            .iter()
            .map(|e| e.text.as_str())
            .collect::<Vec<_>>()
            .join("\n");
        debug_assert!(text.chars().count() <= budget);
        Self {
            generation,
            text,
            elements,
            budget,
        }
    }

    /// An empty corpus ("nothing to scan")
    ///
    /// # Examples
    ///
    /// ```
    /// use glass_domain::Corpus;
    ///
    /// let corpus = Corpus::empty(4, 16_000);
    /// assert!(corpus.is_empty());
    /// assert_eq!(corpus.generation(), 4);
    /// ```
    pub fn empty(generation: u64, budget: usize) -> Self {
        Self {
            generation,
            text: String::new(),
            elements: Vec::new(),
            budget,
        }
    }

    /// Pass generation that built this corpus
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Joined text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Contributing elements in document order
    pub fn elements(&self) -> &[SourceElement] {
        &self.elements
    }

    /// Character budget the corpus was built with
    pub fn budget(&self) -> usize {
        self.budget
    }

    /// Length of the joined text in characters
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Whether there is nothing to scan
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Reference to the element at `index` in this pass
    pub fn element_ref(&self, index: usize) -> ElementRef {
        ElementRef::new(self.generation, index)
    }

    /// Resolve a reference, returning `None` for stale or out-of-range refs
    pub fn resolve(&self, element: ElementRef) -> Option<&SourceElement> {
        if element.generation != self.generation {
            return None;
        }
        self.elements.get(element.index)
    }

    /// Content fingerprint: the first `len` characters of the text
    pub fn fingerprint(&self, len: usize) -> String {
        self.text.chars().take(len).collect()
    }
}
