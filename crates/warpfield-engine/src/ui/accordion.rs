//! Single-open accordion state for the FAQ section.

/// Which item of an accordion is expanded, if any.
///
/// The whole widget carries one piece of state. Opening an item closes
/// whichever was open, clicking the open item collapses everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Accordion {
    open: Option<usize>,
}

impl Accordion {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with an item already expanded, matching markup that ships
    /// pre-opened.
    pub fn with_open(open: Option<usize>) -> Self {
        Self { open }
    }

    /// Handle a click on item `idx`. Returns the item left open.
    pub fn toggle(&mut self, idx: usize) -> Option<usize> {
        self.open = if self.open == Some(idx) {
            None
        } else {
            Some(idx)
        };
        self.open
    }

    pub fn open(&self) -> Option<usize> {
        self.open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_switches_the_open_item() {
        let mut faq = Accordion::new();
        assert_eq!(faq.toggle(0), Some(0));
        assert_eq!(faq.toggle(1), Some(1), "second click moves the open item");
        assert_eq!(faq.open(), Some(1));
    }

    #[test]
    fn clicking_open_item_collapses_all() {
        let mut faq = Accordion::new();
        faq.toggle(2);
        assert_eq!(faq.toggle(2), None);
        assert_eq!(faq.open(), None);
    }

    #[test]
    fn starts_fully_collapsed() {
        assert_eq!(Accordion::new().open(), None);
    }

    #[test]
    fn pre_opened_item_collapses_on_first_click() {
        let mut faq = Accordion::with_open(Some(0));
        assert_eq!(faq.toggle(0), None);
    }
}
