/// Which FAQ entry is expanded. Opening one entry closes whichever was open.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Accordion {
    open: Option<usize>,
}

impl Default for Accordion {
    /// The first entry starts expanded.
    fn default() -> Self {
        Self { open: Some(0) }
    }
}

impl Accordion {
    pub fn open(&self) -> Option<usize> {
        self.open
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    /// Activating the open entry collapses it; anything else opens exclusively.
    pub fn toggle(self, index: usize) -> Self {
        if self.is_open(index) {
            Self { open: None }
        } else {
            Self { open: Some(index) }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collapsed() -> Accordion {
        Accordion::default().toggle(0)
    }

    #[test]
    fn starts_with_first_entry_open() {
        let faq = Accordion::default();
        assert_eq!(faq.open(), Some(0));
        assert!(faq.is_open(0));
        assert!(!faq.is_open(1));
    }

    #[test]
    fn opening_from_collapsed_opens_exactly_one() {
        for i in 0..4 {
            let faq = collapsed().toggle(i);
            assert_eq!(faq.open(), Some(i));
            assert_eq!((0..4).filter(|&j| faq.is_open(j)).count(), 1);
        }
    }

    #[test]
    fn opening_another_entry_closes_the_previous() {
        for i in 0..4 {
            for j in (0..4).filter(|&j| j != i) {
                let faq = collapsed().toggle(i).toggle(j);
                assert!(faq.is_open(j));
                assert!(!faq.is_open(i));
            }
        }
    }

    #[test]
    fn activating_the_open_entry_collapses_all() {
        for i in 0..4 {
            let faq = collapsed().toggle(i).toggle(i);
            assert_eq!(faq, collapsed());
        }
    }

    #[test]
    fn page_load_then_open_and_close_third_entry() {
        let faq = Accordion::default();
        assert!(faq.is_open(0));

        let faq = faq.toggle(2);
        assert!(!faq.is_open(0));
        assert!(faq.is_open(2));

        let faq = faq.toggle(2);
        assert_eq!(faq.open(), None);
    }
}
