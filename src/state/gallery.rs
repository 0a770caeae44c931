/// Gallery navigation
///
/// Closed, or open on one showcase item at an image index. The index is
/// clamped to the item's works, there is no wraparound. While open, the
/// host page's scrolling is locked through a guard that puts back the
/// previous overflow setting when the gallery closes or is dropped.

use std::cell::Cell;
use std::rc::Rc;

use super::data::ShowcaseItem;

/// Overflow setting of the host page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overflow {
    #[default]
    Auto,
    Hidden,
}

/// Handle to the host page's overflow setting (cheap to clone)
#[derive(Debug, Clone, Default)]
pub struct PageScroll {
    overflow: Rc<Cell<Overflow>>,
}

impl PageScroll {
    pub fn new(initial: Overflow) -> Self {
        Self {
            overflow: Rc::new(Cell::new(initial)),
        }
    }

    pub fn overflow(&self) -> Overflow {
        self.overflow.get()
    }

    pub fn set(&self, overflow: Overflow) {
        self.overflow.set(overflow);
    }

    /// Hide overflow until the returned guard is dropped
    pub fn lock(&self) -> ScrollLock {
        let previous = self.overflow.replace(Overflow::Hidden);
        ScrollLock {
            page: self.clone(),
            previous,
        }
    }
}

/// Restores the recorded overflow setting on drop
#[derive(Debug)]
pub struct ScrollLock {
    page: PageScroll,
    previous: Overflow,
}

impl Drop for ScrollLock {
    fn drop(&mut self) {
        self.page.set(self.previous);
    }
}

#[derive(Debug)]
struct OpenGallery {
    item_id: u32,
    len: usize,
    index: usize,
    _lock: ScrollLock,
}

/// Selection state of the Designs detail view
#[derive(Debug)]
pub struct Gallery {
    page: PageScroll,
    open: Option<OpenGallery>,
}

impl Gallery {
    pub fn new(page: PageScroll) -> Self {
        Self { page, open: None }
    }

    /// Open `item` at its first image
    pub fn select(&mut self, item: &ShowcaseItem) {
        // Release any previous lock first so the new one records the page's own value
        self.open = None;
        self.open = Some(OpenGallery {
            item_id: item.id,
            len: item.past_works.len(),
            index: 0,
            _lock: self.page.lock(),
        });
    }

    pub fn next(&mut self) {
        if let Some(open) = self.open.as_mut() {
            if open.index + 1 < open.len {
                open.index += 1;
            }
        }
    }

    pub fn prev(&mut self) {
        if let Some(open) = self.open.as_mut() {
            open.index = open.index.saturating_sub(1);
        }
    }

    pub fn close(&mut self) {
        self.open = None;
    }

    /// Id of the selected item
    pub fn selected(&self) -> Option<u32> {
        self.open.as_ref().map(|open| open.item_id)
    }

    /// Current image index while open
    pub fn index(&self) -> Option<usize> {
        self.open.as_ref().map(|open| open.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::data::AssetRecord;
    use proptest::prelude::*;

    fn item(len: usize) -> ShowcaseItem {
        ShowcaseItem {
            id: 7,
            title: "Test",
            category: "Test",
            cover_image: String::new(),
            description: "",
            show_count: true,
            past_works: vec![AssetRecord::sample("A", "a.png", "", ""); len],
            sections: Vec::new(),
        }
    }

    #[test]
    fn test_select_opens_at_zero() {
        let mut gallery = Gallery::new(PageScroll::default());
        assert_eq!(gallery.selected(), None);
        gallery.select(&item(3));
        assert_eq!(gallery.selected(), Some(7));
        assert_eq!(gallery.index(), Some(0));
    }

    #[test]
    fn test_navigation_is_clamped() {
        let mut gallery = Gallery::new(PageScroll::default());
        gallery.select(&item(3));

        gallery.prev();
        assert_eq!(gallery.index(), Some(0));

        gallery.next();
        gallery.next();
        gallery.next();
        assert_eq!(gallery.index(), Some(2));
    }

    #[test]
    fn test_navigation_on_empty_item() {
        let mut gallery = Gallery::new(PageScroll::default());
        gallery.select(&item(0));
        gallery.next();
        assert_eq!(gallery.index(), Some(0));
    }

    #[test]
    fn test_closed_navigation_is_noop() {
        let mut gallery = Gallery::new(PageScroll::default());
        gallery.next();
        gallery.prev();
        assert_eq!(gallery.index(), None);
    }

    #[test]
    fn test_scroll_lock_restores_prior_value() {
        let page = PageScroll::new(Overflow::Auto);
        let mut gallery = Gallery::new(page.clone());

        gallery.select(&item(2));
        assert_eq!(page.overflow(), Overflow::Hidden);

        // Reselecting keeps the page's own value to restore
        gallery.select(&item(1));
        assert_eq!(page.overflow(), Overflow::Hidden);

        gallery.close();
        assert_eq!(page.overflow(), Overflow::Auto);
    }

    #[test]
    fn test_scroll_lock_restored_on_drop() {
        let page = PageScroll::new(Overflow::Auto);
        {
            let mut gallery = Gallery::new(page.clone());
            gallery.select(&item(2));
            assert_eq!(page.overflow(), Overflow::Hidden);
        }
        assert_eq!(page.overflow(), Overflow::Auto);
    }

    #[test]
    fn test_scroll_lock_keeps_hidden_host() {
        let page = PageScroll::new(Overflow::Hidden);
        let mut gallery = Gallery::new(page.clone());
        gallery.select(&item(2));
        gallery.close();
        assert_eq!(page.overflow(), Overflow::Hidden);
    }

    proptest! {
        #[test]
        fn prop_index_stays_in_range(len in 1usize..20, steps in proptest::collection::vec(any::<bool>(), 0..60)) {
            let mut gallery = Gallery::new(PageScroll::default());
            gallery.select(&item(len));
            for forward in steps {
                if forward { gallery.next() } else { gallery.prev() }
                let index = gallery.index().unwrap();
                prop_assert!(index < len);
            }
        }
    }
}
