//! Page slicing for listings

/// One page of a larger ordered listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-based page number
    pub page: usize,
    pub per_page: usize,
    /// Number of items across all pages
    pub total: usize,
}

impl<T> Page<T> {
    /// Slice `page` out of `items`. Pages are 1-based; 0 is treated as 1.
    pub fn from_items(items: Vec<T>, page: usize, per_page: usize) -> Self {
        let page = page.max(1);
        let per_page = per_page.max(1);
        let total = items.len();
        let offset = (page - 1).saturating_mul(per_page);

        let items = items.into_iter().skip(offset).take(per_page).collect();

        Self {
            items,
            page,
            per_page,
            total,
        }
    }

    pub fn total_pages(&self) -> usize {
        self.total.div_ceil(self.per_page).max(1)
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
