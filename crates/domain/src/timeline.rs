/// Parameters for one page of a user timeline fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineQuery {
    pub screen_name: String,
    pub page_size: u32,
    /// Upper-bound tweet id for cursor pagination. `None` requests the most
    /// recent page; `Some(id)` requests tweets with ids up to and including
    /// `id`.
    pub max_id: Option<u64>,
}

impl TimelineQuery {
    pub fn first_page(screen_name: impl Into<String>, page_size: u32) -> Self {
        Self {
            screen_name: screen_name.into(),
            page_size,
            max_id: None,
        }
    }

    pub fn with_max_id(mut self, max_id: u64) -> Self {
        self.max_id = Some(max_id);
        self
    }
}
