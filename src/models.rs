/// A todo item as returned by the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoItem {
    pub id: i64,
    /// 1-based rank by ascending id, computed per query and never stored
    pub position: i64,
    pub text: String,
    pub done: bool,
}

impl TodoItem {
    pub fn icon(&self) -> &'static str {
        if self.done { "✓" } else { "✗" }
    }
}
