//! Todo list engine with derived filtered views
//!
//! An ordered collection of todo items mutated exclusively through intents
//! processed by [`TodoList::apply`]. Views over the collection (`all`,
//! `active`, `completed`) are computed on read and never cached, so they are
//! always consistent with the underlying sequence.

use serde::{Deserialize, Serialize};

/// Identifier for a todo item
///
/// Allocated from a per-collection monotonic counter, so ids reflect
/// creation order and are never reused within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TodoId(u64);

/// A single todo entry
///
/// `text` is immutable after creation; only the completion flag changes,
/// and only through a toggle intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoItem {
    id: TodoId,
    text: String,
    completed: bool,
}

impl TodoItem {
    pub fn id(&self) -> TodoId {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }
}

/// Discrete state-change requests accepted by the todo list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TodoIntent {
    /// Append a new item; blank text is ignored
    Add(String),
    /// Flip completion on the matching item; missing ids are ignored
    Toggle(TodoId),
    /// Remove the matching item; missing ids are ignored
    Delete(TodoId),
    /// Remove every completed item, preserving the order of the rest
    ClearCompleted,
}

/// Named views over the collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl Filter {
    fn matches(&self, item: &TodoItem) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => !item.completed,
            Filter::Completed => item.completed,
        }
    }
}

/// Ordered todo collection, newest items appended at the end
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TodoList {
    items: Vec<TodoItem>,
    next_id: u64,
}

impl TodoList {
    /// Creates an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Processes an intent and returns the next collection
    ///
    /// Pure and total: invalid intents (blank text, unknown ids) degrade to
    /// no-ops rather than failing.
    pub fn apply(mut self, intent: TodoIntent) -> TodoList {
        match intent {
            TodoIntent::Add(text) => {
                let text = text.trim();
                if !text.is_empty() {
                    let id = TodoId(self.next_id);
                    self.next_id += 1;
                    self.items.push(TodoItem {
                        id,
                        text: text.to_string(),
                        completed: false,
                    });
                }
                self
            }
            TodoIntent::Toggle(id) => {
                if let Some(item) = self.items.iter_mut().find(|item| item.id == id) {
                    item.completed = !item.completed;
                }
                self
            }
            TodoIntent::Delete(id) => {
                self.items.retain(|item| item.id != id);
                self
            }
            TodoIntent::ClearCompleted => {
                self.items.retain(|item| !item.completed);
                self
            }
        }
    }

    /// All items in insertion order
    pub fn all(&self) -> &[TodoItem] {
        &self.items
    }

    /// Items not yet completed, in insertion order
    pub fn active(&self) -> Vec<&TodoItem> {
        self.filtered(Filter::Active)
    }

    /// Completed items, in insertion order
    pub fn completed(&self) -> Vec<&TodoItem> {
        self.filtered(Filter::Completed)
    }

    /// Read-only projection of the collection through a filter
    ///
    /// Never mutates or reorders the underlying sequence.
    pub fn filtered(&self, filter: Filter) -> Vec<&TodoItem> {
        self.items.iter().filter(|item| filter.matches(item)).collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn active_count(&self) -> usize {
        self.items.iter().filter(|item| !item.completed).count()
    }

    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|item| item.completed).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_of(texts: &[&str]) -> TodoList {
        texts.iter().fold(TodoList::new(), |list, text| {
            list.apply(TodoIntent::Add(text.to_string()))
        })
    }

    #[test]
    fn new_list_is_empty() {
        let list = TodoList::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn add_appends_trimmed_text() {
        let list = TodoList::new().apply(TodoIntent::Add("  buy milk  ".to_string()));
        assert_eq!(list.len(), 1);
        assert_eq!(list.all()[0].text(), "buy milk");
        assert!(!list.all()[0].is_completed());
    }

    #[test]
    fn add_blank_is_noop() {
        let list = TodoList::new()
            .apply(TodoIntent::Add("   ".to_string()))
            .apply(TodoIntent::Add(String::new()));
        assert!(list.is_empty());
    }

    #[test]
    fn ids_are_unique_and_ordered() {
        let list = list_of(&["a", "b", "c"]);
        let ids: Vec<_> = list.all().iter().map(|item| item.id()).collect();
        assert_eq!(ids.len(), 3);
        assert!(ids[0] != ids[1] && ids[1] != ids[2] && ids[0] != ids[2]);
    }

    #[test]
    fn delete_does_not_recycle_ids() {
        let list = list_of(&["a"]);
        let first = list.all()[0].id();
        let list = list
            .apply(TodoIntent::Delete(first))
            .apply(TodoIntent::Add("b".to_string()));
        assert_ne!(list.all()[0].id(), first);
    }

    #[test]
    fn toggle_flips_completion() {
        let list = list_of(&["a"]);
        let id = list.all()[0].id();

        let list = list.apply(TodoIntent::Toggle(id));
        assert!(list.all()[0].is_completed());

        let list = list.apply(TodoIntent::Toggle(id));
        assert!(!list.all()[0].is_completed());
    }

    #[test]
    fn toggle_missing_id_is_noop() {
        let list = list_of(&["a"]);
        let before = list.clone();
        let after = list.apply(TodoIntent::Toggle(TodoId(999)));
        assert_eq!(before, after);
    }

    #[test]
    fn delete_removes_matching_item() {
        let list = list_of(&["a", "b"]);
        let id = list.all()[0].id();

        let list = list.apply(TodoIntent::Delete(id));
        assert_eq!(list.len(), 1);
        assert_eq!(list.all()[0].text(), "b");
    }

    #[test]
    fn delete_missing_id_is_noop() {
        let list = list_of(&["a", "b"]);
        let before = list.clone();
        let after = list.apply(TodoIntent::Delete(TodoId(999)));
        assert_eq!(before, after);
    }

    #[test]
    fn clear_completed_preserves_active_order() {
        let list = list_of(&["a", "b", "c"]);
        let first = list.all()[0].id();
        let third = list.all()[2].id();

        let list = list
            .apply(TodoIntent::Toggle(first))
            .apply(TodoIntent::Toggle(third))
            .apply(TodoIntent::ClearCompleted);

        assert_eq!(list.len(), 1);
        assert_eq!(list.all()[0].text(), "b");
    }

    #[test]
    fn views_partition_the_collection() {
        let list = list_of(&["a", "b", "c", "d"]);
        let second = list.all()[1].id();
        let list = list.apply(TodoIntent::Toggle(second));

        assert_eq!(list.active().len() + list.completed().len(), list.all().len());
        assert_eq!(list.active_count(), 3);
        assert_eq!(list.completed_count(), 1);
    }

    #[test]
    fn views_partition_after_any_sequence() {
        let list = list_of(&["a", "b", "c"]);
        let a = list.all()[0].id();
        let b = list.all()[1].id();

        let list = list
            .apply(TodoIntent::Toggle(a))
            .apply(TodoIntent::Delete(b))
            .apply(TodoIntent::Add("d".to_string()))
            .apply(TodoIntent::Toggle(a))
            .apply(TodoIntent::ClearCompleted);

        assert_eq!(list.active_count() + list.completed_count(), list.len());
    }

    #[test]
    fn intents_serialize_for_transcripts() {
        let intent = TodoIntent::Add("buy milk".to_string());
        let json = serde_json::to_string(&intent).unwrap();
        let back: TodoIntent = serde_json::from_str(&json).unwrap();
        assert_eq!(intent, back);
    }

    #[test]
    fn filtered_views_do_not_reorder() {
        let list = list_of(&["a", "b", "c"]);
        let second = list.all()[1].id();
        let list = list.apply(TodoIntent::Toggle(second));

        let all: Vec<_> = list.filtered(Filter::All).iter().map(|i| i.text()).collect();
        assert_eq!(all, ["a", "b", "c"]);

        let active: Vec<_> = list.active().iter().map(|i| i.text()).collect();
        assert_eq!(active, ["a", "c"]);

        let completed: Vec<_> = list.completed().iter().map(|i| i.text()).collect();
        assert_eq!(completed, ["b"]);
    }
}
