//! Todo List Scenario Tests
//!
//! Behavior of the list as driven by user actions.

#[cfg(test)]
mod tests {
    use crate::{Filter, Stats, TodoList};

    fn texts(list: &TodoList) -> Vec<&str> {
        list.todos().iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn test_add_blank_is_noop() {
        let mut list = TodoList::new();
        assert_eq!(list.add(""), None);
        assert_eq!(list.add("   "), None);
        assert_eq!(list.add("\t\n"), None);
        assert!(list.is_empty());
    }

    #[test]
    fn test_add_creates_fresh_todo() {
        let mut list = TodoList::new();
        let id = list.add("Buy milk").expect("todo added");

        assert_eq!(list.len(), 1);
        let todo = list.get(id).unwrap();
        assert_eq!(todo.text, "Buy milk");
        assert!(!todo.completed);
        assert!(!todo.is_editing);
    }

    #[test]
    fn test_toggle_is_its_own_inverse() {
        let mut list = TodoList::new();
        let id = list.add("Walk dog").unwrap();

        list.toggle(id);
        assert!(list.get(id).unwrap().completed);
        list.toggle(id);
        assert!(!list.get(id).unwrap().completed);
    }

    #[test]
    fn test_toggle_unknown_id_is_noop() {
        let mut list = TodoList::new();
        let id = list.add("Walk dog").unwrap();
        let before = list.todos().to_vec();

        list.toggle(id + 100);
        assert_eq!(list.todos(), before.as_slice());
    }

    #[test]
    fn test_remove() {
        let mut list = TodoList::new();
        let a = list.add("A").unwrap();
        list.add("B").unwrap();

        list.remove(a);
        assert_eq!(list.len(), 1);
        assert!(list.get(a).is_err());
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut list = TodoList::new();
        let a = list.add("A").unwrap();

        list.remove(a + 1);
        assert_eq!(list.len(), 1);
        list.remove(a);
        list.remove(a);
        assert!(list.is_empty());
    }

    #[test]
    fn test_add_add_remove_first() {
        let mut list = TodoList::new();
        let a = list.add("A").unwrap();
        list.add("B").unwrap();

        list.remove(a);
        assert_eq!(texts(&list), vec!["B"]);
    }

    #[test]
    fn test_edit_without_update_keeps_text() {
        let mut list = TodoList::new();
        let id = list.add("Read book").unwrap();

        list.start_editing(id);
        assert!(list.get(id).unwrap().is_editing);
        list.save_edit(id);

        let todo = list.get(id).unwrap();
        assert!(!todo.is_editing);
        assert_eq!(todo.text, "Read book");
    }

    #[test]
    fn test_edit_with_update_changes_text() {
        let mut list = TodoList::new();
        let id = list.add("Read book").unwrap();

        list.start_editing(id);
        list.update_text(id, "Read two books");
        list.save_edit(id);

        let todo = list.get(id).unwrap();
        assert!(!todo.is_editing);
        assert_eq!(todo.text, "Read two books");
    }

    #[test]
    fn test_update_text_outside_edit_mode_is_noop() {
        let mut list = TodoList::new();
        let id = list.add("Read book").unwrap();

        list.update_text(id, "changed");
        assert_eq!(list.get(id).unwrap().text, "Read book");
    }

    #[test]
    fn test_save_edit_does_not_revalidate() {
        let mut list = TodoList::new();
        let id = list.add("Read book").unwrap();

        list.start_editing(id);
        list.update_text(id, "   ");
        list.save_edit(id);
        assert_eq!(list.get(id).unwrap().text, "   ");
    }

    #[test]
    fn test_multiple_items_can_be_editing() {
        let mut list = TodoList::new();
        let a = list.add("A").unwrap();
        let b = list.add("B").unwrap();

        list.start_editing(a);
        list.start_editing(b);
        assert!(list.todos().iter().all(|t| t.is_editing));
    }

    #[test]
    fn test_completed_and_editing_are_independent() {
        let mut list = TodoList::new();
        let id = list.add("A").unwrap();

        list.start_editing(id);
        list.toggle(id);
        let todo = list.get(id).unwrap();
        assert!(todo.completed && todo.is_editing);
    }

    #[test]
    fn test_ids_unique_after_removal() {
        let mut list = TodoList::new();
        let a = list.add("A").unwrap();
        list.remove(a);
        let b = list.add("B").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_clear_completed() {
        let mut list = TodoList::new();
        let a = list.add("A").unwrap();
        list.add("B").unwrap();
        let c = list.add("C").unwrap();
        list.toggle(a);
        list.toggle(c);

        assert_eq!(list.clear_completed(), 2);
        assert_eq!(texts(&list), vec!["B"]);
        assert_eq!(list.clear_completed(), 0);
    }

    #[test]
    fn test_stats_track_operations() {
        let mut list = TodoList::new();
        let a = list.add("A").unwrap();
        list.add("B").unwrap();
        list.toggle(a);

        assert_eq!(list.stats(), Stats { total: 2, active: 1, completed: 1 });
        assert_eq!(list.visible(Filter::Active).len(), 1);
    }
}
