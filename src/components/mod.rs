//! UI Components
//!
//! Leptos components for the todo list.

mod input_view;
mod item_view;
mod list_footer;
mod todo_list_inline;
mod todo_list_split;
mod variant_tab_bar;

pub use input_view::InputView;
pub use item_view::{row_key, ItemView};
pub use list_footer::ListFooter;
pub use todo_list_inline::TodoListInline;
pub use todo_list_split::TodoListSplit;
pub use variant_tab_bar::VariantTabBar;
