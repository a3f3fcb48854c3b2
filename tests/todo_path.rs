use std::{any::TypeId, sync::Arc};

use model_path::{
    PropertyPath, ROOT_PATH_NAME,
    model::Model,
    models::{Todo, TodoPath},
};

#[test]
fn fields_read_back_as_constructed() {
    let root = TodoPath::new("root", false, None);
    assert_eq!(root.name(), "root");
    assert!(!root.is_collection());
    assert!(root.parent().is_none());

    let parent: Arc<dyn PropertyPath> = Arc::new(root.clone());
    let todos = TodoPath::new("todos", true, Some(parent.clone()));
    assert_eq!(todos.name(), "todos");
    assert!(todos.is_collection());
    assert!(Arc::ptr_eq(todos.parent().unwrap(), &parent));

    let metadata = todos.metadata();
    assert_eq!(metadata.name(), "todos");
    assert!(metadata.is_collection());
    assert!(Arc::ptr_eq(metadata.parent().unwrap(), &parent));
    assert!(root.metadata().parent().is_none());
}

#[test]
fn model_identity_is_fixed_to_todo() {
    let path = TodoPath::new("todo", false, None);
    assert_eq!(path.model_name(), "Todo");
    assert_eq!(path.model_type_id(), TypeId::of::<Todo>());

    let erased: &dyn PropertyPath = &path;
    assert_eq!(erased.model_name(), Todo::model_name());
    assert_eq!(erased.model_type_id(), TypeId::of::<Todo>());
}

#[test]
fn identical_arguments_give_equal_nodes() {
    let parent: Arc<dyn PropertyPath> = Arc::new(Todo::root_path());
    let other_parent: Arc<dyn PropertyPath> = Arc::new(Todo::root_path());

    let lhs = TodoPath::new("todo", false, Some(parent));
    let rhs = TodoPath::new("todo", false, Some(other_parent));
    pretty_assertions::assert_eq!(lhs, rhs);

    assert_ne!(lhs, TodoPath::new("todo", true, lhs.parent().cloned()));
    assert_ne!(lhs, TodoPath::new("other", false, lhs.parent().cloned()));
    assert_ne!(lhs, TodoPath::new("todo", false, None));
}

#[test]
fn root_and_child_are_distinguishable() {
    let root = Arc::new(Todo::root_path());
    let child = TodoPath::child(root.clone(), "next", false);

    assert!(root.is_root());
    assert!(!child.is_root());
    assert_eq!(root.name(), ROOT_PATH_NAME);
    assert_ne!(*root, child);
}

#[test]
fn construction_accepts_any_name() {
    let path = TodoPath::new(String::new(), false, None);
    assert_eq!(path.name(), "");
}

fn chain(root: &str, depth: usize) -> Arc<TodoPath> {
    let mut node = Arc::new(TodoPath::new(root, false, None));
    for _ in 0..depth {
        node = Arc::new(TodoPath::child(node, "next", false));
    }
    node
}

#[test]
fn deep_chains_compare_without_recursion() {
    let lhs = chain("root", 50_000);
    let rhs = chain("root", 50_000);
    let other = chain("archive", 50_000);

    assert!(*lhs == *rhs);
    assert!(*lhs.as_dyn() == *rhs.as_dyn());
    assert!(*lhs != *other);

    // dropping the chains walks them recursively
    std::mem::forget((lhs, rhs, other));
}

#[test]
fn shared_parent_short_circuits_equality() {
    let parent = chain("root", 3);
    let lhs = TodoPath::child(parent.clone(), "next", false);
    let rhs = TodoPath::child(parent, "next", false);

    assert_eq!(lhs, rhs);
    assert_ne!(lhs, TodoPath::child(chain("root", 2), "next", false));
}
