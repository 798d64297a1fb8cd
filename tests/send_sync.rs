//! Compile-time checks that the collections and their iterators are `Send`/`Sync` exactly when
//! the key type allows it

#![warn(rust_2018_idioms)]

use std::cell::Cell;
use std::rc::Rc;

use static_assertions::{assert_impl_all, assert_not_impl_any};

use bst_engine::{arena, traverse, ArenaBSTSet, BSTSet, Node};

assert_impl_all!(BSTSet<i32>: Send, Sync);
assert_not_impl_any!(BSTSet<Rc<i32>>: Send, Sync);
assert_impl_all!(BSTSet<Cell<i32>>: Send);
assert_not_impl_any!(BSTSet<Cell<i32>>: Sync);

assert_impl_all!(Node<i32>: Send, Sync);
assert_not_impl_any!(Node<Rc<i32>>: Send, Sync);

assert_impl_all!(ArenaBSTSet<i32>: Send, Sync);
assert_not_impl_any!(ArenaBSTSet<Rc<i32>>: Send, Sync);
assert_impl_all!(ArenaBSTSet<Cell<i32>>: Send);
assert_not_impl_any!(ArenaBSTSet<Cell<i32>>: Sync);

assert_impl_all!(arena::NodeRef<'static, i32>: Send, Sync, Copy);
assert_not_impl_any!(arena::NodeRef<'static, Rc<i32>>: Send, Sync);
assert_not_impl_any!(arena::NodeRef<'static, Cell<i32>>: Send, Sync);

assert_impl_all!(traverse::IterPreorder<'static, &'static Node<i32>>: Send, Sync);
assert_impl_all!(traverse::IterInorder<'static, &'static Node<i32>>: Send, Sync);
assert_impl_all!(traverse::IterPostorder<'static, &'static Node<i32>>: Send, Sync);
assert_impl_all!(traverse::IterLevelorder<'static, &'static Node<i32>>: Send, Sync);
assert_not_impl_any!(traverse::IterInorder<'static, &'static Node<Cell<i32>>>: Send, Sync);

assert_impl_all!(traverse::IterInorder<'static, arena::NodeRef<'static, i32>>: Send, Sync);
assert_not_impl_any!(traverse::IterInorder<'static, arena::NodeRef<'static, Rc<i32>>>: Send, Sync);
