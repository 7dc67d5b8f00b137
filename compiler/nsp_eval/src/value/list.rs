//! Mutable doubly-linked lists.
//!
//! Nodes live in an arena and link to each other by slot index, so there
//! are no owning cycles between nodes. Positional access walks from
//! whichever end is nearer. Removed slots are recycled by later pushes,
//! and every node carries a serial so a reused slot is never mistaken for
//! the node that used to live there.

use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;

use super::Value;
use crate::errors::{index_error, EvalResult};

#[derive(Clone, Debug)]
struct Node {
    value: Value,
    serial: u64,
    prev: Option<usize>,
    next: Option<usize>,
}

/// An ordered sequence of values.
#[derive(Clone, Default)]
pub struct ListValue {
    slots: Vec<Option<Node>>,
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
    serials: u64,
}

impl ListValue {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Append at the tail.
    pub fn push(&mut self, value: Value) {
        self.serials += 1;
        let node = Node {
            value,
            serial: self.serials,
            prev: self.tail,
            next: None,
        };
        let id = match self.free.pop() {
            Some(id) => {
                self.slots[id] = Some(node);
                id
            }
            None => {
                self.slots.push(Some(node));
                self.slots.len() - 1
            }
        };
        match self.tail {
            Some(tail) => self.node_mut(tail).next = Some(id),
            None => self.head = Some(id),
        }
        self.tail = Some(id);
        self.len += 1;
    }

    /// Element at `index`.
    pub fn get(&self, index: i64) -> EvalResult {
        let id = self.locate(index, "get")?;
        Ok(self.node(id).value.clone())
    }

    /// Replace the element at `index`.
    pub fn set(&mut self, index: i64, value: Value) -> EvalResult<()> {
        let id = self.locate(index, "update")?;
        self.node_mut(id).value = value;
        Ok(())
    }

    /// Unlink the element at `index` and return it.
    pub fn remove(&mut self, index: i64) -> EvalResult {
        let id = self.locate(index, "remove")?;
        let Some(node) = self.slots[id].take() else {
            return Err(index_error(index, "remove", self.len));
        };
        match node.prev {
            Some(prev) => self.node_mut(prev).next = node.next,
            None => self.head = node.next,
        }
        match node.next {
            Some(next) => self.node_mut(next).prev = node.prev,
            None => self.tail = node.prev,
        }
        self.free.push(id);
        self.len -= 1;
        Ok(node.value)
    }

    /// Elements from head to tail.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            list: self,
            next: self.head,
        }
    }

    fn cursor(&self, id: usize) -> Cursor {
        Cursor {
            slot: id,
            serial: self.node(id).serial,
        }
    }

    /// Whether the node `cursor` names is still in the list.
    fn holds(&self, cursor: Cursor) -> bool {
        matches!(self.slots.get(cursor.slot), Some(Some(node)) if node.serial == cursor.serial)
    }

    /// Slot of the node at `index`, walking from the nearer end.
    fn locate(&self, index: i64, operation: &'static str) -> EvalResult<usize> {
        let out_of_bounds = || index_error(index, operation, self.len);
        let position = usize::try_from(index).map_err(|_| out_of_bounds())?;
        if position >= self.len {
            return Err(out_of_bounds());
        }

        let from_head = position < self.len / 2;
        let (mut current, steps) = if from_head {
            (self.head, position)
        } else {
            (self.tail, self.len - position - 1)
        };
        for _ in 0..steps {
            let id = current.ok_or_else(out_of_bounds)?;
            let node = self.node(id);
            current = if from_head { node.next } else { node.prev };
        }
        current.ok_or_else(out_of_bounds)
    }

    fn node(&self, id: usize) -> &Node {
        match &self.slots[id] {
            Some(node) => node,
            None => unreachable!("linked slot {id} is empty"),
        }
    }

    fn node_mut(&mut self, id: usize) -> &mut Node {
        match &mut self.slots[id] {
            Some(node) => node,
            None => unreachable!("linked slot {id} is empty"),
        }
    }
}

impl FromIterator<Value> for ListValue {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        let mut list = ListValue::new();
        for value in iter {
            list.push(value);
        }
        list
    }
}

impl fmt::Debug for ListValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Iterator over a [`ListValue`], head to tail.
pub struct Iter<'a> {
    list: &'a ListValue,
    next: Option<usize>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Value;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.list.node(self.next?);
        self.next = node.next;
        Some(&node.value)
    }
}

impl<'a> IntoIterator for &'a ListValue {
    type Item = &'a Value;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A node that may since have been removed.
#[derive(Copy, Clone, Debug)]
struct Cursor {
    slot: usize,
    serial: u64,
}

#[derive(Copy, Clone, Debug)]
enum Walk {
    Start,
    At {
        current: Cursor,
        ahead: Option<Cursor>,
    },
    Done,
}

/// Iterator over a shared list that follows the links as they are when
/// each element is requested, so the list may change between steps.
///
/// Elements appended during the walk are visited and elements removed
/// ahead of it are skipped. If the current element itself is removed, the
/// walk resumes at the element that followed it, provided that one is
/// still in the list.
#[derive(Debug)]
pub struct LiveIter {
    list: ListHandle,
    walk: Walk,
}

impl Iterator for LiveIter {
    type Item = Value;

    fn next(&mut self) -> Option<Value> {
        let list = self.list.borrow();
        let id = match self.walk {
            Walk::Start => list.head,
            Walk::At { current, ahead } => {
                if list.holds(current) {
                    list.node(current.slot).next
                } else {
                    ahead.filter(|c| list.holds(*c)).map(|c| c.slot)
                }
            }
            Walk::Done => None,
        };
        let Some(id) = id else {
            self.walk = Walk::Done;
            return None;
        };
        let node = list.node(id);
        self.walk = Walk::At {
            current: list.cursor(id),
            ahead: node.next.map(|next| list.cursor(next)),
        };
        Some(node.value.clone())
    }
}

/// Shared handle to a list.
///
/// Lists have reference semantics: assigning a list to a second variable
/// or storing it in another list aliases it, and mutation through any
/// handle is visible through all of them.
#[derive(Clone, Default)]
#[repr(transparent)]
pub struct ListHandle(Rc<RefCell<ListValue>>);

impl ListHandle {
    pub fn new(list: ListValue) -> Self {
        ListHandle(Rc::new(RefCell::new(list)))
    }

    #[inline]
    pub fn borrow(&self) -> Ref<'_, ListValue> {
        self.0.borrow()
    }

    #[inline]
    pub fn borrow_mut(&self) -> RefMut<'_, ListValue> {
        self.0.borrow_mut()
    }

    /// Walk the list while it may be modified; see [`LiveIter`].
    pub fn live_iter(&self) -> LiveIter {
        LiveIter {
            list: self.clone(),
            walk: Walk::Start,
        }
    }

    /// Same list, not merely equal contents.
    #[inline]
    pub fn ptr_eq(&self, other: &ListHandle) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Address used to detect a list nested inside itself.
    pub(crate) fn addr(&self) -> *const RefCell<ListValue> {
        Rc::as_ptr(&self.0)
    }
}

impl From<ListValue> for ListHandle {
    fn from(list: ListValue) -> Self {
        ListHandle::new(list)
    }
}

impl fmt::Debug for ListHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.try_borrow() {
            Ok(list) => write!(f, "ListHandle(len {})", list.len()),
            Err(_) => f.write_str("ListHandle(<borrowed>)"),
        }
    }
}
