use smallvec::SmallVec;

use crate::error::{UsageError, fatal};

/// Fixed-capacity stack. Overflow and underflow are usage errors.
#[derive(Clone, Debug)]
pub struct FixedStack<T, const N: usize> {
    name: &'static str,
    items: SmallVec<[T; N]>,
}

impl<T, const N: usize> FixedStack<T, N> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            items: SmallVec::new(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    #[track_caller]
    pub fn push(&mut self, v: T) {
        if self.items.len() >= N {
            fatal(UsageError::Overflow {
                stack: self.name,
                capacity: N,
            });
        }
        self.items.push(v);
    }

    #[track_caller]
    pub fn pop(&mut self) -> T {
        match self.items.pop() {
            Some(v) => v,
            None => fatal(UsageError::PopEmpty { stack: self.name }),
        }
    }

    pub fn last(&self) -> Option<&T> {
        self.items.last()
    }

    pub fn last_mut(&mut self) -> Option<&mut T> {
        self.items.last_mut()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Fails with [`UsageError::Unbalanced`] unless the stack is empty.
    #[track_caller]
    pub fn expect_empty(&self) {
        if !self.items.is_empty() {
            fatal(UsageError::Unbalanced {
                stack: self.name,
                depth: self.items.len(),
            });
        }
    }
}
