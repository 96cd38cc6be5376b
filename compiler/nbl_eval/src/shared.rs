//! Single-threaded shared ownership wrapper.

use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;

/// Reference-counted interior mutability for the evaluator's shared
/// structures: environments kept alive by closures, and list values
/// whose mutation is visible through every handle.
///
/// Wraps `Rc<RefCell<T>>` behind a factory so call sites say what they
/// mean. `Rc`, not `Arc`: evaluation is strictly single-threaded, and
/// no environment ever points back at a descendant, so plain shared
/// ownership suffices with no weak references.
pub struct Shared<T>(Rc<RefCell<T>>);

impl<T> Shared<T> {
    #[inline]
    pub fn new(value: T) -> Self {
        Shared(Rc::new(RefCell::new(value)))
    }

    /// Borrow the inner value immutably.
    ///
    /// # Panics
    /// Panics if a mutable borrow is live; the evaluator's sequential
    /// access discipline keeps borrows short-lived and non-overlapping.
    #[inline]
    pub fn borrow(&self) -> Ref<'_, T> {
        self.0.borrow()
    }

    /// Borrow the inner value mutably.
    #[inline]
    pub fn borrow_mut(&self) -> RefMut<'_, T> {
        self.0.borrow_mut()
    }

    /// Whether two handles refer to the same allocation.
    #[inline]
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Rc::ptr_eq(&a.0, &b.0)
    }
}

impl<T> Clone for Shared<T> {
    #[inline]
    fn clone(&self) -> Self {
        Shared(Rc::clone(&self.0))
    }
}

impl<T: fmt::Debug> fmt::Debug for Shared<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Shared").field(&self.0).finish()
    }
}

impl<T: Default> Default for Shared<T> {
    fn default() -> Self {
        Shared::new(T::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mutation_is_visible_through_clones() {
        let a = Shared::new(vec![1]);
        let b = a.clone();
        b.borrow_mut().push(2);
        assert_eq!(*a.borrow(), vec![1, 2]);
    }

    #[test]
    fn ptr_eq_distinguishes_allocations() {
        let a = Shared::new(0);
        let b = a.clone();
        let c = Shared::new(0);
        assert!(Shared::ptr_eq(&a, &b));
        assert!(!Shared::ptr_eq(&a, &c));
    }
}
