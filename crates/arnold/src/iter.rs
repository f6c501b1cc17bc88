use std::ptr::NonNull;

/// Owns one of the renderer's `*Iterator` handles and destroys it on drop.
pub(crate) struct NativeIter<I, T> {
    handle: Option<NonNull<I>>,
    next: unsafe fn(*mut I) -> *const T,
    finished: unsafe fn(*const I) -> bool,
    destroy: unsafe fn(*mut I),
}

impl<I, T> NativeIter<I, T> {
    /// A null `handle` yields nothing.
    ///
    /// # Safety
    /// The three functions must belong to the iterator type `handle` points to.
    pub(crate) unsafe fn new(
        handle: *mut I,
        next: unsafe fn(*mut I) -> *const T,
        finished: unsafe fn(*const I) -> bool,
        destroy: unsafe fn(*mut I),
    ) -> Self {
        Self {
            handle: NonNull::new(handle),
            next,
            finished,
            destroy,
        }
    }
}

impl<I, T> Iterator for NativeIter<I, T> {
    type Item = NonNull<T>;

    fn next(&mut self) -> Option<NonNull<T>> {
        let handle = self.handle?;
        unsafe {
            if (self.finished)(handle.as_ptr()) {
                return None;
            }
            NonNull::new((self.next)(handle.as_ptr()).cast_mut())
        }
    }
}

impl<I, T> Drop for NativeIter<I, T> {
    fn drop(&mut self) {
        if let Some(handle) = self.handle {
            unsafe { (self.destroy)(handle.as_ptr()) };
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    struct Fake {
        items: Vec<u32>,
        cursor: usize,
    }

    thread_local! {
        static DESTROYED: Cell<bool> = const { Cell::new(false) };
    }

    unsafe fn fake_next(it: *mut Fake) -> *const u32 {
        let it = unsafe { &mut *it };
        let item = &it.items[it.cursor];
        it.cursor += 1;
        item
    }

    unsafe fn fake_finished(it: *const Fake) -> bool {
        let it = unsafe { &*it };
        it.cursor >= it.items.len()
    }

    unsafe fn fake_destroy(_: *mut Fake) {
        DESTROYED.with(|d| d.set(true));
    }

    #[test]
    fn test_walks_until_finished_then_destroys() {
        let mut fake = Fake {
            items: vec![4, 5, 6],
            cursor: 0,
        };
        let iter = unsafe { NativeIter::new(&mut fake, fake_next, fake_finished, fake_destroy) };
        let values: Vec<u32> = iter.map(|p| unsafe { *p.as_ptr() }).collect();
        assert_eq!(values, vec![4, 5, 6]);
        assert!(DESTROYED.with(Cell::get));
    }

    #[test]
    fn test_null_handle_is_empty() {
        let mut iter =
            unsafe { NativeIter::<Fake, u32>::new(std::ptr::null_mut(), fake_next, fake_finished, fake_destroy) };
        assert!(iter.next().is_none());
    }
}
