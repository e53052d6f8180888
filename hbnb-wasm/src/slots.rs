use std::cell::RefCell;
use std::collections::HashMap;

/// Хэндлы смонтированного содержимого, по одному на область.
///
/// Новый хэндл вытесняет старый, и старый дропается до того, как
/// вызывающий смонтирует новый вид.
pub(crate) struct Slots<H> {
    held: RefCell<HashMap<&'static str, H>>,
}

impl<H> Default for Slots<H> {
    fn default() -> Self {
        Self {
            held: RefCell::new(HashMap::new()),
        }
    }
}

impl<H> Slots<H> {
    pub(crate) fn release(&self, id: &'static str) {
        let previous = self.held.borrow_mut().remove(id);
        drop(previous);
    }

    pub(crate) fn hold(&self, id: &'static str, handle: H) {
        self.release(id);
        self.held.borrow_mut().insert(id, handle);
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.held.borrow().len()
    }
}
