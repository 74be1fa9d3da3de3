use std::cell::RefCell;
use std::rc::Rc;

pub type SubId = usize;

/// Cloneable handle to an observable value. `set` and `update` notify every
/// subscriber unconditionally; callers wanting change-only notification
/// compare before writing. Subscribers may read the signal (`get`) from
/// inside a notification; writing to it from there is not supported.
#[derive(Clone)]
pub struct Signal<T: 'static>(Rc<RefCell<Inner<T>>>);

struct Inner<T> {
    value: T,
    subs: Vec<Rc<dyn Fn(&T)>>,
}

impl<T> Signal<T> {
    pub fn new(value: T) -> Self {
        Self(Rc::new(RefCell::new(Inner {
            value,
            subs: Vec::new(),
        })))
    }

    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.0.borrow().value.clone()
    }

    pub fn set(&self, v: T) {
        self.0.borrow_mut().value = v;
        self.notify();
    }

    pub fn update<F: FnOnce(&mut T)>(&self, f: F) {
        f(&mut self.0.borrow_mut().value);
        self.notify();
    }

    pub fn subscribe(&self, f: impl Fn(&T) + 'static) -> SubId {
        let mut inner = self.0.borrow_mut();
        inner.subs.push(Rc::new(f));
        inner.subs.len() - 1
    }

    fn notify(&self) {
        // Snapshot the subscriber list so callbacks run without a mutable
        // borrow held; reads from inside a callback stay legal.
        let subs: Vec<Rc<dyn Fn(&T)>> = self.0.borrow().subs.clone();
        for s in &subs {
            let inner = self.0.borrow();
            s(&inner.value);
        }
    }
}

pub fn signal<T>(t: T) -> Signal<T> {
    Signal::new(t)
}
