use std::any::{Any, TypeId};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use gpui::SharedString;

type Slot = Rc<dyn Any>;

thread_local! {
    static STATE: RefCell<HashMap<(TypeId, SharedString), Slot>> = RefCell::new(HashMap::new());
}

/// Returns the state stored for `id`, creating it on first use.
///
/// Declarative components are rebuilt every frame; their view-models and
/// uncontrolled values live here between frames. Entries are keyed by id and
/// by type, so a checkbox and a group may share an id.
pub fn state<T: 'static>(id: &SharedString, create: impl FnOnce() -> T) -> Rc<RefCell<T>> {
    let key = (TypeId::of::<T>(), id.clone());
    if let Some(existing) = STATE.with(|state| state.borrow().get(&key).cloned())
        && let Ok(existing) = existing.downcast::<RefCell<T>>()
    {
        return existing;
    }

    tracing::trace!(%id, "creating component state");
    let created = Rc::new(RefCell::new(create()));
    let slot: Slot = created.clone();
    STATE.with(|state| state.borrow_mut().insert(key, slot));
    created
}

/// Overwrites the state stored for `id`.
pub fn replace<T: 'static>(id: &SharedString, value: T) {
    let key = (TypeId::of::<T>(), id.clone());
    if let Some(existing) = STATE.with(|state| state.borrow().get(&key).cloned())
        && let Ok(existing) = existing.downcast::<RefCell<T>>()
    {
        *existing.borrow_mut() = value;
        return;
    }

    let slot: Slot = Rc::new(RefCell::new(value));
    STATE.with(|state| state.borrow_mut().insert(key, slot));
}

pub fn contains<T: 'static>(id: &SharedString) -> bool {
    STATE.with(|state| {
        state
            .borrow()
            .contains_key(&(TypeId::of::<T>(), id.clone()))
    })
}

/// Drops the state of an unmounted component.
pub fn remove<T: 'static>(id: &SharedString) -> bool {
    STATE.with(|state| {
        state
            .borrow_mut()
            .remove(&(TypeId::of::<T>(), id.clone()))
            .is_some()
    })
}
