use std::rc::Rc;

use super::*;

// Tests run on separate threads, so each starts with fresh thread-local slots.

#[test]
fn first_install_registers_globals_once() {
    assert!(set_handler(|_| {}));
    assert!(!set_handler(|_| {}));
    assert!(!set_handler(|_| {}));
}

#[test]
fn dispatch_reaches_latest_handler_only() {
    let first = Rc::new(RefCell::new(Vec::new()));
    let second = Rc::new(RefCell::new(Vec::new()));

    let sink = Rc::clone(&first);
    install_callbacks(move |token| sink.borrow_mut().push(token));
    dispatch(Some("a".to_owned()));

    let sink = Rc::clone(&second);
    install_callbacks(move |token| sink.borrow_mut().push(token));
    dispatch(Some("b".to_owned()));
    dispatch(None);

    assert_eq!(*first.borrow(), vec![Some("a".to_owned())]);
    assert_eq!(*second.borrow(), vec![Some("b".to_owned()), None]);
}

#[test]
fn cleared_handler_ignores_callbacks() {
    let seen = Rc::new(Cell::new(0));
    let counter = Rc::clone(&seen);
    install_callbacks(move |_| counter.set(counter.get() + 1));
    clear_callbacks();
    dispatch(Some("late".to_owned()));
    assert_eq!(seen.get(), 0);
}
