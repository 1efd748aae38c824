use gloo::events::EventListener;
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;

/// Listens for window resizes and runs `callback` once `delay_ms` has passed
/// without another resize.
///
/// Returns `None` outside a browser window. Dropping the listener also drops
/// any pending timeout.
///
/// ```rust,ignore
/// use_effect_with(deps, move |_| {
///     let listener = debounced_resize_listener(move || redraw(), Config::RESIZE_DEBOUNCE_MS);
///     move || drop(listener)
/// });
/// ```
pub fn debounced_resize_listener<F>(callback: F, delay_ms: u32) -> Option<EventListener>
where
    F: Fn() + 'static,
{
    let window = web_sys::window()?;
    let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
    let callback = Rc::new(callback);

    Some(EventListener::new(&window, "resize", move |_| {
        let cb = callback.clone();
        // Replacing the handle cancels the previous timeout.
        *pending.borrow_mut() = Some(Timeout::new(delay_ms, move || cb()));
    }))
}
