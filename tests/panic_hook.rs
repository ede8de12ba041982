//! Kept to a single test: the panic hook is process-wide state.

use std::{panic, sync::Mutex};

static DELEGATED: Mutex<Vec<String>> = Mutex::new(Vec::new());

fn delegated() -> Vec<String> {
    DELEGATED
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .clone()
}

#[test]
fn test_panic_hook_wraps_previous_hook() {
    panic::set_hook(Box::new(|info| {
        let message = match info.payload().downcast_ref::<&str>() {
            Some(message) => (*message).to_owned(),
            None => String::from("<other payload>"),
        };
        DELEGATED
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(message);
    }));
    must::hooks::install_panic_hook();
    // Installing twice keeps a single wrapper.
    must::hooks::install_panic_hook();

    let _ = panic::catch_unwind::<_, ()>(|| panic!("ordinary bug"));
    assert_eq!(delegated(), ["ordinary bug"]);

    // Recovered by `catch`: nothing is printed or delegated.
    let failure = must::catch(|| must::hold(false)).unwrap_err();
    assert!(failure.is(must::Sentinel::ConditionNotHeld));
    assert_eq!(delegated(), ["ordinary bug"]);

    // Not inside a boundary: rendered by the wrapper, still not delegated.
    let caught = panic::catch_unwind(|| must::must(Some("uncaught"))).err();
    assert!(must::as_failure_or_resume(caught).is_some());
    assert_eq!(delegated(), ["ordinary bug"]);

    let _ = panic::catch_unwind::<_, ()>(|| panic::panic_any(7_u8));
    assert_eq!(delegated(), ["ordinary bug", "<other payload>"]);

    let _ = panic::take_hook();
}
