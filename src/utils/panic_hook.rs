use std::panic;
use leptos::logging::log;

/// Sets up a panic hook that logs through `console_error_panic_hook` and adds
/// context when the panic came from touching a reactive owner that is gone
pub fn set_custom_panic_hook() {
    console_error_panic_hook::set_once();
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        original_hook(panic_info);

        let message = if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else {
            "Unknown panic".to_string()
        };

        if is_owner_disposal(&message) {
            log!("[PANIC] Reactive owner already disposed. Usually one of:");
            log!("[PANIC] 1. A fetch resolved after its page was unmounted and wrote to a signal");
            log!("[PANIC] 2. A timer (e.g. toast dismissal) fired after the app was torn down");
        }
    }));
}

fn is_owner_disposal(message: &str) -> bool {
    message.contains("OwnerDisposed") || message.contains("disposed")
}

/// Call from the client entry point before mounting.
pub fn init() {
    log!("[PANIC_HOOK] Setting up custom panic hook");
    set_custom_panic_hook();
}
