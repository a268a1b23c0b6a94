use leptos::*;

/// How long a toast stays on screen before it dismisses itself.
pub const TOAST_DURATION: std::time::Duration = std::time::Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastVariant {
    Destructive,
}

impl ToastVariant {
    pub fn class(self) -> &'static str {
        match self {
            ToastVariant::Destructive => "toast toast-destructive",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

impl Toast {
    pub fn destructive(title: &str, description: impl Into<String>) -> Self {
        Self {
            title: title.to_string(),
            description: description.into(),
            variant: ToastVariant::Destructive,
        }
    }
}

/// Somewhere to show a transient message to the user. Fire and forget.
pub trait Notifier {
    fn notify(&self, toast: Toast);
}

/// Reactive list of visible toasts, rendered by the `Toaster` component.
#[derive(Clone, Copy)]
pub struct ToastQueue {
    toasts: RwSignal<Vec<(u64, Toast)>>,
    next_id: StoredValue<u64>,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self {
            toasts: create_rw_signal(Vec::new()),
            next_id: store_value(0),
        }
    }

    pub fn push(&self, toast: Toast) -> u64 {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.toasts.update(|toasts| toasts.push((id, toast)));
        id
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|toasts| toasts.retain(|(toast_id, _)| *toast_id != id));
    }

    pub fn visible(&self) -> Vec<(u64, Toast)> {
        self.toasts.get()
    }

    pub fn visible_untracked(&self) -> Vec<(u64, Toast)> {
        self.toasts.get_untracked()
    }
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for ToastQueue {
    fn notify(&self, toast: Toast) {
        let id = self.push(toast);
        // timers only exist in the browser
        #[cfg(target_arch = "wasm32")]
        {
            let queue = *self;
            set_timeout(move || queue.dismiss(id), TOAST_DURATION);
        }
        #[cfg(not(target_arch = "wasm32"))]
        let _ = id;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_dismiss() {
        let runtime = create_runtime();
        let queue = ToastQueue::new();

        let first = queue.push(Toast::destructive("Error", "Failed to load restaurants"));
        let second = queue.push(Toast::destructive("Error", "Failed to load reviews"));
        assert_ne!(first, second);
        assert_eq!(queue.visible_untracked().len(), 2);

        queue.dismiss(first);
        let left = queue.visible_untracked();
        assert_eq!(left.len(), 1);
        assert_eq!(left[0].1.description, "Failed to load reviews");
        assert_eq!(left[0].1.variant, ToastVariant::Destructive);

        runtime.dispose();
    }

    #[test]
    fn test_notify_shows_toast() {
        let runtime = create_runtime();
        let queue = ToastQueue::new();
        queue.notify(Toast::destructive("Error", "Failed to load reviews"));
        assert_eq!(queue.visible_untracked().len(), 1);
        runtime.dispose();
    }
}
