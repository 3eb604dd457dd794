//! 全局提示
//!
//! 任何组件都可以通过 `use_toaster()` 推送提示，
//! 每条提示按级别在 3 秒（成功）或 4 秒（错误）后自动消失。

use crate::components::icons::{CheckCircle, CrossCircle};
use leptos::prelude::*;
use lostlinked::notify::Notification;
use std::time::Duration;

#[derive(Clone, Copy)]
pub struct Toaster {
    toasts: ReadSignal<Vec<(u64, Notification)>>,
    set_toasts: WriteSignal<Vec<(u64, Notification)>>,
    next_id: StoredValue<u64>,
}

impl Toaster {
    fn new() -> Self {
        let (toasts, set_toasts) = signal(Vec::new());
        Self {
            toasts,
            set_toasts,
            next_id: StoredValue::new(0),
        }
    }

    pub fn notify(&self, notification: Notification) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);

        let duration = Duration::from_millis(notification.duration_ms());
        self.set_toasts.update(|list| list.push((id, notification)));

        let set_toasts = self.set_toasts;
        set_timeout(
            move || {
                set_toasts.try_update(|list| list.retain(|(i, _)| *i != id));
            },
            duration,
        );
    }

    pub fn success(&self, message: impl Into<String>) {
        self.notify(Notification::success(message));
    }

    pub fn error(&self, message: impl Into<String>) {
        self.notify(Notification::error(message));
    }
}

pub fn provide_toaster() -> Toaster {
    let toaster = Toaster::new();
    provide_context(toaster);
    toaster
}

pub fn use_toaster() -> Toaster {
    use_context::<Toaster>().expect("Toaster should be provided")
}

/// 提示出口，放在 App 根部
#[component]
pub fn ToastOutlet() -> impl IntoView {
    let toaster = use_toaster();

    view! {
        <div class="toast toast-top toast-end z-50">
            <For
                each=move || toaster.toasts.get()
                key=|(id, _)| *id
                children=move |(_, notification)| {
                    let class = if notification.is_error() {
                        "alert alert-error shadow-lg"
                    } else {
                        "alert alert-success shadow-lg"
                    };
                    let is_error = notification.is_error();
                    view! {
                        <div role="alert" class=class>
                            {if is_error {
                                view! { <CrossCircle attr:class="h-6 w-6 shrink-0" /> }.into_any()
                            } else {
                                view! { <CheckCircle attr:class="h-6 w-6 shrink-0" /> }.into_any()
                            }}
                            <span>{notification.message}</span>
                        </div>
                    }
                }
            />
        </div>
    }
}
