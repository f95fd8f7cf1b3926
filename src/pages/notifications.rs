//! Notification feed with read/unread filtering.

#[cfg(test)]
#[path = "notifications_test.rs"]
mod notifications_test;

use leptos::prelude::*;

use crate::components::header::Header;
use crate::data::{self, NotificationItem};

/// Number of unread notifications.
#[must_use]
pub fn unread_count(items: &[NotificationItem]) -> usize {
    items.iter().filter(|n| !n.read).count()
}

/// Mark one notification read; unknown ids are a no-op.
pub fn mark_read(items: &mut [NotificationItem], id: &str) {
    if let Some(item) = items.iter_mut().find(|n| n.id == id) {
        item.read = true;
    }
}

/// Mark every notification read.
pub fn mark_all_read(items: &mut [NotificationItem]) {
    for item in items {
        item.read = true;
    }
}

/// The feed, optionally narrowed to unread entries.
#[must_use]
pub fn filter_unread(items: &[NotificationItem], unread_only: bool) -> Vec<NotificationItem> {
    items
        .iter()
        .filter(|n| !unread_only || !n.read)
        .cloned()
        .collect()
}

#[component]
pub fn NotificationsPage() -> impl IntoView {
    let feed = RwSignal::new(data::notifications());
    let unread_only = RwSignal::new(false);

    let visible = move || filter_unread(&feed.get(), unread_only.get());

    view! {
        <div class="page">
            <Header/>
            <main class="page__main">
                <section class="page__intro">
                    <div>
                        <h1>"Notifications"</h1>
                        <p class="page__subtitle">
                            {move || format!("{} unread", unread_count(&feed.get()))}
                        </p>
                    </div>
                    <div class="page__intro-actions">
                        <button class="btn" on:click=move |_| feed.update(|items| mark_all_read(items))>
                            "Mark all read"
                        </button>
                    </div>
                </section>

                <div class="filter-bar">
                    <div class="filter-bar__group">
                        <button
                            class=move || if unread_only.get() { "filter-chip" } else { "filter-chip filter-chip--active" }
                            on:click=move |_| unread_only.set(false)
                        >
                            "All"
                        </button>
                        <button
                            class=move || if unread_only.get() { "filter-chip filter-chip--active" } else { "filter-chip" }
                            on:click=move |_| unread_only.set(true)
                        >
                            "Unread"
                        </button>
                    </div>
                </div>

                {move || {
                    let items = visible();
                    if items.is_empty() {
                        view! { <p class="empty-note">"You're all caught up."</p> }.into_any()
                    } else {
                        view! {
                            <ul class="notification-list">
                                {items
                                    .into_iter()
                                    .map(|item| {
                                        let id = item.id;
                                        let read = item.read;
                                        let item_class = if item.read {
                                            "notification-list__item"
                                        } else {
                                            "notification-list__item notification-list__item--unread"
                                        };
                                        view! {
                                            <li class=item_class>
                                                <div>
                                                    <p class="notification-list__title">{item.title}</p>
                                                    <p class="notification-list__body">{item.body}</p>
                                                    <p class="activity-list__meta">
                                                        {item.kind.label()} " · " {item.time}
                                                    </p>
                                                </div>
                                                <Show when=move || !read>
                                                    <button
                                                        class="btn"
                                                        on:click=move |_| feed.update(|items| mark_read(items, id))
                                                    >
                                                        "Mark read"
                                                    </button>
                                                </Show>
                                            </li>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </ul>
                        }
                        .into_any()
                    }
                }}
            </main>
        </div>
    }
}
