//! Document upload widget with simulated progress.
//!
//! DESIGN
//! ======
//! The storage collaborator reports no byte-level progress, so while the
//! request is in flight a timer walks a displayed percentage up to 90%,
//! jumping to 100% when the real response lands. The timer is cosmetic
//! and owned entirely by this component; success or failure is decided by
//! the request outcome alone, and the timer is dropped on both paths.

use leptos::prelude::*;

use crate::config::MAX_UPLOAD_MB;
use crate::state::session::SessionState;
use crate::state::toast::ToastState;
use crate::util::format::format_bytes;

/// Interval and step of the simulated progress walk.
#[cfg(feature = "csr")]
const PROGRESS_TICK_MS: u32 = 300;
#[cfg(feature = "csr")]
const PROGRESS_STEP: u32 = 5;

#[component]
pub fn FileUpload(on_uploaded: Callback<String>) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    #[cfg(feature = "csr")]
    let storage = expect_context::<std::sync::Arc<crate::net::storage::StorageClient>>();

    let selected = RwSignal::new(None::<(String, u64)>);
    let uploading = RwSignal::new(false);
    let progress = RwSignal::new(0_u32);
    let error = RwSignal::new(None::<String>);

    // Browser file handle; never leaves this component.
    #[cfg(feature = "csr")]
    let file_slot = StoredValue::new_local(None::<web_sys::File>);

    let on_file_change = move |ev: leptos::ev::Event| {
        error.set(None);
        #[cfg(feature = "csr")]
        {
            let input: web_sys::HtmlInputElement = event_target(&ev);
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            let source = crate::net::storage::UploadSource::from_file(file.clone());
            if source.size > crate::config::max_upload_bytes() {
                error.set(Some(format!("File size exceeds {MAX_UPLOAD_MB}MB limit")));
                return;
            }
            selected.set(Some((source.name.clone(), source.size)));
            file_slot.set_value(Some(file));
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = ev;
        }
    };

    let on_cancel = move |_| {
        selected.set(None);
        progress.set(0);
        error.set(None);
        #[cfg(feature = "csr")]
        file_slot.set_value(None);
    };

    let on_upload = move |_| {
        #[cfg(feature = "csr")]
        {
            let state = session.get_untracked();
            let (Some(user), Some(file)) = (state.user(), file_slot.get_value()) else {
                error.set(Some("Please login and select a file first".to_owned()));
                return;
            };
            let user_id = user.id.clone();
            let storage = storage.clone();

            leptos::task::spawn_local(async move {
                use crate::state::toast::{ToastKind, push_toast};

                uploading.set(true);
                progress.set(0);

                let ticker = gloo_timers::callback::Interval::new(PROGRESS_TICK_MS, move || {
                    progress.update(|p| {
                        if *p < 90 {
                            *p += PROGRESS_STEP;
                        }
                    });
                });

                let source = crate::net::storage::UploadSource::from_file(file);
                let result = crate::state::documents::upload_document(
                    &storage,
                    &user_id,
                    &source,
                    crate::util::time::now_ms(),
                )
                .await;

                drop(ticker);
                progress.set(100);

                match result {
                    Ok(path) => {
                        push_toast(toasts, ToastKind::Success, "Upload successful", "Your document has been uploaded");
                        on_uploaded.run(path);
                        gloo_timers::future::TimeoutFuture::new(1_000).await;
                        selected.set(None);
                        progress.set(0);
                        file_slot.set_value(None);
                    }
                    Err(err) => {
                        log::error!("document upload failed: {err}");
                        error.set(Some(err.to_string()));
                        push_toast(toasts, ToastKind::Error, "Upload failed", &err.to_string());
                    }
                }
                uploading.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&toasts, &on_uploaded);
        }
    };

    view! {
        <Show
            when=move || session.get().is_authenticated()
            fallback=|| view! {
                <div class="file-upload file-upload--locked">
                    <p>"Please log in to upload verification documents"</p>
                </div>
            }
        >
            <div class="file-upload">
                <Show
                    when=move || selected.get().is_some()
                    fallback=move || view! {
                        <label class="file-upload__drop">
                            <input
                                type="file"
                                class="file-upload__input"
                                accept=".pdf,.doc,.docx,.jpg,.jpeg,.png,.webp"
                                on:change=on_file_change
                            />
                            <p class="file-upload__cta">"Click to select a file"</p>
                            <p class="file-upload__hint">{format!("Max size: {MAX_UPLOAD_MB}MB")}</p>
                        </label>
                    }
                >
                    <div class="file-upload__staged">
                        <div class="file-upload__file">
                            <p class="file-upload__name">
                                {move || selected.get().map(|(name, _)| name).unwrap_or_default()}
                            </p>
                            <p class="file-upload__size">
                                {move || selected.get().map(|(_, size)| format_bytes(size)).unwrap_or_default()}
                            </p>
                        </div>

                        <Show when=move || uploading.get()>
                            <div class="file-upload__progress">
                                <div class="progress-track">
                                    <div class="progress-fill" style:width=move || format!("{}%", progress.get())></div>
                                </div>
                                <span class="file-upload__percent">{move || format!("{}%", progress.get())}</span>
                            </div>
                        </Show>

                        <div class="file-upload__actions">
                            <button class="btn" disabled=move || uploading.get() on:click=on_cancel>
                                "Cancel"
                            </button>
                            <button class="btn btn--primary" disabled=move || uploading.get() on:click=on_upload.clone()>
                                {move || if uploading.get() { "Uploading..." } else { "Upload Document" }}
                            </button>
                        </div>
                    </div>
                </Show>

                <Show when=move || error.get().is_some()>
                    <p class="file-upload__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
            </div>
        </Show>
    }
}
