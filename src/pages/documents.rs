//! Verification documents screen: list, upload, download, and delete
//! per-user objects in the storage collaborator.

use leptos::prelude::*;

use crate::components::file_upload::FileUpload;
use crate::components::header::Header;
use crate::state::documents::{DocumentRecord, DocumentsState};
use crate::state::session::SessionState;
use crate::state::toast::ToastState;
use crate::util::format::{format_bytes, format_date};

#[component]
pub fn DocumentsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    #[cfg(feature = "csr")]
    let storage = expect_context::<std::sync::Arc<crate::net::storage::StorageClient>>();

    let docs = RwSignal::new(DocumentsState::default());

    let refresh = {
        #[cfg(feature = "csr")]
        let storage = storage.clone();
        move || {
            #[cfg(feature = "csr")]
            {
                use crate::state::toast::{ToastKind, push_toast};

                let state = session.get_untracked();
                let Some(user) = state.user() else {
                    return;
                };
                let user_id = user.id.clone();
                let storage = storage.clone();
                leptos::task::spawn_local(async move {
                    docs.update(|d| d.loading = true);
                    match crate::state::documents::fetch_documents(&storage, &user_id).await {
                        Ok(files) => docs.update(|d| d.set_files(files)),
                        Err(error) => {
                            log::error!("failed to list documents: {error}");
                            push_toast(toasts, ToastKind::Error, "Failed to load documents", &error.to_string());
                        }
                    }
                    docs.update(|d| d.loading = false);
                });
            }
        }
    };

    // Fetch once authentication resolves, and again after each sign-in.
    {
        let refresh = refresh.clone();
        Effect::new(move || {
            if session.get().is_authenticated() {
                refresh();
            }
        });
    }

    let on_uploaded = {
        let refresh = refresh.clone();
        Callback::new(move |_path: String| refresh())
    };

    let on_download = {
        #[cfg(feature = "csr")]
        let storage = storage.clone();
        move |record: DocumentRecord| {
            #[cfg(feature = "csr")]
            {
                use crate::state::toast::{ToastKind, push_toast};

                let storage = storage.clone();
                leptos::task::spawn_local(async move {
                    let outcome = match crate::state::documents::download_document(&storage, &record.path).await {
                        Ok(bytes) => crate::util::download::save_bytes(&record.name, &bytes),
                        Err(error) => Err(error.to_string()),
                    };
                    if let Err(message) = outcome {
                        log::error!("document download failed: {message}");
                        push_toast(toasts, ToastKind::Error, "Download failed", &message);
                    }
                });
            }
            #[cfg(not(feature = "csr"))]
            {
                let _ = record;
            }
        }
    };

    let on_confirm_delete = {
        #[cfg(feature = "csr")]
        let storage = storage.clone();
        move |_| {
            #[cfg(feature = "csr")]
            {
                use crate::state::toast::{ToastKind, push_toast};

                let Some(record) = docs.get_untracked().pending_delete else {
                    return;
                };
                let storage = storage.clone();
                leptos::task::spawn_local(async move {
                    match crate::state::documents::delete_document(&storage, &record.path).await {
                        Ok(()) => {
                            docs.update(|d| {
                                d.remove_by_id(&record.id);
                            });
                            push_toast(toasts, ToastKind::Success, "File deleted", "The document has been successfully deleted");
                        }
                        Err(error) => {
                            log::error!("document delete failed: {error}");
                            push_toast(toasts, ToastKind::Error, "Delete failed", &error.to_string());
                        }
                    }
                    docs.update(DocumentsState::clear_pending);
                });
            }
            #[cfg(not(feature = "csr"))]
            {
                let _ = toasts;
            }
        }
    };

    view! {
        <div class="page">
            <Header/>
            <main class="page__main">
                <section class="page__intro">
                    <div>
                        <h1>"Verification Documents"</h1>
                        <p class="page__subtitle">
                            "Upload and manage documents related to supplier verification"
                        </p>
                    </div>
                </section>

                <div class="documents-layout">
                    <section>
                        <h2 class="section-title">"Upload Document"</h2>
                        <div class="card">
                            <FileUpload on_uploaded=on_uploaded/>
                        </div>
                    </section>

                    <section class="documents-layout__list">
                        <div class="documents-layout__head">
                            <h2 class="section-title">"Your Documents"</h2>
                            <button
                                class="btn"
                                disabled=move || docs.get().loading
                                on:click={
                                    let refresh = refresh.clone();
                                    move |_| refresh()
                                }
                            >
                                "Refresh"
                            </button>
                        </div>

                        {move || {
                            let state = docs.get();
                            if state.loading {
                                view! {
                                    <div class="route-guard__pending">
                                        <div class="spinner" aria-label="Loading documents"></div>
                                    </div>
                                }
                                .into_any()
                            } else if state.files.is_empty() {
                                view! {
                                    <div class="card card--empty">
                                        <p>"No documents found. Upload your first document to get started."</p>
                                    </div>
                                }
                                .into_any()
                            } else {
                                view! {
                                    <ul class="document-list">
                                        <For
                                            each=move || docs.get().files
                                            key=|record| record.id.clone()
                                            children={
                                                let on_download = on_download.clone();
                                                move |record: DocumentRecord| {
                                                    let download_record = record.clone();
                                                    let select_record = record.clone();
                                                    let on_download = on_download.clone();
                                                    view! {
                                                        <li class="document-list__item">
                                                            <div class="document-list__info">
                                                                <p class="document-list__name">{record.name.clone()}</p>
                                                                <p class="document-list__meta">
                                                                    {format_bytes(record.size)}
                                                                    " · Uploaded: "
                                                                    {format_date(&record.created_at)}
                                                                </p>
                                                            </div>
                                                            <div class="document-list__actions">
                                                                <button
                                                                    class="btn"
                                                                    title="Download"
                                                                    on:click=move |_| on_download(download_record.clone())
                                                                >
                                                                    "Download"
                                                                </button>
                                                                <button
                                                                    class="btn btn--danger"
                                                                    title="Delete"
                                                                    on:click=move |_| {
                                                                        docs.update(|d| d.select_for_delete(select_record.clone()));
                                                                    }
                                                                >
                                                                    "Delete"
                                                                </button>
                                                            </div>
                                                        </li>
                                                    }
                                                }
                                            }
                                        />
                                    </ul>
                                }
                                .into_any()
                            }
                        }}
                    </section>
                </div>
            </main>

            <Show when=move || docs.get().pending_delete.is_some()>
                <div class="dialog-backdrop" on:click=move |_| docs.update(DocumentsState::clear_pending)>
                    <div class="dialog" on:click=|ev| ev.stop_propagation()>
                        <h2>"Delete Document"</h2>
                        <p>"Are you sure you want to delete this document? This action cannot be undone."</p>
                        <p class="dialog__target">
                            {move || docs.get().pending_delete.map(|r| r.name).unwrap_or_default()}
                        </p>
                        <div class="dialog__actions">
                            <button class="btn" on:click=move |_| docs.update(DocumentsState::clear_pending)>
                                "Cancel"
                            </button>
                            <button class="btn btn--danger" on:click=on_confirm_delete.clone()>
                                "Delete"
                            </button>
                        </div>
                    </div>
                </div>
            </Show>
        </div>
    }
}
