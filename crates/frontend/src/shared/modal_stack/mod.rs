//! Stack of modal dialogs rendered at the application root.
//!
//! Dialogs (delivery assignment, COD collection, product assignment) push a
//! builder; `ModalHost` renders the stack and Escape closes the topmost one.

use crate::shared::modal_frame::{ModalFrame, BASE_Z_INDEX};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::sync::Arc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;

type ModalBuilder = Arc<dyn Fn(ModalHandle) -> AnyView + Send + Sync>;

#[derive(Clone)]
struct ModalEntry {
    id: u64,
    title: String,
    width: Option<&'static str>,
    builder: ModalBuilder,
}

/// Lets a dialog close itself from its own event handlers.
#[derive(Clone, Copy)]
pub struct ModalHandle {
    id: u64,
    svc: ModalStackService,
}

impl ModalHandle {
    pub fn close(&self) {
        self.svc.close_deferred(self.id);
    }
}

#[derive(Clone, Copy)]
pub struct ModalStackService {
    stack: RwSignal<Vec<ModalEntry>>,
    next_id: RwSignal<u64>,
}

impl ModalStackService {
    pub fn new() -> Self {
        Self {
            stack: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(1),
        }
    }

    pub fn is_open(&self) -> bool {
        !self.stack.with(|s| s.is_empty())
    }

    /// Open a dialog titled `title`; `builder` receives the handle that closes it.
    pub fn push<F>(&self, title: impl Into<String>, builder: F) -> ModalHandle
    where
        F: Fn(ModalHandle) -> AnyView + Send + Sync + 'static,
    {
        self.push_sized(title, None, builder)
    }

    pub fn push_sized<F>(
        &self,
        title: impl Into<String>,
        width: Option<&'static str>,
        builder: F,
    ) -> ModalHandle
    where
        F: Fn(ModalHandle) -> AnyView + Send + Sync + 'static,
    {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);
        let entry = ModalEntry {
            id,
            title: title.into(),
            width,
            builder: Arc::new(builder),
        };
        self.stack.update(|s| s.push(entry));
        ModalHandle { id, svc: *self }
    }

    pub fn close(&self, id: u64) {
        self.stack.update(|s| s.retain(|e| e.id != id));
    }

    /// Removal waits one tick so the click that triggered it finishes dispatching.
    pub fn close_deferred(&self, id: u64) {
        let svc = *self;
        spawn_local(async move {
            TimeoutFuture::new(0).await;
            svc.close(id);
        });
    }

    pub fn pop_deferred(&self) {
        let svc = *self;
        spawn_local(async move {
            TimeoutFuture::new(0).await;
            svc.stack.update(|s| {
                s.pop();
            });
        });
    }
}

impl Default for ModalStackService {
    fn default() -> Self {
        Self::new()
    }
}

/// Later dialogs stack above earlier ones.
fn layer_z_index(idx: usize) -> i32 {
    BASE_Z_INDEX + idx as i32
}

pub fn use_modals() -> ModalStackService {
    use_context::<ModalStackService>()
        .expect("ModalStackService not provided in context (provide it in app root)")
}

#[component]
pub fn ModalHost() -> impl IntoView {
    let svc = use_modals();

    Effect::new(move |_| {
        let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
            if let Some(keyboard_event) = event.dyn_ref::<KeyboardEvent>() {
                if keyboard_event.key() == "Escape" && svc.is_open() {
                    svc.pop_deferred();
                }
            }
        }) as Box<dyn FnMut(_)>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            // host lives as long as the app
            closure.forget();
        }
    });

    view! {
        <Show when=move || svc.is_open()>
            <For
                each={move || svc.stack.get().into_iter().enumerate().collect::<Vec<_>>()}
                key=|(_, entry)| entry.id
                children=move |(idx, entry)| {
                    let handle = ModalHandle { id: entry.id, svc };
                    let on_close = Callback::new(move |_| handle.close());
                    let content = (entry.builder)(handle);
                    view! {
                        <ModalFrame
                            title=entry.title.clone()
                            z_index=layer_z_index(idx)
                            width=entry.width
                            on_close=on_close
                        >
                            {content}
                        </ModalFrame>
                    }
                }
            />
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_z_index_grows_with_depth() {
        assert_eq!(layer_z_index(0), BASE_Z_INDEX);
        assert_eq!(layer_z_index(2), BASE_Z_INDEX + 2);
    }
}
