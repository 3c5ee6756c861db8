use leptos::ev;
use leptos::prelude::*;

pub const BASE_Z_INDEX: i32 = 1000;
const DEFAULT_WIDTH: &str = "min(560px, 95vw)";

fn surface_style(width: Option<&str>) -> String {
    format!("position: relative; width: {};", width.unwrap_or(DEFAULT_WIDTH))
}

/// Overlay plus a titled dialog surface.
///
/// Closes on overlay click only when both press and release happened on the
/// overlay, so a text selection dragged outside the dialog keeps it open.
#[component]
pub fn ModalFrame(
    title: String,
    on_close: Callback<()>,
    #[prop(optional)] z_index: Option<i32>,
    /// CSS width of the dialog surface, e.g. `"min(720px, 95vw)"`.
    #[prop(optional_no_strip)]
    width: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let z_index = z_index.unwrap_or(BASE_Z_INDEX);
    let overlay_mouse_down = RwSignal::new(false);

    let is_direct = |ev: &ev::MouseEvent| match (ev.target(), ev.current_target()) {
        (Some(t), Some(ct)) => t == ct,
        _ => false,
    };

    view! {
        <div
            class="modal-overlay"
            style=format!("z-index: {z_index};")
            on:mousedown=move |ev| overlay_mouse_down.set(is_direct(&ev))
            on:click=move |ev| {
                let close = overlay_mouse_down.get_untracked() && is_direct(&ev);
                overlay_mouse_down.set(false);
                if close {
                    on_close.run(());
                }
            }
        >
            <div
                class="modal"
                style=surface_style(width)
                on:click=|ev: ev::MouseEvent| ev.stop_propagation()
            >
                <div class="modal__header">
                    <h3 class="modal__title">{title}</h3>
                    <button class="modal__close" title="Close" on:click=move |_| on_close.run(())>
                        "×"
                    </button>
                </div>
                <div class="modal__body">{children()}</div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surface_style_width() {
        assert_eq!(surface_style(None), "position: relative; width: min(560px, 95vw);");
        assert_eq!(
            surface_style(Some("min(720px, 95vw)")),
            "position: relative; width: min(720px, 95vw);"
        );
    }
}
