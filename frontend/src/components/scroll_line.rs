use yew::prelude::*;
use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;

use crate::animation;

fn read_scroll_progress(window: &Window) -> f64 {
    let scroll_top = window.scroll_y().unwrap_or(0.0);
    let viewport_height = window
        .inner_height()
        .ok()
        .and_then(|height| height.as_f64())
        .unwrap_or(0.0);
    let scroll_height = window
        .document()
        .and_then(|document| document.document_element())
        .map(|element| element.scroll_height() as f64)
        .unwrap_or(0.0);

    animation::scroll_progress(scroll_top, scroll_height, viewport_height)
}

/// Window events after which the line is recomputed. Resizing changes the
/// scrollable height even when the offset stays put.
const PROGRESS_EVENTS: [&str; 2] = ["scroll", "resize"];

/// Glowing line on the left edge that grows as the page scrolls.
#[function_component(ScrollLine)]
pub fn scroll_line() -> Html {
    let progress = use_state(|| 0.0_f64);

    {
        let progress = progress.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();
                let listener = window.as_ref().map(|window| {
                    // Browsers may restore the offset on reload before any scroll event fires.
                    progress.set(read_scroll_progress(window));

                    let window_clone = window.clone();
                    let progress_callback = Closure::wrap(Box::new(move || {
                        progress.set(read_scroll_progress(&window_clone));
                    }) as Box<dyn FnMut()>);

                    for event in PROGRESS_EVENTS {
                        if window
                            .add_event_listener_with_callback(event, progress_callback.as_ref().unchecked_ref())
                            .is_err()
                        {
                            warn!("Failed to attach {} listener", event);
                        }
                    }
                    progress_callback
                });

                move || {
                    if let (Some(window), Some(progress_callback)) = (window, listener) {
                        for event in PROGRESS_EVENTS {
                            let _ = window.remove_event_listener_with_callback(
                                event,
                                progress_callback.as_ref().unchecked_ref(),
                            );
                        }
                    }
                }
            },
            (),
        );
    }

    let height = animation::scroll_line_height(*progress);

    html! {
        <div class="scroll-line" style={format!("height: {:.2}%;", height)}></div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recomputes_on_scroll_and_resize() {
        assert!(PROGRESS_EVENTS.contains(&"scroll"));
        assert!(PROGRESS_EVENTS.contains(&"resize"));
    }

    #[test]
    fn restored_offset_fills_the_line_without_scrolling() {
        let progress = animation::scroll_progress(1000.0, 3000.0, 1000.0);
        assert_eq!(animation::scroll_line_height(progress), 100.0);
    }

    #[test]
    fn taller_page_after_resize_shortens_the_line() {
        let before = animation::scroll_line_height(animation::scroll_progress(100.0, 2000.0, 1000.0));
        let after = animation::scroll_line_height(animation::scroll_progress(100.0, 5000.0, 1000.0));
        assert_eq!(before, 50.0);
        assert!(after < before);
    }
}
