use yew::prelude::*;
use yew_hooks::prelude::*;
use web_sys::MouseEvent;

/// Ring that follows the pointer. Hidden until the first mouse move so it
/// never sits in the corner on touch devices.
#[function_component(CustomCursor)]
pub fn custom_cursor() -> Html {
    let position = use_state(|| None::<(i32, i32)>);

    {
        let position = position.clone();
        use_event_with_window("mousemove", move |e: MouseEvent| {
            position.set(Some((e.client_x(), e.client_y())));
        });
    }

    let style = match *position {
        Some((x, y)) => format!("left: {}px; top: {}px;", x, y),
        None => "display: none;".to_string(),
    };

    html! {
        <div class="custom-cursor" style={style}></div>
    }
}
