use yew::prelude::*;
use log::debug;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};

/// Contact form. Inputs are kept in component state; submitting does not
/// send anything yet.
#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let message = use_state(String::new);

    let on_name = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
        })
    };

    let on_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let on_message = {
        let message = message.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            message.set(input.value());
        })
    };

    let on_submit = {
        let name = name.clone();
        let email = email.clone();
        let message = message.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            debug!(
                "Contact form submitted (name: {} chars, email: {} chars, message: {} chars), no backend wired",
                name.len(),
                email.len(),
                message.len()
            );
        })
    };

    html! {
        <form class="contact-form" onsubmit={on_submit}>
            <input
                class="form-input"
                placeholder="Name"
                value={(*name).clone()}
                oninput={on_name}
            />
            <input
                class="form-input"
                type="email"
                placeholder="Email"
                value={(*email).clone()}
                oninput={on_email}
            />
            <textarea
                class="form-input form-textarea"
                placeholder="Your message"
                value={(*message).clone()}
                oninput={on_message}
            />
            <button type="submit" class="button button-primary">{"Send Message"}</button>
        </form>
    }
}
