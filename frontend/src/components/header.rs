use yew::prelude::*;
use log::warn;
use web_sys::{MouseEvent, ScrollBehavior, ScrollIntoViewOptions};

use crate::components::reveal::use_entrance;
use crate::config;
use crate::content::OWNER_NAME;
use crate::nav::Section;

/// Smoothly scrolls the section with the matching id into view.
pub fn scroll_to_section(section: Section) {
    let element = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(section.id()));

    match element {
        Some(element) => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
        None => warn!("No element with id '{}' to scroll to", section.id()),
    }
}

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub menu_open: bool,
    pub on_toggle_menu: Callback<()>,
    pub on_close_menu: Callback<()>,
    pub on_navigate: Callback<Section>,
}

fn nav_buttons(on_navigate: &Callback<Section>, class: &'static str) -> Html {
    Section::ALL
        .iter()
        .map(|&section| {
            let on_navigate = on_navigate.clone();
            let onclick = Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                on_navigate.emit(section);
            });
            html! {
                <button key={section.id()} class={class} onclick={onclick}>
                    {section.label()}
                </button>
            }
        })
        .collect()
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let HeaderProps { menu_open, on_toggle_menu, on_close_menu, on_navigate } = props;
    let entered = use_entrance(config::HEADER_ENTRANCE_DELAY_MS);

    let toggle_menu = {
        let on_toggle_menu = on_toggle_menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle_menu.emit(());
        })
    };

    let close_menu = {
        let on_close_menu = on_close_menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_close_menu.emit(());
        })
    };

    html! {
        <>
            <header class={classes!("site-header", entered.then_some("entered"))}>
                <div class="header-content">
                    <a class="header-logo" href="/">
                        {OWNER_NAME}
                    </a>
                    <nav class="header-nav">
                        { nav_buttons(on_navigate, "nav-link") }
                    </nav>
                    <button class="burger-menu" aria-label="Open menu" onclick={toggle_menu}>
                        <span></span>
                        <span></span>
                        <span></span>
                    </button>
                </div>
            </header>
            {
                if *menu_open {
                    html! {
                        <div class="mobile-menu">
                            <div class="mobile-menu-links">
                                { nav_buttons(on_navigate, "mobile-nav-link") }
                            </div>
                            <button class="mobile-menu-close" aria-label="Close menu" onclick={close_menu}>
                                {"✕"}
                            </button>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </>
    }
}
