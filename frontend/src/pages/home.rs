use yew::prelude::*;
use log::debug;
use chrono::{Datelike, Local};
use web_sys::MouseEvent;

use crate::components::{
    contact::ContactForm,
    cursor::CustomCursor,
    header::{scroll_to_section, Header},
    project_modal::ProjectModal,
    reveal::{use_entrance, Reveal},
    scroll_line::ScrollLine,
};
use crate::config;
use crate::content::{
    about_facts, service_blurb, ABOUT_PARAGRAPHS, CONTACT_BLURB, HERO_SUBTITLE, HERO_TITLE,
    OWNER_NAME, PROJECTS, SERVICES, SOCIAL_LINKS, TESTIMONIALS, TOOLBOX,
};
use crate::nav::{MenuState, Section};
use crate::portfolio::{group_by_category, Category, Project, Selection};

fn render_hero(entered: bool, on_navigate: &Callback<Section>) -> Html {
    let to_section = |section: Section| {
        let on_navigate = on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_navigate.emit(section);
        })
    };

    html! {
        <section class={classes!("hero", entered.then_some("entered"))}>
            <div class="hero-grid"></div>
            <div class="hero-content">
                <h1>{HERO_TITLE}</h1>
                <p class="muted">{HERO_SUBTITLE}</p>
                <div class="hero-cta-group">
                    <button class="button button-primary" onclick={to_section(Section::Portfolio)}>
                        {"My Works"}
                    </button>
                    <button class="button button-outline" onclick={to_section(Section::Contact)}>
                        {"Let's Talk!"}
                    </button>
                </div>
            </div>
        </section>
    }
}

fn render_about() -> Html {
    html! {
        <Reveal id={Section::About.id()} class={classes!("section", "section-alt")}>
            <h2>{"About Me"}</h2>
            <div class="about-grid">
                <div>
                    { for ABOUT_PARAGRAPHS.iter().map(|paragraph| html! { <p class="muted">{*paragraph}</p> }) }
                </div>
                <ul class="about-facts">
                    {
                        for about_facts().into_iter().map(|fact| html! {
                            <li key={fact.label}>
                                <span class="about-icon">{fact.icon}</span>
                                {format!("{}: {}", fact.label, fact.value)}
                            </li>
                        })
                    }
                </ul>
            </div>
        </Reveal>
    }
}

fn render_project_card(project: &'static Project, on_select: &Callback<&'static Project>) -> Html {
    let onclick = {
        let on_select = on_select.clone();
        Callback::from(move |_: MouseEvent| on_select.emit(project))
    };

    html! {
        <Reveal key={project.id} class={classes!("card", "project-card")} onclick={onclick}>
            <img src={project.image} alt={project.title} loading="lazy" />
            <div class="card-body">
                <h4>{project.title}</h4>
                <p class="muted">{project.description}</p>
            </div>
        </Reveal>
    }
}

fn render_portfolio(on_select: &Callback<&'static Project>) -> Html {
    let groups = group_by_category(&PROJECTS, &Category::ALL);

    html! {
        <Reveal id={Section::Portfolio.id()} class={classes!("section")}>
            <h2>{"My Portfolio"}</h2>
            {
                for groups.into_iter().map(|group| html! {
                    <div key={group.category.label()} class="category-block">
                        <h3>{group.category.label()}</h3>
                        <div class="card-grid">
                            { for group.projects.into_iter().map(|project| render_project_card(project, on_select)) }
                        </div>
                    </div>
                })
            }
        </Reveal>
    }
}

fn render_services() -> Html {
    html! {
        <Reveal id={Section::Services.id()} class={classes!("section", "section-alt")}>
            <h2>{"Services"}</h2>
            <div class="card-grid">
                {
                    for SERVICES.iter().map(|service| html! {
                        <Reveal key={*service} class={classes!("card", "card-body")}>
                            <h3>{*service}</h3>
                            <p class="muted">{service_blurb(service)}</p>
                        </Reveal>
                    })
                }
            </div>
        </Reveal>
    }
}

fn render_toolbox() -> Html {
    html! {
        <Reveal id={Section::Toolbox.id()} class={classes!("section")}>
            <h2>{"My Toolbox"}</h2>
            <div class="card-grid">
                {
                    for TOOLBOX.iter().map(|tool| html! {
                        <Reveal key={tool.name} class={classes!("card", "card-body", "tool")}>
                            <i class={tool.icon}></i>
                            <span>{tool.name}</span>
                        </Reveal>
                    })
                }
            </div>
        </Reveal>
    }
}

fn render_testimonials() -> Html {
    html! {
        <Reveal id={Section::Testimonials.id()} class={classes!("section", "section-alt")}>
            <h2>{"Testimonials"}</h2>
            <div class="card-grid">
                {
                    for TESTIMONIALS.iter().map(|testimonial| html! {
                        <Reveal key={testimonial.id} class={classes!("card", "card-body")}>
                            <div class="testimonial-author">
                                <img src={testimonial.avatar} alt={testimonial.name} width="50" height="50" />
                                <div>
                                    <h3>{testimonial.name}</h3>
                                    <p class="muted">{format!("{} at {}", testimonial.role, testimonial.company)}</p>
                                </div>
                            </div>
                            <p class="testimonial-content">{testimonial.content}</p>
                        </Reveal>
                    })
                }
            </div>
        </Reveal>
    }
}

fn render_contact() -> Html {
    html! {
        <Reveal id={Section::Contact.id()} class={classes!("section")}>
            <h2>{"Contact Me"}</h2>
            <div class="contact-grid">
                <div>
                    <p class="muted">{CONTACT_BLURB}</p>
                    <div class="social-links">
                        {
                            for SOCIAL_LINKS.iter().map(|link| html! {
                                <a key={link.name} href={link.href} aria-label={link.name}>
                                    <i class={link.icon}></i>
                                </a>
                            })
                        }
                    </div>
                </div>
                <ContactForm />
            </div>
        </Reveal>
    }
}

// Current year from the visitor's clock, not a fixed one.
fn copyright_line(year: i32) -> String {
    format!("© {} {}. All rights reserved.", year, OWNER_NAME)
}

fn render_footer() -> Html {
    html! {
        <footer class="site-footer">
            <p class="muted">{copyright_line(Local::now().year())}</p>
        </footer>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    let selection = use_state(Selection::<'static>::default);
    let menu = use_state(MenuState::default);
    let hero_entered = use_entrance(config::HERO_ENTRANCE_DELAY_MS);

    let on_select = {
        let selection = selection.clone();
        Callback::from(move |project: &'static Project| {
            debug!("Opening project {} ({})", project.id, project.title);
            let mut next = *selection;
            next.select(project);
            selection.set(next);
        })
    };

    let on_close_project = {
        let selection = selection.clone();
        Callback::from(move |_| {
            let mut next = *selection;
            next.clear();
            selection.set(next);
        })
    };

    let on_toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |_| {
            let mut next = *menu;
            next.toggle();
            debug!("Mobile menu open: {}", next.is_open());
            menu.set(next);
        })
    };

    let on_close_menu = {
        let menu = menu.clone();
        Callback::from(move |_| {
            let mut next = *menu;
            next.close();
            menu.set(next);
        })
    };

    let on_navigate = {
        let menu = menu.clone();
        Callback::from(move |section: Section| {
            scroll_to_section(section);
            let mut next = *menu;
            next.close();
            menu.set(next);
        })
    };

    html! {
        <div class={classes!("portfolio-page", selection.is_open().then_some("modal-open"))}>
            <CustomCursor />
            <ScrollLine />
            <Header
                menu_open={menu.is_open()}
                on_toggle_menu={on_toggle_menu}
                on_close_menu={on_close_menu}
                on_navigate={on_navigate.clone()}
            />
            { render_hero(hero_entered, &on_navigate) }
            { render_about() }
            { render_portfolio(&on_select) }
            {
                match selection.selected() {
                    Some(project) => html! {
                        <ProjectModal project={project} on_close={on_close_project} />
                    },
                    None => html! {},
                }
            }
            { render_services() }
            { render_toolbox() }
            { render_testimonials() }
            { render_contact() }
            { render_footer() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_line_uses_given_year() {
        assert_eq!(copyright_line(2023), "© 2023 Berjil Jacob. All rights reserved.");
        assert_eq!(copyright_line(2026), "© 2026 Berjil Jacob. All rights reserved.");
    }
}
