use yew::prelude::*;
use web_sys::MouseEvent;

use crate::portfolio::Project;

#[derive(Properties, PartialEq)]
pub struct ProjectModalProps {
    pub project: &'static Project,
    pub on_close: Callback<()>,
}

#[function_component(ProjectModal)]
pub fn project_modal(props: &ProjectModalProps) -> Html {
    let project = props.project;

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_close.emit(());
        })
    };

    html! {
        <div class="modal-backdrop">
            <div class="modal" role="dialog" aria-modal="true" aria-labelledby="project-modal-title">
                <h3 id="project-modal-title">{project.title}</h3>
                <p class="modal-description">{project.description}</p>
                <div class="modal-actions">
                    <a
                        href={project.link}
                        target="_blank"
                        rel="noopener noreferrer"
                        class="button button-primary"
                    >
                        {"View Project"}
                    </a>
                    <button class="button button-outline" onclick={close}>
                        {"Close"}
                    </button>
                </div>
            </div>
        </div>
    }
}
