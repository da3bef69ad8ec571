use yew::prelude::*;
use stylist::css;
use stylist::yew::Global;

/// Page-wide stylesheet: dark theme, entrance and reveal transitions,
/// cursor, modal and mobile menu.
#[function_component(GlobalStyles)]
pub fn global_styles() -> Html {
    html! {
        <Global css={css!(r#"
            body {
                margin: 0;
                background: #000;
                color: #fff;
                font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
            }

            .portfolio-page {
                min-height: 100vh;
                position: relative;
                cursor: none;
            }

            .portfolio-page.modal-open .custom-cursor {
                z-index: 60;
            }

            .custom-cursor {
                position: fixed;
                width: 2rem;
                height: 2rem;
                border: 2px solid #fff;
                border-radius: 50%;
                pointer-events: none;
                z-index: 50;
                transform: translate(-50%, -50%);
                transition: transform 0.1s ease-out;
            }

            .scroll-line {
                position: fixed;
                left: 0;
                top: 0;
                width: 4px;
                background: rgba(255, 255, 255, 0.3);
                box-shadow: 0 0 10px #fff, 0 0 20px #fff;
                z-index: 50;
            }

            .site-header {
                position: sticky;
                top: 0;
                z-index: 40;
                background: rgba(0, 0, 0, 0.9);
                border-bottom: 1px solid rgba(255, 255, 255, 0.1);
                transform: translateY(-100px);
                transition: transform 0.5s ease;
            }

            .site-header.entered {
                transform: translateY(0);
            }

            .header-content {
                display: flex;
                height: 5rem;
                align-items: center;
                justify-content: space-between;
                padding: 0 6%;
            }

            .header-logo {
                font-size: 1.25rem;
                font-weight: 700;
                color: #fff;
                text-decoration: none;
            }

            .header-nav {
                display: flex;
                gap: 1.5rem;
            }

            .nav-link, .mobile-nav-link, .burger-menu, .mobile-menu-close {
                background: none;
                border: none;
                color: rgba(255, 255, 255, 0.8);
                cursor: none;
            }

            .mobile-nav-link {
                font-size: 1.5rem;
            }

            .burger-menu {
                display: none;
                flex-direction: column;
                gap: 4px;
            }

            .burger-menu span {
                display: block;
                width: 24px;
                height: 2px;
                background: #fff;
            }

            .mobile-menu {
                position: fixed;
                inset: 0;
                z-index: 50;
                background: rgba(0, 0, 0, 0.95);
            }

            .mobile-menu-links {
                display: flex;
                flex-direction: column;
                align-items: center;
                justify-content: center;
                height: 100%;
                gap: 2rem;
            }

            .mobile-menu-close {
                position: absolute;
                top: 1rem;
                right: 1rem;
                font-size: 1.5rem;
            }

            .hero {
                position: relative;
                min-height: 100vh;
                display: flex;
                align-items: center;
                opacity: 0;
                transform: translateY(50px);
                transition: opacity 0.5s ease, transform 0.5s ease;
            }

            .hero.entered {
                opacity: 1;
                transform: translateY(0);
            }

            .hero-grid {
                position: absolute;
                inset: 0;
                background: repeating-linear-gradient(to right, rgba(255, 255, 255, 0.1) 0px, rgba(255, 255, 255, 0.1) 1px, transparent 1px, transparent 30px);
                background-size: 30px 30px;
            }

            .hero-content {
                position: relative;
                max-width: 500px;
                padding: 0 6%;
            }

            .reveal {
                opacity: 0;
                transform: translateY(50px);
                transition: opacity 0.5s ease 0.3s, transform 0.5s ease 0.3s;
            }

            .reveal.card {
                transform: translateY(20px);
            }

            .reveal.visible {
                opacity: 1;
                transform: translateY(0);
            }

            .section {
                padding: 6rem 6%;
            }

            .section-alt {
                background: rgba(255, 255, 255, 0.05);
            }

            .card-grid {
                display: grid;
                gap: 2rem;
                grid-template-columns: repeat(auto-fill, minmax(280px, 1fr));
            }

            .card {
                border: 1px solid rgba(255, 255, 255, 0.1);
                border-radius: 0.5rem;
                background: rgba(255, 255, 255, 0.05);
                overflow: hidden;
            }

            .project-card:hover {
                transform: scale(1.05);
            }

            .project-card img {
                width: 100%;
                height: 16rem;
                object-fit: cover;
            }

            .card-body {
                padding: 1.5rem;
            }

            .muted {
                color: rgba(255, 255, 255, 0.7);
            }

            .button {
                display: inline-block;
                padding: 0.5rem 1rem;
                border: 1px solid #fff;
                border-radius: 0.25rem;
                text-decoration: none;
                cursor: none;
            }

            .button-primary {
                background: #fff;
                color: #000;
            }

            .button-outline {
                background: #000;
                color: #fff;
            }

            .modal-backdrop {
                position: fixed;
                inset: 0;
                z-index: 50;
                display: flex;
                align-items: center;
                justify-content: center;
                background: rgba(0, 0, 0, 0.5);
                padding: 1rem;
            }

            .modal {
                background: #000;
                border: 1px solid rgba(255, 255, 255, 0.1);
                border-radius: 0.5rem;
                padding: 2rem;
                max-width: 42rem;
                width: 100%;
                max-height: 90vh;
                overflow-y: auto;
            }

            .modal-actions {
                display: flex;
                justify-content: space-between;
                gap: 1rem;
            }

            .form-input {
                display: block;
                width: 100%;
                margin-bottom: 1.5rem;
                padding: 0.75rem;
                background: rgba(255, 255, 255, 0.05);
                border: 1px solid rgba(255, 255, 255, 0.1);
                color: #fff;
            }

            .form-textarea {
                min-height: 150px;
            }

            .site-footer {
                border-top: 1px solid rgba(255, 255, 255, 0.1);
                padding: 2rem 6%;
            }

            @media (max-width: 768px) {
                .custom-cursor {
                    display: none;
                }
                .header-nav {
                    display: none;
                }
                .burger-menu {
                    display: flex;
                }
            }
        "#)} />
    }
}
