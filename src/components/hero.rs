use yew::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::content::HeroContent;

pub fn parallax_style(offset: f64) -> String {
    format!("transform: translateY({}px);", offset)
}

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub content: HeroContent,
    /// Translation of the background layer, already scaled.
    pub parallax: f64,
    pub on_scroll_hint: Callback<()>,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let HeroContent { background, title, highlight, tagline, scroll_label } = &props.content;

    let onclick = {
        let on_scroll_hint = props.on_scroll_hint.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_scroll_hint.emit(());
        })
    };

    html! {
        <section class="hero">
            <div
                class="hero__background"
                style={format!("background-image: url('{}');", background)}
            />
            <div class="hero__dim" />
            <div class="hero__parallax" style={parallax_style(props.parallax)}>
                <div class="hero__gradient" />
                <div class="hero__fade" />
                <div class="hero__glow hero__glow--blue" />
                <div class="hero__glow hero__glow--purple" />
            </div>

            <div class="hero__content">
                <h1 class="hero__title">
                    { title.clone() }
                    <span class="hero__highlight">{ highlight.clone() }</span>
                </h1>
                <p class="hero__tagline">{ tagline.clone() }</p>
            </div>

            <div class="hero__scroll">
                <button class="hero__scroll-button" {onclick}>
                    <span class="hero__scroll-label">{ scroll_label.clone() }</span>
                    <Icon kind={IconKind::ChevronDown} class={classes!("hero__scroll-icon")} />
                </button>
            </div>

            <style>
                {r#"
                .hero {
                    position: relative;
                    height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    overflow: hidden;
                }
                .hero__background, .hero__dim, .hero__parallax,
                .hero__gradient, .hero__fade {
                    position: absolute;
                    inset: 0;
                }
                .hero__background {
                    background-size: cover;
                    background-position: center;
                }
                .hero__dim {
                    background: rgba(0, 0, 0, 0.6);
                    z-index: 10;
                }
                .hero__parallax {
                    will-change: transform;
                }
                .hero__gradient {
                    background: linear-gradient(to bottom right,
                        rgba(37, 99, 235, 0.2), rgba(88, 28, 135, 0.3), #09090b);
                }
                .hero__fade {
                    background: linear-gradient(to top, #09090b, transparent, transparent);
                }
                .hero__glow {
                    position: absolute;
                    border-radius: 9999px;
                    filter: blur(64px);
                    animation: pulse 2s cubic-bezier(0.4, 0, 0.6, 1) infinite;
                }
                .hero__glow--blue {
                    top: 25%;
                    left: 25%;
                    width: 12rem;
                    height: 12rem;
                    background: rgba(59, 130, 246, 0.1);
                }
                .hero__glow--purple {
                    bottom: 25%;
                    right: 25%;
                    width: 10rem;
                    height: 10rem;
                    background: rgba(168, 85, 247, 0.1);
                    animation-delay: 1s;
                }
                .hero__content {
                    position: relative;
                    z-index: 10;
                    text-align: center;
                    max-width: 56rem;
                    margin: 0 auto;
                    padding: 0 1rem;
                }
                .hero__title {
                    font-size: 2.25rem;
                    font-weight: 300;
                    letter-spacing: -0.05em;
                    line-height: 1;
                    margin: 0 0 1.5rem;
                }
                .hero__highlight {
                    display: block;
                    color: #3b82f6;
                }
                .hero__tagline {
                    font-size: 1rem;
                    color: #a1a1aa;
                    font-weight: 300;
                    letter-spacing: 0.025em;
                    max-width: 42rem;
                    margin: 0 auto;
                    padding: 0 1rem;
                }
                .hero__scroll {
                    position: absolute;
                    bottom: 2rem;
                    left: 50%;
                    transform: translateX(-50%);
                    z-index: 10;
                    animation: bounce 1s infinite;
                }
                .hero__scroll-button {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    background: none;
                    border: none;
                    cursor: pointer;
                    color: #a1a1aa;
                    transition: color 0.3s ease;
                }
                .hero__scroll-button:hover {
                    color: #ffffff;
                }
                .hero__scroll-label {
                    font-size: 0.75rem;
                    font-weight: 300;
                    margin-bottom: 0.5rem;
                    letter-spacing: 0.1em;
                    text-transform: uppercase;
                }
                .hero__scroll-icon {
                    transition: transform 0.3s ease;
                }
                .hero__scroll-button:hover .hero__scroll-icon {
                    transform: translateY(0.25rem);
                }
                @keyframes pulse {
                    50% { opacity: 0.5; }
                }
                @keyframes bounce {
                    0%, 100% {
                        transform: translate(-50%, -25%);
                        animation-timing-function: cubic-bezier(0.8, 0, 1, 1);
                    }
                    50% {
                        transform: translate(-50%, 0);
                        animation-timing-function: cubic-bezier(0, 0, 0.2, 1);
                    }
                }
                @media (min-width: 640px) {
                    .hero__title { font-size: 3.75rem; margin-bottom: 2rem; }
                    .hero__tagline { font-size: 1.125rem; }
                    .hero__scroll { bottom: 3rem; }
                    .hero__scroll-label { font-size: 0.875rem; }
                    .hero__glow--blue { width: 18rem; height: 18rem; }
                    .hero__glow--purple { width: 15rem; height: 15rem; }
                }
                @media (min-width: 768px) {
                    .hero__title { font-size: 4.5rem; }
                    .hero__tagline { font-size: 1.25rem; }
                }
                @media (min-width: 1024px) {
                    .hero__title { font-size: 6rem; }
                    .hero__tagline { font-size: 1.5rem; }
                    .hero__glow--blue { width: 24rem; height: 24rem; }
                    .hero__glow--purple { width: 20rem; height: 20rem; }
                }
                @media (min-width: 1280px) {
                    .hero__title { font-size: 8rem; }
                }
                "#}
            </style>
        </section>
    }
}
