use yew::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::content::{AboutContent, SocialLink};
use crate::navigator::SectionId;

fn social_link(link: &SocialLink) -> Html {
    html! {
        <a href={link.href.clone()} class="social-link">
            <Icon kind={link.icon} size={18} class={classes!("social-link__icon")} />
            <span class="social-link__label">{ link.label.clone() }</span>
            <Icon kind={IconKind::ArrowUpRight} size={14} class={classes!("social-link__arrow")} />
        </a>
    }
}

#[derive(Properties, PartialEq)]
pub struct AboutProps {
    pub content: AboutContent,
}

#[function_component(About)]
pub fn about(props: &AboutProps) -> Html {
    let AboutContent { heading, portrait, paragraphs, social } = &props.content;

    html! {
        <section id={SectionId::About.anchor()} class="about">
            <div class="about__grid">
                <div class="about__portrait">
                    <div class="portrait">
                        <div class="portrait__glow" />
                        <img
                            src={portrait.src.clone()}
                            alt={portrait.alt.clone()}
                            class="portrait__image"
                        />
                    </div>
                </div>

                <div class="about__bio">
                    <h2 class="about__heading">{ heading.clone() }</h2>
                    <div class="about__paragraphs">
                        { for paragraphs.iter().map(|p| html! { <p>{ p.clone() }</p> }) }
                    </div>
                    <div class="about__social">
                        { for social.iter().map(social_link) }
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .about {
                    padding: 4rem 0;
                }
                .about__grid {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 1rem;
                    display: grid;
                    gap: 3rem;
                    align-items: center;
                }
                .about__portrait { order: 2; }
                .about__bio { order: 1; }
                .portrait {
                    position: relative;
                }
                .portrait__glow {
                    position: absolute;
                    inset: -1rem;
                    background: linear-gradient(to right,
                        rgba(59, 130, 246, 0.2), rgba(168, 85, 247, 0.2));
                    border-radius: 1rem;
                    filter: blur(24px);
                    opacity: 0;
                    transition: opacity 0.5s ease;
                }
                .portrait:hover .portrait__glow {
                    opacity: 1;
                }
                .portrait__image {
                    position: relative;
                    display: block;
                    width: 100%;
                    max-width: 24rem;
                    margin: 0 auto;
                    border-radius: 1rem;
                    filter: grayscale(100%);
                    transition: all 0.5s ease;
                }
                .portrait__image:hover {
                    filter: grayscale(0);
                }
                .about__heading {
                    font-size: 1.875rem;
                    font-weight: 300;
                    letter-spacing: -0.025em;
                    margin: 0 0 1.5rem;
                }
                .about__paragraphs p {
                    font-size: 1rem;
                    color: #a1a1aa;
                    font-weight: 300;
                    line-height: 1.625;
                    margin: 0 0 1rem;
                }
                .about__social {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                    padding-top: 1.5rem;
                }
                .social-link {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    color: #a1a1aa;
                    text-decoration: none;
                    transition: color 0.3s ease;
                }
                .social-link:hover {
                    color: #3b82f6;
                }
                .social-link__label {
                    font-weight: 300;
                }
                .social-link__icon {
                    transition: transform 0.3s ease;
                }
                .social-link:hover .social-link__icon {
                    transform: translateY(-0.25rem);
                }
                .social-link__arrow {
                    opacity: 0;
                    transition: opacity 0.3s ease;
                }
                .social-link:hover .social-link__arrow {
                    opacity: 1;
                }
                @media (min-width: 640px) {
                    .about { padding: 6rem 0; }
                    .about__grid { padding: 0 1.5rem; }
                    .portrait__image { max-width: 28rem; }
                    .about__heading { font-size: 2.25rem; margin-bottom: 2rem; }
                    .about__paragraphs p { font-size: 1.125rem; margin-bottom: 1.5rem; }
                    .about__social { flex-direction: row; gap: 1.5rem; padding-top: 2rem; }
                }
                @media (min-width: 768px) {
                    .about__heading { font-size: 3rem; }
                }
                @media (min-width: 1024px) {
                    .about { padding: 8rem 0; }
                    .about__grid {
                        grid-template-columns: 1fr 1fr;
                        gap: 5rem;
                        padding: 0 2rem;
                    }
                    .about__portrait { order: 1; }
                    .about__bio { order: 2; }
                }
                "#}
            </style>
        </section>
    }
}
