use yew::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::content::{WorkContent, WorkItem};
use crate::navigator::SectionId;

#[derive(Properties, PartialEq)]
struct WorkCardProps {
    item: WorkItem,
}

#[function_component(WorkCard)]
fn work_card(props: &WorkCardProps) -> Html {
    let WorkItem { title, description, image } = &props.item;

    html! {
        <div class="work-card">
            <div class="work-card__media">
                <div class="work-card__shade" />
                <img src={image.src.clone()} alt={image.alt.clone()} class="work-card__image" />
                <div class="work-card__arrow">
                    <Icon kind={IconKind::ArrowUpRight} />
                </div>
            </div>
            <h3 class="work-card__title">{ title.clone() }</h3>
            <p class="work-card__description">{ description.clone() }</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct WorkProps {
    pub content: WorkContent,
}

#[function_component(Work)]
pub fn work(props: &WorkProps) -> Html {
    let WorkContent { heading, subtitle, items } = &props.content;

    html! {
        <section id={SectionId::Work.anchor()} class="work">
            <div class="work__inner">
                <div class="work__header">
                    <h2 class="work__heading">{ heading.clone() }</h2>
                    <p class="work__subtitle">{ subtitle.clone() }</p>
                </div>
                <div class="work__grid">
                    { for items.iter().map(|item| html! { <WorkCard item={item.clone()} /> }) }
                </div>
            </div>
            <style>
                {r#"
                .work {
                    padding: 4rem 0;
                    background: rgba(24, 24, 27, 0.5);
                }
                .work__inner {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 1rem;
                }
                .work__header {
                    text-align: center;
                    margin-bottom: 3rem;
                }
                .work__heading {
                    font-size: 1.875rem;
                    font-weight: 300;
                    letter-spacing: -0.025em;
                    margin: 0 0 1rem;
                }
                .work__subtitle {
                    font-size: 1.125rem;
                    color: #a1a1aa;
                    font-weight: 300;
                    margin: 0;
                }
                .work__grid {
                    display: grid;
                    gap: 1.5rem;
                }
                .work-card {
                    cursor: pointer;
                }
                .work-card__media {
                    position: relative;
                    overflow: hidden;
                    border-radius: 1rem;
                    margin-bottom: 1rem;
                }
                .work-card__shade {
                    position: absolute;
                    inset: 0;
                    z-index: 10;
                    background: linear-gradient(to top, rgba(0, 0, 0, 0.5), transparent);
                    opacity: 0;
                    transition: opacity 0.5s ease;
                }
                .work-card__image {
                    display: block;
                    width: 100%;
                    height: 15rem;
                    object-fit: cover;
                    filter: grayscale(100%);
                    transition: all 0.5s ease;
                }
                .work-card__arrow {
                    position: absolute;
                    bottom: 1rem;
                    left: 1rem;
                    z-index: 20;
                    color: #ffffff;
                    opacity: 0;
                    transition: opacity 0.5s ease;
                }
                .work-card:hover .work-card__shade,
                .work-card:hover .work-card__arrow {
                    opacity: 1;
                }
                .work-card:hover .work-card__image {
                    filter: grayscale(0);
                    transform: scale(1.05);
                }
                .work-card__title {
                    font-size: 1.125rem;
                    font-weight: 500;
                    margin: 0 0 0.5rem;
                    transition: color 0.3s ease;
                }
                .work-card:hover .work-card__title {
                    color: #3b82f6;
                }
                .work-card__description {
                    font-size: 0.875rem;
                    color: #a1a1aa;
                    font-weight: 300;
                    line-height: 1.625;
                    margin: 0;
                }
                @media (min-width: 640px) {
                    .work { padding: 6rem 0; }
                    .work__inner { padding: 0 1.5rem; }
                    .work__header { margin-bottom: 4rem; }
                    .work__heading { font-size: 2.25rem; margin-bottom: 1.5rem; }
                    .work__subtitle { font-size: 1.25rem; }
                    .work__grid { grid-template-columns: repeat(2, 1fr); gap: 2rem; }
                    .work-card:last-child { grid-column: span 2; }
                    .work-card__image { height: 18rem; }
                    .work-card__title { font-size: 1.25rem; }
                    .work-card__description { font-size: 1rem; }
                }
                @media (min-width: 768px) {
                    .work__heading { font-size: 3rem; }
                }
                @media (min-width: 1024px) {
                    .work { padding: 8rem 0; }
                    .work__inner { padding: 0 2rem; }
                    .work__header { margin-bottom: 5rem; }
                    .work__grid { grid-template-columns: repeat(3, 1fr); }
                    .work-card:last-child { grid-column: span 1; }
                    .work-card__image { height: 20rem; }
                }
                "#}
            </style>
        </section>
    }
}
