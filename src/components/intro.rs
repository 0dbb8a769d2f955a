use yew::prelude::*;

use crate::content::IntroContent;
use crate::navigator::SectionId;

#[derive(Properties, PartialEq)]
pub struct IntroProps {
    pub content: IntroContent,
}

#[function_component(Intro)]
pub fn intro(props: &IntroProps) -> Html {
    let IntroContent { statement, highlight, body } = &props.content;

    html! {
        <section id={SectionId::Intro.anchor()} class="intro">
            <div class="intro__inner">
                <h2 class="intro__statement">
                    { format!("{} ", statement) }
                    <span class="intro__highlight">{ highlight.clone() }</span>
                </h2>
                <p class="intro__body">{ body.clone() }</p>
            </div>
            <style>
                {r#"
                .intro {
                    padding: 4rem 0;
                    background: #000000;
                }
                .intro__inner {
                    max-width: 72rem;
                    margin: 0 auto;
                    padding: 0 1rem;
                    text-align: center;
                }
                .intro__statement {
                    font-size: 1.5rem;
                    font-weight: 300;
                    line-height: 1.25;
                    letter-spacing: -0.025em;
                    margin: 0;
                }
                .intro__highlight {
                    display: block;
                    color: #3b82f6;
                    margin-top: 0.5rem;
                }
                .intro__body {
                    font-size: 1rem;
                    color: #a1a1aa;
                    font-weight: 300;
                    line-height: 1.625;
                    max-width: 48rem;
                    margin: 2rem auto 0;
                    padding: 0 1rem;
                }
                @media (min-width: 640px) {
                    .intro { padding: 6rem 0; }
                    .intro__statement { font-size: 1.875rem; }
                    .intro__highlight { margin-top: 1rem; }
                    .intro__body { font-size: 1.125rem; margin-top: 3rem; }
                }
                @media (min-width: 768px) {
                    .intro__statement { font-size: 2.25rem; }
                    .intro__body { font-size: 1.25rem; }
                }
                @media (min-width: 1024px) {
                    .intro { padding: 8rem 0; }
                    .intro__statement { font-size: 3rem; }
                    .intro__body { font-size: 1.5rem; }
                }
                @media (min-width: 1280px) {
                    .intro__statement { font-size: 3.75rem; }
                }
                "#}
            </style>
        </section>
    }
}
