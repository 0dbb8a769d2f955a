use std::rc::Rc;

use log::info;
use yew::prelude::*;

use crate::components::{
    about::About, footer::Footer, hero::Hero, intro::Intro, nav::Nav, work::Work,
};
use crate::content::SiteContent;
use crate::navigator::{self, BrowserSurface, SCROLL_HINT_TARGET};
use crate::scroll::use_window_scroll;
use crate::view_state::{ViewAction, ViewState};

#[derive(Properties, PartialEq)]
pub struct ProfilePageProps {
    pub content: Rc<SiteContent>,
}

#[function_component(ProfilePage)]
pub fn profile_page(props: &ProfilePageProps) -> Html {
    let content = &props.content;
    let state = use_reducer(ViewState::default);

    {
        use_effect_with_deps(
            move |_| {
                info!("Profile page mounted");
                || info!("Profile page unmounted")
            },
            (),
        );
    }

    let on_scroll = use_callback(
        |offset: f64, dispatcher| dispatcher.dispatch(ViewAction::Scrolled(offset)),
        state.dispatcher(),
    );
    use_window_scroll(on_scroll);

    let on_toggle = use_callback(
        |_: (), dispatcher| dispatcher.dispatch(ViewAction::ToggleMenu),
        state.dispatcher(),
    );

    let on_navigate = use_callback(
        |anchor: String, dispatcher| {
            navigator::navigate_and_close(
                &BrowserSurface,
                |action| dispatcher.dispatch(action),
                &anchor,
            );
        },
        state.dispatcher(),
    );

    let on_scroll_hint = {
        let on_navigate = on_navigate.clone();
        Callback::from(move |_: ()| on_navigate.emit(SCROLL_HINT_TARGET.to_string()))
    };

    html! {
        <div class="profile-page">
            <Nav
                name={content.name.clone()}
                links={content.nav.clone()}
                mode={state.nav_mode()}
                menu_open={state.menu_open()}
                {on_toggle}
                {on_navigate}
            />
            <Hero
                content={content.hero.clone()}
                parallax={state.parallax_offset()}
                {on_scroll_hint}
            />
            <Intro content={content.intro.clone()} />
            <About content={content.about.clone()} />
            <Work content={content.work.clone()} />
            <Footer holder={content.name.clone()} content={content.footer.clone()} />
            <style>
                {r#"
                html {
                    scroll-behavior: smooth;
                }
                body {
                    margin: 0;
                    background: #09090b;
                }
                .profile-page {
                    background: #09090b;
                    color: #ffffff;
                    font-family: 'Inter', system-ui, -apple-system, sans-serif;
                    overflow-x: hidden;
                }
                "#}
            </style>
        </div>
    }
}
