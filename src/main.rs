use std::rc::Rc;

use log::{error, info};
use yew::prelude::*;

mod config;
mod content;
mod error;
mod navigator;
mod scroll;
mod view_state;

mod components {
    pub mod about;
    pub mod footer;
    pub mod hero;
    pub mod icons;
    pub mod intro;
    pub mod nav;
    pub mod work;
}
mod pages {
    pub mod profile;
}

use content::SiteContent;
use pages::profile::ProfilePage;

#[derive(Properties, PartialEq)]
struct AppProps {
    content: Rc<SiteContent>,
}

#[function_component]
fn App(props: &AppProps) -> Html {
    html! {
        <ProfilePage content={props.content.clone()} />
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(config::log_level()) {
        web_sys::console::error_1(&format!("error initializing log: {}", e).into());
    }

    let content = match SiteContent::load() {
        Ok(content) => Rc::new(content),
        Err(e) => {
            error!("Not rendering: {}", e);
            return;
        }
    };

    info!("Starting application");
    yew::Renderer::<App>::with_props(AppProps { content }).render();
}
