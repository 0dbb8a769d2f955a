use serde::Deserialize;
use yew::prelude::*;

/// Line icons drawn on a 24x24 grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconKind {
    Menu,
    X,
    ChevronDown,
    ArrowUpRight,
    Twitter,
    Linkedin,
    Mail,
}

#[derive(Properties, PartialEq)]
pub struct IconProps {
    pub kind: IconKind,
    #[prop_or(20)]
    pub size: u32,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Icon)]
pub fn icon(props: &IconProps) -> Html {
    let size = props.size.to_string();
    let shape = match props.kind {
        IconKind::Menu => html! {
            <>
                <line x1="4" x2="20" y1="12" y2="12" />
                <line x1="4" x2="20" y1="6" y2="6" />
                <line x1="4" x2="20" y1="18" y2="18" />
            </>
        },
        IconKind::X => html! {
            <>
                <path d="M18 6 6 18" />
                <path d="m6 6 12 12" />
            </>
        },
        IconKind::ChevronDown => html! { <path d="m6 9 6 6 6-6" /> },
        IconKind::ArrowUpRight => html! {
            <>
                <path d="M7 7h10v10" />
                <path d="M7 17 17 7" />
            </>
        },
        IconKind::Twitter => html! {
            <path d="M22 4s-.7 2.1-2 3.4c1.6 10-9.4 17.3-18 11.6 2.2.1 4.4-.6 6-2C3 15.5.5 9.6 3 5c2.2 2.6 5.6 4.1 9 4-.9-4.2 4-6.6 7-3.8 1.1 0 3-1.2 3-1.2z" />
        },
        IconKind::Linkedin => html! {
            <>
                <path d="M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z" />
                <rect width="4" height="12" x="2" y="9" />
                <circle cx="4" cy="4" r="2" />
            </>
        },
        IconKind::Mail => html! {
            <>
                <rect width="20" height="16" x="2" y="4" rx="2" />
                <path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7" />
            </>
        },
    };

    html! {
        <svg
            class={classes!("icon", props.class.clone())}
            xmlns="http://www.w3.org/2000/svg"
            width={size.clone()}
            height={size}
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            { shape }
        </svg>
    }
}
