use yew::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::content::NavLink;
use crate::view_state::NavMode;

pub fn mobile_menu_class(menu_open: bool) -> &'static str {
    if menu_open {
        "mobile-menu mobile-menu-open"
    } else {
        "mobile-menu"
    }
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub name: String,
    pub links: Vec<NavLink>,
    pub mode: NavMode,
    pub menu_open: bool,
    pub on_toggle: Callback<()>,
    pub on_navigate: Callback<String>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps { name, links, mode, menu_open, on_toggle, on_navigate } = props;

    let toggle_menu = {
        let on_toggle = on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(());
        })
    };

    let render_link = |link: &NavLink, class: &'static str| {
        let target = link.target.clone();
        let on_navigate = on_navigate.clone();
        let onclick = Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_navigate.emit(target.clone());
        });
        html! {
            <button type="button" class={class} {onclick}>{ link.label.clone() }</button>
        }
    };

    let (menu_icon, menu_label) = if *menu_open {
        (IconKind::X, "Fermer le menu")
    } else {
        (IconKind::Menu, "Ouvrir le menu")
    };

    html! {
        <nav class={classes!("top-nav", mode.class())}>
            <div class="nav-content">
                <div class="nav-logo">{ name.clone() }</div>

                <div class="nav-links">
                    { for links.iter().map(|link| render_link(link, "nav-link")) }
                </div>

                <button
                    type="button"
                    class="burger-menu"
                    onclick={toggle_menu}
                    aria-label={menu_label}
                    aria-expanded={menu_open.to_string()}
                >
                    <Icon kind={menu_icon} />
                </button>
            </div>

            <div class={mobile_menu_class(*menu_open)}>
                <div class="mobile-menu-links">
                    { for links.iter().map(|link| render_link(link, "mobile-nav-link")) }
                </div>
            </div>

            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    transition: all 0.5s ease;
                    border-bottom: 1px solid transparent;
                }
                .top-nav--transparent {
                    background: transparent;
                }
                .top-nav--solid {
                    background: rgba(9, 9, 11, 0.95);
                    backdrop-filter: blur(4px);
                    -webkit-backdrop-filter: blur(4px);
                    border-bottom-color: rgba(39, 39, 42, 0.5);
                }
                .nav-content {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 1rem;
                    height: 4rem;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }
                .nav-logo {
                    font-size: 1.125rem;
                    font-weight: 600;
                    letter-spacing: -0.025em;
                }
                .nav-links {
                    display: none;
                    gap: 2rem;
                }
                .nav-link, .mobile-nav-link {
                    background: none;
                    border: none;
                    cursor: pointer;
                    color: #a1a1aa;
                    font: inherit;
                    transition: color 0.3s ease;
                }
                .nav-link:hover, .mobile-nav-link:hover,
                .burger-menu:hover {
                    color: #ffffff;
                }
                .burger-menu {
                    display: flex;
                    padding: 0.5rem;
                    background: none;
                    border: none;
                    cursor: pointer;
                    color: #a1a1aa;
                    transition: color 0.3s ease;
                }
                .mobile-menu {
                    max-height: 0;
                    opacity: 0;
                    overflow: hidden;
                    transition: all 0.3s ease;
                    background: rgba(9, 9, 11, 0.95);
                    backdrop-filter: blur(4px);
                    border-bottom: 1px solid rgba(39, 39, 42, 0.5);
                }
                .mobile-menu-open {
                    max-height: 16rem;
                    opacity: 1;
                }
                .mobile-menu-links {
                    padding: 1.5rem 1rem;
                    display: flex;
                    flex-direction: column;
                    align-items: flex-start;
                    gap: 1rem;
                }
                .mobile-nav-link {
                    font-size: 1.125rem;
                }
                @media (min-width: 640px) {
                    .nav-content {
                        padding: 0 1.5rem;
                        height: 5rem;
                    }
                    .nav-logo {
                        font-size: 1.25rem;
                    }
                }
                @media (min-width: 768px) {
                    .nav-links {
                        display: flex;
                    }
                    .burger-menu, .mobile-menu {
                        display: none;
                    }
                }
                @media (min-width: 1024px) {
                    .nav-links {
                        gap: 3rem;
                    }
                }
                "#}
            </style>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mobile_menu_class_tracks_open_flag() {
        assert_eq!(mobile_menu_class(false), "mobile-menu");
        assert!(mobile_menu_class(true).contains("mobile-menu-open"));
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use std::time::Duration;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::Element;

    use crate::content::SiteContent;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn every_nav_button_is_a_plain_button() {
        let document = web_sys::window().unwrap().document().unwrap();
        let root = document.create_element("div").unwrap();
        document.body().unwrap().append_child(&root).unwrap();

        let content = SiteContent::load().unwrap();
        let props = NavProps {
            name: content.name.clone(),
            links: content.nav.clone(),
            mode: NavMode::Transparent,
            menu_open: false,
            on_toggle: Callback::from(|_: ()| ()),
            on_navigate: Callback::from(|_: String| ()),
        };
        let handle = yew::Renderer::<Nav>::with_root_and_props(root.clone(), props).render();
        yew::platform::time::sleep(Duration::from_millis(10)).await;

        let buttons = root.query_selector_all("button").unwrap();
        // Desktop links, burger, mobile links
        assert_eq!(buttons.length(), 5);
        for i in 0..buttons.length() {
            let button: Element = buttons.item(i).unwrap().dyn_into().unwrap();
            assert_eq!(button.get_attribute("type").as_deref(), Some("button"));
        }

        handle.destroy();
        root.remove();
    }
}
