use chrono::Datelike;
use yew::prelude::*;

use crate::content::FooterContent;

pub fn copyright_line(year: i32, holder: &str, rights: &str) -> String {
    format!("© {} {}. {}", year, holder, rights)
}

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub holder: String,
    pub content: FooterContent,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="site-footer__inner">
                <div class="site-footer__copyright">
                    { copyright_line(year, &props.holder, &props.content.rights) }
                </div>
                <div class="site-footer__links">
                    { for props.content.links.iter().map(|link| html! {
                        <a href={link.href.clone()} class="site-footer__link">{ link.label.clone() }</a>
                    }) }
                </div>
            </div>
            <style>
                {r#"
                .site-footer {
                    padding: 3rem 0;
                    border-top: 1px solid #27272a;
                }
                .site-footer__inner {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 1rem;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 1rem;
                }
                .site-footer__copyright {
                    color: #a1a1aa;
                    font-weight: 300;
                    font-size: 0.875rem;
                }
                .site-footer__links {
                    display: flex;
                    gap: 1.5rem;
                }
                .site-footer__link {
                    color: #a1a1aa;
                    font-size: 0.875rem;
                    text-decoration: none;
                    transition: color 0.3s ease;
                }
                .site-footer__link:hover {
                    color: #ffffff;
                }
                @media (min-width: 640px) {
                    .site-footer { padding: 4rem 0; }
                    .site-footer__inner {
                        flex-direction: row;
                        justify-content: space-between;
                        padding: 0 1.5rem;
                    }
                    .site-footer__copyright, .site-footer__link { font-size: 1rem; }
                    .site-footer__links { gap: 2rem; }
                }
                "#}
            </style>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_line_names_year_and_holder() {
        assert_eq!(
            copyright_line(2025, "Judith Suminwa", "Tous droits réservés."),
            "© 2025 Judith Suminwa. Tous droits réservés."
        );
    }
}
