use chrono::{Datelike, Local};
use yew::prelude::*;

use crate::config;
use crate::content::{BRAND, FOOTER_COLUMNS};

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-inner">
                <div class="footer-brand">
                    <a href="#home" class="brand">
                        <span class="brand-mark">{"◆"}</span>
                        {BRAND}
                    </a>
                    <p>{"AI automation for operations teams that would rather be doing something else."}</p>
                    <a href={format!("mailto:{}", config::CONTACT_EMAIL)} class="footer-email">
                        {config::CONTACT_EMAIL}
                    </a>
                </div>
                { for FOOTER_COLUMNS.iter().map(|column| html! {
                    <div class="footer-column">
                        <h4>{column.heading}</h4>
                        <ul>
                            { for column.links.iter().map(|link| html! {
                                <li><a href={link.href}>{link.label}</a></li>
                            }) }
                        </ul>
                    </div>
                }) }
            </div>
            <div class="footer-bottom">
                {format!("© {} {}. All rights reserved.", year, BRAND)}
            </div>
            <style>
                {r#"
                .site-footer {
                    border-top: 1px solid var(--border);
                    padding: 4rem 1.5rem 2rem;
                }

                .footer-inner {
                    max-width: 1200px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: 2fr 1fr 1fr;
                    gap: 2rem;
                }

                .footer-brand p {
                    color: var(--text-muted);
                    max-width: 340px;
                    line-height: 1.6;
                }

                .footer-email {
                    color: var(--accent);
                    text-decoration: none;
                }

                .footer-column h4 {
                    margin: 0 0 1rem;
                }

                .footer-column ul {
                    list-style: none;
                    padding: 0;
                    margin: 0;
                    display: flex;
                    flex-direction: column;
                    gap: 0.6rem;
                }

                .footer-column a {
                    color: var(--text-muted);
                    text-decoration: none;
                }

                .footer-column a:hover {
                    color: var(--text);
                }

                .footer-bottom {
                    max-width: 1200px;
                    margin: 3rem auto 0;
                    padding-top: 1.5rem;
                    border-top: 1px solid var(--border);
                    color: var(--text-muted);
                    font-size: 0.85rem;
                }

                @media (max-width: 768px) {
                    .footer-inner {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </footer>
    }
}
