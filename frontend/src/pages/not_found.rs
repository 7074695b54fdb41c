use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <h1>{"404"}</h1>
            <p>{"This page doesn't exist."}</p>
            <Link<Route> to={Route::Home} classes="hero-cta primary">
                {"Back to the homepage"}
            </Link<Route>>
            <style>
                {r#"
                .not-found {
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 1rem;
                    text-align: center;
                }

                .not-found h1 {
                    font-size: 5rem;
                    margin: 0;
                    color: var(--accent);
                }

                .not-found .hero-cta {
                    text-decoration: none;
                    padding: 0.9rem 1.6rem;
                    border-radius: 999px;
                    background: var(--accent);
                    color: var(--accent-contrast);
                    font-weight: 600;
                }
                "#}
            </style>
        </div>
    }
}
