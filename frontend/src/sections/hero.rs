use yew::prelude::*;

use crate::components::reveal::{stagger_delay, Reveal};
use crate::content::HERO_STATS;

#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <section id="home" class="hero">
            <div class="hero-glow"></div>
            <Reveal class="hero-content">
                <span class="hero-eyebrow">{"AI automation agency"}</span>
                <h1>
                    {"Hand the busywork "}
                    <span class="hero-highlight">{"to software"}</span>
                </h1>
                <p class="hero-subtitle">
                    {"We design, build and run AI automations that take repetitive work off your operations team, with numbers you can check every month."}
                </p>
                <div class="hero-cta-group">
                    <a href="#contact" class="hero-cta primary">{"Book a free assessment"}</a>
                    <a href="#process" class="hero-cta secondary">{"See how we work"}</a>
                </div>
            </Reveal>

            <div class="hero-stats">
                { for HERO_STATS.iter().enumerate().map(|(i, stat)| html! {
                    <Reveal class="hero-stat" delay_ms={stagger_delay(i)}>
                        <span class="stat-value">{stat.value}</span>
                        <span class="stat-label">{stat.label}</span>
                    </Reveal>
                }) }
            </div>
            <style>
                {r#"
                .hero {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    justify-content: center;
                    align-items: center;
                    padding: 8rem 1.5rem 4rem;
                    overflow: hidden;
                    text-align: center;
                }

                .hero-glow {
                    position: absolute;
                    top: -20%;
                    left: 50%;
                    width: 900px;
                    height: 900px;
                    transform: translateX(-50%);
                    background: radial-gradient(circle, color-mix(in srgb, var(--accent) 25%, transparent) 0%, transparent 65%);
                    pointer-events: none;
                    z-index: -1;
                }

                .hero-content {
                    max-width: 820px;
                }

                .hero-eyebrow {
                    display: inline-block;
                    padding: 0.35rem 0.9rem;
                    border: 1px solid var(--border);
                    border-radius: 999px;
                    color: var(--text-muted);
                    font-size: 0.85rem;
                    letter-spacing: 0.04em;
                    text-transform: uppercase;
                    margin-bottom: 1.5rem;
                }

                .hero h1 {
                    font-size: clamp(2.5rem, 6vw, 4.25rem);
                    line-height: 1.1;
                    margin: 0 0 1.5rem;
                }

                .hero-highlight {
                    color: var(--accent);
                }

                .hero-subtitle {
                    font-size: 1.2rem;
                    line-height: 1.6;
                    color: var(--text-muted);
                    margin: 0 auto 2.5rem;
                    max-width: 640px;
                }

                .hero-cta-group {
                    display: flex;
                    gap: 1rem;
                    justify-content: center;
                    flex-wrap: wrap;
                }

                .hero-cta {
                    text-decoration: none;
                    padding: 0.9rem 1.6rem;
                    border-radius: 999px;
                    font-weight: 600;
                    transition: transform 0.2s ease;
                }

                .hero-cta:hover {
                    transform: translateY(-2px);
                }

                .hero-cta.primary {
                    background: var(--accent);
                    color: var(--accent-contrast);
                }

                .hero-cta.secondary {
                    border: 1px solid var(--border);
                    color: var(--text);
                }

                .hero-stats {
                    display: grid;
                    grid-template-columns: repeat(4, minmax(0, 1fr));
                    gap: 1.5rem;
                    margin-top: 5rem;
                    width: 100%;
                    max-width: 1000px;
                }

                .hero-stat {
                    display: flex;
                    flex-direction: column;
                    gap: 0.35rem;
                }

                .stat-value {
                    font-size: 2rem;
                    font-weight: 700;
                }

                .stat-label {
                    color: var(--text-muted);
                    font-size: 0.9rem;
                }

                @media (max-width: 768px) {
                    .hero-stats {
                        grid-template-columns: repeat(2, minmax(0, 1fr));
                    }
                }
                "#}
            </style>
        </section>
    }
}
