use yew::prelude::*;

use crate::components::reveal::{stagger_delay, Reveal};
use crate::content::{CaseStudy, CASE_STUDIES, TESTIMONIALS};

fn case_card(index: usize, case: &CaseStudy) -> Html {
    html! {
        <Reveal class="case-card" delay_ms={stagger_delay(index)}>
            <span class="case-industry">{case.industry}</span>
            <h3>{case.client}</h3>
            <p><strong>{"Challenge: "}</strong>{case.challenge}</p>
            <p><strong>{"Result: "}</strong>{case.outcome}</p>
            <div class="case-stats">
                { for case.stats.iter().map(|stat| html! {
                    <div class="case-stat">
                        <span class="stat-value">{stat.value}</span>
                        <span class="stat-label">{stat.label}</span>
                    </div>
                }) }
            </div>
        </Reveal>
    }
}

#[function_component(CaseStudies)]
pub fn case_studies() -> Html {
    html! {
        <section id="case-studies" class="case-studies">
            <Reveal class="section-heading">
                <span class="section-eyebrow">{"Case Studies"}</span>
                <h2>{"Results our clients measured"}</h2>
            </Reveal>

            <div class="case-grid">
                { for CASE_STUDIES.iter().enumerate().map(|(i, case)| case_card(i, case)) }
            </div>

            <div class="testimonials">
                { for TESTIMONIALS.iter().enumerate().map(|(i, t)| html! {
                    <Reveal class="testimonial" delay_ms={stagger_delay(i)}>
                        <blockquote>{format!("“{}”", t.quote)}</blockquote>
                        <div class="testimonial-author">
                            <strong>{t.author}</strong>
                            <span>{t.role}</span>
                        </div>
                    </Reveal>
                }) }
            </div>
            <style>
                {r#"
                .case-studies {
                    padding: 6rem 1.5rem;
                    max-width: 1200px;
                    margin: 0 auto;
                }

                .case-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
                    gap: 1.5rem;
                }

                .case-card {
                    background: var(--bg-elevated);
                    border: 1px solid var(--border);
                    border-radius: 20px;
                    padding: 2rem;
                }

                .case-industry {
                    font-size: 0.8rem;
                    text-transform: uppercase;
                    letter-spacing: 0.06em;
                    color: var(--accent);
                }

                .case-card h3 {
                    margin: 0.5rem 0 1rem;
                }

                .case-card p {
                    color: var(--text-muted);
                    line-height: 1.6;
                }

                .case-stats {
                    display: flex;
                    gap: 2rem;
                    margin-top: 1.5rem;
                    padding-top: 1.5rem;
                    border-top: 1px solid var(--border);
                }

                .case-stat {
                    display: flex;
                    flex-direction: column;
                }

                .testimonials {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                    gap: 1.5rem;
                    margin-top: 4rem;
                }

                .testimonial blockquote {
                    margin: 0 0 1rem;
                    font-size: 1.1rem;
                    line-height: 1.6;
                }

                .testimonial-author {
                    display: flex;
                    flex-direction: column;
                    gap: 0.2rem;
                }

                .testimonial-author span {
                    color: var(--text-muted);
                    font-size: 0.9rem;
                }
                "#}
            </style>
        </section>
    }
}
