use gloo_timers::callback::Timeout;
use log::{debug, info};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::config;

/// Contact form state. There is no request behind it; a submission is
/// confirmed after a fixed delay.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CtaForm {
    pub email: String,
    pub pending: bool,
    pub submitted: bool,
}

impl CtaForm {
    pub fn set_email(&mut self, email: String) {
        self.email = email;
    }

    /// Accepts the submission and returns the delay in ms after which
    /// `confirm` should run. None for blank or repeated submissions.
    pub fn submit(&mut self) -> Option<u32> {
        if self.pending || self.submitted || self.email.trim().is_empty() {
            return None;
        }
        self.pending = true;
        Some(config::CTA_CONFIRM_DELAY_MS)
    }

    pub fn confirm(&mut self) {
        if !self.pending {
            return;
        }
        self.pending = false;
        self.submitted = true;
        self.email.clear();
    }
}

pub enum CtaMsg {
    Input(String),
    Submit,
    Confirmed,
}

pub struct Cta {
    form: CtaForm,
}

impl Component for Cta {
    type Message = CtaMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            form: CtaForm::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            CtaMsg::Input(email) => {
                self.form.set_email(email);
                true
            }
            CtaMsg::Submit => {
                let Some(delay_ms) = self.form.submit() else {
                    debug!("Ignoring empty or duplicate contact submission");
                    return false;
                };
                info!("Contact form submitted");
                let link = ctx.link().clone();
                Timeout::new(delay_ms, move || {
                    link.send_message(CtaMsg::Confirmed);
                })
                .forget();
                true
            }
            CtaMsg::Confirmed => {
                self.form.confirm();
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let oninput = link.callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            CtaMsg::Input(input.value())
        });
        let onsubmit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            CtaMsg::Submit
        });

        let body = if self.form.submitted {
            html! {
                <div class="cta-confirmation" role="status">
                    <h3>{"Thanks, we'll be in touch."}</h3>
                    <p>{"Expect an email within one business day to schedule your assessment."}</p>
                </div>
            }
        } else {
            html! {
                <form class="cta-form" {onsubmit}>
                    <input
                        type="email"
                        required=true
                        placeholder="you@company.com"
                        aria-label="Work email"
                        value={self.form.email.clone()}
                        disabled={self.form.pending}
                        {oninput}
                    />
                    <button type="submit" class="hero-cta primary" disabled={self.form.pending}>
                        { if self.form.pending { "Sending…" } else { "Get my assessment" } }
                    </button>
                </form>
            }
        };

        html! {
            <section id="contact" class="cta">
                <Reveal class="cta-card">
                    <h2>{"Find out what you could automate"}</h2>
                    <p>
                        {"Leave your email and we'll set up a free 30-minute assessment call. Prefer email? Write to "}
                        <a href={format!("mailto:{}", config::CONTACT_EMAIL)}>{config::CONTACT_EMAIL}</a>
                        {"."}
                    </p>
                    {body}
                </Reveal>
                <style>
                    {r#"
                    .cta {
                        padding: 6rem 1.5rem;
                    }

                    .cta-card {
                        max-width: 760px;
                        margin: 0 auto;
                        text-align: center;
                        padding: 3.5rem 2rem;
                        border-radius: 28px;
                        background: linear-gradient(135deg, color-mix(in srgb, var(--accent) 18%, var(--bg-elevated)), var(--bg-elevated));
                        border: 1px solid var(--border);
                    }

                    .cta-card h2 {
                        font-size: clamp(1.8rem, 4vw, 2.5rem);
                        margin: 0 0 1rem;
                    }

                    .cta-card p {
                        color: var(--text-muted);
                        line-height: 1.6;
                    }

                    .cta-form {
                        display: flex;
                        gap: 0.75rem;
                        justify-content: center;
                        flex-wrap: wrap;
                        margin-top: 2rem;
                    }

                    .cta-form input {
                        flex: 1 1 260px;
                        max-width: 360px;
                        padding: 0.9rem 1.2rem;
                        border-radius: 999px;
                        border: 1px solid var(--border);
                        background: var(--bg);
                        color: var(--text);
                        font: inherit;
                    }

                    .cta-form button {
                        border: none;
                        cursor: pointer;
                        font: inherit;
                        font-weight: 600;
                    }

                    .cta-form button:disabled {
                        opacity: 0.6;
                        cursor: default;
                    }

                    .cta-confirmation {
                        margin-top: 2rem;
                    }
                    "#}
                </style>
            </section>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form_with(email: &str) -> CtaForm {
        let mut form = CtaForm::default();
        form.set_email(email.to_string());
        form
    }

    #[test]
    fn submission_confirms_and_clears_input() {
        let mut form = form_with("ops@example.com");
        assert_eq!(form.submit(), Some(config::CTA_CONFIRM_DELAY_MS));
        assert!(form.pending);
        assert!(!form.submitted);

        form.confirm();
        assert!(form.submitted);
        assert!(!form.pending);
        assert!(form.email.is_empty());
    }

    #[test]
    fn confirmation_uses_configured_delay() {
        let mut form = form_with("ops@example.com");
        assert_eq!(form.submit(), Some(1000));
        assert_eq!(config::CTA_CONFIRM_DELAY_MS, 1000);
    }

    #[test]
    fn blank_email_is_rejected() {
        for email in ["", "   "] {
            let mut form = form_with(email);
            assert_eq!(form.submit(), None);
            assert_eq!(form, form_with(email));
        }
    }

    #[test]
    fn double_submit_schedules_once() {
        let mut form = form_with("ops@example.com");
        assert!(form.submit().is_some());
        assert_eq!(form.submit(), None);
        form.confirm();
        assert_eq!(form.submit(), None);
    }

    #[test]
    fn stray_confirmation_is_ignored() {
        let mut form = form_with("ops@example.com");
        form.confirm();
        assert!(!form.submitted);
        assert_eq!(form.email, "ops@example.com");
    }
}
