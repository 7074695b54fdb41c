use std::rc::Rc;

use log::debug;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::content::{FaqEntry, FAQ_ENTRIES};

/// Accordion selection: at most one answer is open.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaqState {
    pub expanded: Option<usize>,
    len: usize,
}

impl FaqState {
    pub fn new(len: usize) -> Self {
        Self { expanded: None, len }
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.expanded == Some(index)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FaqAction {
    Toggle(usize),
}

impl Reducible for FaqState {
    type Action = FaqAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            FaqAction::Toggle(index) if index >= self.len => self,
            FaqAction::Toggle(index) => {
                let expanded = if self.is_open(index) { None } else { Some(index) };
                Rc::new(FaqState { expanded, ..*self })
            }
        }
    }
}

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    entry: FaqEntry,
    open: bool,
    ontoggle: Callback<MouseEvent>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    html! {
        <div class={classes!("faq-item", props.open.then_some("open"))}>
            <button
                class="faq-question"
                aria-expanded={props.open.to_string()}
                onclick={props.ontoggle.clone()}
            >
                <span class="question-text">{props.entry.question}</span>
                <span class="toggle-icon">{if props.open { "−" } else { "+" }}</span>
            </button>
            <div class="faq-answer">
                <p>{props.entry.answer}</p>
            </div>
        </div>
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    let state = use_reducer(|| FaqState::new(FAQ_ENTRIES.len()));

    html! {
        <section id="faq" class="faq">
            <Reveal class="section-heading">
                <span class="section-eyebrow">{"FAQ"}</span>
                <h2>{"Questions we hear a lot"}</h2>
            </Reveal>
            <Reveal class="faq-list">
                { for FAQ_ENTRIES.iter().enumerate().map(|(i, entry)| {
                    let ontoggle = {
                        let state = state.dispatcher();
                        Callback::from(move |e: MouseEvent| {
                            e.prevent_default();
                            debug!("FAQ item {} toggled", i);
                            state.dispatch(FaqAction::Toggle(i));
                        })
                    };
                    html! {
                        <FaqItem entry={*entry} open={state.is_open(i)} {ontoggle} />
                    }
                }) }
            </Reveal>
            <style>
                {r#"
                .faq {
                    padding: 6rem 1.5rem;
                    background: var(--bg-muted);
                }

                .faq-list {
                    max-width: 800px;
                    margin: 0 auto;
                }

                .faq-item {
                    border-bottom: 1px solid var(--border);
                }

                .faq-question {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    gap: 1rem;
                    background: none;
                    border: none;
                    color: var(--text);
                    font: inherit;
                    font-size: 1.1rem;
                    font-weight: 600;
                    text-align: left;
                    padding: 1.4rem 0;
                    cursor: pointer;
                }

                .toggle-icon {
                    color: var(--accent);
                    font-size: 1.4rem;
                }

                .faq-answer {
                    max-height: 0;
                    overflow: hidden;
                    transition: max-height 0.35s ease;
                }

                .faq-item.open .faq-answer {
                    max-height: 400px;
                }

                .faq-answer p {
                    margin: 0 0 1.4rem;
                    color: var(--text-muted);
                    line-height: 1.7;
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toggle(state: FaqState, index: usize) -> FaqState {
        *Rc::new(state).reduce(FaqAction::Toggle(index))
    }

    #[test]
    fn starts_collapsed() {
        let state = FaqState::new(4);
        assert_eq!(state.expanded, None);
        assert!((0..4).all(|i| !state.is_open(i)));
    }

    #[test]
    fn clicking_opens_only_that_item() {
        let state = toggle(FaqState::new(4), 2);
        assert_eq!(state.expanded, Some(2));
        assert_eq!((0..4).filter(|&i| state.is_open(i)).count(), 1);
    }

    #[test]
    fn clicking_open_item_collapses_it() {
        let state = toggle(toggle(FaqState::new(4), 1), 1);
        assert_eq!(state.expanded, None);
    }

    #[test]
    fn clicking_another_item_switches() {
        let state = toggle(toggle(FaqState::new(4), 0), 3);
        assert_eq!(state.expanded, Some(3));
        assert!(!state.is_open(0));
    }

    #[test]
    fn at_most_one_open_over_any_click_sequence() {
        let mut state = FaqState::new(5);
        for index in [0, 0, 4, 2, 2, 1, 3, 3, 3, 0] {
            state = toggle(state, index);
            assert!((0..5).filter(|&i| state.is_open(i)).count() <= 1);
        }
    }

    #[test]
    fn out_of_range_click_is_ignored() {
        let state = toggle(FaqState::new(3), 1);
        assert_eq!(toggle(state, 7).expanded, Some(1));
    }
}
