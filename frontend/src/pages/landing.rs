use log::{info, warn};
use yew::prelude::*;

use crate::content::SECTION_ORDER;
use crate::sections::{
    case_studies::CaseStudies,
    cta::Cta,
    faq::Faq,
    footer::Footer,
    header::Header,
    hero::Hero,
    process::Process,
    services::Services,
};

fn section(id: &str) -> Option<Html> {
    let html = match id {
        "home" => html! { <Hero /> },
        "services" => html! { <Services /> },
        "process" => html! { <Process /> },
        "case-studies" => html! { <CaseStudies /> },
        "faq" => html! { <Faq /> },
        "contact" => html! { <Cta /> },
        _ => return None,
    };
    Some(html)
}

#[function_component(Landing)]
pub fn landing() -> Html {
    use_effect_with_deps(
        move |_| {
            info!("Landing page mounted");
            || ()
        },
        (),
    );

    html! {
        <div class="landing-page">
            <Header />
            <main>
                { for SECTION_ORDER.iter().filter_map(|id| {
                    let rendered = section(id);
                    if rendered.is_none() {
                        warn!("No renderer for section {}", id);
                    }
                    rendered
                }) }
            </main>
            <Footer />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_section_has_a_renderer() {
        for id in SECTION_ORDER {
            assert!(section(id).is_some(), "missing renderer for {}", id);
        }
    }

    #[test]
    fn unknown_section_renders_nothing() {
        assert!(section("pricing").is_none());
    }

    #[test]
    fn hero_leads_and_contact_closes() {
        assert_eq!(SECTION_ORDER.first(), Some(&"home"));
        assert_eq!(SECTION_ORDER.last(), Some(&"contact"));
    }
}
