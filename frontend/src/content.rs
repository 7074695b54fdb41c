// Copy for every section of the landing page. Renderers only read from here.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub cta: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProcessStep {
    pub step: u8,
    pub title: &'static str,
    pub description: &'static str,
    pub deliverable: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CaseStudy {
    pub client: &'static str,
    pub industry: &'static str,
    pub challenge: &'static str,
    pub outcome: &'static str,
    pub stats: &'static [Stat],
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FooterColumn {
    pub heading: &'static str,
    pub links: &'static [NavItem],
}

pub const BRAND: &str = "Northwind Automation";

/// Section ids in the order the landing page mounts them.
pub const SECTION_ORDER: &[&str] = &["home", "services", "process", "case-studies", "faq", "contact"];

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { label: "Services", href: "#services" },
    NavItem { label: "Process", href: "#process" },
    NavItem { label: "Case Studies", href: "#case-studies" },
    NavItem { label: "FAQ", href: "#faq" },
];

pub const HERO_STATS: &[Stat] = &[
    Stat { value: "40+", label: "Automations in production" },
    Stat { value: "12,000", label: "Hours handed back each year" },
    Stat { value: "6 weeks", label: "Typical time to first launch" },
    Stat { value: "98%", label: "Client retention" },
];

pub const SERVICES: &[Service] = &[
    Service {
        title: "Workflow Automation",
        description: "We map the repetitive work your team does by hand and replace it with pipelines that run on their own.",
        features: &[
            "Process discovery workshops",
            "Integrations across CRM, ERP and inbox",
            "Human-in-the-loop approvals",
            "Run logs your ops team can read",
        ],
        cta: "Automate a workflow",
    },
    Service {
        title: "AI Agents & Assistants",
        description: "Task-specific agents that triage tickets, draft replies and answer internal questions from your own documents.",
        features: &[
            "Retrieval over your knowledge base",
            "Guardrails and escalation rules",
            "Slack, Teams and email front ends",
            "Evaluation suites before every release",
        ],
        cta: "Scope an agent",
    },
    Service {
        title: "Document Intelligence",
        description: "Invoices, contracts and forms read, classified and pushed into your systems without anyone retyping them.",
        features: &[
            "Extraction tuned to your templates",
            "Confidence scoring with review queues",
            "Audit trail for every field",
        ],
        cta: "Process documents",
    },
    Service {
        title: "Automation Strategy",
        description: "A fixed-price assessment that ranks your automation opportunities by effort, risk and payback.",
        features: &[
            "Opportunity backlog with ROI estimates",
            "Build vs. buy recommendations",
            "Roadmap your board can approve",
        ],
        cta: "Book an assessment",
    },
];

pub const PROCESS_STEPS: &[ProcessStep] = &[
    ProcessStep {
        step: 1,
        title: "Discover",
        description: "We sit with the people doing the work and measure where the hours actually go.",
        deliverable: "Opportunity map",
    },
    ProcessStep {
        step: 2,
        title: "Design",
        description: "Each candidate gets a flow diagram, a data contract and a clear definition of done.",
        deliverable: "Solution blueprint",
    },
    ProcessStep {
        step: 3,
        title: "Build",
        description: "Short iterations with a working demo every week, tested against your real data.",
        deliverable: "Production-ready automation",
    },
    ProcessStep {
        step: 4,
        title: "Launch & Improve",
        description: "We roll out in stages, watch the run logs and tune until the numbers hold.",
        deliverable: "Monthly impact report",
    },
];

pub const CASE_STUDIES: &[CaseStudy] = &[
    CaseStudy {
        client: "Harbor Freight Partners",
        industry: "Logistics",
        challenge: "Dispatchers re-keyed 600 shipping confirmations a day from email into the TMS.",
        outcome: "An extraction pipeline now files confirmations automatically and flags only the exceptions.",
        stats: &[
            Stat { value: "92%", label: "Emails processed without a human" },
            Stat { value: "3.5 FTE", label: "Capacity redeployed" },
        ],
    },
    CaseStudy {
        client: "Brightline Dental Group",
        industry: "Healthcare",
        challenge: "Front desks across 14 clinics answered the same insurance questions by phone all day.",
        outcome: "A patient assistant answers coverage questions from plan documents and books follow-ups.",
        stats: &[
            Stat { value: "-41%", label: "Inbound call volume" },
            Stat { value: "4.8/5", label: "Patient satisfaction" },
        ],
    },
    CaseStudy {
        client: "Quarry Lane Finance",
        industry: "Financial services",
        challenge: "Month-end close depended on a spreadsheet chain that took five days to reconcile.",
        outcome: "Reconciliation runs nightly with an agent that explains every mismatch it finds.",
        stats: &[
            Stat { value: "5 → 1", label: "Days to close" },
            Stat { value: "0", label: "Missed filings since launch" },
        ],
    },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "They found the work we had stopped noticing and made it disappear. Our team finally has time for customers again.",
        author: "Maria Okafor",
        role: "COO, Harbor Freight Partners",
    },
    Testimonial {
        quote: "No black boxes. Every automation came with run logs and a person we could call.",
        author: "Daniel Reyes",
        role: "Head of Operations, Brightline Dental Group",
    },
    Testimonial {
        quote: "The assessment paid for itself before the first build started.",
        author: "Priya Natarajan",
        role: "CFO, Quarry Lane Finance",
    },
];

pub const FAQ_ENTRIES: &[FaqEntry] = &[
    FaqEntry {
        question: "What kind of processes can you automate?",
        answer: "Anything rule-heavy and repetitive: data entry, document handling, ticket triage, reporting and reconciliation. If a person follows a checklist to do it, it is usually a candidate.",
    },
    FaqEntry {
        question: "How long does a typical project take?",
        answer: "Most first automations go live in four to eight weeks. The assessment alone takes two weeks.",
    },
    FaqEntry {
        question: "Do we need our own data science team?",
        answer: "No. We build, deploy and monitor everything. Your team only needs to know the process and approve the rollout.",
    },
    FaqEntry {
        question: "Where does our data go?",
        answer: "It stays in your cloud account or ours under a signed DPA. We never use client data to train shared models.",
    },
    FaqEntry {
        question: "What happens after launch?",
        answer: "Every engagement includes a support period with monitoring and monthly impact reports. Ongoing care plans are available after that.",
    },
    FaqEntry {
        question: "How is pricing structured?",
        answer: "Assessments are fixed price. Builds are scoped per automation with a fixed quote before work starts, so there are no open-ended retainers.",
    },
];

pub const FOOTER_COLUMNS: &[FooterColumn] = &[
    FooterColumn {
        heading: "Services",
        links: &[
            NavItem { label: "Workflow Automation", href: "#services" },
            NavItem { label: "AI Agents", href: "#services" },
            NavItem { label: "Document Intelligence", href: "#services" },
            NavItem { label: "Strategy", href: "#services" },
        ],
    },
    FooterColumn {
        heading: "Company",
        links: &[
            NavItem { label: "Process", href: "#process" },
            NavItem { label: "Case Studies", href: "#case-studies" },
            NavItem { label: "FAQ", href: "#faq" },
            NavItem { label: "Contact", href: "#contact" },
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    fn anchor(href: &str) -> &str {
        href.strip_prefix('#').unwrap_or(href)
    }

    #[test]
    fn nav_and_footer_links_point_at_rendered_sections() {
        let footer_links = FOOTER_COLUMNS.iter().flat_map(|c| c.links.iter());
        for item in NAV_ITEMS.iter().chain(footer_links) {
            assert!(item.href.starts_with('#'), "{} is not an in-page link", item.label);
            assert!(
                SECTION_ORDER.contains(&anchor(item.href)),
                "{} points at missing section {}",
                item.label,
                item.href
            );
        }
    }

    #[test]
    fn process_steps_are_numbered_in_order() {
        for (i, step) in PROCESS_STEPS.iter().enumerate() {
            assert_eq!(step.step as usize, i + 1);
        }
    }

    #[test]
    fn content_arrays_are_populated() {
        assert!(!HERO_STATS.is_empty());
        assert!(!TESTIMONIALS.is_empty());
        assert!(!FAQ_ENTRIES.is_empty());
        assert!(SERVICES.iter().all(|s| !s.features.is_empty()));
        assert!(CASE_STUDIES.iter().all(|c| !c.stats.is_empty()));
    }
}
