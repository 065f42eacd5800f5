//! Opportunity catalog — the four fixed bundles, one per `SkillCategory`.
//!
//! The literals live in `static` tables; `bundle_for` copies them into a fresh
//! owned bundle on every call so callers can never mutate the reference data.

use crate::monetizer::models::{
    ExecutionPhase, ExecutionStep, OpportunityBundle, OpportunityPath, SkillCategory,
};

struct PathSpec {
    title: &'static str,
    description: &'static str,
    earnings: &'static str,
    first_step: &'static str,
    plan: &'static [PhaseSpec],
}

struct PhaseSpec {
    phase: &'static str,
    /// (action, tip)
    steps: &'static [(&'static str, &'static str)],
}

struct BundleSpec {
    freelance: PathSpec,
    product: PathSpec,
    service: PathSpec,
}

// ────────────────────────────────────────────────────────────────────────────
// General (fallback)
// ────────────────────────────────────────────────────────────────────────────

static GENERAL: BundleSpec = BundleSpec {
    freelance: PathSpec {
        title: "Virtual Technical Assistant",
        description: "Offer administrative and technical support to business owners using your diverse skill set.",
        earnings: "$20 - $40 / hour",
        first_step: "Create a profile on Upwork highlighting your adaptability.",
        plan: &[
            PhaseSpec {
                phase: "Week 1: Foundation",
                steps: &[
                    ("Optimize LinkedIn Profile", "Highlight 'Technical Virtual Assistant' in your headline."),
                    ("Create Upwork Account", "Take relevant skill tests to boost credibility."),
                ],
            },
            PhaseSpec {
                phase: "Week 2: Outreach",
                steps: &[
                    ("Apply to 5 jobs daily", "Customize your cover letter for each application."),
                    ("Network regarding VA groups", "Join Facebook groups for VAs and entrepreneurs."),
                ],
            },
        ],
    },
    product: PathSpec {
        title: "Beginner's Guide E-Book",
        description: "Write a comprehensive guide on how to get started with your specific set of skills.",
        earnings: "$15 - $30 per sale",
        first_step: "Outline the chapters based on common beginner questions.",
        plan: &[
            PhaseSpec {
                phase: "Phase 1: Drafting",
                steps: &[
                    ("Outline core chapters", "Focus on the top 5 questions beginners ask."),
                    ("Write 1000 words/day", "Don't edit while writing. Just get it down."),
                ],
            },
            PhaseSpec {
                phase: "Phase 2: Packaging",
                steps: &[
                    ("Design cover on Canva", "Use bold typography and high-contrast colors."),
                    ("Format PDF", "Ensure it's readable on mobile devices."),
                ],
            },
        ],
    },
    service: PathSpec {
        title: "Project Management Service",
        description: "Manage small projects for clients, ensuring their tasks are completed on time.",
        earnings: "$500 - $1500 per project",
        first_step: "Offer to manage a small project for a friend or local business for free/discount.",
        plan: &[
            PhaseSpec {
                phase: "Phase 1: Portfolio Building",
                steps: &[
                    ("Define service scope", "Be clear about what you do and don't do."),
                    ("Secure first beta client", "Offer a discount in exchange for a testimonial."),
                ],
            },
            PhaseSpec {
                phase: "Phase 2: Launch",
                steps: &[
                    ("Set up Trello/Asana templates", "Show clients you are organized from day 1."),
                    ("Cold outreach to small agencies", "They often need help managing overflow work."),
                ],
            },
        ],
    },
};

// ────────────────────────────────────────────────────────────────────────────
// Tech / development
// ────────────────────────────────────────────────────────────────────────────

static TECH: BundleSpec = BundleSpec {
    freelance: PathSpec {
        title: "Frontend/Backend Bug Fixer",
        description: "Use your development skills to fix specific bugs or build small components for existing agency projects.",
        earnings: "$40 - $100 / hour",
        first_step: "Search for 'urgent bug fix' on Upwork or freelance platforms.",
        plan: &[PhaseSpec {
            phase: "Week 1: Setup",
            steps: &[
                ("Create a 'Bug Fixer' portfolio", "Showcase before/after examples of fixes."),
                ("Set up alerts for 'urgent' jobs", "Be the first to apply to urgent postings."),
            ],
        }],
    },
    product: PathSpec {
        title: "Code Starter Kits & Templates",
        description: "Build a 'Boilerplate' or 'Starter Kit' that solves a specific problem you've faced repeatedly.",
        earnings: "$49 - $149 per license",
        first_step: "Identify a repetitive setup task and automate it.",
        plan: &[PhaseSpec {
            phase: "Phase 1: Build",
            steps: &[
                ("Identify pain points", "What code do you rewrite in every project?"),
                ("Clean up the codebase", "Add comments and documentation for users."),
            ],
        }],
    },
    service: PathSpec {
        title: "MVP Development for Founders",
        description: "Offer a 'Zero to MVP in 2 Weeks' package for non-technical founders.",
        earnings: "$3,000 - $8,000 per project",
        first_step: "Create a landing page showcasing 2-3 demo apps.",
        plan: &[PhaseSpec {
            phase: "Phase 1: Offer Design",
            steps: &[
                ("Define the stack", "Stick to what you know best (e.g., MERN, Next.js)."),
                ("Create a pricing PDF", "Offer 3 tiers: Basic, Standard, and Premium."),
            ],
        }],
    },
};

// ────────────────────────────────────────────────────────────────────────────
// Design
// ────────────────────────────────────────────────────────────────────────────

static DESIGN: BundleSpec = BundleSpec {
    freelance: PathSpec {
        title: "Social Media Asset Designer",
        description: "Create high-quality social media carousels and banners for LinkedIn/Twitter creators.",
        earnings: "$25 - $60 / hour",
        first_step: "DM 5 active creators offering a free sample design.",
        plan: &[PhaseSpec {
            phase: "Week 1: Portfolio",
            steps: &[
                ("Create 3 sample carousels", "Redesign posts from top creators to show improvement."),
                ("Optimize Twitter/LinkedIn profile", "Make it clear you offer design services."),
            ],
        }],
    },
    product: PathSpec {
        title: "Premium UI Kit or Icon Set",
        description: "Design a specific UI kit (e.g., 'Finance App UI Kit') and sell it on UI8 or Gumroad.",
        earnings: "$29 - $89 per download",
        first_step: "Design the first 5 core screens of your kit.",
        plan: &[PhaseSpec {
            phase: "Phase 1: Research & Sketching",
            steps: &[
                ("Research popular kits", "Read reviews to see what users are complaining about."),
                ("Sketch initial components", "Ensure consistency in spacing and typography."),
            ],
        }],
    },
    service: PathSpec {
        title: "Landing Page Redesign Audit",
        description: "Offer a video audit service where you roast and improve landing pages for conversion.",
        earnings: "$299 - $599 per audit",
        first_step: "Record a free audit for a popular SaaS and tweet it.",
        plan: &[PhaseSpec {
            phase: "Phase 1: Lead Gen",
            steps: &[
                ("Find landing pages with issues", "Look for ads with poor landing pages."),
                ("Record a 5-min Loom video", "Give value first before asking for money."),
            ],
        }],
    },
};

// ────────────────────────────────────────────────────────────────────────────
// Writing / content
// ────────────────────────────────────────────────────────────────────────────

static WRITING: BundleSpec = BundleSpec {
    freelance: PathSpec {
        title: "SEO Blog Content Writer",
        description: "Write in-depth, research-backed articles for B2B SaaS companies.",
        earnings: "$0.10 - $0.30 per word",
        first_step: "Write 3 samples on Medium about topics you know well.",
        plan: &[PhaseSpec {
            phase: "Week 1: Writing Samples",
            steps: &[
                ("Write 3 high-quality articles", "Target keywords related to SaaS marketing."),
                ("Publish on Medium/LinkedIn", "Share your articles in relevant groups."),
            ],
        }],
    },
    product: PathSpec {
        title: "Cold Email Templates Pack",
        description: "Create a set of high-converting email templates for specific industries.",
        earnings: "$27 - $47 per pack",
        first_step: "Collect the best earning emails you've received or written.",
        plan: &[PhaseSpec {
            phase: "Phase 1: Collection",
            steps: &[
                ("Analyze successful emails", "What made you click? What made you reply?"),
                ("Draft 10 templates", "Create templates for different scenarios (e.g., sales, networking)."),
            ],
        }],
    },
    service: PathSpec {
        title: "Newsletter Management",
        description: "Offer to write, format, and send weekly newsletters for busy executives.",
        earnings: "$500 - $1,500 per month/client",
        first_step: "Create a mock newsletter for a target client and send it to them.",
        plan: &[PhaseSpec {
            phase: "Phase 1: Pitching",
            steps: &[
                ("Identify busy executives", "Look for CEOs who post often but have no newsletter."),
                ("Create a sample issue", "Show them exactly what they are missing."),
            ],
        }],
    },
};

fn spec_for(category: SkillCategory) -> &'static BundleSpec {
    match category {
        SkillCategory::Tech => &TECH,
        SkillCategory::Design => &DESIGN,
        SkillCategory::Writing => &WRITING,
        SkillCategory::General => &GENERAL,
    }
}

/// Returns a freshly allocated bundle for the given category.
pub fn bundle_for(category: SkillCategory) -> OpportunityBundle {
    let spec = spec_for(category);
    OpportunityBundle {
        freelance: build_path(&spec.freelance),
        product: build_path(&spec.product),
        service: build_path(&spec.service),
    }
}

fn build_path(spec: &PathSpec) -> OpportunityPath {
    OpportunityPath {
        title: spec.title.to_string(),
        description: spec.description.to_string(),
        earnings: spec.earnings.to_string(),
        first_step: spec.first_step.to_string(),
        execution_plan: spec
            .plan
            .iter()
            .map(|phase| ExecutionPhase {
                phase: phase.phase.to_string(),
                steps: phase
                    .steps
                    .iter()
                    .map(|(action, tip)| ExecutionStep {
                        action: action.to_string(),
                        tip: (!tip.is_empty()).then(|| tip.to_string()),
                    })
                    .collect(),
            })
            .collect(),
    }
}
