// Static copy for the landing page sections.

pub struct Product {
    pub title: &'static str,
    pub icon: &'static str,
    pub status: &'static str,
    pub copy: &'static str,
}

pub struct RoadmapStep {
    pub title: &'static str,
    pub copy: &'static str,
}

pub struct Technology {
    pub label: &'static str,
    pub icon: &'static str,
}

pub const PRINCIPLES: &[&str] = &[
    "Developer-first mindset",
    "Clean, composable architecture",
    "Real-world problem solving",
    "Built by an engineer, not marketers",
];

pub const PRODUCTS: &[Product] = &[
    Product {
        title: "AI Developer Tools",
        icon: "fa-microchip",
        status: "In exploration",
        copy: "Code-aware assistants, context-rich prompts, and debugging workflows tuned for real projects.",
    },
    Product {
        title: "Automation Utilities",
        icon: "fa-diagram-project",
        status: "In development",
        copy: "Thin, composable services that wire APIs, webhooks, and internal tools together.",
    },
    Product {
        title: "Productivity Dashboards",
        icon: "fa-gauge",
        status: "Coming soon",
        copy: "Single-pane dashboards for tracking metrics, incidents, and product velocity.",
    },
    Product {
        title: "API-first Services",
        icon: "fa-server",
        status: "In design",
        copy: "Well-documented, rate-limited APIs with predictable contracts and strong observability.",
    },
    Product {
        title: "Experimental AI Agents",
        icon: "fa-robot",
        status: "R&D",
        copy: "Task-oriented agents for triaging issues, routing support, and synthesizing product insights.",
    },
    Product {
        title: "Internal Tooling Kits",
        icon: "fa-box",
        status: "Planned",
        copy: "Starter kits that combine UI primitives, workflows, and infra best practices.",
    },
];

pub const REASONS: &[&str] = &[
    "Built by a full-stack engineer & designer",
    "Performance and UX as first-class citizens",
    "No vanity features, only shipping-critical surfaces",
    "Fast iteration and experimentation with AI-native workflows",
];

pub const FLOW_STEPS: &[&str] = &[
    "Design in Figma / whiteboard the flow.",
    "Prototype UI with Tailwind + shadcn primitives.",
    "Wire APIs with Next.js, Firebase or Supabase.",
    "Layer automation and AI with Python & Genkit.",
    "Push via GitHub, monitor, iterate.",
];

pub const SKILLS: &[&str] = &["Frontend", "Backend", "AI", "UI/UX", "Automation", "DevOps"];

pub const TECHNOLOGIES: &[Technology] = &[
    Technology { label: "React", icon: "fa-code" },
    Technology { label: "Next.js", icon: "fa-rocket" },
    Technology { label: "Flutter", icon: "fa-microchip" },
    Technology { label: "Firebase", icon: "fa-server" },
    Technology { label: "Supabase", icon: "fa-server" },
    Technology { label: "Python", icon: "fa-microchip" },
    Technology { label: "REST APIs", icon: "fa-server" },
    Technology { label: "GitHub", icon: "fa-code-branch" },
];

pub const ROADMAP: &[RoadmapStep] = &[
    RoadmapStep {
        title: "Open SaaS ecosystem",
        copy: "Interoperable tools that work together but remain independently useful.",
    },
    RoadmapStep {
        title: "AI-first tooling",
        copy: "Treat AI as a core primitive, not an add-on widget.",
    },
    RoadmapStep {
        title: "Developer community",
        copy: "A space for sharing workflows, templates, and implementation notes.",
    },
    RoadmapStep {
        title: "Scalable products",
        copy: "Patterns that survive real-world traffic, churn, and iteration.",
    },
    RoadmapStep {
        title: "Open documentation",
        copy: "Clear, example-driven docs and playbooks for each product.",
    },
];
