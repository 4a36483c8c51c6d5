//! Static page copy.

pub struct Project {
    pub slug: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub tags: &'static [&'static str],
}

pub struct Role {
    pub period: &'static str,
    pub title: &'static str,
    pub company: &'static str,
    pub summary: &'static str,
}

pub struct ContactEntry {
    pub icon: &'static str,
    pub title: &'static str,
    pub text: &'static str,
}

pub const NAV_LINKS: &[(&str, &str)] = &[
    ("#home", "Home"),
    ("#about", "About"),
    ("#skills", "Skills"),
    ("#projects", "Projects"),
    ("#experience", "Experience"),
    ("#dashboard", "Dashboard"),
    ("#contact", "Contact"),
];

pub const STATS: &[(&str, &str)] = &[
    ("50+", "Projects Completed"),
    ("8+", "Years Experience"),
    ("100%", "Client Satisfaction"),
];

pub const SKILLS: &[(&str, &str, &[&str])] = &[
    ("frontend", "Frontend", &["Rust + WebAssembly", "Yew", "TypeScript", "CSS"]),
    ("backend", "Backend", &["Rust", "Axum", "PostgreSQL", "Redis"]),
    ("tooling", "Tooling", &["Docker", "GitHub Actions", "Terraform", "Linux"]),
];

pub const PROJECTS: &[Project] = &[
    Project {
        slug: "booking",
        title: "Booking Platform",
        summary: "Appointment scheduling for a network of practices with calendar sync.",
        tags: &["Rust", "Yew", "PostgreSQL"],
    },
    Project {
        slug: "analytics",
        title: "Lead Analytics",
        summary: "Funnel reporting that turns raw form leads into weekly dashboards.",
        tags: &["Axum", "Chart.js", "SQL"],
    },
    Project {
        slug: "cli",
        title: "Deploy CLI",
        summary: "One-command deployments for static sites with preview links.",
        tags: &["Rust", "Clap", "S3"],
    },
];

pub const TIMELINE: &[Role] = &[
    Role {
        period: "2021 - Present",
        title: "Senior Software Engineer",
        company: "Freelance",
        summary: "Web platforms and internal tools for small businesses.",
    },
    Role {
        period: "2018 - 2021",
        title: "Software Engineer",
        company: "Agency",
        summary: "Client websites, e-commerce integrations and data pipelines.",
    },
    Role {
        period: "2016 - 2018",
        title: "Junior Developer",
        company: "Startup",
        summary: "Frontend features and the first version of the mobile API.",
    },
];

pub const CONTACTS: &[ContactEntry] = &[
    ContactEntry {
        icon: "fas fa-envelope",
        title: "Email",
        text: "hello@example.com",
    },
    ContactEntry {
        icon: "fas fa-phone",
        title: "Phone",
        text: "+41 79 000 00 00",
    },
    ContactEntry {
        icon: "fab fa-linkedin",
        title: "LinkedIn",
        text: "jane-doe",
    },
    ContactEntry {
        icon: "fas fa-map-marker-alt",
        title: "Location",
        text: "Zurich, Switzerland",
    },
];

pub const CODE_SNIPPET: &str = r#"fn main() {
    let developer = Developer::new("Jane Doe")
        .with_skills(["Rust", "WebAssembly", "Yew"])
        .available(true);

    developer.build_something_great();
}"#;
