//! Built-in portfolio content

use super::*;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn stat(label: &str, value: &str) -> Stat {
    Stat {
        label: label.to_string(),
        value: value.to_string(),
    }
}

fn achievement(title: &str, desc: &str) -> Achievement {
    Achievement {
        title: title.to_string(),
        desc: desc.to_string(),
    }
}

fn stack(name: &str, level: u8) -> StackItem {
    StackItem {
        name: name.to_string(),
        level,
    }
}

fn skill(name: &str, level: u8, tag: SkillTag, description: &str, experience: &str) -> Skill {
    Skill {
        name: name.to_string(),
        level,
        tag,
        description: description.to_string(),
        experience: experience.to_string(),
    }
}

fn metrics(users: &str, performance: &str) -> Option<Metrics> {
    Some(Metrics {
        users: Some(users.to_string()),
        performance: Some(performance.to_string()),
    })
}

pub(super) fn portfolio() -> Portfolio {
    use ProjectTag::*;
    use SkillTag::*;

    Portfolio {
        brand: "TechBlaze".to_string(),
        owner: Owner {
            full_name: "AbdulRahman Ayinde Ojikutu".to_string(),
            first_name: "AbdulRahman".to_string(),
            email: "techblazecodes@gmail.com".to_string(),
            location: "Lagos, Nigeria".to_string(),
        },
        hero: Hero {
            badge: "Available for opportunities • Lagos, NG".to_string(),
            roles: strings(&[
                "Full Stack Developer",
                "React Specialist",
                "Python Engineer",
                "Django Architect",
                "UI/UX Enthusiast",
            ]),
            pitch: "I craft premium web experiences with clean architecture, glossy UI, and \
                    smooth interactions, specializing in React/TypeScript on the front-end and \
                    Python/Django on the back."
                .to_string(),
            stack: strings(&["React", "TypeScript", "Python", "Django", "Tailwind"]),
        },
        about: About {
            tagline: "Passionate full-stack developer with a love for clean code, beautiful \
                      UIs, and scalable solutions."
                .to_string(),
            story: strings(&[
                "I'm AbdulRahman Ayinde Ojikutu, TechBlaze. Based in Lagos, I craft digital \
                 experiences that merge functionality with premium aesthetics.",
                "Over the past 2+ years, I've grown from \"Hello World\" to architecting \
                 full-stack apps serving real users. I care about correctness, performance, \
                 and delightful interactions.",
            ]),
            personal_stats: vec![
                stat("Based in", "Lagos, Nigeria"),
                stat("Experience", "2+ Years"),
                stat("Focus", "Full Stack"),
                stat("Learning", "Always"),
            ],
            achievements: vec![
                achievement("15+ Projects", "Successfully delivered"),
                achievement("50k+ Lines", "Of clean code written"),
                achievement("99%", "Client satisfaction rate"),
                achievement("Performance", "Optimization expert"),
            ],
            core_stack: vec![
                stack("Python", 95),
                stack("Django", 90),
                stack("React", 92),
                stack("Next.js", 88),
                stack("TypeScript", 85),
                stack("Tailwind CSS", 93),
            ],
            additional_skills: strings(&[
                "PostgreSQL",
                "MongoDB",
                "Redis",
                "Docker",
                "AWS",
                "Git",
                "REST APIs",
                "GraphQL",
                "Framer Motion",
                "Node.js",
                "Express",
                "FastAPI",
            ]),
            principles: vec![
                achievement(
                    "Clean Code",
                    "Not just functional: readable, maintainable, and elegant. Every line has a purpose.",
                ),
                achievement(
                    "User First",
                    "Technology should serve people. UX drives my decisions from day one.",
                ),
                achievement(
                    "Continuous Growth",
                    "The stack evolves fast; so do I. Constant learning, experimenting, and improving.",
                ),
            ],
        },
        skills: vec![
            skill("React", 95, Frontend, "Building dynamic, component-based UIs", "2+ years"),
            skill("TypeScript", 90, Frontend, "Type-safe development & better DX", "1.5+ years"),
            skill("Next.js", 88, Frontend, "Full-stack React framework", "1+ year"),
            skill("Tailwind CSS", 95, Frontend, "Utility-first CSS framework", "2+ years"),
            skill("Python", 92, Backend, "Backend development & automation", "2+ years"),
            skill("Django", 90, Backend, "Robust Python web framework", "2+ years"),
            skill("REST APIs", 88, Backend, "RESTful API design & development", "2+ years"),
            skill("PostgreSQL", 85, DevOps, "Advanced SQL & database design", "1.5+ years"),
            skill("Docker", 80, DevOps, "Containerization & deployment", "1+ year"),
            skill("AWS", 75, DevOps, "Cloud services & infrastructure", "1+ year"),
            skill("Git/GitHub", 95, Tools, "Version control & collaboration", "2+ years"),
            skill("Security/A11y", 78, Tools, "Web security & accessibility", "1+ year"),
        ],
        projects: vec![
            Project {
                title: "TaskMaster Pro".to_string(),
                description: "AI-assisted task management with real-time collaboration and \
                              advanced analytics."
                    .to_string(),
                long_description: Some(
                    "Next.js front-end with a Django REST API. AI prioritization, presence/WS \
                     updates, and a polished analytics suite."
                        .to_string(),
                ),
                tech: strings(&[
                    "Next.js",
                    "TypeScript",
                    "Django",
                    "PostgreSQL",
                    "Redis",
                    "WebSocket",
                ]),
                demo: Some("#".to_string()),
                repo: Some("#".to_string()),
                tags: vec![React, Django, FullStack, Ai],
                featured: true,
                status: ProjectStatus::Live,
                year: "2024".to_string(),
                metrics: metrics("2.5K+", "99.8% uptime"),
            },
            Project {
                title: "FinanceFlow Dashboard".to_string(),
                description: "Real-time financial analytics with risk, portfolios, and reporting."
                    .to_string(),
                long_description: None,
                tech: strings(&["React", "TypeScript", "Node.js", "MongoDB", "D3.js", "WebSocket"]),
                demo: Some("#".to_string()),
                repo: Some("#".to_string()),
                tags: vec![React, Dashboard, FullStack],
                featured: false,
                status: ProjectStatus::Live,
                year: "2024".to_string(),
                metrics: metrics("5K+", "99.9% uptime"),
            },
            Project {
                title: "E-commerce API Suite".to_string(),
                description: "Production-ready commerce APIs with caching, auth, and scaling."
                    .to_string(),
                long_description: None,
                tech: strings(&["Django REST", "PostgreSQL", "Redis", "Docker", "AWS", "Stripe"]),
                demo: Some("#".to_string()),
                repo: Some("#".to_string()),
                tags: vec![Django, Api, ECommerce],
                featured: false,
                status: ProjectStatus::Live,
                year: "2023".to_string(),
                metrics: None,
            },
            Project {
                title: "AI Content Studio".to_string(),
                description: "Multi-model content generation with team workspaces and templates."
                    .to_string(),
                long_description: None,
                tech: strings(&["Next.js", "TypeScript", "Prisma", "OpenAI", "Stripe"]),
                demo: Some("#".to_string()),
                repo: Some("#".to_string()),
                tags: vec![React, Ai, FullStack],
                featured: false,
                status: ProjectStatus::Beta,
                year: "2024".to_string(),
                metrics: None,
            },
            Project {
                title: "Mobile Banking App".to_string(),
                description: "Secure banking with biometric auth and real-time transactions."
                    .to_string(),
                long_description: None,
                tech: strings(&["React Native", "TypeScript", "Node.js", "MongoDB"]),
                demo: Some("#".to_string()),
                repo: None,
                tags: vec![Mobile, FullStack],
                featured: false,
                status: ProjectStatus::InDevelopment,
                year: "2024".to_string(),
                metrics: None,
            },
            Project {
                title: "Analytics Intelligence".to_string(),
                description: "BI with predictive analytics and automated insights.".to_string(),
                long_description: None,
                tech: strings(&["React", "Python", "FastAPI", "PostgreSQL", "Plotly"]),
                demo: Some("#".to_string()),
                repo: Some("#".to_string()),
                tags: vec![React, Dashboard, Ai],
                featured: false,
                status: ProjectStatus::Live,
                year: "2023".to_string(),
                metrics: None,
            },
        ],
        experience: vec![
            Experience {
                company: "Freelance & Open Source".to_string(),
                role: "Senior Full-Stack Developer".to_string(),
                start: "2023".to_string(),
                end: "Present".to_string(),
                location: Some("Remote".to_string()),
                kind: EmploymentType::Freelance,
                impact: "Built 8+ production applications serving 50K+ users".to_string(),
                bullets: strings(&[
                    "Architected and delivered 8+ production React/Next.js applications with 99.9% uptime",
                    "Built scalable Django REST APIs serving 10K+ requests/day with Redis caching",
                    "Optimized performance achieving 95+ Lighthouse scores via code-splitting and SSR",
                ]),
                achievements: strings(&[
                    "99.9% Uptime",
                    "10K+ API Requests/day",
                    "95+ Lighthouse Score",
                ]),
                link: Some("https://github.com/".to_string()),
            },
            Experience {
                company: "Tech Studio".to_string(),
                role: "Senior Frontend Developer".to_string(),
                start: "2022".to_string(),
                end: "2023".to_string(),
                location: Some("Lagos, Nigeria".to_string()),
                kind: EmploymentType::Contract,
                impact: "Reduced development time by 40% across 5 products".to_string(),
                bullets: strings(&[
                    "Developed component library used across 5 products, reducing development time by ~40%",
                    "Implemented WCAG 2.1 AA compliance, improving accessibility scores by ~60%",
                ]),
                achievements: strings(&[
                    "40% Time Reduction",
                    "5 Products",
                    "60% Accessibility Boost",
                ]),
                link: None,
            },
            Experience {
                company: "Digital Agency".to_string(),
                role: "Frontend Developer".to_string(),
                start: "2021".to_string(),
                end: "2022".to_string(),
                location: Some("Lagos, Nigeria".to_string()),
                kind: EmploymentType::Fulltime,
                impact: "Delivered 15+ client projects with 100% satisfaction rate".to_string(),
                bullets: strings(&[
                    "Delivered 15+ responsive websites and web applications for diverse clients",
                    "Collaborated with design teams to implement pixel-perfect UI/UX designs",
                    "Maintained and optimized existing codebases, improving performance by 35%",
                ]),
                achievements: strings(&[
                    "15+ Projects",
                    "100% Client Satisfaction",
                    "35% Performance Gain",
                ]),
                link: None,
            },
        ],
        contact: Contact {
            blurb: "Have an idea or a role in mind? I'd love to hear about it.".to_string(),
            socials: vec![
                SocialLink {
                    label: "GitHub".to_string(),
                    href: "https://github.com/Ayindecodes".to_string(),
                },
                SocialLink {
                    label: "LinkedIn".to_string(),
                    href: "https://linkedin.com/in/ayindecodes".to_string(),
                },
            ],
        },
    }
}
