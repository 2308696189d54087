//! Static portfolio data shown inside the desktop windows.
//!
//! The window manager never looks inside these payloads. It asks a
//! [`ContentProvider`] for the entry of a window and hands it to that window's
//! skin untouched.

use indoc::indoc;

use crate::window::WindowId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillGroup {
    pub label: &'static str,
    pub items: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Education {
    pub school: &'static str,
    pub degree: &'static str,
    pub honors: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub headline: &'static str,
    pub location: &'static str,
    pub summary: &'static str,
    pub paragraphs: &'static [&'static str],
    pub education: Education,
    pub skills: &'static [SkillGroup],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub title: &'static str,
    pub company: &'static str,
    pub location: &'static str,
    pub period: &'static str,
    pub highlights: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub github: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactLink {
    pub label: &'static str,
    pub display: &'static str,
    pub url: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactCard {
    pub invitation: &'static str,
    pub links: &'static [ContactLink],
}

/// Payload for one window, shaped for the skin that draws it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WindowContent {
    Notes(Profile),
    Messages(&'static [Job]),
    Finder(&'static [Project]),
    Contacts(ContactCard),
}

pub trait ContentProvider {
    fn content(&self, id: WindowId) -> &WindowContent;
}

static SKILLS: [SkillGroup; 5] = [
    SkillGroup {
        label: "Languages",
        items: &["Java", "Python", "JavaScript", "C", "SQL"],
    },
    SkillGroup {
        label: "Frameworks",
        items: &["Spring Boot", "React", "React Native"],
    },
    SkillGroup {
        label: "Cloud",
        items: &["AWS Lambda", "SNS", "SQS", "S3", "CloudFormation"],
    },
    SkillGroup {
        label: "Databases",
        items: &["PostgreSQL", "DynamoDB", "Redis"],
    },
    SkillGroup {
        label: "Tools",
        items: &["Docker", "Git", "DataDog", "Postman", "JIRA"],
    },
];

static ABOUT: [&str; 2] = [
    indoc! {"
        I'm a Senior Software Engineer at Ernst & Young, where I build and optimize
        enterprise-scale applications. My expertise spans cloud migrations, API
        architecture, and leading development teams to deliver high-performance
        solutions.
    "},
    indoc! {"
        I'm passionate about championing AI integration in development workflows,
        having introduced GitHub Copilot and LLM-based tools to accelerate code
        reviews and documentation across teams.
    "},
];

static JOBS: [Job; 2] = [
    Job {
        title: "Senior Software Engineer (Consultant)",
        company: "Ernst & Young (EY)",
        location: "New York, NY",
        period: "Dec 2024 - Present",
        highlights: &[
            "Owned end-to-end migration of 5+ features from on-premise legacy systems to AWS, designing data pipelines and secure transfer protocols",
            "Optimized database queries and introduced Redis caching layer, reducing API latency by ~65%",
            "Engineered CI/CD pipelines using GitHub Actions and CloudFormation, cutting deployment times by ~30% across 12+ microservices",
            "Led on-call rotations and production incident triage with improved observability using DataDog",
        ],
    },
    Job {
        title: "Software Engineer / Staff Technology Consultant",
        company: "Ernst & Young (EY)",
        location: "New York, NY",
        period: "Aug 2022 - Dec 2024",
        highlights: &[
            "Developed Java (Spring Boot) APIs and PostgreSQL data layer for enterprise restaurant platform serving 3,000+ locations",
            "Architected event-driven messaging system using AWS Lambda, SNS, and SQS for asynchronous order and inventory updates",
            "Implemented Protobuf for service-to-service communication, reducing payload sizes by ~40%",
            "Built integration test framework using JUnit and Testcontainers, achieving ~80% test coverage",
            "Mentored junior engineers on microservices patterns and code review standards",
        ],
    },
];

static PROJECTS: [Project; 3] = [
    Project {
        title: "TCG Price Tracker",
        description: "A Python application for tracking trading card game prices. Monitor price changes and get insights on your card collection value.",
        tech: &["Python"],
        github: "https://github.com/tungcodeforfun/tcg-price-tracker",
    },
    Project {
        title: "Workout Tracker",
        description: "An iOS app built with Swift to track and manage workout routines. Log exercises, monitor progress, and stay on top of your fitness goals.",
        tech: &["Swift", "iOS"],
        github: "https://github.com/tungcodeforfun/WorkoutTracker",
    },
    Project {
        title: "TungBot",
        description: "A custom Discord bot built with Python. Features various commands and automation for Discord server management.",
        tech: &["Python", "Discord API"],
        github: "https://github.com/tungcodeforfun/TungBot",
    },
];

static CONTACT_LINKS: [ContactLink; 3] = [
    ContactLink {
        label: "Email",
        display: "tungnguyen1651@gmail.com",
        url: "mailto:tungnguyen1651@gmail.com",
    },
    ContactLink {
        label: "GitHub",
        display: "github.com/tungcodeforfun",
        url: "https://github.com/tungcodeforfun",
    },
    ContactLink {
        label: "LinkedIn",
        display: "linkedin.com/in/tungcodeforfun",
        url: "https://linkedin.com/in/tungcodeforfun",
    },
];

/// The built-in résumé.
#[derive(Debug, Clone)]
pub struct Portfolio {
    notes: WindowContent,
    messages: WindowContent,
    finder: WindowContent,
    contacts: WindowContent,
}

impl Default for Portfolio {
    fn default() -> Self {
        Self::new()
    }
}

impl Portfolio {
    pub fn new() -> Self {
        let profile = Profile {
            name: "Tung Nguyen",
            headline: "Senior Software Engineer",
            location: "New York, NY",
            summary: indoc! {"
                3+ years building scalable cloud solutions at Ernst & Young.
                Specializing in Java, Python, and AWS infrastructure with a track
                record of improving system performance by 70%.
            "},
            paragraphs: &ABOUT,
            education: Education {
                school: "Virginia Tech",
                degree: "B.S. Computer Science | 2022",
                honors: "Dean's List (2020, 2021, 2022) | Beyond Boundaries Scholarship",
            },
            skills: &SKILLS,
        };
        let contact = ContactCard {
            invitation: indoc! {"
                I'm always open to discussing new opportunities, interesting
                projects, or ways to collaborate. Feel free to reach out!
            "},
            links: &CONTACT_LINKS,
        };
        Self {
            notes: WindowContent::Notes(profile),
            messages: WindowContent::Messages(&JOBS),
            finder: WindowContent::Finder(&PROJECTS),
            contacts: WindowContent::Contacts(contact),
        }
    }
}

impl ContentProvider for Portfolio {
    fn content(&self, id: WindowId) -> &WindowContent {
        match id {
            WindowId::About => &self.notes,
            WindowId::Experience => &self.messages,
            WindowId::Projects => &self.finder,
            WindowId::Contact => &self.contacts,
        }
    }
}
