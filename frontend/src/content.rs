use chrono::NaiveDate;

use crate::portfolio::{Category, Project, Testimonial};

pub const OWNER_NAME: &str = "Berjil Jacob";
pub const HERO_TITLE: &str = "I Make What You Think. So, Just Think!";
pub const HERO_SUBTITLE: &str = "Innovative web developer crafting unique user experiences.";

pub static ABOUT_PARAGRAPHS: [&str; 2] = [
    "I'm a passionate developer and aesthetic UI/UX designer who also has a strong interest in finance and enjoys diving into entrepreneurial ventures.",
    "A dedicated and creative individual with a passion for design, technology, and collaboration, seeking opportunities to contribute innovative solutions and make a meaningful impact.",
];

pub const CONTACT_BLURB: &str = "Interested in working together? Fill out the form below with some info about your project and I will get back to you as soon as I can.";

pub static PROJECTS: [Project; 6] = [
    Project {
        id: 1,
        title: "E-commerce UI Redesign",
        description: "A modern UI redesign for an e-commerce platform",
        image: "/images/project1.jpg",
        link: "https://www.figma.com/file/example1",
        category: Category::UiUx,
    },
    Project {
        id: 2,
        title: "Travel App UI",
        description: "User interface design for a travel planning application",
        image: "/images/project1.jpg",
        link: "https://www.figma.com/file/example2",
        category: Category::UiUx,
    },
    Project {
        id: 3,
        title: "Fitness Tracker App",
        description: "A mobile app for tracking workouts and nutrition",
        image: "/images/project1.jpg",
        link: "https://github.com/example/fitness-app",
        category: Category::AppDev,
    },
    Project {
        id: 4,
        title: "Weather App",
        description: "A simple weather application with geolocation",
        image: "/images/project1.jpg",
        link: "https://github.com/example/weather-app",
        category: Category::AppDev,
    },
    Project {
        id: 5,
        title: "Portfolio Website",
        description: "A responsive portfolio website for a photographer",
        image: "/images/project1.jpg",
        link: "https://www.example-portfolio.com",
        category: Category::WebDev,
    },
    Project {
        id: 6,
        title: "Blog Platform",
        description: "A full-stack blog platform with user authentication",
        image: "/images/project1.jpg",
        link: "https://github.com/example/blog-platform",
        category: Category::WebDev,
    },
];

pub static TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        id: 1,
        name: "Sarah Johnson",
        role: "CEO",
        company: "TechInnovate",
        content: "Berjil's work on our app redesign was exceptional. His attention to detail and innovative solutions greatly improved our user experience.",
        avatar: "/placeholder.svg?height=100&width=100",
    },
    Testimonial {
        id: 2,
        name: "Michael Chen",
        role: "Product Manager",
        company: "GlobalSoft",
        content: "Working with Berjil was a pleasure. He delivered our web application on time and exceeded our expectations in terms of functionality and design.",
        avatar: "/placeholder.svg?height=100&width=100",
    },
    Testimonial {
        id: 3,
        name: "Emily Rodriguez",
        role: "Marketing Director",
        company: "CreativeMinds",
        content: "Berjil's UI/UX skills are top-notch. He transformed our outdated website into a modern, user-friendly platform that our customers love.",
        avatar: "/placeholder.svg?height=100&width=100",
    },
];

pub static SERVICES: [&str; 6] = [
    "UI/UX Design",
    "Web Development",
    "Mobile App Design",
    "Branding",
    "Prototyping",
    "Consulting",
];

pub fn service_blurb(service: &str) -> String {
    format!(
        "Offering professional {} services tailored to your needs.",
        service.to_lowercase()
    )
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tool {
    pub name: &'static str,
    pub icon: &'static str,
}

pub static TOOLBOX: [Tool; 5] = [
    Tool { name: "Flutter", icon: "devicon-flutter-plain" },
    Tool { name: "Node.js", icon: "devicon-nodejs-plain" },
    Tool { name: "WordPress", icon: "devicon-wordpress-plain" },
    Tool { name: "Figma", icon: "devicon-figma-plain" },
    Tool { name: "Firebase", icon: "devicon-firebase-plain" },
];

#[derive(Clone, Debug, PartialEq)]
pub struct SocialLink {
    pub name: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
}

// Profiles are not public yet.
pub static SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink { name: "GitHub", href: "#", icon: "devicon-github-original" },
    SocialLink { name: "LinkedIn", href: "#", icon: "devicon-linkedin-plain" },
    SocialLink { name: "Twitter", href: "#", icon: "devicon-twitter-original" },
];

#[derive(Clone, Debug, PartialEq)]
pub struct AboutFact {
    pub icon: &'static str,
    pub label: &'static str,
    pub value: String,
}

fn birthday() -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(2005, 3, 23)
}

pub fn about_facts() -> Vec<AboutFact> {
    let birthday = birthday()
        .map(|date| date.format("%-d %B %Y").to_string())
        .unwrap_or_default();

    vec![
        AboutFact { icon: "🎂", label: "Birthday", value: birthday },
        AboutFact { icon: "🌐", label: "Website", value: "www.berjiljacob.com".to_string() },
        AboutFact { icon: "✉️", label: "Email", value: "berjiljacob@gmail.com".to_string() },
        AboutFact { icon: "📍", label: "Location", value: "India, Tamil Nadu".to_string() },
        AboutFact {
            icon: "🎓",
            label: "Degree",
            value: "B.Tech Information Technology (In Progress)".to_string(),
        },
        AboutFact { icon: "💼", label: "Freelance", value: "Available".to_string() },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn project_ids_are_unique() {
        let ids: HashSet<u32> = PROJECTS.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), PROJECTS.len());
    }

    #[test]
    fn testimonial_ids_are_unique() {
        let ids: HashSet<u32> = TESTIMONIALS.iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), TESTIMONIALS.len());
    }

    #[test]
    fn service_blurb_lowercases_title() {
        assert_eq!(
            service_blurb("Mobile App Design"),
            "Offering professional mobile app design services tailored to your needs."
        );
        assert_eq!(
            service_blurb("UI/UX Design"),
            "Offering professional ui/ux design services tailored to your needs."
        );
    }

    #[test]
    fn birthday_renders_day_month_year() {
        let facts = about_facts();
        let birthday = facts.iter().find(|f| f.label == "Birthday").map(|f| f.value.as_str());
        assert_eq!(birthday, Some("23 March 2005"));
    }

    #[test]
    fn about_facts_keep_display_order() {
        let labels: Vec<&str> = about_facts().iter().map(|f| f.label).collect();
        assert_eq!(
            labels,
            vec!["Birthday", "Website", "Email", "Location", "Degree", "Freelance"]
        );
    }

    #[test]
    fn toolbox_order() {
        let names: Vec<&str> = TOOLBOX.iter().map(|t| t.name).collect();
        assert_eq!(names, vec!["Flutter", "Node.js", "WordPress", "Figma", "Firebase"]);
    }
}
