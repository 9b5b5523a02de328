//! Testimonials and frequently asked questions.

use serde::Serialize;

/// A quote from a guide reader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    /// Remote portrait. Surfaces that do no network I/O show initials.
    pub avatar_url: &'static str,
    pub quote: &'static str,
}

impl Testimonial {
    /// First letter of up to two name parts, e.g. `SJ` for "Sarah Johnson".
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

/// One accordion entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub static TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        name: "Sarah Johnson",
        role: "Project Manager, ABC Corp",
        avatar_url: "https://randomuser.me/api/portraits/women/44.jpg",
        quote: "This guide has been an invaluable resource for our team. The detailed \
                explanations and practical examples for cost management are top-notch!",
    },
    Testimonial {
        name: "David Lee",
        role: "Unifier Consultant, Innovate Solutions",
        avatar_url: "https://randomuser.me/api/portraits/men/46.jpg",
        quote: "A comprehensive and well-structured guide. It has significantly reduced the \
                time I spend training new users on our Unifier instance.",
    },
    Testimonial {
        name: "Maria Garcia",
        role: "Financial Analyst, BuildWell Inc.",
        avatar_url: "https://randomuser.me/api/portraits/women/65.jpg",
        quote: "As a new administrator, this guide made the learning curve so much smoother. \
                The community and support sections are fantastic.",
    },
];

pub static FAQS: [Faq; 4] = [
    Faq {
        question: "What is the primary purpose of this guide?",
        answer: "This guide serves as a comprehensive resource for understanding and utilizing \
                 Oracle Unifier's Business Processes (BPs), with a special focus on cost \
                 management, reporting, and integrations. It aims to provide clear, actionable \
                 insights for users at all levels.",
    },
    Faq {
        question: "Who is the target audience for this guide?",
        answer: "The guide is designed for a wide range of Unifier users, including project \
                 managers, cost controllers, system administrators, and consultants. Whether \
                 you are new to Unifier or an experienced user, you will find valuable \
                 information here.",
    },
    Faq {
        question: "How often is the content updated?",
        answer: "We strive to keep the content current with the latest Oracle Unifier updates \
                 and best practices. Major updates are rolled out quarterly, with minor \
                 adjustments made as needed.",
    },
    Faq {
        question: "Can I contribute to the guide?",
        answer: "Absolutely! We welcome contributions and suggestions from the community. \
                 Please use the contact form to send us your ideas, and our team will review \
                 them for inclusion in future updates.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_take_first_two_name_parts() {
        assert_eq!(TESTIMONIALS[0].initials(), "SJ");
        let single = Testimonial {
            name: "ada",
            ..TESTIMONIALS[1]
        };
        assert_eq!(single.initials(), "A");
    }
}
