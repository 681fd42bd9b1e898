//! Compiled-in news posts.

use crate::domain::entities::BlogPost;
use crate::domain::repositories::PostRepository;

/// Post repository backed by the [`POSTS`] constant.
#[derive(Debug, Default, Clone, Copy)]
pub struct StaticPostRepository;

impl StaticPostRepository {
    pub fn new() -> Self {
        Self
    }
}

impl PostRepository for StaticPostRepository {
    fn all(&self) -> &'static [BlogPost] {
        POSTS
    }
}

pub static POSTS: &[BlogPost] = &[
    BlogPost {
        id: 1,
        title: "Zero Trust Architecture: Beyond the Buzzword",
        excerpt: "What a realistic zero trust rollout looks like for a mid-sized enterprise, and where most programs stall.",
        category: "cybersecurity",
        author: "Sarah Chen",
        date: "2024-03-15",
        read_time: "8 min read",
        tags: &["Zero Trust", "Network Security", "Identity"],
        likes: 142,
        comments: 23,
    },
    BlogPost {
        id: 2,
        title: "Preparing for Your First ISO 27001 Audit",
        excerpt: "A practical checklist covering scope, the statement of applicability and the evidence auditors ask for first.",
        category: "compliance",
        author: "Michael Torres",
        date: "2024-03-10",
        read_time: "6 min read",
        tags: &["ISO 27001", "Audit", "ISMS"],
        likes: 98,
        comments: 12,
    },
    BlogPost {
        id: 3,
        title: "Ransomware in 2024: Double Extortion Goes Mainstream",
        excerpt: "Attackers now steal before they encrypt. Here is how detection and backup strategy need to change.",
        category: "cybersecurity",
        author: "Priya Natarajan",
        date: "2024-03-05",
        read_time: "7 min read",
        tags: &["Ransomware", "Incident Response", "Backups"],
        likes: 210,
        comments: 41,
    },
    BlogPost {
        id: 4,
        title: "Shared Responsibility Is Not Shared Accountability",
        excerpt: "Common cloud misconfigurations we find in assessments and who actually owns fixing them.",
        category: "cloud",
        author: "David Okafor",
        date: "2024-02-28",
        read_time: "5 min read",
        tags: &["Cloud Security", "AWS", "Azure"],
        likes: 76,
        comments: 9,
    },
    BlogPost {
        id: 5,
        title: "Your Vendors Are Your Attack Surface",
        excerpt: "Lessons from recent supply chain breaches and how to tier suppliers by the risk they carry.",
        category: "risk-management",
        author: "Emma Lindqvist",
        date: "2024-02-20",
        read_time: "6 min read",
        tags: &["TPRM", "Supply Chain", "Vendor Risk"],
        likes: 64,
        comments: 7,
    },
    BlogPost {
        id: 6,
        title: "Shifting Left Without Slowing Down",
        excerpt: "Integrating SAST, dependency scanning and secret detection into CI without drowning developers in noise.",
        category: "application-security",
        author: "Sarah Chen",
        date: "2024-02-14",
        read_time: "9 min read",
        tags: &["DevSecOps", "SAST", "CI/CD"],
        likes: 120,
        comments: 18,
    },
    BlogPost {
        id: 7,
        title: "Phishing Simulations That Actually Change Behaviour",
        excerpt: "Why click rates are the wrong metric and what to measure instead.",
        category: "cybersecurity",
        author: "Michael Torres",
        date: "2024-02-07",
        read_time: "4 min read",
        tags: &["Awareness", "Phishing", "Training"],
        likes: 55,
        comments: 6,
    },
    BlogPost {
        id: 8,
        title: "Testing Your Continuity Plan Before Reality Does",
        excerpt: "Tabletop exercises that expose the gaps in recovery time objectives on paper.",
        category: "compliance",
        author: "Emma Lindqvist",
        date: "2024-01-30",
        read_time: "5 min read",
        tags: &["BCMS", "ISO 22301", "Disaster Recovery"],
        likes: 43,
        comments: 4,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique_and_sorted_newest_first() {
        let mut ids: Vec<u32> = POSTS.iter().map(|p| p.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), POSTS.len());

        assert!(POSTS.windows(2).all(|w| w[0].date >= w[1].date));
    }
}
