//! Compiled-in service catalog.

use crate::domain::entities::{ServiceCategory, ServiceEntry};
use crate::domain::repositories::CatalogRepository;

/// Catalog repository backed by the [`CATALOG`] constant.
#[derive(Debug, Default, Clone, Copy)]
pub struct StaticCatalogRepository;

impl StaticCatalogRepository {
    pub fn new() -> Self {
        Self
    }
}

impl CatalogRepository for StaticCatalogRepository {
    fn categories(&self) -> &'static [ServiceCategory] {
        CATALOG
    }

    fn find_category(&self, slug: &str) -> Option<&'static ServiceCategory> {
        CATALOG.iter().find(|c| c.slug == slug)
    }
}

pub static CATALOG: &[ServiceCategory] = &[
    ServiceCategory {
        slug: "grc",
        title: "Governance, Risk & Compliance",
        tagline: "Turn regulation into a competitive advantage",
        description: "We build pragmatic governance programs that satisfy auditors and regulators without slowing the business down.",
        icon: "scale",
        entries: GRC,
    },
    ServiceCategory {
        slug: "tprm",
        title: "Third-Party Risk Management",
        tagline: "Know the risk your vendors bring in",
        description: "End-to-end oversight of suppliers, from onboarding due diligence to continuous monitoring and offboarding.",
        icon: "network",
        entries: TPRM,
    },
    ServiceCategory {
        slug: "application-security",
        title: "Application Security",
        tagline: "Ship secure software at delivery speed",
        description: "Security embedded across the software lifecycle, from threat modeling through testing and remediation.",
        icon: "code",
        entries: APPSEC,
    },
    ServiceCategory {
        slug: "cloud-security",
        title: "Cloud Security",
        tagline: "Secure by default in every cloud",
        description: "Architecture reviews, posture management and hardening for AWS, Azure and Google Cloud workloads.",
        icon: "cloud",
        entries: CLOUD,
    },
    ServiceCategory {
        slug: "mobile-security",
        title: "Mobile Security",
        tagline: "Protect the apps your customers carry",
        description: "Testing and hardening of iOS and Android applications and the APIs behind them.",
        icon: "smartphone",
        entries: MOBILE,
    },
    ServiceCategory {
        slug: "bcms",
        title: "Business Continuity Management",
        tagline: "Stay operational when the unexpected happens",
        description: "Business continuity and disaster recovery programs aligned with ISO 22301.",
        icon: "refresh",
        entries: BCMS,
    },
];

const GRC: &[ServiceEntry] = &[
    ServiceEntry {
        slug: "iso-27001",
        title: "ISO 27001 Implementation",
        description: "Design and implement an information security management system ready for certification.",
        icon: "award",
        features: &[
            "Gap analysis against Annex A controls",
            "Risk assessment and treatment plan",
            "Policy and procedure library",
            "Internal audit and certification support",
        ],
    },
    ServiceEntry {
        slug: "risk-assessment",
        title: "Enterprise Risk Assessment",
        description: "Identify, quantify and prioritise information risks across the organisation.",
        icon: "activity",
        features: &[
            "Asset and threat inventory",
            "Likelihood and impact scoring",
            "Risk register and heat maps",
            "Board-level reporting",
        ],
    },
    ServiceEntry {
        slug: "regulatory-compliance",
        title: "Regulatory Compliance",
        description: "Map obligations such as GDPR, PCI DSS and SOC 2 to controls you can evidence.",
        icon: "file-check",
        features: &[
            "Obligation mapping",
            "Control testing",
            "Evidence collection workflows",
            "Audit readiness reviews",
        ],
    },
    ServiceEntry {
        slug: "policy-development",
        title: "Policy Development",
        description: "Clear, enforceable security policies written for the people who have to follow them.",
        icon: "book",
        features: &[
            "Policy framework design",
            "Acceptable use and access policies",
            "Annual review cycle",
        ],
    },
];

const TPRM: &[ServiceEntry] = &[
    ServiceEntry {
        slug: "vendor-risk-assessment",
        title: "Vendor Risk Assessment",
        description: "Structured due diligence on suppliers before and during the relationship.",
        icon: "clipboard",
        features: &[
            "Tiering by criticality",
            "Security questionnaires",
            "Evidence review",
            "Risk acceptance workflow",
        ],
    },
    ServiceEntry {
        slug: "continuous-monitoring",
        title: "Continuous Vendor Monitoring",
        description: "Ongoing visibility into vendor posture, breaches and financial health.",
        icon: "radar",
        features: &[
            "External attack surface ratings",
            "Breach and news alerts",
            "Quarterly posture reports",
        ],
    },
    ServiceEntry {
        slug: "contract-security",
        title: "Contract Security Clauses",
        description: "Security and privacy terms that give you leverage when things go wrong.",
        icon: "file-text",
        features: &[
            "Right-to-audit clauses",
            "Breach notification terms",
            "Data processing agreements",
        ],
    },
];

const APPSEC: &[ServiceEntry] = &[
    ServiceEntry {
        slug: "penetration-testing",
        title: "Web Application Penetration Testing",
        description: "Manual, OWASP-aligned testing that finds what scanners miss.",
        icon: "target",
        features: &[
            "OWASP Top 10 coverage",
            "Business logic testing",
            "Authenticated and unauthenticated scope",
            "Retest of fixed findings",
        ],
    },
    ServiceEntry {
        slug: "secure-code-review",
        title: "Secure Code Review",
        description: "Line-by-line review of high-risk code paths by experienced engineers.",
        icon: "search",
        features: &[
            "Manual review with SAST triage",
            "Framework-specific checks",
            "Developer walkthroughs",
        ],
    },
    ServiceEntry {
        slug: "devsecops",
        title: "DevSecOps Enablement",
        description: "Security checks wired into CI/CD so issues are caught before release.",
        icon: "git-branch",
        features: &[
            "Pipeline security gates",
            "Dependency and secret scanning",
            "Security champions program",
        ],
    },
];

const CLOUD: &[ServiceEntry] = &[
    ServiceEntry {
        slug: "cloud-security-assessment",
        title: "Cloud Security Assessment",
        description: "Configuration and architecture review against CIS benchmarks and provider best practice.",
        icon: "cloud",
        features: &[
            "IAM and identity review",
            "Network segmentation analysis",
            "Logging and detection coverage",
            "Prioritised remediation roadmap",
        ],
    },
    ServiceEntry {
        slug: "cspm",
        title: "Cloud Posture Management",
        description: "Continuous detection of misconfiguration across accounts and subscriptions.",
        icon: "eye",
        features: &[
            "Multi-account coverage",
            "Drift detection",
            "Compliance dashboards",
        ],
    },
    ServiceEntry {
        slug: "container-security",
        title: "Container & Kubernetes Security",
        description: "Hardening of images, clusters and runtime for containerised workloads.",
        icon: "box",
        features: &[
            "Image scanning",
            "Cluster hardening",
            "Runtime policy enforcement",
        ],
    },
];

const MOBILE: &[ServiceEntry] = &[
    ServiceEntry {
        slug: "mobile-app-testing",
        title: "Mobile Application Testing",
        description: "Static and dynamic testing of iOS and Android apps against OWASP MASVS.",
        icon: "smartphone",
        features: &[
            "MASVS-aligned test plan",
            "Reverse engineering resistance",
            "Local storage and crypto review",
        ],
    },
    ServiceEntry {
        slug: "mobile-api-security",
        title: "Mobile API Security",
        description: "Testing of the backend APIs that mobile apps depend on.",
        icon: "server",
        features: &[
            "Authentication and session testing",
            "Authorization bypass checks",
            "Rate limiting review",
        ],
    },
];

const BCMS: &[ServiceEntry] = &[
    ServiceEntry {
        slug: "business-impact-analysis",
        title: "Business Impact Analysis",
        description: "Identify critical processes and the cost of their disruption.",
        icon: "bar-chart",
        features: &[
            "Process criticality ranking",
            "RTO and RPO definition",
            "Dependency mapping",
        ],
    },
    ServiceEntry {
        slug: "disaster-recovery",
        title: "Disaster Recovery Planning",
        description: "Recovery strategies and runbooks tested before they are needed.",
        icon: "life-buoy",
        features: &[
            "Recovery strategy design",
            "Runbook authoring",
            "Tabletop and failover exercises",
        ],
    },
    ServiceEntry {
        slug: "iso-22301",
        title: "ISO 22301 Readiness",
        description: "Prepare your continuity program for ISO 22301 certification.",
        icon: "award",
        features: &[
            "Gap assessment",
            "Program documentation",
            "Internal audit",
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_slugs_are_unique() {
        let categories: HashSet<_> = CATALOG.iter().map(|c| c.slug).collect();
        assert_eq!(categories.len(), CATALOG.len());

        for category in CATALOG {
            let entries: HashSet<_> = category.entries.iter().map(|e| e.slug).collect();
            assert_eq!(entries.len(), category.entries.len(), "{}", category.slug);
        }
    }

    #[test]
    fn test_every_entry_has_features() {
        for category in CATALOG {
            assert!(!category.entries.is_empty());
            for entry in category.entries {
                assert!(!entry.features.is_empty(), "{}", entry.slug);
            }
        }
    }

    #[test]
    fn test_find_category() {
        let repo = StaticCatalogRepository::new();
        assert_eq!(repo.find_category("tprm").unwrap().entries.len(), 3);
        assert!(repo.find_category("quantum").is_none());
    }
}
