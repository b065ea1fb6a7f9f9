//! Résumé fixtures shared by the engine and route tests.

use crate::models::resume::{
    EducationEntry, ExperienceEntry, LanguageEntry, PersonalInfo, ResumeRecord, SkillEntry,
};

fn skill(name: &str, category: &str, level: u8) -> SkillEntry {
    SkillEntry {
        id: None,
        name: name.to_string(),
        category: category.to_string(),
        level,
    }
}

/// Every section filled in: no formatting issues and the full completeness
/// bonus of 10. Mentions none of "javascript", "react", "docker" or "kubernetes".
pub fn complete_resume() -> ResumeRecord {
    ResumeRecord {
        personal_info: PersonalInfo {
            first_name: "Maya".to_string(),
            last_name: "Okafor".to_string(),
            title: "Senior Backend Engineer".to_string(),
            email: "maya.okafor@example.com".to_string(),
            phone: "+1 555 0142".to_string(),
            location: "Toronto, ON".to_string(),
            website: None,
            linkedin: Some("linkedin.com/in/mayaokafor".to_string()),
            github: None,
        },
        summary: "Backend engineer with eight years of experience building payment platforms, \
                  leading small teams, and shipping dependable services to production."
            .to_string(),
        experience: vec![
            ExperienceEntry {
                id: Some("exp-1".to_string()),
                company: "Northwind Payments".to_string(),
                position: "Senior Backend Engineer".to_string(),
                location: "Toronto, ON".to_string(),
                start_date: "2021-03".to_string(),
                end_date: None,
                current: true,
                description: "Own the settlement pipeline and the ledger service that \
                              reconciles card transactions every night."
                    .to_string(),
                achievements: vec![
                    "Reduced settlement latency by 35% by batching ledger writes".to_string(),
                    "Mentored four engineers through their first on-call rotation".to_string(),
                ],
            },
            ExperienceEntry {
                id: Some("exp-2".to_string()),
                company: "Harbor Logistics".to_string(),
                position: "Software Engineer".to_string(),
                location: "Montreal, QC".to_string(),
                start_date: "2017-06".to_string(),
                end_date: Some("2021-02".to_string()),
                current: false,
                description: "Built shipment tracking services and the internal tooling used \
                              by dispatch to plan weekly routes."
                    .to_string(),
                achievements: vec!["Increased route planning throughput by 20%".to_string()],
            },
        ],
        education: vec![EducationEntry {
            id: Some("edu-1".to_string()),
            institution: "University of Waterloo".to_string(),
            degree: "BSc".to_string(),
            field: "Computer Science".to_string(),
            location: "Waterloo, ON".to_string(),
            start_date: "2012-09".to_string(),
            end_date: Some("2016-05".to_string()),
            current: false,
            description: None,
            gpa: Some("3.7".to_string()),
        }],
        skills: vec![
            skill("Go", "Languages", 5),
            skill("Java", "Languages", 4),
            skill("PostgreSQL", "Databases", 4),
            skill("Kafka", "Messaging", 3),
            skill("Terraform", "Infrastructure", 3),
            skill("gRPC", "Protocols", 4),
            skill("Linux", "Systems", 4),
            skill("Observability", "Operations", 3),
        ],
        languages: vec![LanguageEntry {
            name: "French".to_string(),
            proficiency: "Professional".to_string(),
        }],
        certifications: vec![],
        projects: vec![],
        interests: vec![],
    }
}

/// Personal info without an email, a short-but-valid summary, and nothing else.
pub fn empty_resume() -> ResumeRecord {
    ResumeRecord {
        personal_info: PersonalInfo {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            title: "Analyst".to_string(),
            email: String::new(),
            phone: "555-0100".to_string(),
            location: "London".to_string(),
            ..Default::default()
        },
        summary: "Analyst focused on numerical methods and clear written reports.".to_string(),
        experience: vec![],
        education: vec![],
        skills: vec![],
        languages: vec![],
        certifications: vec![],
        projects: vec![],
        interests: vec![],
    }
}
