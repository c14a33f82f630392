//! Fixed illustrative dataset behind the "Load sample" action.

use crate::models::form::{Certification, Education, LinkField, PersonalInfo, WorkExperience};

pub fn sample_personal() -> PersonalInfo {
    PersonalInfo {
        full_name: "Alex Morgan".to_string(),
        headline: "Senior Software Engineer".to_string(),
        email: "alex.morgan@example.com".to_string(),
        phone: "+1 (555) 014-2387".to_string(),
        location: "Seattle, WA".to_string(),
        linkedin: LinkField {
            url: "https://www.linkedin.com/in/alexmorgan".to_string(),
            label: "LinkedIn".to_string(),
            show_as_link: true,
        },
        portfolio: LinkField {
            url: "https://alexmorgan.dev".to_string(),
            label: "Portfolio".to_string(),
            show_as_link: true,
        },
        summary: "Backend engineer with 8 years of experience building reliable, \
                  high-throughput services. Comfortable owning systems from design \
                  through on-call, and mentoring engineers along the way."
            .to_string(),
        skills: "Rust, Go, PostgreSQL, Kubernetes, AWS, gRPC, Distributed Systems, CI/CD"
            .to_string(),
    }
}

pub fn sample_experience() -> Vec<WorkExperience> {
    vec![
        WorkExperience {
            title: "Senior Software Engineer".to_string(),
            company: "Northwind Logistics".to_string(),
            location: "Seattle, WA".to_string(),
            start_date: "Mar 2021".to_string(),
            end_date: "Present".to_string(),
            description: "- Led a team of 5 engineers rebuilding the shipment tracking pipeline\n\
                          - Cut p99 API latency from 900ms to 120ms by introducing a caching tier\n\
                          - Designed the event schema now used by 14 downstream services\n\
                          - Ran the on-call rotation and halved monthly incident count"
                .to_string(),
        },
        WorkExperience {
            title: "Software Engineer".to_string(),
            company: "Bluefin Analytics".to_string(),
            location: "Portland, OR".to_string(),
            start_date: "Jun 2017".to_string(),
            end_date: "Feb 2021".to_string(),
            description: "• Built the ingestion service processing 2B events per day\n\
                          • Migrated reporting from nightly batch jobs to streaming\n\
                          • Introduced property-based testing across the billing code\n\
                          • Mentored 3 interns, two of whom joined full time"
                .to_string(),
        },
    ]
}

pub fn sample_education() -> Vec<Education> {
    vec![
        Education {
            degree: "M.S. Computer Science".to_string(),
            school: "University of Washington".to_string(),
            location: "Seattle, WA".to_string(),
            graduation_date: "May 2017".to_string(),
            gpa: "3.8".to_string(),
        },
        Education {
            degree: "B.S. Computer Engineering".to_string(),
            school: "Oregon State University".to_string(),
            location: "Corvallis, OR".to_string(),
            graduation_date: "Jun 2015".to_string(),
            gpa: String::new(),
        },
    ]
}

pub fn sample_certifications() -> Vec<Certification> {
    vec![
        Certification {
            name: "AWS Certified Solutions Architect – Associate".to_string(),
            issuer: "Amazon Web Services".to_string(),
            date: "Nov 2023".to_string(),
        },
        Certification {
            name: "Certified Kubernetes Administrator".to_string(),
            issuer: "Cloud Native Computing Foundation".to_string(),
            date: "Apr 2022".to_string(),
        },
        Certification {
            name: "Professional Scrum Master I".to_string(),
            issuer: "Scrum.org".to_string(),
            date: "Sep 2020".to_string(),
        },
    ]
}
