//! Demo job listings inserted by the admin seed endpoint

use crate::jobs::models::{EmploymentType, ExperienceLevel, LocationType, NewJob};

struct DemoJob {
    title: &'static str,
    company: &'static str,
    location: &'static str,
    location_type: LocationType,
    salary_range: (i64, i64),
    description: &'static str,
    requirements: [&'static str; 4],
    benefits: [&'static str; 4],
    experience_level: ExperienceLevel,
}

const DEMO_JOBS: [DemoJob; 6] = [
    DemoJob {
        title: "Senior Frontend Developer",
        company: "TechCorp Inc.",
        location: "San Francisco, CA",
        location_type: LocationType::Hybrid,
        salary_range: (150_000, 180_000),
        description: "We are looking for a Senior Frontend Developer to join our team. You will be responsible for building and maintaining our web applications using React, TypeScript, and modern frontend technologies.",
        requirements: [
            "5+ years of experience with React",
            "Strong TypeScript skills",
            "Experience with state management",
            "Knowledge of testing frameworks",
        ],
        benefits: ["Health insurance", "401k matching", "Remote work options", "Unlimited PTO"],
        experience_level: ExperienceLevel::Senior,
    },
    DemoJob {
        title: "Full Stack Engineer",
        company: "StartupXYZ",
        location: "New York, NY",
        location_type: LocationType::Remote,
        salary_range: (120_000, 160_000),
        description: "Join our fast-growing startup as a Full Stack Engineer. Work on exciting projects using Node.js, React, and PostgreSQL.",
        requirements: [
            "3+ years of full stack experience",
            "Node.js and React proficiency",
            "Database design skills",
            "API development experience",
        ],
        benefits: ["Equity package", "Flexible hours", "Learning budget", "Team retreats"],
        experience_level: ExperienceLevel::Mid,
    },
    DemoJob {
        title: "Junior Software Developer",
        company: "Innovation Labs",
        location: "Austin, TX",
        location_type: LocationType::Onsite,
        salary_range: (70_000, 90_000),
        description: "Great opportunity for a junior developer to grow their skills. Mentorship program included.",
        requirements: [
            "CS degree or bootcamp graduate",
            "Basic programming knowledge",
            "Eagerness to learn",
            "Team player",
        ],
        benefits: ["Mentorship program", "Training budget", "Health benefits", "Gym membership"],
        experience_level: ExperienceLevel::Entry,
    },
    DemoJob {
        title: "DevOps Engineer",
        company: "CloudScale",
        location: "Seattle, WA",
        location_type: LocationType::Hybrid,
        salary_range: (140_000, 170_000),
        description: "Looking for a DevOps Engineer to help us scale our infrastructure. Experience with AWS, Kubernetes, and CI/CD required.",
        requirements: [
            "AWS certification preferred",
            "Kubernetes experience",
            "CI/CD pipeline expertise",
            "Infrastructure as code",
        ],
        benefits: ["Stock options", "Remote flexibility", "Conference budget", "Premium healthcare"],
        experience_level: ExperienceLevel::Senior,
    },
    DemoJob {
        title: "Product Designer",
        company: "DesignFirst",
        location: "Los Angeles, CA",
        location_type: LocationType::Remote,
        salary_range: (110_000, 140_000),
        description: "We need a talented Product Designer to create beautiful and intuitive user experiences.",
        requirements: [
            "Figma expertise",
            "User research experience",
            "Design system knowledge",
            "Prototyping skills",
        ],
        benefits: ["Creative freedom", "Design tools budget", "Flexible schedule", "Health & dental"],
        experience_level: ExperienceLevel::Mid,
    },
    DemoJob {
        title: "Data Scientist",
        company: "DataDriven Co",
        location: "Boston, MA",
        location_type: LocationType::Hybrid,
        salary_range: (130_000, 160_000),
        description: "Join our data science team to build ML models and derive insights from large datasets.",
        requirements: [
            "Python and SQL proficiency",
            "ML/AI experience",
            "Statistics background",
            "Communication skills",
        ],
        benefits: ["Research time", "Conference attendance", "Competitive salary", "Parental leave"],
        experience_level: ExperienceLevel::Mid,
    },
];

/// Formats 150000 as "$150,000"
fn dollars(amount: i64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    format!("${}", out)
}

pub fn demo_jobs() -> Vec<NewJob> {
    DEMO_JOBS
        .iter()
        .map(|demo| {
            let (min, max) = demo.salary_range;
            NewJob {
                title: demo.title.to_string(),
                company: demo.company.to_string(),
                location: Some(demo.location.to_string()),
                location_type: demo.location_type,
                salary: Some(format!("{} - {}", dollars(min), dollars(max))),
                salary_min: Some(min),
                salary_max: Some(max),
                description: Some(demo.description.to_string()),
                requirements: demo.requirements.iter().map(|s| s.to_string()).collect(),
                benefits: demo.benefits.iter().map(|s| s.to_string()).collect(),
                employment_type: EmploymentType::FullTime,
                experience_level: Some(demo.experience_level),
                application_url: None,
                job_board_id: None,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Validator;
    use crate::jobs::validators::NewJobValidator;

    #[test]
    fn test_dollars() {
        assert_eq!(dollars(70_000), "$70,000");
        assert_eq!(dollars(150_000), "$150,000");
        assert_eq!(dollars(1_250_000), "$1,250,000");
        assert_eq!(dollars(999), "$999");
    }

    #[test]
    fn test_demo_jobs() {
        let jobs = demo_jobs();
        let companies: Vec<&str> = jobs.iter().map(|j| j.company.as_str()).collect();
        assert_eq!(
            companies,
            vec![
                "TechCorp Inc.",
                "StartupXYZ",
                "Innovation Labs",
                "CloudScale",
                "DesignFirst",
                "DataDriven Co"
            ]
        );
        assert_eq!(jobs[0].salary.as_deref(), Some("$150,000 - $180,000"));
        assert!(jobs.iter().all(|j| j.requirements.len() == 4 && j.benefits.len() == 4));
    }

    #[test]
    fn test_demo_jobs_pass_job_validation() {
        for job in demo_jobs() {
            let result = NewJobValidator.validate(&job);
            assert!(result.is_valid, "{}: {:?}", job.title, result.errors);
        }
    }
}
