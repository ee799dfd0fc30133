//! Built-in sample catalog used by the demo session and tests.

use crate::models::job::JobPosting;

struct SampleJob {
    id: u32,
    title: &'static str,
    company: &'static str,
    location: &'static str,
    employment_type: &'static str,
    salary: &'static str,
    description: &'static str,
    experience: &'static str,
    skills: &'static [&'static str],
}

const SAMPLE_JOBS: &[SampleJob] = &[
    SampleJob {
        id: 1,
        title: "Frontend Developer",
        company: "TechCorp",
        location: "San Francisco, CA",
        employment_type: "Full-time",
        salary: "$80,000 - $120,000",
        description: "Build amazing user interfaces with React and modern web technologies.",
        experience: "2-4 years",
        skills: &["React", "JavaScript", "CSS", "HTML", "Git"],
    },
    SampleJob {
        id: 2,
        title: "Full Stack Engineer",
        company: "Innovation Labs",
        location: "New York, NY",
        employment_type: "Full-time",
        salary: "$90,000 - $140,000",
        description: "Work on cutting-edge projects using MERN stack and cloud technologies.",
        experience: "3-5 years",
        skills: &["React", "Node.js", "MongoDB", "Express", "AWS"],
    },
    SampleJob {
        id: 3,
        title: "Software Engineer Intern",
        company: "StartupXYZ",
        location: "Austin, TX",
        employment_type: "Internship",
        salary: "$25/hour",
        description: "Learn and contribute to our growing platform while working with experienced engineers.",
        experience: "0-1 years",
        skills: &["Python", "JavaScript", "Git", "SQL"],
    },
    SampleJob {
        id: 4,
        title: "React Developer",
        company: "Digital Solutions",
        location: "Remote",
        employment_type: "Contract",
        salary: "$60-80/hour",
        description: "Build responsive web applications for clients across various industries.",
        experience: "2-3 years",
        skills: &["React", "TypeScript", "Next.js", "Tailwind CSS"],
    },
    SampleJob {
        id: 5,
        title: "Backend Developer",
        company: "DataFlow Inc",
        location: "Seattle, WA",
        employment_type: "Full-time",
        salary: "$85,000 - $125,000",
        description: "Design and maintain scalable backend systems and APIs.",
        experience: "3-6 years",
        skills: &["Node.js", "Python", "PostgreSQL", "Docker", "Kubernetes"],
    },
];

/// Returns the five-posting sample catalog, in catalog order.
pub fn sample_catalog() -> Vec<JobPosting> {
    SAMPLE_JOBS
        .iter()
        .map(|s| JobPosting {
            id: s.id,
            title: s.title.to_string(),
            company: s.company.to_string(),
            location: s.location.to_string(),
            employment_type: s.employment_type.to_string(),
            salary: s.salary.to_string(),
            description: s.description.to_string(),
            experience: s.experience.to_string(),
            skills: s.skills.iter().map(|k| k.to_string()).collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_catalog_ids_in_order() {
        let ids: Vec<u32> = sample_catalog().iter().map(|j| j.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_every_sample_job_has_skills() {
        assert!(sample_catalog().iter().all(|j| !j.skills.is_empty()));
    }
}
