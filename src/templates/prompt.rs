//! Prompt construction for generated cover letters

use super::models::Tone;
use crate::jobs::models::Job;
use crate::profile::models::Profile;

pub const SYSTEM_PROMPT: &str =
    "You are a professional career coach helping write compelling cover letters.";

pub fn cover_letter_prompt(job: &Job, profile: &Profile, tone: Tone) -> String {
    let skills = if profile.skills.is_empty() {
        "Not specified".to_string()
    } else {
        profile.skills.join(", ")
    };
    let experience = serde_json::to_string(&profile.experience).unwrap_or_else(|_| "[]".to_string());

    format!(
        "Generate a professional cover letter for the following job application:\n\
         \n\
         Job Title: {title}\n\
         Company: {company}\n\
         Job Description: {description}\n\
         \n\
         Applicant Information:\n\
         Name: {name}\n\
         Skills: {skills}\n\
         Experience: {experience}\n\
         Summary: {summary}\n\
         \n\
         Tone: {tone}\n\
         \n\
         Please write a compelling cover letter that highlights relevant experience and \
         enthusiasm for the role. Keep it concise (3-4 paragraphs).",
        title = job.title,
        company = job.company,
        description = job.description.as_deref().unwrap_or("Not provided"),
        name = profile.name.as_deref().unwrap_or("Applicant"),
        skills = skills,
        experience = experience,
        summary = profile.summary.as_deref().unwrap_or("Not provided"),
        tone = tone.as_str(),
    )
}
