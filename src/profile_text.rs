//! Job profile text shown next to the ranking.
//!
//! Only a fixed template is provided. [`build_prompt`] renders the request a
//! model-backed [`ProfileGenerator`] would send.

use crate::model::settings::{JobLevel, JobParameters};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileRequest {
    pub role_name: String,
    pub job_level: JobLevel,
    pub role_purpose: String,
}

impl From<&JobParameters> for ProfileRequest {
    fn from(params: &JobParameters) -> Self {
        Self {
            role_name: params.role_name.clone(),
            job_level: params.job_level,
            role_purpose: params.role_purpose.clone(),
        }
    }
}

pub trait ProfileGenerator {
    fn generate(&self, request: &ProfileRequest) -> String;
}

/// Returns the same placeholder profile for every request.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateProfileGenerator;

const TEMPLATE_PROFILE: &str = "\
Job Requirements
- Strong SQL and Python (pandas/numpy)
- BI Tools (Tableau/Power BI)
- Analytical storytelling and stakeholder communication

Job Description
Turn business questions into data-driven insights. Own the end-to-end analysis workflow, from data extraction, cleaning and modeling to dashboarding.

Key Competencies
- Curiosity & Experimentation
- Quality Delivery Discipline
- Strategic Thinking & Clarity
- Social Empathy & Awareness
";

impl ProfileGenerator for TemplateProfileGenerator {
    fn generate(&self, _request: &ProfileRequest) -> String {
        TEMPLATE_PROFILE.to_string()
    }
}

pub fn build_prompt(request: &ProfileRequest) -> String {
    format!(
        "You are an HR data consultant. Write a concise {} job profile for level {}.\n\
         Role purpose: {}\n\
         Highlight job requirements, description, and key competencies.\n",
        request.role_name, request.job_level, request.role_purpose
    )
}

#[cfg(test)]
#[path = "../tests/src_inline/profile_text.rs"]
mod tests;
