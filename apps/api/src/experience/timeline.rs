//! Display views of the experience timeline, one entry per company.

use axum::{extract::State, Json};
use chrono::{Local, NaiveDate};
use serde::Serialize;

use crate::experience::duration::{company_summary_at, date_range_label, role_duration_at};
use crate::models::content::{Company, Role};
use crate::state::AppState;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyTimeline {
    pub company: String,
    pub location: Option<String>,
    pub logo_url: Option<String>,
    /// e.g. "Nov 2024 — Present · 2 yrs"
    pub summary: String,
    pub roles: Vec<RoleTimeline>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleTimeline {
    pub title: String,
    pub employment_type: String,
    pub date_range: String,
    pub duration: String,
    pub description: Option<String>,
    pub skills: Vec<String>,
}

pub fn build_timeline(companies: &[Company], today: NaiveDate) -> Vec<CompanyTimeline> {
    companies
        .iter()
        .map(|company| CompanyTimeline {
            company: company.name.clone(),
            location: company.location.clone(),
            logo_url: company.logo_url.clone(),
            summary: company_summary_at(&company.roles, today),
            roles: company
                .roles
                .iter()
                .map(|role| role_timeline(role, today))
                .collect(),
        })
        .collect()
}

fn role_timeline(role: &Role, today: NaiveDate) -> RoleTimeline {
    RoleTimeline {
        title: role.title.clone(),
        employment_type: role.employment_type.clone(),
        date_range: date_range_label(&role.date_range),
        duration: role_duration_at(&role.date_range, today),
        description: role.description.clone(),
        skills: role.skills.clone(),
    }
}

/// GET /api/v1/experience
pub async fn handle_get_experience(State(state): State<AppState>) -> Json<Vec<CompanyTimeline>> {
    let today = Local::now().date_naive();
    Json(build_timeline(&state.content.experiences, today))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::content::DateRange;

    fn sample_company() -> Company {
        Company {
            name: "Acme Analytics".to_string(),
            location: Some("Pune, India".to_string()),
            logo_url: None,
            roles: vec![
                Role {
                    title: "Software Engineer".to_string(),
                    employment_type: "Full-time".to_string(),
                    date_range: DateRange::new("Jun 2025", "Present"),
                    description: Some("Platform work".to_string()),
                    skills: vec!["Rust".to_string()],
                },
                Role {
                    title: "Intern".to_string(),
                    employment_type: "Internship".to_string(),
                    date_range: DateRange::new("Nov 2024", "Jun 2025"),
                    description: None,
                    skills: vec![],
                },
            ],
        }
    }

    #[test]
    fn test_build_timeline_company_and_roles() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 17).unwrap();
        let timeline = build_timeline(&[sample_company()], today);

        assert_eq!(timeline.len(), 1);
        let company = &timeline[0];
        assert_eq!(company.company, "Acme Analytics");
        assert_eq!(company.summary, "Nov 2024 — Present · 2 yrs");
        assert_eq!(company.roles.len(), 2);
        assert_eq!(company.roles[0].date_range, "Jun 2025 — Present");
        assert_eq!(company.roles[0].duration, "1 yr 5 mos");
        assert_eq!(company.roles[1].duration, "8 mos");
    }

    #[test]
    fn test_build_timeline_preserves_role_order() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 17).unwrap();
        let timeline = build_timeline(&[sample_company()], today);
        let titles: Vec<_> = timeline[0].roles.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Software Engineer", "Intern"]);
    }

    #[test]
    fn test_build_timeline_company_without_roles() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 17).unwrap();
        let mut company = sample_company();
        company.roles.clear();
        let timeline = build_timeline(&[company], today);
        assert_eq!(timeline[0].summary, "");
        assert!(timeline[0].roles.is_empty());
    }
}
