//! Demo population: three candidates and two companies, all with password `123456`.
//! Seeded only into a store that has no accounts yet.

use tracing::info;

use crate::accounts::service::{register, RegisterRequest};
use crate::errors::AppError;
use crate::models::account::Role;
use crate::models::profile::WorkExperience;
use crate::state::AppState;

const DEMO_PASSWORD: &str = "123456";

struct DemoCandidate {
    email: &'static str,
    name: &'static str,
    phone: &'static str,
    location: &'static str,
    summary: &'static str,
    skills: &'static [&'static str],
    // company, position, start, end, description
    experience: &'static [(&'static str, &'static str, &'static str, &'static str, &'static str)],
}

struct DemoCompany {
    email: &'static str,
    name: &'static str,
    industry: &'static str,
    description: &'static str,
    website: &'static str,
    phone: &'static str,
    location: &'static str,
}

const CANDIDATES: &[DemoCandidate] = &[
    DemoCandidate {
        email: "juan.perez@email.com",
        name: "Juan Pérez",
        phone: "+34 600 123 456",
        location: "Madrid, España",
        summary: "Desarrollador Full Stack con 5 años de experiencia en React, Node.js y bases de datos.",
        skills: &["JavaScript", "React", "Node.js", "TypeScript", "MongoDB", "Git"],
        experience: &[
            (
                "Digital Solutions",
                "Desarrollador Senior",
                "2021-01",
                "2024-12",
                "Desarrollo de aplicaciones web usando React y Node.js. Liderazgo de equipo de 3 desarrolladores.",
            ),
            (
                "StartupTech",
                "Desarrollador Junior",
                "2019-06",
                "2020-12",
                "Desarrollo frontend con React e integración de APIs REST.",
            ),
        ],
    },
    DemoCandidate {
        email: "maria.garcia@email.com",
        name: "María García",
        phone: "+34 600 789 012",
        location: "Barcelona, España",
        summary: "Diseñadora UX/UI con experiencia en investigación de usuarios y prototipado.",
        skills: &["Figma", "Adobe XD", "Sketch", "Prototyping", "User Research", "HTML/CSS"],
        experience: &[(
            "Design Studio",
            "UX Designer",
            "2020-03",
            "2024-12",
            "Diseño de experiencias digitales para aplicaciones móviles y web.",
        )],
    },
    DemoCandidate {
        email: "carlos.rodriguez@email.com",
        name: "Carlos Rodríguez",
        phone: "+34 600 345 678",
        location: "Valencia, España",
        summary: "Analista de datos con experiencia en Python, SQL y machine learning.",
        skills: &["Python", "SQL", "Pandas", "Tableau", "Machine Learning", "Excel"],
        experience: &[(
            "DataCorp",
            "Data Analyst",
            "2022-01",
            "2024-12",
            "Análisis de grandes volúmenes de datos y creación de dashboards interactivos.",
        )],
    },
];

const COMPANIES: &[DemoCompany] = &[
    DemoCompany {
        email: "rrhh@techcorp.com",
        name: "TechCorp Solutions",
        industry: "Tecnología",
        description: "Empresa líder en desarrollo de software empresarial con más de 10 años de experiencia.",
        website: "https://techcorp.com",
        phone: "+34 91 123 4567",
        location: "Madrid, España",
    },
    DemoCompany {
        email: "contacto@innovatech.com",
        name: "InnovaTech",
        industry: "Startups",
        description: "Startup innovadora enfocada en soluciones de inteligencia artificial y machine learning.",
        website: "https://innovatech.com",
        phone: "+34 93 987 6543",
        location: "Barcelona, España",
    },
];

/// Returns `false` without touching anything when the store already has accounts.
pub async fn seed_if_empty(state: &AppState) -> Result<bool, AppError> {
    if state.accounts.count().await? > 0 {
        return Ok(false);
    }

    for demo in CANDIDATES {
        let account = register(state.accounts.as_ref(), request(demo.email, demo.name, Role::Candidate)).await?;
        let mut profile = state
            .candidates
            .get(account.id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Candidate profile {} not found", account.id)))?;
        profile.phone = Some(demo.phone.to_string());
        profile.location = Some(demo.location.to_string());
        profile.summary = Some(demo.summary.to_string());
        profile.skills = demo.skills.iter().map(|s| s.to_string()).collect();
        profile.experience = demo
            .experience
            .iter()
            .enumerate()
            .map(|(i, (company, position, start, end, description))| WorkExperience {
                id: (i + 1).to_string(),
                company: company.to_string(),
                position: position.to_string(),
                start_date: start.to_string(),
                end_date: Some(end.to_string()),
                is_current: false,
                description: description.to_string(),
            })
            .collect();
        state.candidates.save(profile).await?;
    }

    for demo in COMPANIES {
        let account = register(state.accounts.as_ref(), request(demo.email, demo.name, Role::Company)).await?;
        let mut profile = state
            .companies
            .get(account.id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Company profile {} not found", account.id)))?;
        profile.industry = Some(demo.industry.to_string());
        profile.description = Some(demo.description.to_string());
        profile.website = Some(demo.website.to_string());
        profile.phone = Some(demo.phone.to_string());
        profile.location = Some(demo.location.to_string());
        state.companies.save(profile).await?;
    }

    info!(
        "Seeded demo data: {} candidates, {} companies",
        CANDIDATES.len(),
        COMPANIES.len()
    );
    Ok(true)
}

fn request(email: &str, name: &str, role: Role) -> RegisterRequest {
    RegisterRequest {
        email: email.to_string(),
        password: DEMO_PASSWORD.to_string(),
        name: name.to_string(),
        role,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{popular_locations, search_companies, CompanyFilterSpec};

    #[tokio::test]
    async fn test_seed_populates_empty_store_once() {
        let state = AppState::in_memory();
        assert!(seed_if_empty(&state).await.unwrap());
        assert!(!seed_if_empty(&state).await.unwrap());

        assert_eq!(state.accounts.count().await.unwrap(), 5);
        let candidates = state.candidates.all().await.unwrap();
        assert_eq!(candidates.len(), 3);
        assert_eq!(candidates[0].name, "Juan Pérez");
        assert_eq!(candidates[0].experience.len(), 2);
        assert_eq!(state.companies.all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_seeded_data_is_searchable() {
        let state = AppState::in_memory();
        seed_if_empty(&state).await.unwrap();

        let companies = state.companies.all().await.unwrap();
        let filters = CompanyFilterSpec {
            industry: Some("tecnología".to_string()),
            ..Default::default()
        };
        let result = search_companies(companies, &filters);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].company_name, "TechCorp Solutions");

        let candidates = state.candidates.all().await.unwrap();
        assert_eq!(
            popular_locations(&candidates),
            vec!["madrid, españa", "barcelona, españa", "valencia, españa"]
        );
    }
}
