use askama::Template;
use axum::extract::{Query, State};
use axum::response::{Html, IntoResponse};
use axum_extra::extract::CookieJar;

use crate::db;
use crate::error::AppError;
use crate::gallery::{self, ProjectFilter};
use crate::state::SharedState;
use crate::visitor;

#[derive(Template)]
#[template(path = "portfolio.html")]
#[allow(dead_code)]
struct PortfolioTemplate {
    search: String,
    selected_category: String,
    categories: Vec<String>,
    cards: Vec<ProjectCard>,
}

#[allow(dead_code)]
struct ProjectCard {
    id: String,
    project_title: String,
    student_name: String,
    technologies: Vec<String>,
    category: String,
    main_project_image: String,
    linkedin_link: String,
    github_link: String,
    live_project_link: String,
    likes_count: i64,
    comments_count: i64,
    liked: bool,
    created_at: String,
}

pub async fn index(
    State(state): State<SharedState>,
    Query(filter): Query<ProjectFilter>,
    jar: CookieJar,
) -> Result<impl IntoResponse, AppError> {
    let all_projects = db::projects::list(&state.pool).await?;
    // Dropdown shows every category, not just the filtered subset's
    let categories = gallery::categories(&all_projects);
    let projects = gallery::apply(all_projects, &filter);

    let liked_ids = match visitor::hash_from_jar(&jar) {
        Some(hash) => db::likes::project_ids_for_visitor(&state.pool, &hash).await?,
        None => Vec::new(),
    };

    let cards = projects
        .iter()
        .map(|p| ProjectCard {
            id: p.id.to_string(),
            project_title: p.project_title.clone(),
            student_name: p.student_name.clone(),
            technologies: p.tools_technologies.clone(),
            category: p.category.clone().unwrap_or_default(),
            main_project_image: p.main_project_image.clone(),
            linkedin_link: p.linkedin_link.clone().unwrap_or_default(),
            github_link: p.github_link.clone().unwrap_or_default(),
            live_project_link: p.live_project_link.clone().unwrap_or_default(),
            likes_count: p.likes_count,
            comments_count: p.comments_count,
            liked: liked_ids.contains(&p.id),
            created_at: p.created_at.format("%b %d, %Y").to_string(),
        })
        .collect();

    let template = PortfolioTemplate {
        search: filter.search.unwrap_or_default(),
        selected_category: filter.category.unwrap_or_default(),
        categories,
        cards,
    };
    Ok(Html(template.render().unwrap_or_default()))
}
