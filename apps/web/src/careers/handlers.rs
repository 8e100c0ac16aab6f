use axum::{extract::Path, response::Html};

use crate::careers::taxonomy::{find_domain, find_role, UNKNOWN_DOMAIN_TITLE};
use crate::errors::AppError;
use crate::render::{render_page, CategoryPage, RolePage};

/// GET /category/:domain
/// An unknown domain renders the page with no roles.
pub async fn handle_category(Path(domain): Path<String>) -> Result<Html<String>, AppError> {
    let (title, roles): (&str, &[&str]) = match find_domain(&domain) {
        Some(d) => (d.title, d.roles),
        None => (UNKNOWN_DOMAIN_TITLE, &[]),
    };
    render_page(&CategoryPage {
        domain: &domain,
        title,
        roles,
    })
}

/// GET /category/:domain/:role
pub async fn handle_role(
    Path((domain, role)): Path<(String, String)>,
) -> Result<Html<String>, AppError> {
    let profile = find_role(&domain, &role).ok_or_else(|| {
        AppError::NotFound(format!("No detailed page found for {}.", role.to_uppercase()))
    })?;
    render_page(&RolePage {
        domain: &domain,
        role: profile,
    })
}
