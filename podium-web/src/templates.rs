use askama::Template;

use podium_core::CompetitionsView;

use crate::models::ProfileView;

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub lang: &'static str,
    pub profile: ProfileView,
    pub view: CompetitionsView,
}

/// The competition history card alone, swapped in on toggle.
#[derive(Template)]
#[template(path = "competitions.html")]
pub struct CompetitionsTemplate {
    pub view: CompetitionsView,
}
