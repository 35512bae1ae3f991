use axum::response::Html;
use minijinja::Environment;
use serde::Serialize;

use crate::error::BlogError;

/// Views compiled into the binary. `.html` names get HTML auto-escaping.
const TEMPLATES: &[(&str, &str)] = &[
    ("base.html", include_str!("../templates/base.html")),
    ("index.html", include_str!("../templates/index.html")),
    ("post.html", include_str!("../templates/post.html")),
    ("about.html", include_str!("../templates/about.html")),
    ("create.html", include_str!("../templates/create.html")),
    ("404.html", include_str!("../templates/404.html")),
];

pub struct Templates {
    env: Environment<'static>,
}

impl Templates {
    pub fn new() -> Result<Self, BlogError> {
        let mut env = Environment::new();
        for &(name, source) in TEMPLATES {
            env.add_template(name, source)?;
        }
        Ok(Self { env })
    }

    pub fn render<S: Serialize>(&self, name: &str, ctx: S) -> Result<Html<String>, BlogError> {
        let template = self.env.get_template(name)?;
        Ok(Html(template.render(ctx)?))
    }
}
