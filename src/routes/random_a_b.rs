use axum::{response::Html, Extension};

use crate::rng::DynRandomSource;

/// Probability of serving variant "a"; the remainder goes to "b".
const TEMPLATE_A_PROBABILITY: f64 = 0.9;

const TEMPLATE_A: &str = include_str!("../../templates/a.html");
const TEMPLATE_B: &str = include_str!("../../templates/b.html");

pub async fn handler(Extension(random_source): Extension<DynRandomSource>) -> Html<&'static str> {
    if random_source.next_uniform() < TEMPLATE_A_PROBABILITY {
        Html(TEMPLATE_A)
    } else {
        Html(TEMPLATE_B)
    }
}
