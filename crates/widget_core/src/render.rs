use shared::domain::CategorizedPets;
use shared::error::FetchError;
use tracing::error;

const FALLBACK_ERROR_MESSAGE: &str = "Something went wrong";

/// One labelled section: heading, list open, one item per name, list close.
/// An empty list renders a single placeholder item. Missing names or a
/// missing or blank label suppress the section entirely.
pub fn render_pets(names: Option<&[String]>, label: Option<&str>) -> Vec<String> {
    let (Some(names), Some(label)) = (names, label) else {
        return Vec::new();
    };
    if label.is_empty() {
        return Vec::new();
    }

    let mut fragments = vec![format!("<h2>{label}</h2>"), "<ul>".to_string()];
    if names.is_empty() {
        fragments.push("<li>No Pets</li>".to_string());
    } else {
        fragments.extend(names.iter().map(|name| format!("<li>{name}</li>")));
    }
    fragments.push("</ul>".to_string());
    fragments
}

/// Full roster markup, male section first. Names render in the order they
/// arrive; ordering is the sorter's job.
pub fn render(data: Option<&CategorizedPets>) -> Vec<String> {
    let Some(data) = data else {
        return Vec::new();
    };

    let mut fragments = render_pets(Some(&data.male), Some("Male"));
    fragments.extend(render_pets(Some(&data.female), Some("Female")));
    fragments
}

pub fn render_loader() -> Vec<String> {
    vec![r#"<div class="loader">Loading...</div>"#.to_string()]
}

/// Error markup. The failure is also logged here; this is the only render
/// step with a side effect beyond its return value.
pub fn render_error(err: &FetchError) -> Vec<String> {
    error!("roster fetch failed: {err}");
    let mut message = err.to_string();
    if message.is_empty() {
        message = FALLBACK_ERROR_MESSAGE.to_string();
    }
    vec![format!(r#"<div class="error">FAILED: {message}</div>"#)]
}

#[cfg(test)]
#[path = "tests/render_tests.rs"]
mod tests;
