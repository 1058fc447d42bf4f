use maud::{html, Markup};

/// htmx navigation link with href fallback + hx-get for in-page swap.
pub fn nav_link(href: &str, body: Markup) -> Markup {
    html! {
        a href=(href)
          hx-get=(href)
          hx-target="main"
          hx-push-url="true"
          hx-swap="innerHTML" {
            (body)
        }
    }
}

pub fn stat_card(label: &str, value: Option<u32>) -> Markup {
    html! {
        article.stat-card {
            span.stat-value {
                @match value {
                    Some(v) => (v),
                    None => "\u{2013}",
                }
            }
            span.stat-label { (label) }
        }
    }
}

pub fn progress_bar(percent: u32) -> Markup {
    html! {
        progress value=(percent) max="100" {}
    }
}
