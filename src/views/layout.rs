use maud::{html, Markup, DOCTYPE};
use rust_i18n::t;

use crate::{names, utils, views::components};

const HTMX_SRC: &str = "https://unpkg.com/htmx.org@2.0.4";

fn css() -> Markup {
    html! {
        link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.min.css";
        link rel="stylesheet" href="/static/index.css";
    }
}

fn js() -> Markup {
    html! {
        script src=(HTMX_SRC) {}
    }
}

fn icon() -> Markup {
    html! {
        link rel="icon" href="/static/img/icon.svg" type="image/svg+xml" {}
    }
}

fn locale_switch(locale: &str) -> Markup {
    html! {
        form.locale-switch hx-post=(names::SET_LOCALE_URL) hx-trigger="change" {
            select name="lang" aria-label="Language" {
                @for lang in names::SUPPORTED_LOCALES {
                    option value=(lang) selected[*lang == locale] { (lang.to_uppercase()) }
                }
            }
        }
    }
}

fn header(locale: &str) -> Markup {
    html! {
        header {
            nav {
                ul {
                    li."secondary" {
                        a href=(names::SETTINGS_URL) {
                            strong { "Triviaboard" }
                        }
                    }
                }
                ul {
                    li { (components::nav_link(names::SETTINGS_URL, html! { (t!("nav.play", locale = locale)) })) }
                    li { (components::nav_link(names::HIGHSCORES_URL, html! { (t!("nav.highscores", locale = locale)) })) }
                    li { (locale_switch(locale)) }
                    li.secondary.version { (utils::VERSION) }
                }
            }
        }
    }
}

fn main(body: Markup) -> Markup {
    html! {
        main { (body) }
    }
}

pub fn page(title: &str, body: Markup, locale: &str) -> Markup {
    html! {
        (DOCTYPE)
        html lang=(locale) {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                meta name="color-scheme" content="light dark";

                (css())
                (js())
                (icon())

                title { (format!("{title} - Triviaboard")) }
            }

            body."container" {
                (header(locale))
                (main(body))
            }
        }
    }
}

pub fn titled(title: &str, body: Markup) -> Markup {
    html! {
        title { (title) " - Triviaboard" }
        (body)
    }
}

/// Full page for direct navigation, just the fragment for htmx swaps.
pub fn render(is_htmx: bool, title: &str, body: Markup, locale: &str) -> Markup {
    if is_htmx {
        titled(title, body)
    } else {
        page(title, body, locale)
    }
}
