use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::encode::PLACEHOLDER;
use crate::predictor::FormValues;
use crate::schema::{Disease, Field, FieldKind};

/// One-shot result banner shown above the form after a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Banner {
    Success(String),
    Error(String),
}

const STYLE: &str = "
    * { box-sizing: border-box; }
    body {
        margin: 0;
        font-family: 'Segoe UI', Helvetica, Arial, sans-serif;
        color: #1c2733;
        background: linear-gradient(160deg, #eef4f8 0%, #dde9f2 100%);
    }
    .layout { display: flex; min-height: 100vh; }
    .sidebar {
        width: 310px;
        flex-shrink: 0;
        padding: 24px;
        background: #16303f;
        color: #e8eff4;
    }
    .sidebar h2 { margin-top: 0; }
    .sidebar hr { border: none; border-top: 1px solid #3d596b; }
    .sidebar ul { padding-left: 18px; }
    .sidebar li { margin-bottom: 10px; font-size: 0.9em; }
    nav { display: flex; flex-direction: column; gap: 6px; margin: 18px 0; }
    nav a.tab {
        padding: 9px 12px;
        border-radius: 6px;
        color: #e8eff4;
        text-decoration: none;
    }
    nav a.tab:hover { background: #24455b; }
    nav a.tab.active { background: #2e6e8e; font-weight: 600; }
    main { flex-grow: 1; padding: 32px 48px; max-width: 860px; }
    .lead { color: #48606f; }
    .field { margin-bottom: 14px; }
    .field label { display: block; margin-bottom: 4px; font-size: 0.92em; }
    .field input, .field select {
        width: 100%;
        max-width: 420px;
        padding: 7px 9px;
        border: 1px solid #b3c4cf;
        border-radius: 5px;
        background: #ffffff;
    }
    button[type=submit] {
        margin-top: 10px;
        padding: 10px 22px;
        border: none;
        border-radius: 6px;
        background: #2e6e8e;
        color: #ffffff;
        font-size: 1em;
        cursor: pointer;
    }
    button[type=submit]:hover { background: #24455b; }
    .banner {
        margin: 0 0 20px 0;
        padding: 12px 16px;
        border-radius: 6px;
        max-width: 420px;
    }
    .banner.success { background: #ddf3de; border: 1px solid #3f9c49; color: #1e5a24; }
    .banner.error { background: #fbe2e2; border: 1px solid #c2403f; color: #7c1f1f; }
";

/// Render the full page for one tab, optionally re-filling submitted
/// values and showing a result banner.
pub fn page(active: Disease, values: &FormValues, banner: Option<&Banner>) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { "VitalScreen - Health Prediction" }
                style { (PreEscaped(STYLE)) }
            }
            body {
                div class="layout" {
                    (sidebar(active))
                    main {
                        h1 { (active.title()) }
                        p class="lead" { (active.description()) }
                        @if let Some(banner) = banner {
                            (banner_markup(banner))
                        }
                        (form_markup(active, values))
                    }
                }
            }
        }
    }
}

/// Small page used for unknown routes.
pub fn error_page(message: &str) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { "VitalScreen" }
                style { (PreEscaped(STYLE)) }
            }
            body {
                main {
                    h1 { "VitalScreen" }
                    p { (message) }
                    p { a href="/" { "Back to the screening page" } }
                }
            }
        }
    }
}

fn sidebar(active: Disease) -> Markup {
    html! {
        aside class="sidebar" {
            h2 { "VitalScreen" }
            p { "Use this sidebar to switch between the screening forms." }
            p { "Each tab collects the measurements its classifier expects." }
            nav {
                @for disease in Disease::ALL {
                    a.tab.active[disease == active] href={ "/?tab=" (disease.slug()) } {
                        (disease.tab_label())
                    }
                }
            }
            hr;
            h3 { "Models" }
            ul {
                @for disease in Disease::ALL {
                    li {
                        b { (disease.tab_label()) ": " }
                        (disease.sidebar_note())
                    }
                }
            }
        }
    }
}

fn form_markup(disease: Disease, values: &FormValues) -> Markup {
    let schema = disease.schema();
    html! {
        form method="post" action="/predict" {
            input type="hidden" name="tab" value=(disease.slug());
            @for field in schema.fields {
                div class="field" {
                    label for=(field.key) { (field.label) }
                    (input_markup(field, values.get(field.key)))
                }
            }
            button type="submit" { "Predict " (disease.display_name()) }
        }
    }
}

fn input_markup(field: &Field, current: Option<&str>) -> Markup {
    match field.kind {
        FieldKind::Numeric { min, max, step } => {
            let value = match current {
                Some(raw) => raw.to_string(),
                None => min.unwrap_or(0.0).to_string(),
            };
            html! {
                input type="number" id=(field.key) name=(field.key)
                    value=(value) min=[min] max=[max] step=(step);
            }
        }
        FieldKind::Categorical { choices } => html! {
            select id=(field.key) name=(field.key) {
                option value=(PLACEHOLDER)
                    selected[current.is_none() || current == Some(PLACEHOLDER)] {
                    (PLACEHOLDER)
                }
                @for choice in choices {
                    option value=(choice.label) selected[current == Some(choice.label)] {
                        (choice.label)
                    }
                }
            }
        },
    }
}

fn banner_markup(banner: &Banner) -> Markup {
    match banner {
        Banner::Success(text) => html! { div class="banner success" { (text) } },
        Banner::Error(text) => html! { div class="banner error" { (text) } },
    }
}
