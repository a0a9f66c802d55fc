use leptos::ssr::render_to_string;
use leptos::*;

use crate::{
    Button, ButtonColor, ButtonSize, ButtonSpec, ButtonStyle, ButtonVariant, DynamicButton,
    LinkButton, LOADING_LABEL,
};

fn touch_targets(html: &str) -> usize {
    html.matches(r#"data-ui-slot="touch-target""#).count()
}

/// Opening tag of the first `<tag` element in `html`.
fn opening_tag<'a>(html: &'a str, tag: &str) -> &'a str {
    let start = html.find(&format!("<{tag}")).expect("element");
    let end = html[start..].find('>').expect("tag end") + start;
    &html[start..=end]
}

fn attr_value<'a>(tag: &'a str, name: &str) -> Option<&'a str> {
    let needle = format!(r#" {name}=""#);
    let start = tag.find(&needle)? + needle.len();
    let end = tag[start..].find('"')? + start;
    Some(&tag[start..end])
}

#[test]
fn idle_button_renders_children_and_style() {
    let html = render_to_string(|| {
        view! {
            <Button variant=ButtonVariant::Outline color=ButtonColor::Purple size=ButtonSize::Lg class="w-full">
                "Export"
            </Button>
        }
    })
    .to_string();

    let expected_class = ButtonStyle::new(ButtonVariant::Outline, ButtonColor::Purple, ButtonSize::Lg)
        .class(Some("w-full"));
    let button = opening_tag(&html, "button");
    assert_eq!(attr_value(button, "class").map(str::trim), Some(expected_class.as_str()));
    assert_eq!(attr_value(button, "type"), Some("button"));
    assert_eq!(attr_value(button, "disabled"), None);
    assert!(html.contains("Export"));
    assert!(html.contains(r#"data-ui-disabled="false""#));
    assert!(!html.contains("aria-label"));
    assert!(!html.contains("href"));
    assert_eq!(touch_targets(&html), 1);
}

#[test]
fn loading_without_text_hides_children_under_spinner() {
    let html = render_to_string(|| view! { <Button loading=true>"Save"</Button> }).to_string();

    let button = opening_tag(&html, "button");
    assert_eq!(attr_value(button, "aria-label"), Some(LOADING_LABEL));
    assert_eq!(attr_value(button, "disabled"), Some(""));
    assert!(html.contains(r#"data-ui-disabled="true""#));
    assert!(html.contains(r#"data-ui-kind="spinner""#));
    assert!(html.contains(r#"class="invisible""#));
    assert!(html.contains("Save"));
    assert_eq!(touch_targets(&html), 1);
}

#[test]
fn loading_with_text_replaces_children() {
    let html = render_to_string(|| {
        view! { <Button loading=true loading_text="Saving">"Save changes"</Button> }
    })
    .to_string();

    let spinner = html.find(r#"data-ui-kind="spinner""#).expect("spinner");
    let text = html.find("Saving").expect("loading text");
    assert!(spinner < text);
    assert!(!html.contains("Save changes"));
    assert!(!html.contains("aria-label"));
    assert_eq!(attr_value(opening_tag(&html, "button"), "disabled"), Some(""));
    assert!(html.contains(r#"data-ui-disabled="true""#));
    assert_eq!(touch_targets(&html), 1);
}

#[test]
fn link_button_omits_interaction_attributes() {
    let html = render_to_string(|| {
        view! {
            <LinkButton href="/reports" target="_blank" rel="noreferrer" color=ButtonColor::Black>
                "Reports"
            </LinkButton>
        }
    })
    .to_string();

    assert!(html.contains("<a "));
    assert!(html.contains(r#"href="/reports""#));
    assert!(html.contains(r#"target="_blank""#));
    assert!(html.contains(r#"rel="noreferrer""#));
    assert!(!html.contains("data-ui-disabled"));
    assert!(!html.contains("data-ui-loading"));
    assert!(!html.contains("type="));
    assert_eq!(touch_targets(&html), 1);
}

#[test]
fn dynamic_button_follows_spec_shape() {
    let link: ButtonSpec = serde_json::from_str(r#"{"href":"/docs"}"#).expect("spec");
    let action: ButtonSpec =
        serde_json::from_str(r#"{"loading":true,"loadingText":"Syncing"}"#).expect("spec");

    let link_target = link.target().expect("link");
    let link_html =
        render_to_string(move || view! { <DynamicButton target=link_target>"Docs"</DynamicButton> })
            .to_string();
    assert!(link_html.contains("<a "));

    let action_target = action.target().expect("action");
    let action_html = render_to_string(move || {
        view! { <DynamicButton target=action_target>"Sync"</DynamicButton> }
    })
    .to_string();
    assert!(action_html.contains("<button"));
    assert!(action_html.contains("Syncing"));
    assert!(!action_html.contains(">Sync<"));
}

#[test]
fn button_forwards_spread_attributes_and_node_ref() {
    let html = render_to_string(|| {
        let button_ref = create_node_ref::<html::Button>();
        view! {
            <Button
                node_ref=button_ref
                attr:data-testid="export"
                attr:tabindex=3
                attr:form="report-filters"
                attr:href="/nowhere"
                attr:rel="noreferrer"
            >
                "Export"
            </Button>
        }
    })
    .to_string();

    let button = opening_tag(&html, "button");
    assert_eq!(attr_value(button, "data-testid"), Some("export"));
    assert_eq!(attr_value(button, "tabindex"), Some("3"));
    assert_eq!(attr_value(button, "form"), Some("report-filters"));
    assert_eq!(attr_value(button, "href"), None);
    assert_eq!(attr_value(button, "rel"), None);
}

#[test]
fn link_button_forwards_spread_attributes_and_node_ref() {
    let html = render_to_string(|| {
        let link_ref = create_node_ref::<html::A>();
        view! {
            <LinkButton
                href="/reports"
                node_ref=link_ref
                attr:data-testid="reports"
                attr:download="reports.csv"
                attr:disabled=true
                attr:type="submit"
            >
                "Reports"
            </LinkButton>
        }
    })
    .to_string();

    let link = opening_tag(&html, "a");
    assert_eq!(attr_value(link, "href"), Some("/reports"));
    assert_eq!(attr_value(link, "data-testid"), Some("reports"));
    assert_eq!(attr_value(link, "download"), Some("reports.csv"));
    assert_eq!(attr_value(link, "disabled"), None);
    assert_eq!(attr_value(link, "type"), None);
}
