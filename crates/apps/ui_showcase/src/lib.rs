//! Gallery app for the dashboard button primitives.
//!
//! The app renders every variant, color, and size through `dashboard_ui`, the
//! three loading treatments, link buttons, and a set of buttons described as
//! JSON data, so style-table changes can be reviewed in one surface.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use dashboard_ui::prelude::*;
use leptos::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;

const GALLERY_SPECS: &str = include_str!("gallery.json");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
struct GalleryState {
    variant: ButtonVariant,
    size: ButtonSize,
    loading: bool,
}

impl Default for GalleryState {
    fn default() -> Self {
        Self {
            variant: ButtonVariant::Solid,
            size: ButtonSize::Md,
            loading: false,
        }
    }
}

fn restore_state(restored_state: Option<Value>) -> GalleryState {
    let Some(restored_state) = restored_state else {
        return GalleryState::default();
    };
    match serde_json::from_value::<GalleryState>(restored_state) {
        Ok(restored) => restored,
        Err(err) => {
            logging::warn!("ui showcase restore failed: {err}");
            GalleryState::default()
        }
    }
}

fn gallery_specs(raw: &str) -> Vec<(ButtonSpec, ButtonTarget)> {
    let specs = match serde_json::from_str::<Vec<ButtonSpec>>(raw) {
        Ok(specs) => specs,
        Err(err) => {
            logging::warn!("ui showcase gallery parse failed: {err}");
            return Vec::new();
        }
    };

    specs
        .into_iter()
        .filter_map(|spec| match spec.target() {
            Ok(target) => Some((spec, target)),
            Err(err) => {
                logging::warn!("ui showcase skipped button `{}`: {err}", spec.label);
                None
            }
        })
        .collect()
}

/// Picker buttons render solid when selected and ghost otherwise.
fn picker_variant(selected: bool) -> ButtonVariant {
    if selected {
        ButtonVariant::Solid
    } else {
        ButtonVariant::Ghost
    }
}

fn variant_label(variant: ButtonVariant) -> &'static str {
    match variant {
        ButtonVariant::Solid => "Solid",
        ButtonVariant::Outline => "Outline",
        ButtonVariant::Ghost => "Ghost",
    }
}

fn color_label(color: ButtonColor) -> &'static str {
    match color {
        ButtonColor::Gray => "Gray",
        ButtonColor::Purple => "Purple",
        ButtonColor::Red => "Red",
        ButtonColor::Black => "Black",
        ButtonColor::Yellow => "Yellow",
    }
}

fn size_label(size: ButtonSize) -> &'static str {
    match size {
        ButtonSize::Xs => "XS",
        ButtonSize::Sm => "SM",
        ButtonSize::Md => "MD",
        ButtonSize::Lg => "LG",
    }
}

#[component]
/// Button gallery contents.
pub fn UiShowcaseApp(
    /// Previously persisted gallery state.
    restored_state: Option<Value>,
    /// Receives the gallery state whenever it changes.
    #[prop(optional)]
    on_persist: Option<Callback<Value>>,
) -> impl IntoView {
    let state = create_rw_signal(restore_state(restored_state));
    let last_saved = create_rw_signal::<Option<String>>(None);

    create_effect(move |_| {
        let snapshot = state.get();
        let serialized = match serde_json::to_string(&snapshot) {
            Ok(serialized) => serialized,
            Err(err) => {
                logging::warn!("ui showcase serialize failed: {err}");
                return;
            }
        };

        if last_saved.get_untracked().as_deref() == Some(serialized.as_str()) {
            return;
        }
        last_saved.set(Some(serialized));

        if let Some(on_persist) = on_persist.as_ref() {
            match serde_json::to_value(&snapshot) {
                Ok(value) => on_persist.call(value),
                Err(err) => logging::warn!("ui showcase persist encode failed: {err}"),
            }
        }
    });

    let loading = Signal::derive(move || state.get().loading);

    view! {
        <main class="flex min-h-screen flex-col gap-8 bg-gray-50 p-8 text-gray-800" data-app="dashboard-ui-showcase">
            <header class="flex flex-col gap-1">
                <h1 class="text-lg font-medium">"Dashboard buttons"</h1>
                <p class="text-sm text-gray-500">"One style table, three variants, five colors, four sizes"</p>
            </header>

            <section id="matrix" class="flex flex-col gap-4" aria-label="Style matrix">
                <div class="flex flex-wrap items-center gap-2" role="group" aria-label="Variant">
                    {move || {
                        let current = state.get().variant;
                        ButtonVariant::ALL
                            .into_iter()
                            .map(|variant| {
                                view! {
                                    <Button
                                        size=ButtonSize::Sm
                                        color=ButtonColor::Purple
                                        variant=picker_variant(current == variant)
                                        on_click=Callback::new(move |_| {
                                            state.update(|value| value.variant = variant);
                                        })
                                    >
                                        {variant_label(variant)}
                                    </Button>
                                }
                            })
                            .collect_view()
                    }}
                </div>
                <div class="flex flex-wrap items-center gap-2" role="group" aria-label="Size">
                    {move || {
                        let current = state.get().size;
                        ButtonSize::ALL
                            .into_iter()
                            .map(|size| {
                                view! {
                                    <Button
                                        size=ButtonSize::Sm
                                        variant=picker_variant(current == size)
                                        on_click=Callback::new(move |_| {
                                            state.update(|value| value.size = size);
                                        })
                                    >
                                        {size_label(size)}
                                    </Button>
                                }
                            })
                            .collect_view()
                    }}
                </div>
                {move || {
                    let GalleryState { variant, size, .. } = state.get();
                    ButtonColor::ALL
                        .into_iter()
                        .map(|color| {
                            view! {
                                <div class="flex flex-wrap items-center gap-2">
                                    <Button variant=variant color=color size=size>{color_label(color)}</Button>
                                    <Button variant=variant color=color size=size disabled=true>"Disabled"</Button>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </section>

            <section class="flex flex-col gap-4" aria-label="Loading states">
                <div class="flex flex-wrap items-center gap-2">
                    <Button
                        variant=ButtonVariant::Outline
                        on_click=Callback::new(move |_| {
                            state.update(|value| value.loading = !value.loading);
                        })
                    >
                        {move || if loading.get() { "Stop loading" } else { "Start loading" }}
                    </Button>
                </div>
                <div class="flex flex-wrap items-center gap-2">
                    <Button color=ButtonColor::Purple loading=loading>"Save report"</Button>
                    <Button color=ButtonColor::Purple loading=loading loading_text="Saving">"Save report"</Button>
                    <Button color=ButtonColor::Red variant=ButtonVariant::Outline loading=loading>"Delete"</Button>
                </div>
            </section>

            <section class="flex flex-col gap-4" aria-label="Links">
                <div class="flex flex-wrap items-center gap-2">
                    <LinkButton href="#matrix" color=ButtonColor::Black>"Jump to matrix"</LinkButton>
                    <LinkButton
                        href="https://leptos.dev"
                        target="_blank"
                        rel="noreferrer"
                        variant=ButtonVariant::Ghost
                        color=ButtonColor::Purple
                    >
                        "Leptos docs"
                    </LinkButton>
                </div>
            </section>

            <section class="flex flex-col gap-4" aria-label="Configured buttons">
                <div class="flex flex-wrap items-center gap-2">
                    {gallery_specs(GALLERY_SPECS)
                        .into_iter()
                        .map(|(spec, target)| {
                            let label = spec.label.clone();
                            view! {
                                <DynamicButton target=target style=spec.style class=spec.class_name.unwrap_or_default()>
                                    {label.clone()}
                                </DynamicButton>
                            }
                        })
                        .collect_view()}
                </div>
            </section>
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn missing_state_falls_back_to_defaults() {
        assert_eq!(restore_state(None), GalleryState::default());
    }

    #[test]
    fn restored_state_round_trips_known_fields() {
        let restored = restore_state(Some(json!({
            "variant": "ghost",
            "size": "xs",
            "loading": true,
        })));
        assert_eq!(
            restored,
            GalleryState {
                variant: ButtonVariant::Ghost,
                size: ButtonSize::Xs,
                loading: true,
            }
        );
    }

    #[test]
    fn partial_state_keeps_remaining_defaults() {
        let restored = restore_state(Some(json!({ "size": "lg" })));
        assert_eq!(restored.size, ButtonSize::Lg);
        assert_eq!(restored.variant, ButtonVariant::Solid);
        assert!(!restored.loading);
    }

    #[test]
    fn malformed_state_is_ignored() {
        let restored = restore_state(Some(json!({ "variant": "neon" })));
        assert_eq!(restored, GalleryState::default());
    }

    #[test]
    fn bundled_gallery_specs_are_all_valid() {
        let raw: Vec<ButtonSpec> = serde_json::from_str(GALLERY_SPECS).expect("gallery json");
        let resolved = gallery_specs(GALLERY_SPECS);
        assert_eq!(resolved.len(), raw.len());
        assert!(resolved
            .iter()
            .any(|(_, target)| matches!(target, ButtonTarget::Link(_))));
    }

    #[test]
    fn conflicting_specs_are_skipped() {
        let resolved = gallery_specs(
            r#"[
                { "label": "Ok" },
                { "label": "Broken", "href": "/x", "disabled": true }
            ]"#,
        );
        let labels: Vec<_> = resolved.iter().map(|(spec, _)| spec.label.as_str()).collect();
        assert_eq!(labels, vec!["Ok"]);
    }

    #[test]
    fn picker_highlights_only_the_selected_option() {
        assert_eq!(picker_variant(true), ButtonVariant::Solid);
        assert_eq!(picker_variant(false), ButtonVariant::Ghost);

        let current = ButtonSize::Lg;
        let highlighted: Vec<_> = ButtonSize::ALL
            .into_iter()
            .filter(|size| picker_variant(current == *size) == ButtonVariant::Solid)
            .collect();
        assert_eq!(highlighted, vec![ButtonSize::Lg]);
    }

    #[test]
    fn gallery_state_encodes_for_persistence() {
        let value = serde_json::to_value(GalleryState::default()).expect("encode");
        assert_eq!(value, json!({ "variant": "solid", "size": "md", "loading": false }));
        assert_eq!(restore_state(Some(value)), GalleryState::default());
    }

    #[test]
    fn unparsable_gallery_yields_nothing() {
        assert!(gallery_specs("not json").is_empty());
    }
}
