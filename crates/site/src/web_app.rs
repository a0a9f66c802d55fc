use dashboard_ui_showcase::UiShowcaseApp;
use leptos::*;
use leptos_meta::*;
use serde_json::Value;

const GALLERY_STATE_KEY: &str = "dashboard-ui.showcase";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

fn load_gallery_state() -> Option<Value> {
    let raw = local_storage()?.get_item(GALLERY_STATE_KEY).ok().flatten()?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(err) => {
            logging::warn!("gallery state load failed: {err}");
            None
        }
    }
}

fn persist_gallery_state(value: Value) {
    let Some(storage) = local_storage() else {
        return;
    };
    if let Err(err) = storage.set_item(GALLERY_STATE_KEY, &value.to_string()) {
        logging::warn!("gallery state persist failed: {err:?}");
    }
}

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Dashboard UI" />
        <Meta name="description" content="Button primitives for data-visualization dashboards." />

        <UiShowcaseApp
            restored_state=load_gallery_state()
            on_persist=Callback::new(persist_gallery_state)
        />
    }
}
