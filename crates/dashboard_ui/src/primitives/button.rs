use super::*;

/// Spread attributes a link cannot carry.
const ACTION_ONLY_ATTRS: [&str; 6] = ["class", "disabled", "type", "form", "name", "value"];
/// Spread attributes a `<button>` cannot carry.
const LINK_ONLY_ATTRS: [&str; 5] = ["class", "href", "target", "rel", "download"];

/// Attributes both button shapes forward verbatim.
#[derive(Default)]
struct ForwardedAttributes {
    id: Option<String>,
    title: Option<String>,
    aria_label: Option<String>,
    attrs: Vec<(&'static str, Attribute)>,
}

/// Drops spread attributes owned by the other shape or by the component itself.
fn forward_attrs(
    attrs: Vec<(&'static str, Attribute)>,
    excluded: &[&str],
) -> Vec<(&'static str, Attribute)> {
    attrs
        .into_iter()
        .filter(|(name, _)| !excluded.contains(name))
        .collect()
}

struct ActionProps {
    style: ButtonStyle,
    class: Option<String>,
    forwarded: ForwardedAttributes,
    node_ref: NodeRef<html::Button>,
    button_type: ButtonType,
    disabled: Signal<bool>,
    loading: Signal<bool>,
    loading_text: Signal<Option<String>>,
    on_click: Option<Callback<MouseEvent>>,
}

#[component]
/// Dashboard action button with style tables, loading states, and a touch-sized hit area.
///
/// `loading` disables the button. Without `loading_text` the children stay in
/// place (invisible) under a spinner and the button announces
/// [`crate::LOADING_LABEL`]; with `loading_text` the spinner and text replace them.
pub fn Button(
    #[prop(default = ButtonVariant::Solid)] variant: ButtonVariant,
    #[prop(default = ButtonColor::Gray)] color: ButtonColor,
    #[prop(default = ButtonSize::Md)] size: ButtonSize,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(default = ButtonType::Button)] button_type: ButtonType,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] loading: MaybeSignal<bool>,
    #[prop(optional, into)] loading_text: MaybeProp<String>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    #[prop(optional)] node_ref: NodeRef<html::Button>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: ChildrenFn,
) -> impl IntoView {
    action_view(
        ActionProps {
            style: ButtonStyle::new(variant, color, size),
            class,
            forwarded: ForwardedAttributes {
                id,
                title,
                aria_label,
                attrs,
            },
            node_ref,
            button_type,
            disabled: Signal::derive(move || disabled.get()),
            loading: Signal::derive(move || loading.get()),
            loading_text: Signal::derive(move || loading_text.get()),
            on_click,
        },
        children,
    )
}

#[component]
/// Link styled as a dashboard button.
pub fn LinkButton(
    #[prop(into)] href: String,
    #[prop(default = ButtonVariant::Solid)] variant: ButtonVariant,
    #[prop(default = ButtonColor::Gray)] color: ButtonColor,
    #[prop(default = ButtonSize::Md)] size: ButtonSize,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional, into)] target: Option<String>,
    #[prop(optional, into)] rel: Option<String>,
    #[prop(optional)] node_ref: NodeRef<html::A>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    link_view(
        ButtonStyle::new(variant, color, size),
        class,
        LinkAttributes { href, target, rel },
        ForwardedAttributes {
            id,
            title,
            aria_label,
            attrs,
        },
        node_ref,
        children,
    )
}

#[component]
/// Renders either button shape from a [`ButtonTarget`] value.
///
/// `on_click` is only wired for action targets.
pub fn DynamicButton(
    target: ButtonTarget,
    #[prop(optional)] style: ButtonStyle,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: ChildrenFn,
) -> impl IntoView {
    match target {
        ButtonTarget::Link(link) => link_view(
            style,
            class,
            link,
            ForwardedAttributes::default(),
            NodeRef::default(),
            Box::new(move || children()),
        ),
        ButtonTarget::Action(state) => {
            let ActionState {
                disabled,
                loading,
                loading_text,
            } = state;
            action_view(
                ActionProps {
                    style,
                    class,
                    forwarded: ForwardedAttributes::default(),
                    node_ref: NodeRef::default(),
                    button_type: ButtonType::Button,
                    disabled: Signal::derive(move || disabled),
                    loading: Signal::derive(move || loading),
                    loading_text: Signal::derive(move || loading_text.clone()),
                    on_click,
                },
                children,
            )
        }
    }
}

fn link_view(
    style: ButtonStyle,
    class: Option<String>,
    link: LinkAttributes,
    forwarded: ForwardedAttributes,
    node_ref: NodeRef<html::A>,
    children: Children,
) -> View {
    let LinkAttributes { href, target, rel } = link;
    let ForwardedAttributes {
        id,
        title,
        aria_label,
        attrs,
    } = forwarded;
    let attrs = forward_attrs(attrs, &ACTION_ONLY_ATTRS);

    view! {
        <a
            {..attrs}
            node_ref=node_ref
            href=href
            target=target
            rel=rel
            class=style.class(class.as_deref())
            id=id
            title=title
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="link-button"
            data-ui-variant=style.variant.token()
            data-ui-color=style.color.token()
            data-ui-size=style.size.token()
        >
            <TouchTarget>{children()}</TouchTarget>
        </a>
    }
    .into_view()
}

fn action_view(props: ActionProps, children: ChildrenFn) -> View {
    let ActionProps {
        style,
        class,
        forwarded,
        node_ref,
        button_type,
        disabled,
        loading,
        loading_text,
        on_click,
    } = props;
    let ForwardedAttributes {
        id,
        title,
        aria_label,
        attrs,
    } = forwarded;
    let attrs = forward_attrs(attrs, &LINK_ONLY_ATTRS);
    let state = move || ActionState::new(disabled.get(), loading.get(), loading_text.get());

    view! {
        <button
            {..attrs}
            node_ref=node_ref
            type=button_type.token()
            class=style.class(class.as_deref())
            id=id
            title=title
            disabled=move || state().is_disabled()
            aria-label=move || state().accessible_label(aria_label.as_deref())
            aria-busy=move || loading.get().then_some("true")
            data-ui-primitive="true"
            data-ui-kind="button"
            data-ui-variant=style.variant.token()
            data-ui-color=style.color.token()
            data-ui-size=style.size.token()
            data-ui-loading=move || bool_token(loading.get())
            data-ui-disabled=move || bool_token(state().is_disabled())
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            <TouchTarget>{move || loading_overlay(state().content(), &children)}</TouchTarget>
        </button>
    }
    .into_view()
}

fn loading_overlay(content: LoadingContent, children: &ChildrenFn) -> View {
    match content {
        LoadingContent::Children => children().into_view(),
        LoadingContent::SpinnerWithText(text) => view! {
            <>
                <LoadingSpinner />
                {text}
            </>
        }
        .into_view(),
        LoadingContent::SpinnerOverChildren => view! {
            <div class="inline-flex items-center relative" data-ui-slot="loading-frame">
                <LoadingSpinner class="absolute inset-0 m-auto" />
                <div class="invisible">{children()}</div>
            </div>
        }
        .into_view(),
    }
}
