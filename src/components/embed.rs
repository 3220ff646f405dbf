use yew::prelude::*;

use crate::dom;

#[derive(Properties, PartialEq)]
pub struct EmbedFrameProps {
    pub src: AttrValue,
    pub title: AttrValue,
    pub height_px: u32,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    /// Text above the "open in new tab" button. The button is only shown with a label.
    #[prop_or_default]
    pub fallback_hint: Option<AttrValue>,
    #[prop_or_default]
    pub fallback_label: Option<AttrValue>,
}

/// Third-party widget in an iframe. Load failures are not detected; the
/// optional fallback button opens the same URL in a new tab.
#[function_component(EmbedFrame)]
pub fn embed_frame(props: &EmbedFrameProps) -> Html {
    let height = props.height_px.to_string();
    let style = format!("min-width: 100%; height: {}px; border: none;", props.height_px);

    let fallback = match &props.fallback_label {
        Some(label) => {
            let src = props.src.clone();
            let open = Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                dom::open_in_new_tab(&src);
            });
            html! {
                <div class="embed-fallback">
                    if let Some(hint) = &props.fallback_hint {
                        <p>{ hint.clone() }</p>
                    }
                    <button class="primary-button" onclick={open}>{ label.clone() }</button>
                </div>
            }
        }
        None => html! {},
    };

    html! {
        <div class="embed-frame">
            <iframe
                id={props.id.clone()}
                title={props.title.clone()}
                src={props.src.clone()}
                width="100%"
                height={height}
                style={style}
            />
            { fallback }
            <style>
                {r#"
                .embed-frame iframe {
                    display: block;
                    border-radius: 8px;
                    background: #ffffff;
                }

                .embed-fallback {
                    margin-top: 1.5rem;
                    text-align: center;
                    color: #4b5563;
                }

                .embed-fallback p {
                    margin-bottom: 1rem;
                }
                "#}
            </style>
        </div>
    }
}
