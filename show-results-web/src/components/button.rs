use web_sys::KeyboardEvent;
use yew::prelude::*;

/// A stateless clickable control.
///
/// Renders its children inside a native `<button>` element and forwards
/// activations to the `onclick` callback.
pub struct Button;

impl Component for Button {
    type Message = ();
    type Properties = Properties;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn update(&mut self, ctx: &Context<Self>, _msg: Self::Message) -> bool {
        if let Some(cb) = &ctx.props().onclick {
            cb.emit(());
        }

        false
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let classes = ctx.props().classes;

        if ctx.props().disabled {
            html! {
                <button type="button" class={classes} disabled=true>
                    { for ctx.props().children.iter() }
                </button>
            }
        } else {
            let onclick = ctx.link().callback(|_| ());

            let onkeydown = ctx
                .link()
                .batch_callback(|e: KeyboardEvent| match e.code().as_str() {
                    "Enter" => Some(()),
                    _ => None,
                });

            html! {
                <button type="button" class={classes} {onclick} {onkeydown} tabindex=0>
                    { for ctx.props().children.iter() }
                </button>
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Properties)]
pub struct Properties {
    pub children: Children,
    #[prop_or_default]
    pub onclick: Option<Callback<()>>,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or("button")]
    pub classes: &'static str,
}
