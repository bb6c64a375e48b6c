use yew::context::ContextProvider;
use yew::prelude::*;

use show_results_api::Client;

use crate::statics;

/// Provides the api [`Client`] to all child components.
pub struct ClientProvider {
    client: Client,
}

impl ClientProvider {
    /// Returns the [`Client`] provided to the component in `ctx`.
    ///
    /// # Panics
    ///
    /// Panics if there is no `ClientProvider` above the component in the tree.
    pub fn get<C>(ctx: &Context<C>) -> Client
    where
        C: Component,
    {
        let (client, _) = ctx
            .link()
            .context::<Client>(Callback::noop())
            .expect("No ClientProvider given");

        client
    }
}

impl Component for ClientProvider {
    type Message = ();
    type Properties = Properties;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            client: Client::new(statics::config().api_base()),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <ContextProvider<Client> context={self.client.clone()}>
                { for ctx.props().children.iter() }
            </ContextProvider<Client>>
        }
    }
}

#[derive(Clone, Debug, PartialEq, Properties)]
pub struct Properties {
    pub children: Children,
}
