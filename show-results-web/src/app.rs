use yew::prelude::*;

use crate::components::providers::ClientProvider;
use crate::components::ResultPanel;
use crate::statics;

/// The application root.
pub struct App;

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        let query_delay = statics::config().api_query_delay();

        html! {
            <ClientProvider>
                <div class="main-wrapper">
                    <ResultPanel query_delay={query_delay} />
                </div>
            </ClientProvider>
        }
    }
}
