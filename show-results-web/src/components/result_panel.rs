use std::time::Duration;

use gloo_timers::future::sleep;
use yew::prelude::*;

use show_results_api::QueryResponse;

use crate::components::providers::ClientProvider;
use crate::components::Button;
use crate::consts::REQUEST_ERROR;

/// Queries the endpoint for an alphanumeric string after a button click and
/// displays the result.
///
/// The request is delayed by the `query_delay` prop (in milliseconds). A second
/// button zeroes the delay, making subsequent requests run immediately.
pub struct ResultPanel {
    state: PanelState,
    container: NodeRef,
}

impl Component for ResultPanel {
    type Message = Message;
    type Properties = Properties;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            state: PanelState::new(ctx.props().query_delay),
            container: NodeRef::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Message::DisableDelay => {
                self.state.disable_delay();

                true
            }
            Message::RequestData => {
                log::debug!("Clicked! (delay: {}ms)", self.state.query_delay());

                match self.state.request_delay() {
                    Some(delay) => {
                        let client = ClientProvider::get(ctx);

                        ctx.link().send_future(async move {
                            sleep(delay).await;

                            Message::Resolved(client.query().await)
                        });
                    }
                    None => {
                        log::warn!(
                            "Query delay {} is not a non-negative number, ignoring request",
                            self.state.query_delay()
                        );
                    }
                }

                false
            }
            Message::Resolved(res) => self.state.resolve(res),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let on_disable_delay = ctx.link().callback(|_| Message::DisableDelay);
        let on_request_data = ctx.link().callback(|_| Message::RequestData);

        html! {
            <div>
                <div class="content-container" ref={self.container.clone()}>
                    {
                        match self.state.message() {
                            "" => html! {},
                            message => html! { <p>{ message.to_string() }</p> },
                        }
                    }
                </div>
                <Button onclick={on_disable_delay}>{ "Disable request delay" }</Button>
                <Button onclick={on_request_data}>{ "Request data from endpoint" }</Button>
            </div>
        }
    }
}

pub enum Message {
    DisableDelay,
    RequestData,
    Resolved(show_results_api::Result<QueryResponse>),
}

#[derive(Clone, Debug, PartialEq, Properties)]
pub struct Properties {
    /// Delay before the endpoint request is issued, in milliseconds.
    #[prop_or(0.0)]
    pub query_delay: f64,
}

/// The view state owned by a [`ResultPanel`].
///
/// `data` and `error` are never displayed together: `error` decides which
/// message [`PanelState::message`] returns.
#[derive(Clone, Debug, PartialEq)]
struct PanelState {
    data: String,
    error: bool,
    query_delay: f64,
}

impl PanelState {
    fn new(query_delay: f64) -> Self {
        Self {
            data: String::new(),
            error: false,
            query_delay,
        }
    }

    fn query_delay(&self) -> f64 {
        self.query_delay
    }

    /// Forces the query delay to zero.
    fn disable_delay(&mut self) {
        self.query_delay = 0.0;
    }

    /// Returns the duration to wait before issuing a query, or `None` when the
    /// configured delay is not a valid non-negative number. In that case no
    /// request must be issued at all.
    fn request_delay(&self) -> Option<Duration> {
        if self.query_delay.is_finite() && self.query_delay >= 0.0 {
            Some(Duration::from_millis(self.query_delay as u64))
        } else {
            None
        }
    }

    /// Applies the result of a resolved query. Returns whether the state
    /// changed.
    ///
    /// A successful response with an empty payload leaves the state untouched.
    fn resolve(&mut self, res: show_results_api::Result<QueryResponse>) -> bool {
        match res {
            Ok(resp) if resp.data.is_empty() => false,
            Ok(resp) => {
                self.data = resp.data;
                self.error = false;

                true
            }
            Err(err) => {
                log::error!("Failed to query endpoint: {}", err);

                self.data.clear();
                self.error = true;

                true
            }
        }
    }

    /// Returns the message to display, using `error` as the discriminator.
    fn message(&self) -> &str {
        if self.error {
            REQUEST_ERROR
        } else {
            &self.data
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use show_results_api::{Error, QueryResponse, StatusCode};

    use super::PanelState;
    use crate::consts::REQUEST_ERROR;

    fn response(data: &str) -> QueryResponse {
        QueryResponse {
            data: String::from(data),
        }
    }

    fn bad_status() -> Error {
        Error::BadStatusCode(StatusCode::INTERNAL_SERVER_ERROR)
    }

    #[test]
    fn test_message_initially_empty() {
        let state = PanelState::new(0.0);

        assert_eq!(state.message(), "");
    }

    #[test]
    fn test_request_delay_valid() {
        let state = PanelState::new(0.0);
        assert_eq!(state.request_delay(), Some(Duration::ZERO));

        let state = PanelState::new(500.0);
        assert_eq!(state.request_delay(), Some(Duration::from_millis(500)));
    }

    #[test]
    fn test_request_delay_invalid() {
        for delay in [-1.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let state = PanelState::new(delay);

            assert_eq!(state.request_delay(), None);
        }
    }

    #[test]
    fn test_disable_delay() {
        let mut state = PanelState::new(500.0);
        state.disable_delay();
        assert_eq!(state.request_delay(), Some(Duration::ZERO));

        // Also recovers from a misconfigured delay.
        let mut state = PanelState::new(f64::NAN);
        state.disable_delay();
        assert_eq!(state.request_delay(), Some(Duration::ZERO));
    }

    #[test]
    fn test_resolve_success() {
        let mut state = PanelState::new(0.0);

        assert!(state.resolve(Ok(response("A0B3HCJ"))));
        assert_eq!(state.message(), "A0B3HCJ");
        assert!(!state.error);
    }

    #[test]
    fn test_resolve_failure() {
        let mut state = PanelState::new(0.0);
        state.resolve(Ok(response("A0B3HCJ")));

        assert!(state.resolve(Err(bad_status())));
        assert_eq!(state.message(), REQUEST_ERROR);
        assert_eq!(state.data, "");
    }

    #[test]
    fn test_resolve_success_clears_error() {
        let mut state = PanelState::new(0.0);
        state.resolve(Err(bad_status()));

        assert!(state.resolve(Ok(response("X1"))));
        assert_eq!(state.message(), "X1");
        assert!(!state.error);
    }

    #[test]
    fn test_resolve_empty_payload_is_noop() {
        let mut state = PanelState::new(0.0);
        state.resolve(Ok(response("A0B3HCJ")));

        assert!(!state.resolve(Ok(response(""))));
        assert_eq!(state.message(), "A0B3HCJ");

        // An error display also survives an empty payload.
        let mut state = PanelState::new(0.0);
        state.resolve(Err(bad_status()));

        assert!(!state.resolve(Ok(response(""))));
        assert_eq!(state.message(), REQUEST_ERROR);
    }

    #[test]
    fn test_resolve_repeated_payload() {
        let mut state = PanelState::new(0.0);
        state.resolve(Ok(response("A0B3HCJ")));
        state.resolve(Ok(response("A0B3HCJ")));

        assert_eq!(state.message(), "A0B3HCJ");
        assert!(!state.error);
    }
}
