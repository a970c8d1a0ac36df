use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::notification::Toaster;
use crate::config::BRAND_NAME;
use crate::waitlist::state::{dispatch, transition, FormState, WaitlistEvent};

#[function_component(WaitlistForm)]
pub fn waitlist_form() -> Html {
    let state = use_state(FormState::default);
    let toaster = use_context::<Toaster>();

    let oninput = {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let next = transition(&state, WaitlistEvent::EmailChanged(input.value()));
            state.set(next.state);
        })
    };

    let onsubmit = {
        let state = state.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            state.set(dispatch(&state, WaitlistEvent::Submitted, &toaster));
        })
    };

    let error_message = state.error_message();

    html! {
        <div class="waitlist">
            <form class="waitlist-form" onsubmit={onsubmit} novalidate=true>
                <div class="waitlist-field">
                    <input
                        type="email"
                        name="email"
                        class={classes!("waitlist-input", error_message.is_some().then_some("invalid-input"))}
                        placeholder="Enter your email to get early access"
                        autocomplete="email"
                        aria-invalid={error_message.is_some().to_string()}
                        value={state.email_value.clone()}
                        oninput={oninput}
                    />
                    {
                        if let Some(message) = error_message {
                            html! { <p class="waitlist-error" role="alert">{message}</p> }
                        } else {
                            html! {}
                        }
                    }
                </div>
                <button type="submit" class="hero-cta waitlist-submit">
                    <i class="fa-regular fa-calendar"></i>
                    <span>{state.submit_label()}</span>
                </button>
            </form>
            if state.has_joined() {
                <p class="waitlist-joined">
                    {format!("You've joined the {} waitlist. No spam, just meaningful updates when new products ship.", BRAND_NAME)}
                </p>
            }
        </div>
    }
}
