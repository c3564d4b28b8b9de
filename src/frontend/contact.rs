use gloo_timers::future::TimeoutFuture;
use std::{rc::Rc, time::Duration};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use super::{
    sections::{SectionHeading, SocialLinks},
    use_lifetime, use_reveal, Lifetime,
};
use crate::{
    contact::{ContactAction, ContactForm, Field, SETTLE_DELAY, SUBMIT_DELAY},
    content::{SectionId, CONTACT_DETAILS, MAP_EMBED_URL, SOCIAL_LINKS},
    motion::{reveal_style, Effect, SECTION_HEADING},
};

const MESSAGE_ROWS: u32 = 6;

impl Reducible for ContactForm {
    type Action = ContactAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

fn timeout_millis(delay: Duration) -> u32 {
    u32::try_from(delay.as_millis()).unwrap_or(u32::MAX)
}

fn field_value(event: &InputEvent) -> Option<String> {
    if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
        return Some(input.value());
    }

    event
        .target_dyn_into::<HtmlTextAreaElement>()
        .map(|area| area.value())
}

/// Drives `Submitting -> Settled -> Idle` for one accepted attempt.
fn schedule_settle(dispatcher: UseReducerDispatcher<ContactForm>, lifetime: Lifetime, attempt: u64) {
    spawn_local(async move {
        TimeoutFuture::new(timeout_millis(SUBMIT_DELAY)).await;
        if !lifetime.is_live() {
            return;
        }
        log::info!("contact form: attempt {attempt} delivered");
        dispatcher.dispatch(ContactAction::Deliver(attempt));

        TimeoutFuture::new(timeout_millis(SETTLE_DELAY)).await;
        if !lifetime.is_live() {
            return;
        }
        log::debug!("contact form: attempt {attempt} notice dismissed");
        dispatcher.dispatch(ContactAction::Dismiss(attempt));
    });
}

#[derive(Properties, PartialEq)]
struct FieldInputProps {
    field: Field,
    value: AttrValue,
    oninput: Callback<InputEvent>,
}

#[function_component(FieldInput)]
fn field_input(props: &FieldInputProps) -> Html {
    let field = props.field;
    let id = field.as_str();

    let control = if field == Field::Message {
        html! {
            <textarea
                id={id}
                name={id}
                class="form-control"
                rows={MESSAGE_ROWS.to_string()}
                placeholder={field.placeholder()}
                required=true
                value={props.value.clone()}
                oninput={props.oninput.clone()}
            />
        }
    } else {
        html! {
            <input
                id={id}
                name={id}
                class="form-control"
                type={field.input_type()}
                placeholder={field.placeholder()}
                required=true
                value={props.value.clone()}
                oninput={props.oninput.clone()}
            />
        }
    };

    html! {
        <div class={classes!("form-field", (field == Field::Message || field == Field::Subject).then_some("form-field-wide"))}>
            <label for={id}>{field.label()}</label>
            {control}
        </div>
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let (node, revealed) = use_reveal();
    let form = use_reducer(ContactForm::default);
    let lifetime = use_lifetime();

    let onsubmit = {
        let form = form.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();

            let mut probe = (*form).clone();
            match probe.submit() {
                Ok(attempt) => {
                    log::info!("contact form: attempt {attempt} accepted");
                    schedule_settle(form.dispatcher(), lifetime.clone(), attempt);
                }
                Err(error) => log::warn!("contact form rejected: {error}"),
            }
            form.dispatch(ContactAction::Submit);
        })
    };

    let submitting = form.is_submitting();

    html! {
        <section id={SectionId::Contact.as_str()} class="section-block section-tinted">
            <div class="section-container">
                <SectionHeading
                    title="Get In Touch"
                    intro="Have a project in mind or want to discuss potential opportunities? Feel free to reach out through the form below or via direct contact."
                    node={node}
                    revealed={revealed}
                />

                <div class="contact-grid">
                    <div
                        class="card"
                        style={reveal_style(Effect::FadeInUp, SECTION_HEADING.delayed(0.1), revealed)}
                    >
                        <h3>{"Send a Message"}</h3>

                        { for form.notice.map(|notice| html! {
                            <div class="form-notice is-success" role="status">{notice}</div>
                        }) }
                        { for form.error.map(|error| html! {
                            <div class="form-notice is-error" role="alert">{error.to_string()}</div>
                        }) }

                        <form class="contact-form" onsubmit={onsubmit}>
                            { for Field::ALL.into_iter().map(|field| {
                                let dispatcher = form.dispatcher();
                                let oninput = Callback::from(move |event: InputEvent| {
                                    if let Some(value) = field_value(&event) {
                                        dispatcher.dispatch(ContactAction::Edit(field, value));
                                    }
                                });
                                html! {
                                    <FieldInput
                                        key={field.as_str()}
                                        field={field}
                                        value={AttrValue::from(form.fields.get(field).to_string())}
                                        oninput={oninput}
                                    />
                                }
                            }) }

                            <button
                                class="button button-primary"
                                type="submit"
                                disabled={submitting}
                                aria-busy={submitting.to_string()}
                            >
                                if submitting {
                                    <span class="spinner" aria-hidden="true"></span>
                                    <span>{"Sending..."}</span>
                                } else {
                                    <span>{"Send Message"}</span>
                                }
                            </button>
                        </form>
                    </div>

                    <div
                        class="contact-aside"
                        style={reveal_style(Effect::FadeInUp, SECTION_HEADING.delayed(0.3), revealed)}
                    >
                        <div class="card">
                            <h3>{"Contact Information"}</h3>
                            <dl class="contact-details">
                                { for CONTACT_DETAILS.iter().map(|detail| html! {
                                    <div class="contact-detail">
                                        <dt>{detail.title}</dt>
                                        <dd class="muted">{detail.details}</dd>
                                    </div>
                                }) }
                            </dl>
                            <h4>{"Follow Me"}</h4>
                            <SocialLinks links={SOCIAL_LINKS} />
                        </div>

                        <div class="map-frame">
                            <iframe
                                title="location"
                                src={MAP_EMBED_URL}
                                width="100%"
                                height="100%"
                                loading="lazy"
                            ></iframe>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
