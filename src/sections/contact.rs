use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::anchors::SectionId;
use crate::animation::presets::Motion;
use crate::animation::reveal::Reveal;
use crate::components::animated_background::AnimatedBackground;
use crate::components::section_header::SectionHeader;
use crate::config;
use crate::contact::form::{ContactForm, FormField, FormStatus, SERVICE_OPTIONS};
use crate::contact::submit::Transport;

/// `(name, value)` of whichever form control fired the event.
fn event_field(e: &Event) -> Option<(String, String)> {
    let target = e.target()?;
    if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
        return Some((input.name(), input.value()));
    }
    if let Some(select) = target.dyn_ref::<HtmlSelectElement>() {
        return Some((select.name(), select.value()));
    }
    target
        .dyn_ref::<HtmlTextAreaElement>()
        .map(|area| (area.name(), area.value()))
}

const SOCIALS: [(&str, &str); 4] = [
    ("Facebook", "f"),
    ("Twitter", "t"),
    ("LinkedIn", "in"),
    ("Instagram", "ig"),
];

const HOURS: [(&str, &str); 3] = [
    ("Monday - Friday:", "9:00 AM - 6:00 PM"),
    ("Saturday:", "10:00 AM - 4:00 PM"),
    ("Sunday:", "Closed"),
];

#[function_component(Contact)]
pub fn contact() -> Html {
    let form = use_state(ContactForm::default);

    let onchange = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let Some((name, value)) = event_field(&e) else {
                return;
            };
            let mut next = (*form).clone();
            if next.update_named(&name, value) {
                form.set(next);
            } else {
                log::warn!("contact form has no field named {:?}", name);
            }
        })
    };
    let oninput = onchange.reform(|e: InputEvent| Event::from(e));

    let onsubmit = {
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let mut pending = (*form).clone();
            let Some(draft) = pending.begin_submit() else {
                return;
            };
            form.set(pending.clone());

            let form = form.clone();
            spawn_local(async move {
                let result = Transport::from_config().send(&draft).await;
                pending.finish(result);
                form.set(pending);
            });
        })
    };

    // Hide the thank-you banner after a while; typing again hides it sooner.
    {
        let form = form.clone();
        let sent = form.status == FormStatus::Sent;
        use_effect_with_deps(
            move |sent| {
                let timeout = (*sent).then(|| {
                    Timeout::new(config::ACK_DISMISS_MS, move || {
                        let mut next = (*form).clone();
                        next.dismiss();
                        form.set(next);
                    })
                });
                move || drop(timeout)
            },
            sent,
        );
    }

    let sending = form.status.is_sending();
    let draft = &form.draft;

    html! {
        <section id={SectionId::Contact.anchor()} class="page-section contact">
            <style>
                {r#"
                    .contact {
                        background: linear-gradient(to bottom, #0a0a0a, #0a0a15);
                    }
                    .contact-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
                        gap: 3rem;
                    }
                    .contact-card {
                        padding: 2rem;
                        border-radius: 0.75rem;
                        border: 1px solid #333;
                        background: linear-gradient(to bottom right, #0f0f0f, #1a1a1a);
                        box-shadow: 0 10px 25px rgba(0, 0, 0, 0.3);
                    }
                    .contact h3 {
                        font-size: 1.5rem;
                        color: #fff;
                        margin-bottom: 1.5rem;
                    }
                    .contact-form fieldset {
                        border: none;
                        padding: 0;
                        margin: 0;
                        display: grid;
                        gap: 1.5rem;
                    }
                    .form-row {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
                        gap: 1.5rem;
                    }
                    .contact-form label {
                        display: block;
                        color: #d0d0d0;
                        font-size: 0.875rem;
                        margin-bottom: 0.5rem;
                    }
                    .contact-form input,
                    .contact-form select,
                    .contact-form textarea {
                        width: 100%;
                        padding: 0.75rem 1rem;
                        border-radius: 0.5rem;
                        border: 1px solid #333;
                        background: #0a0a0a;
                        color: #fff;
                        font: inherit;
                        transition: border-color 0.3s ease;
                    }
                    .contact-form input:focus,
                    .contact-form select:focus,
                    .contact-form textarea:focus {
                        outline: none;
                        border-color: #4776e6;
                    }
                    .contact-form textarea {
                        resize: none;
                    }
                    .submit-button {
                        width: 100%;
                        padding: 0.75rem 1.5rem;
                        border: none;
                        border-radius: 0.5rem;
                        background: linear-gradient(to right, #3a1c71, #4776e6);
                        color: #fff;
                        font-weight: 500;
                        cursor: pointer;
                        transition: transform 0.2s ease, box-shadow 0.3s ease;
                    }
                    .submit-button:hover:not(:disabled) {
                        transform: scale(1.02);
                        box-shadow: 0 5px 15px rgba(71, 118, 230, 0.4);
                    }
                    .submit-button:disabled {
                        opacity: 0.6;
                        cursor: wait;
                    }
                    .form-notice {
                        padding: 0.75rem 1rem;
                        border-radius: 0.5rem;
                        font-size: 0.9rem;
                    }
                    .form-notice.success {
                        background: rgba(71, 230, 118, 0.1);
                        color: #8fe6a6;
                    }
                    .form-notice.error {
                        background: rgba(230, 71, 71, 0.1);
                        color: #e68f8f;
                    }
                    .info-item {
                        display: flex;
                        align-items: flex-start;
                        margin-bottom: 1.5rem;
                    }
                    .info-icon {
                        flex-shrink: 0;
                        width: 3rem;
                        height: 3rem;
                        margin-right: 1rem;
                        border-radius: 0.5rem;
                        background: linear-gradient(to right, #3a1c71, #4776e6);
                    }
                    .info-item h4 {
                        color: #fff;
                        font-size: 1.125rem;
                        margin-bottom: 0.25rem;
                    }
                    .info-item p, .hours span:first-child {
                        color: #c0c0c0;
                    }
                    .socials {
                        display: flex;
                        gap: 1rem;
                        margin-bottom: 3rem;
                    }
                    .socials a {
                        width: 3rem;
                        height: 3rem;
                        border-radius: 50%;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: linear-gradient(to right, #3a1c71, #4776e6);
                        color: #fff;
                        text-decoration: none;
                        font-weight: 700;
                    }
                    .hours {
                        list-style: none;
                        padding: 0;
                    }
                    .hours li {
                        display: flex;
                        justify-content: space-between;
                        margin-bottom: 0.5rem;
                        color: #fff;
                    }
                "#}
            </style>
            <AnimatedBackground variant="waves" />
            <div class="section-container">
                <SectionHeader
                    badge="Get In Touch"
                    title="Let's Build Something Amazing"
                    subtitle="Have a project in mind? We'd love to hear about it. Drop us a line and we'll get back to you as soon as possible."
                />

                <div class="contact-grid">
                    <Reveal motion={Motion::FadeInLeft} class={classes!("contact-card")}>
                        <h3>{"Send us a message"}</h3>
                        <form class="contact-form" onsubmit={onsubmit}>
                            <fieldset disabled={sending}>
                                <div class="form-row">
                                    <div>
                                        <label for="name">{"Your Name"}</label>
                                        <input
                                            type="text"
                                            id="name"
                                            name={FormField::Name.name()}
                                            value={draft.field(FormField::Name).to_string()}
                                            oninput={oninput.clone()}
                                            required=true
                                            placeholder="John Doe"
                                        />
                                    </div>
                                    <div>
                                        <label for="email">{"Email Address"}</label>
                                        <input
                                            type="email"
                                            id="email"
                                            name={FormField::Email.name()}
                                            value={draft.field(FormField::Email).to_string()}
                                            oninput={oninput.clone()}
                                            required=true
                                            placeholder="john@example.com"
                                        />
                                    </div>
                                </div>
                                <div class="form-row">
                                    <div>
                                        <label for="phone">{"Phone Number (Optional)"}</label>
                                        <input
                                            type="tel"
                                            id="phone"
                                            name={FormField::Phone.name()}
                                            value={draft.field(FormField::Phone).to_string()}
                                            oninput={oninput.clone()}
                                            placeholder="+1 (123) 456-7890"
                                        />
                                    </div>
                                    <div>
                                        <label for="service">{"Service Interested In"}</label>
                                        <select
                                            id="service"
                                            name={FormField::Service.name()}
                                            onchange={onchange}
                                            required=true
                                        >
                                            <option value="" disabled=true selected={draft.field(FormField::Service).is_empty()}>
                                                {"Select a service"}
                                            </option>
                                            { for SERVICE_OPTIONS.iter().map(|(value, label)| html! {
                                                <option key={*value} value={*value} selected={draft.field(FormField::Service) == *value}>
                                                    { *label }
                                                </option>
                                            }) }
                                        </select>
                                    </div>
                                </div>
                                <div>
                                    <label for="message">{"Your Message"}</label>
                                    <textarea
                                        id="message"
                                        name={FormField::Message.name()}
                                        rows="5"
                                        value={draft.field(FormField::Message).to_string()}
                                        oninput={oninput.clone()}
                                        required=true
                                        placeholder="Tell us about your project..."
                                    />
                                </div>
                                {
                                    match &form.status {
                                        FormStatus::Sent => html! {
                                            <div class="form-notice success" role="status">
                                                {"Thank you for your message! We will get back to you soon."}
                                            </div>
                                        },
                                        FormStatus::Failed(err) => html! {
                                            <div class="form-notice error" role="alert">
                                                { err.user_message() }
                                            </div>
                                        },
                                        FormStatus::Editing | FormStatus::Sending => html! {},
                                    }
                                }
                                <button type="submit" class="submit-button" disabled={sending}>
                                    { if sending { "Sending..." } else { "Send Message" } }
                                </button>
                            </fieldset>
                        </form>
                    </Reveal>

                    <Reveal motion={Motion::FadeInRight}>
                        <h3>{"Contact Information"}</h3>
                        <div class="info-item">
                            <div class="info-icon"></div>
                            <div>
                                <h4>{"Our Location"}</h4>
                                <p>{"123 Innovation Street, Tech City, TC 10101"}</p>
                            </div>
                        </div>
                        <div class="info-item">
                            <div class="info-icon"></div>
                            <div>
                                <h4>{"Email Us"}</h4>
                                <p>{"info@kodastra.com"}</p>
                                <p>{"support@kodastra.com"}</p>
                            </div>
                        </div>
                        <div class="info-item">
                            <div class="info-icon"></div>
                            <div>
                                <h4>{"Call Us"}</h4>
                                <p>{"+1 (555) 123-4567"}</p>
                                <p>{"+1 (555) 987-6543"}</p>
                            </div>
                        </div>

                        <h3>{"Follow Us"}</h3>
                        <div class="socials">
                            { for SOCIALS.iter().map(|(name, glyph)| html! {
                                <a key={*name} href="#" aria-label={*name}>{ *glyph }</a>
                            }) }
                        </div>

                        <div class="contact-card">
                            <h4>{"Business Hours"}</h4>
                            <ul class="hours">
                                { for HOURS.iter().map(|(days, time)| html! {
                                    <li key={*days}><span>{ *days }</span><span>{ *time }</span></li>
                                }) }
                            </ul>
                        </div>
                    </Reveal>
                </div>
            </div>
        </section>
    }
}
