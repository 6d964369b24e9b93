use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::debug;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::glass_card::{GlassCard, GlassVariant};
use crate::config::{whatsapp_link, WhatsAppIntent};

/// How long the "thanks" note stays up after the email form is used.
const ACK_RESET_MS: u32 = 3_000;

struct Value {
    letter: &'static str,
    title: &'static str,
    desc: &'static str,
    color: &'static str,
}

const VALUES: [Value; 3] = [
    Value {
        letter: "S",
        title: "Speed",
        desc: "Alerts within seconds. When tickets drop, you're the first to know.",
        color: "bg-coral",
    },
    Value {
        letter: "T",
        title: "Transparency",
        desc: "Simple pricing. No hidden fees. Free tier forever. Cancel anytime.",
        color: "bg-yellow",
    },
    Value {
        letter: "C",
        title: "Community",
        desc: "Built for Irish music fans. We attend the same gigs you do.",
        color: "bg-teal",
    },
];

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoopForm {
    pub email: String,
    pub submitted: bool,
}

pub enum LoopAction {
    Input(String),
    Submit,
    Reset,
}

impl Reducible for LoopForm {
    type Action = LoopAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            LoopAction::Input(email) => Rc::new(LoopForm { email, ..(*self).clone() }),
            LoopAction::Submit if self.email.trim().is_empty() => self,
            LoopAction::Submit => Rc::new(LoopForm { email: String::new(), submitted: true }),
            LoopAction::Reset if !self.submitted => self,
            LoopAction::Reset => Rc::new(LoopForm { submitted: false, ..(*self).clone() }),
        }
    }
}

/// Email box for the newsletter that doesn't exist yet. Nothing leaves the
/// page; submitting only clears the field and shows a short thank-you.
#[function_component(StayInTheLoop)]
pub fn stay_in_the_loop() -> Html {
    let form = use_reducer_eq(LoopForm::default);
    let submitted = form.submitted;

    {
        let dispatcher = form.dispatcher();
        use_effect_with_deps(
            move |acknowledged| {
                let reset = acknowledged.then(|| {
                    Timeout::new(ACK_RESET_MS, move || dispatcher.dispatch(LoopAction::Reset))
                });
                move || drop(reset)
            },
            submitted,
        );
    }

    let oninput = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.dispatch(LoopAction::Input(input.value()));
        })
    };

    let onsubmit = {
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            debug!("Email form submitted");
            form.dispatch(LoopAction::Submit);
        })
    };

    html! {
        <form class="loop-form" {onsubmit}>
            <input
                type="email"
                placeholder="you@example.ie"
                aria-label="Email address"
                value={form.email.clone()}
                {oninput}
            />
            <button type="submit" class="cta-button">{"Keep Me Posted"}</button>
            if submitted {
                <p class="loop-ack text-teal">{"Thanks! We'll be in touch."}</p>
            }
        </form>
    }
}

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <div class="about-page">
            <style>
                {r#"
                    .about-page h2 {
                        font-size: 1.875rem;
                        margin-bottom: 1.5rem;
                    }
                    .about-page .prose p {
                        font-size: 1.125rem;
                        color: #4b5563;
                        margin: 0 0 1rem 0;
                    }
                    .value-letter {
                        width: 3rem;
                        height: 3rem;
                        border-radius: 1rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        color: #fff;
                        font-weight: 700;
                        font-size: 1.125rem;
                        margin-bottom: 1rem;
                    }
                    .value-card h3 {
                        margin-bottom: 0.5rem;
                    }
                    .value-card p {
                        color: #4b5563;
                        font-size: 0.875rem;
                    }
                    .cta-card {
                        text-align: center;
                    }
                    .loop-form {
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: center;
                        gap: 0.75rem;
                        margin-top: 2rem;
                    }
                    .loop-form input {
                        flex: 1;
                        min-width: 14rem;
                        max-width: 20rem;
                        padding: 0.75rem 1rem;
                        border-radius: 9999px;
                        border: 1px solid rgba(255, 107, 107, 0.25);
                        background: rgba(255, 255, 255, 0.8);
                        font: inherit;
                    }
                    .loop-ack {
                        width: 100%;
                        margin: 0;
                        font-size: 0.875rem;
                    }
                "#}
            </style>

            <section class="container page-hero">
                <h1>{"About TicéadWatch"}</h1>
                <p>{"Built by music fans, for music fans. Right here in Ireland."}</p>
            </section>

            <section class="container narrow section">
                <GlassCard class="card-body roomy prose" variant={GlassVariant::Strong}>
                    <h2>{"Our Mission"}</h2>
                    <p>{"We believe no one should miss out on a live gig just because tickets sold out in 30 seconds. TicéadWatch monitors ticket availability across Ireland so you can get alerts the moment tickets become available again."}</p>
                    <p>{"Whether it's Electric Picnic, a Fontaines D.C. headline show, or a small venue gig in Galway, we've got you covered with instant WhatsApp notifications."}</p>
                </GlassCard>
            </section>

            <section class="container narrow section">
                <h2 class="section-title">{"What We Stand For"}</h2>
                <div class="grid-3">
                    { for VALUES.iter().map(|v| html! {
                        <GlassCard class="card-body value-card" variant={GlassVariant::Strong}>
                            <div class={classes!("value-letter", v.color)}>{v.letter}</div>
                            <h3>{v.title}</h3>
                            <p>{v.desc}</p>
                        </GlassCard>
                    }) }
                </div>
            </section>

            <section class="container narrow section">
                <GlassCard class="card-body roomy prose" variant={GlassVariant::Strong}>
                    <h2>{"Why WhatsApp?"}</h2>
                    <p>{"No apps to download. No accounts to create. No passwords to remember. Just message us on WhatsApp - the app you already use every day - and you're set up in 30 seconds."}</p>
                    <p>{"We chose WhatsApp because it's where Irish people already are. Over 3 million people in Ireland use it daily. Getting a ticket alert feels as natural as getting a message from a friend."}</p>
                </GlassCard>
            </section>

            <section class="container narrow section">
                <GlassCard class="card-body roomy cta-card" variant={GlassVariant::Strong}>
                    <h2>{"Get Started Today"}</h2>
                    <p class="text-muted">{"Join the growing community of Irish music fans using TicéadWatch."}</p>
                    <a href={whatsapp_link(WhatsAppIntent::Default)} class="cta-button large">
                        {"Message Us on WhatsApp"}
                    </a>
                    <StayInTheLoop />
                </GlassCard>
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{count, href_of, render_at};

    fn page() -> Html {
        html! { <About /> }
    }

    #[tokio::test]
    async fn values_render_with_their_letters() {
        let html = render_at("/about", page).await;
        assert_eq!(count(&html, "value-letter bg-"), VALUES.len());
        for v in VALUES.iter() {
            assert!(html.contains(v.title));
        }
    }

    #[tokio::test]
    async fn cta_uses_default_intent() {
        let html = render_at("/about", page).await;
        assert_eq!(
            href_of(&html, "Message Us on WhatsApp"),
            Some(whatsapp_link(WhatsAppIntent::Default))
        );
    }

    fn apply(form: LoopForm, action: LoopAction) -> LoopForm {
        (*Rc::new(form).reduce(action)).clone()
    }

    fn typed(email: &str) -> LoopForm {
        apply(LoopForm::default(), LoopAction::Input(email.to_string()))
    }

    #[test]
    fn blank_submit_is_ignored() {
        let form = Rc::new(typed("   "));
        let next = form.clone().reduce(LoopAction::Submit);
        assert!(Rc::ptr_eq(&form, &next));
        assert!(!next.submitted);
    }

    #[test]
    fn submit_clears_the_field_and_acknowledges() {
        let form = apply(typed("fan@example.ie"), LoopAction::Submit);
        assert_eq!(form, LoopForm { email: String::new(), submitted: true });
    }

    #[test]
    fn reset_hides_the_acknowledgement() {
        let acknowledged = apply(typed("fan@example.ie"), LoopAction::Submit);
        let form = apply(acknowledged, LoopAction::Reset);
        assert!(!form.submitted);

        let typing = typed("next@example.ie");
        assert_eq!(apply(typing.clone(), LoopAction::Reset), typing);
    }

    #[tokio::test]
    async fn email_form_starts_without_acknowledgement() {
        let html = render_at("/about", page).await;
        assert!(html.contains(r#"type="email""#));
        assert!(!html.contains("Thanks!"));
    }
}
