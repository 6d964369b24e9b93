use chrono::NaiveDate;
use yew::prelude::*;

use crate::components::glass_card::GlassCard;
use crate::components::tear_line::{TearColor, TearLine};

pub fn last_updated() -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(2026, 2, 17)
}

pub fn format_updated(date: NaiveDate) -> String {
    date.format("%-d %B %Y").to_string()
}

#[derive(Properties, PartialEq)]
struct LegalDocumentProps {
    title: AttrValue,
    children: Children,
}

#[function_component(LegalDocument)]
fn legal_document(props: &LegalDocumentProps) -> Html {
    let updated = last_updated().map(format_updated).unwrap_or_default();

    html! {
        <section class="container narrow legal-content">
            <style>
                {r#"
                    .legal-content {
                        padding-top: 5rem;
                        padding-bottom: 5rem;
                    }
                    .legal-content h1 {
                        font-size: 3rem;
                        margin-bottom: 1rem;
                    }
                    .legal-updated {
                        color: #6b7280;
                        margin: 0 0 0.5rem 0;
                    }
                    .legal-body > div + div {
                        margin-top: 2rem;
                    }
                    .legal-body h2 {
                        font-size: 1.25rem;
                        margin-bottom: 0.75rem;
                    }
                    .legal-body p, .legal-body li {
                        color: #4b5563;
                        line-height: 1.625;
                    }
                    .legal-body ul {
                        list-style: disc inside;
                        padding: 0;
                    }
                    .legal-body li + li {
                        margin-top: 0.5rem;
                    }
                    .legal-body a {
                        color: #FF6B6B;
                    }
                    .legal-body a:hover {
                        text-decoration: underline;
                    }
                "#}
            </style>
            <h1>{props.title.clone()}</h1>
            <p class="legal-updated">{format!("Last updated: {}", updated)}</p>
            <TearLine color={TearColor::Coral} />
            <GlassCard class="card-body roomy legal-body" ticket=true>
                { for props.children.iter() }
            </GlassCard>
        </section>
    }
}

#[function_component(PrivacyPolicy)]
pub fn privacy_policy() -> Html {
    html! {
        <LegalDocument title="Privacy Policy">
            <div>
                <h2>{"1. Who We Are"}</h2>
                <p>{"TicéadWatch (\"we\", \"us\", \"our\") is a ticket alert service based in Ireland. We monitor concert ticket availability and send WhatsApp notifications to our users. This policy explains how we collect, use, and protect your personal data in accordance with the General Data Protection Regulation (GDPR)."}</p>
            </div>

            <div>
                <h2>{"2. Data We Collect"}</h2>
                <p>{"We collect and process the following data:"}</p>
                <ul>
                    <li><strong>{"Phone number"}</strong>{" - your WhatsApp number, used to send you alerts and communicate with you"}</li>
                    <li><strong>{"Watch preferences"}</strong>{" - event names, venues, dates, price limits, and ticket quantities you ask us to monitor"}</li>
                    <li><strong>{"Conversation data"}</strong>{" - messages you send to our WhatsApp bot to set up and manage watches"}</li>
                    <li><strong>{"Usage data"}</strong>{" - timestamps of when watches were created, checked, and when alerts were sent"}</li>
                </ul>
            </div>

            <div>
                <h2>{"3. How We Use Your Data"}</h2>
                <ul>
                    <li>{"To monitor ticket availability for events you've requested"}</li>
                    <li>{"To send you WhatsApp alerts when tickets become available"}</li>
                    <li>{"To manage your account (free or premium tier)"}</li>
                    <li>{"To improve and maintain the service"}</li>
                </ul>
                <p>
                    <strong>{"Legal basis:"}</strong>
                    {" We process your data based on your consent (you initiate contact and request alerts) and our legitimate interest in providing the service."}
                </p>
            </div>

            <div>
                <h2>{"4. Third-Party Services"}</h2>
                <p>{"We use the following third-party services to operate TicéadWatch:"}</p>
                <ul>
                    <li><strong>{"Twilio"}</strong>{" (US) - processes WhatsApp messages"}</li>
                    <li><strong>{"MongoDB Atlas"}</strong>{" (EU/Ireland region) - stores your account data, watches, and alert history"}</li>
                    <li><strong>{"Ticketmaster"}</strong>{" (IE) - we query their public API to check ticket availability. We do not share your personal data with Ticketmaster"}</li>
                    <li><strong>{"Vercel"}</strong>{" (US) - hosts our website and API"}</li>
                </ul>
            </div>

            <div>
                <h2>{"5. Data Retention"}</h2>
                <p>{"We retain your data for as long as your account is active. Watch data for completed or cancelled watches is kept for 12 months for your reference, then deleted. If you stop using the service for 6 months with no active watches, your account data will be automatically deleted."}</p>
            </div>

            <div>
                <h2>{"6. Your Rights (GDPR)"}</h2>
                <p>{"Under GDPR, you have the right to:"}</p>
                <ul>
                    <li><strong>{"Access"}</strong>{" - request a copy of all data we hold about you"}</li>
                    <li><strong>{"Rectification"}</strong>{" - correct any inaccurate data"}</li>
                    <li><strong>{"Erasure"}</strong>{" - request deletion of your data (\"right to be forgotten\")"}</li>
                    <li><strong>{"Portability"}</strong>{" - receive your data in a machine-readable format"}</li>
                    <li><strong>{"Withdraw consent"}</strong>{" - stop receiving alerts at any time by messaging \"stop\" on WhatsApp"}</li>
                </ul>
                <p>{"To exercise any of these rights, send \"delete my data\" via WhatsApp or email us at the address below."}</p>
            </div>

            <div>
                <h2>{"7. Security"}</h2>
                <p>{"We use industry-standard security measures including encrypted connections (TLS), secure database hosting with MongoDB Atlas (EU region), and access controls. We do not store payment card details - all payments are processed securely by Stripe."}</p>
            </div>

            <div>
                <h2>{"8. Cookies"}</h2>
                <p>{"Our website does not use tracking cookies or analytics cookies. We use only essential cookies required for the website to function."}</p>
            </div>

            <div>
                <h2>{"9. Changes to This Policy"}</h2>
                <p>{"We may update this privacy policy from time to time. We will notify active users via WhatsApp of any significant changes. The \"last updated\" date at the top of this page reflects the most recent revision."}</p>
            </div>

            <div>
                <h2>{"10. Contact"}</h2>
                <p>
                    {"If you have any questions about this privacy policy or your data, contact us via WhatsApp or email at "}
                    <a href="mailto:privacy@ticketwatch.ie">{"privacy@ticketwatch.ie"}</a>
                    {"."}
                </p>
            </div>
        </LegalDocument>
    }
}

#[function_component(TermsOfService)]
pub fn terms_of_service() -> Html {
    html! {
        <LegalDocument title="Terms of Service">
            <div>
                <h2>{"1. Service Description"}</h2>
                <p>{"TicéadWatch is a ticket availability monitoring service for concerts and live events in Ireland. We check ticket platforms (including Ticketmaster) for availability and send WhatsApp notifications when tickets matching your criteria become available. We do not sell tickets directly."}</p>
            </div>

            <div>
                <h2>{"2. Eligibility"}</h2>
                <p>{"You must be at least 16 years old to use TicéadWatch. By using the service, you confirm that you meet this requirement and that the information you provide is accurate."}</p>
            </div>

            <div>
                <h2>{"3. Service Tiers"}</h2>
                <ul>
                    <li><strong>{"Free tier"}</strong>{" - monitor 1 event at a time, daily availability checks, WhatsApp alerts"}</li>
                    <li><strong>{"Premium tier (€4.99/month)"}</strong>{" - unlimited watches, more frequent checks, priority alerts"}</li>
                </ul>
                <p>{"We reserve the right to modify pricing and tier features with 30 days' notice to existing subscribers."}</p>
            </div>

            <div>
                <h2>{"4. No Guarantee of Tickets"}</h2>
                <p>
                    <strong>{"TicéadWatch does not guarantee that you will be able to purchase tickets."}</strong>
                    {" We notify you when tickets appear to be available based on data from ticket platforms. Availability can change at any moment, and tickets may sell out before you complete a purchase. We are not responsible for missed tickets, pricing changes, or platform outages."}
                </p>
            </div>

            <div>
                <h2>{"5. Acceptable Use"}</h2>
                <p>{"You agree not to:"}</p>
                <ul>
                    <li>{"Use the service for ticket scalping or resale at inflated prices"}</li>
                    <li>{"Create multiple accounts to circumvent free tier limits"}</li>
                    <li>{"Send abusive, threatening, or spam messages to our WhatsApp bot"}</li>
                    <li>{"Attempt to reverse-engineer, scrape, or interfere with our systems"}</li>
                </ul>
                <p>{"We reserve the right to suspend or terminate accounts that violate these terms."}</p>
            </div>

            <div>
                <h2>{"6. Payments & Cancellation"}</h2>
                <p>{"Premium subscriptions are billed monthly via Stripe. You can cancel at any time by messaging \"cancel subscription\" on WhatsApp. Cancellation takes effect at the end of your current billing period. We do not offer refunds for partial months."}</p>
            </div>

            <div>
                <h2>{"7. Limitation of Liability"}</h2>
                <p>{"TicéadWatch is provided \"as is\" without warranties of any kind. To the maximum extent permitted by Irish law, we shall not be liable for any indirect, incidental, or consequential damages arising from your use of the service, including but not limited to missed ticket purchases, incorrect pricing information, or service interruptions."}</p>
            </div>

            <div>
                <h2>{"8. Third-Party Services"}</h2>
                <p>{"Our service relies on third-party platforms including Ticketmaster, Twilio (WhatsApp), and Stripe (payments). We are not responsible for the availability, accuracy, or policies of these platforms. Links to ticket purchase pages are provided for your convenience and are governed by the respective platform's terms."}</p>
            </div>

            <div>
                <h2>{"9. Changes to Terms"}</h2>
                <p>{"We may update these terms from time to time. Continued use of the service after changes are posted constitutes acceptance of the updated terms. For significant changes, we will notify active users via WhatsApp."}</p>
            </div>

            <div>
                <h2>{"10. Governing Law"}</h2>
                <p>{"These terms are governed by the laws of Ireland. Any disputes shall be subject to the jurisdiction of the Irish courts."}</p>
            </div>

            <div>
                <h2>{"11. Contact"}</h2>
                <p>
                    {"Questions about these terms? Contact us via WhatsApp or email at "}
                    <a href="mailto:hello@ticketwatch.ie">{"hello@ticketwatch.ie"}</a>
                    {"."}
                </p>
            </div>
        </LegalDocument>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{count, render_at};

    #[test]
    fn last_updated_reads_like_the_copy() {
        assert_eq!(last_updated().map(format_updated).as_deref(), Some("17 February 2026"));
    }

    fn privacy() -> Html {
        html! { <PrivacyPolicy /> }
    }

    fn terms() -> Html {
        html! { <TermsOfService /> }
    }

    #[tokio::test]
    async fn privacy_has_ten_numbered_sections() {
        let html = render_at("/privacy", privacy).await;
        assert!(html.contains("<h1>Privacy Policy</h1>"));
        assert!(html.contains("Last updated: 17 February 2026"));
        assert_eq!(count(&html, "<h2>"), 10);
        assert!(html.contains("<h2>10. Contact</h2>"));
        assert!(html.contains(r#"href="mailto:privacy@ticketwatch.ie""#));
    }

    #[tokio::test]
    async fn terms_has_eleven_numbered_sections() {
        let html = render_at("/terms", terms).await;
        assert!(html.contains("<h1>Terms of Service</h1>"));
        assert_eq!(count(&html, "<h2>"), 11);
        assert!(html.contains("<h2>4. No Guarantee of Tickets</h2>"));
        assert!(html.contains("ticket-shape"));
    }
}
