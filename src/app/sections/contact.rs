use leptos::{ev::SubmitEvent, html, prelude::*};

use crate::{
    anchor::Anchor,
    app::{
        reveal::{use_section_reveal, Reveal, SectionHeading},
        toast::Toasts,
    },
    contact::{ContactDraft, ContactSubmitter, SubmissionError, SubmitRejected},
    portfolio::PersonalInfo,
};

/// Deliver a contact message. Forwards to the configured backend, or waits
/// and confirms when there is none.
#[server]
pub async fn submit_contact(
    name: String,
    email: String,
    message: String,
) -> Result<String, SubmissionError> {
    use crate::{
        client::ContactChannel,
        config::SiteConfig,
        contact::{check_message, ContactTransport},
    };

    let draft = ContactDraft {
        name,
        email,
        message,
    };
    // the form checks this too, but the endpoint is public
    check_message(&draft.message).map_err(|e| SubmissionError::Rejected(e.to_string()))?;

    let config = use_context::<SiteConfig>().unwrap_or_else(SiteConfig::from_env);
    ContactChannel::from_config(&config)?.send(&draft).await
}

#[component]
pub fn ContactSection(personal: PersonalInfo) -> impl IntoView {
    let anchor = Anchor::Contact;
    let node_ref = NodeRef::<html::Section>::new();
    let revealed = use_section_reveal(anchor, node_ref);
    let toasts = expect_context::<Toasts>();

    let form = RwSignal::new(ContactSubmitter::new());
    let send = Action::new(move |draft: &ContactDraft| {
        let ContactDraft {
            name,
            email,
            message,
        } = draft.clone();
        async move {
            let result = submit_contact(name, email, message).await;
            // the section may have been unmounted while waiting
            if let Some(Some(toast)) = form.try_update(|f| f.finish(result)) {
                toasts.push(toast);
            }
        }
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        match form.try_update(|f| f.begin()) {
            Some(Ok(draft)) => {
                send.dispatch(draft);
            }
            Some(Err(SubmitRejected::Invalid(toast))) => toasts.push(toast),
            Some(Err(SubmitRejected::InFlight)) | None => {}
        }
    };

    let submitting = move || form.with(|f| f.state().is_submitting());
    let mailto = format!("mailto:{}", personal.email);
    let tel = format!("tel:{}", personal.phone);

    view! {
        <section id=anchor.id() node_ref=node_ref class="py-20 relative">
            <div class="container mx-auto px-6">
                <div class="max-w-6xl mx-auto">
                    <SectionHeading anchor title="Get In Touch" />
                    <div class="grid md:grid-cols-2 gap-12">
                        <Reveal anchor revealed order=0>
                            <p class="text-slate-300 text-lg mb-8 leading-relaxed">
                                "I'm currently open to new opportunities and collaborations. Whether you have a project in mind or just want to connect, feel free to reach out!"
                            </p>
                            <div class="space-y-4 text-slate-300">
                                <a href=mailto class="flex items-center gap-3 hover:text-cyan-300 transition-colors">
                                    <span class="text-cyan-300 font-mono">"@"</span>
                                    {personal.email}
                                </a>
                                <a href=tel class="flex items-center gap-3 hover:text-cyan-300 transition-colors">
                                    <span class="text-cyan-300 font-mono">"#"</span>
                                    {personal.phone}
                                </a>
                                <div class="flex items-center gap-3">
                                    <span class="text-cyan-300 font-mono">"~"</span>
                                    {personal.location}
                                </div>
                            </div>
                            <div class="flex gap-4 mt-8">
                                <a
                                    href=personal.github
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="p-3 bg-slate-800 rounded-lg text-cyan-300 hover:bg-cyan-300/10 transition-colors"
                                >
                                    "GitHub"
                                </a>
                                <a
                                    href=personal.linkedin
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="p-3 bg-slate-800 rounded-lg text-cyan-300 hover:bg-cyan-300/10 transition-colors"
                                >
                                    "LinkedIn"
                                </a>
                            </div>
                        </Reveal>
                        <Reveal
                            anchor
                            revealed
                            order=1
                            class="bg-slate-800 border border-cyan-300/20 rounded-lg p-6 md:p-8"
                        >
                            <form on:submit=on_submit class="space-y-4">
                                <div>
                                    <label
                                        for="contact_name"
                                        class="text-cyan-300 text-sm mb-2 block font-mono"
                                    >
                                        "Name"
                                    </label>
                                    <input
                                        id="contact_name"
                                        type="text"
                                        name="name"
                                        required
                                        placeholder="Your name"
                                        class="w-full px-4 py-2 rounded-md bg-navy border border-cyan-300/30 text-white focus:outline-none focus:border-cyan-300"
                                        prop:value=move || form.with(|f| f.draft().name.clone())
                                        on:input=move |ev| {
                                            form.update(|f| {
                                                f.set_name(event_target_value(&ev));
                                                f.dismiss();
                                            })
                                        }
                                    />
                                </div>
                                <div>
                                    <label
                                        for="contact_email"
                                        class="text-cyan-300 text-sm mb-2 block font-mono"
                                    >
                                        "Email"
                                    </label>
                                    <input
                                        id="contact_email"
                                        type="email"
                                        name="email"
                                        required
                                        placeholder="your.email@example.com"
                                        class="w-full px-4 py-2 rounded-md bg-navy border border-cyan-300/30 text-white focus:outline-none focus:border-cyan-300"
                                        prop:value=move || form.with(|f| f.draft().email.clone())
                                        on:input=move |ev| {
                                            form.update(|f| {
                                                f.set_email(event_target_value(&ev));
                                                f.dismiss();
                                            })
                                        }
                                    />
                                </div>
                                <div>
                                    <label
                                        for="contact_message"
                                        class="text-cyan-300 text-sm mb-2 block font-mono"
                                    >
                                        "Message"
                                    </label>
                                    <textarea
                                        id="contact_message"
                                        name="message"
                                        required
                                        rows="5"
                                        placeholder="Your message..."
                                        class="w-full px-4 py-2 rounded-md bg-navy border border-cyan-300/30 text-white focus:outline-none focus:border-cyan-300 resize-none"
                                        prop:value=move || form.with(|f| f.draft().message.clone())
                                        on:input=move |ev| {
                                            form.update(|f| {
                                                f.set_message(event_target_value(&ev));
                                                f.dismiss();
                                            })
                                        }
                                    ></textarea>
                                </div>
                                <button
                                    type="submit"
                                    disabled=submitting
                                    class="w-full bg-cyan-300 text-navy hover:bg-cyan-300/90 disabled:opacity-60 disabled:cursor-not-allowed py-3 rounded-md font-semibold"
                                >
                                    {move || if submitting() { "Sending..." } else { "Send Message" }}
                                </button>
                            </form>
                        </Reveal>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::{app::tests::render, portfolio::tests::sample_document};

    #[test]
    fn test_form_starts_idle() {
        let personal = sample_document().personal;
        let html = render(move || view! { <ContactSection personal /> });
        assert!(html.contains("id=\"contact\""));
        assert!(html.contains("mailto:jane@example.com"));
        assert!(html.contains("Send Message"));
        assert!(!html.contains("Sending..."));
    }
}
