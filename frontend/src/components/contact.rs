use yew::prelude::*;

use crate::utils::dom;

pub const ACKNOWLEDGMENT: &str = "Thank you for connecting!";

const CONTACT_DETAILS: [(&str, &str); 3] = [
    ("🌐", "Global Digital Network"),
    ("📧", "future@ai-revolution.io"),
    ("💬", "AI Research Community"),
];

/// Contact section. The form is a placeholder: submitting only acknowledges
/// the visitor, nothing is sent anywhere.
#[function_component]
pub fn ContactForm() -> Html {
    let on_submit = Callback::from(|_: MouseEvent| dom::alert(ACKNOWLEDGMENT));

    html! {
        <div class="contact-grid">
            <div class="contact-info">
                <h4>{"Shape Tomorrow Together"}</h4>
                <p>{"Whether you're a researcher, developer, entrepreneur, or simply fascinated by AI's potential, we want to hear from you. Let's collaborate to ensure AI benefits all of humanity."}</p>
                <div class="contact-details">
                    { for CONTACT_DETAILS.iter().map(|(icon, text)| html! {
                        <div class="contact-item">
                            <span class="contact-icon">{*icon}</span>
                            <span>{*text}</span>
                        </div>
                    })}
                </div>
            </div>
            <div class="contact-form interactive-card">
                <div class="form-group">
                    <input type="text" placeholder="Your Name" />
                </div>
                <div class="form-group">
                    <input type="email" placeholder="Your Email" />
                </div>
                <div class="form-group">
                    <input type="text" placeholder="Area of Interest (AI Research, Development, Ethics, etc.)" />
                </div>
                <div class="form-group">
                    <textarea placeholder="Share your vision for AI's future..." rows="4"></textarea>
                </div>
                <button type="button" class="submit-btn" onclick={on_submit}>
                    {"Connect With Us"}
                </button>
            </div>
        </div>
    }
}
