//! Contact form: WhatsApp hand-off and submit button feedback.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{
    document::{Document, Target},
    locale::Language,
};

/// Number the contact form hands messages to.
pub const WHATSAPP_NUMBER: &str = "+201000204565";

/// Time spent in [`SubmitState::Sending`] before showing success.
pub const SENT_AFTER: Duration = Duration::from_millis(1000);

/// Time the success state stays visible before the form resets.
pub const RESET_AFTER: Duration = Duration::from_millis(2000);

/// Submitted form fields. Empty fields render as `-`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactForm {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Reply address.
    pub email: String,
    /// Phone number.
    pub phone: String,
    /// Free-form message body.
    pub message: String,
}

/// `-` stands in for an empty form field.
fn or_dash(s: &str) -> &str {
    if s.is_empty() { "-" } else { s }
}

impl ContactForm {
    /// First and last name joined by a space.
    pub fn full_name(&self) -> String {
        format!("{} {}", or_dash(&self.first_name), or_dash(&self.last_name))
    }

    /// Message body sent to the clinic.
    pub fn message_text(&self) -> String {
        format!(
            "مرحبًا دكتور! \nالاسم: {}\nالبريد الإلكتروني: {}\nالهاتف: {}\nالرسالة: {}\n",
            self.full_name(),
            or_dash(&self.email),
            or_dash(&self.phone),
            or_dash(&self.message),
        )
    }

    /// `https://wa.me/` link that opens a chat with `number` prefilled.
    pub fn whatsapp_url(&self, number: &str) -> String {
        format!(
            "https://wa.me/{number}?text={}",
            encode_component(&self.message_text())
        )
    }
}

/// Percent-encode like a browser's `encodeURIComponent`, which leaves
/// `!'()*` alone.
fn encode_component(s: &str) -> String {
    urlencoding::encode(s)
        .replace("%21", "!")
        .replace("%27", "'")
        .replace("%28", "(")
        .replace("%29", ")")
        .replace("%2A", "*")
}

/// Submit button feedback cycle: `Idle → Sending → Sent → Idle`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmitState {
    /// Ready to send.
    #[default]
    Idle,
    /// Submitted; the button is disabled.
    Sending,
    /// Confirmation shown before resetting.
    Sent,
}

impl SubmitState {
    /// Button caption in `language`.
    pub fn label(self, language: Language) -> &'static str {
        match (self, language) {
            (Self::Idle, Language::En) => "Send Message",
            (Self::Idle, Language::Ar) => "إرسال الرسالة",
            (Self::Sending, Language::En) => "Sending...",
            (Self::Sending, Language::Ar) => "جاري الإرسال...",
            (Self::Sent, Language::En) => "Message Sent!",
            (Self::Sent, Language::Ar) => "تم الإرسال!",
        }
    }

    /// Render this state onto the `.contact-submit` button.
    pub fn apply<D: Document + ?Sized>(self, doc: &mut D, language: Language) {
        let Some(button) = doc.select("contact-submit").first().copied() else {
            return;
        };
        let target = Target::Element(button);
        doc.set_text(button, self.label(language));

        let blue = self != Self::Sent;
        doc.set_class(target, "bg-blue-600", blue);
        doc.set_class(target, "hover:bg-blue-700", blue);
        doc.set_class(target, "bg-green-600", !blue);

        if self == Self::Idle {
            doc.remove_attribute(target, "disabled");
        } else {
            doc.set_attribute(target, "disabled", "");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::MemoryDocument;

    #[test]
    fn blank_fields_render_as_dash() {
        let form = ContactForm {
            first_name: "Mona".into(),
            ..ContactForm::default()
        };
        assert_eq!(form.full_name(), "Mona -");
        assert!(form.message_text().contains("الهاتف: -\n"));
    }

    #[test]
    fn url_is_encoded_like_a_browser() {
        let form = ContactForm {
            first_name: "A".into(),
            last_name: "B".into(),
            message: "Hi (again)".into(),
            ..ContactForm::default()
        };
        let url = form.whatsapp_url(WHATSAPP_NUMBER);
        assert!(url.starts_with("https://wa.me/+201000204565?text="));
        assert!(url.contains("!%20%0A"));
        assert!(url.contains("A%20B%0A"));
        assert!(url.contains("Hi%20(again)%0A"));
        assert!(!url.contains(' '));
    }

    #[test]
    fn form_decodes_camel_case_with_gaps() {
        let form: ContactForm =
            serde_json::from_str(r#"{"firstName":"Ali","phone":"0100"}"#).unwrap();
        assert_eq!(form.first_name, "Ali");
        assert_eq!(form.phone, "0100");
        assert!(form.email.is_empty());
    }

    #[test]
    fn button_cycles_through_states() {
        let mut doc = MemoryDocument::clinic_page();
        let button = doc.select("contact-submit")[0];
        let target = Target::Element(button);

        SubmitState::Sending.apply(&mut doc, Language::Ar);
        assert_eq!(doc.text(button), Some("جاري الإرسال..."));
        assert_eq!(doc.attribute(target, "disabled"), Some(""));

        SubmitState::Sent.apply(&mut doc, Language::En);
        assert_eq!(doc.text(button), Some("Message Sent!"));
        assert!(doc.has_class(target, "bg-green-600"));
        assert!(!doc.has_class(target, "bg-blue-600"));

        SubmitState::Idle.apply(&mut doc, Language::En);
        assert_eq!(doc, MemoryDocument::clinic_page());
    }
}
