//! Outbound Mail Value Object
//!
//! The core renders purpose-specific subject and body before handing
//! the message to the notifier; the notifier only transports it.

use crate::domain::value_object::purpose::Purpose;

/// A rendered message ready for the notifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundMail {
    pub to: Vec<String>,
    pub subject: String,
    pub text: String,
    pub html: String,
}

/// Render the delivery message for a freshly issued code
///
/// The plaintext code appears on a line of its own in the text body;
/// no other body line is purely numeric.
pub fn code_mail(purpose: Purpose, receiver: &str, code: &str) -> OutboundMail {
    let (subject, intro) = match purpose {
        Purpose::VerifyEmail => (
            "Confirm your email address",
            "Use the following code to confirm your email address:",
        ),
        Purpose::ResetPassword => (
            "Reset your password",
            "Use the following code to reset your password:",
        ),
    };

    let text = format!(
        "{intro}\n\n{code}\n\nThe code expires in two hours. \
         If you did not request it, you can ignore this message."
    );
    let html = format!(
        "<p>{intro}</p><p><strong>{code}</strong></p>\
         <p>The code expires in two hours. \
         If you did not request it, you can ignore this message.</p>"
    );

    OutboundMail {
        to: vec![receiver.to_string()],
        subject: subject.to_string(),
        text,
        html,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_mail_carries_code() {
        let mail = code_mail(Purpose::ResetPassword, "a@b.com", "4821");
        assert_eq!(mail.to, vec!["a@b.com".to_string()]);
        assert!(mail.subject.contains("password"));
        assert!(mail.text.contains("4821"));
        assert!(mail.html.contains("<strong>4821</strong>"));
    }

    #[test]
    fn test_code_is_only_numeric_line() {
        let mail = code_mail(Purpose::VerifyEmail, "a@b.com", "0042");
        let numeric_lines: Vec<&str> = mail
            .text
            .lines()
            .filter(|l| !l.is_empty() && l.chars().all(|c| c.is_ascii_digit()))
            .collect();
        assert_eq!(numeric_lines, vec!["0042"]);
    }

    #[test]
    fn test_subjects_differ_by_purpose() {
        let verify = code_mail(Purpose::VerifyEmail, "a@b.com", "1111");
        let reset = code_mail(Purpose::ResetPassword, "a@b.com", "1111");
        assert_ne!(verify.subject, reset.subject);
    }
}
