use crate::handlers::contact_dtos::ContactRequest;

pub fn notification_subject(full_name: &str) -> String {
    format!("New Contact Form Submission - {}", full_name)
}

fn bedroom_label(beds_needed: &str) -> &'static str {
    if beds_needed == "1" {
        "Bedroom"
    } else {
        "Bedrooms"
    }
}

/// HTML body delivered to the office inbox. Keeps the original inline-styled
/// table layout so the notification renders the same in Gmail.
pub fn notification_body(data: &ContactRequest) -> String {
    let message = if data.message.is_empty() {
        "No message provided"
    } else {
        data.message.as_str()
    };

    format!(
        r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto; padding: 20px; border: 1px solid #e0e0e0; border-radius: 5px;">
  <h2 style="color: #0369a1; border-bottom: 2px solid #e0e0e0; padding-bottom: 10px;">New Contact Form Submission</h2>

  <table style="width: 100%; border-collapse: collapse;">
    <tr>
      <td style="padding: 8px; border-bottom: 1px solid #f0f0f0;"><strong>Name:</strong></td>
      <td style="padding: 8px; border-bottom: 1px solid #f0f0f0;">{full_name}</td>
    </tr>
    <tr>
      <td style="padding: 8px; border-bottom: 1px solid #f0f0f0;"><strong>Email:</strong></td>
      <td style="padding: 8px; border-bottom: 1px solid #f0f0f0;">{email}</td>
    </tr>
    <tr>
      <td style="padding: 8px; border-bottom: 1px solid #f0f0f0;"><strong>Phone:</strong></td>
      <td style="padding: 8px; border-bottom: 1px solid #f0f0f0;">{phone}</td>
    </tr>
    <tr>
      <td style="padding: 8px; border-bottom: 1px solid #f0f0f0;"><strong>Beds Needed:</strong></td>
      <td style="padding: 8px; border-bottom: 1px solid #f0f0f0;">{beds_needed} {bedroom_word}</td>
    </tr>
    <tr>
      <td style="padding: 8px;"><strong>Message:</strong></td>
      <td style="padding: 8px;">{message}</td>
    </tr>
  </table>

  <div style="margin-top: 20px; padding-top: 20px; border-top: 1px solid #e0e0e0; font-size: 12px; color: #666;">
    <p>This email was sent from the Northwood Estates MHC contact form.</p>
  </div>
</div>"#,
        full_name = data.full_name,
        email = data.email,
        phone = data.phone,
        beds_needed = data.beds_needed,
        bedroom_word = bedroom_label(&data.beds_needed),
        message = message,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(beds_needed: &str, message: &str) -> ContactRequest {
        ContactRequest {
            full_name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            phone: "(419) 964-6639".to_string(),
            message: message.to_string(),
            beds_needed: beds_needed.to_string(),
        }
    }

    #[test]
    fn subject_includes_submitter_name() {
        assert_eq!(
            notification_subject("Jane Doe"),
            "New Contact Form Submission - Jane Doe"
        );
    }

    #[test]
    fn one_bed_is_singular() {
        let body = notification_body(&request("1", "hello"));
        assert!(body.contains("1 Bedroom<"));
        assert!(!body.contains("1 Bedrooms"));
    }

    #[test]
    fn multiple_beds_are_plural() {
        let body = notification_body(&request("3", "hello"));
        assert!(body.contains("3 Bedrooms"));
    }

    #[test]
    fn non_numeric_bed_count_falls_back_to_plural() {
        let body = notification_body(&request("studio", "hello"));
        assert!(body.contains("studio Bedrooms"));
    }

    #[test]
    fn empty_message_gets_placeholder() {
        let body = notification_body(&request("2", ""));
        assert!(body.contains("No message provided"));
    }

    #[test]
    fn body_embeds_all_submitted_fields() {
        let body = notification_body(&request("2", "Looking to move in this fall"));
        assert!(body.contains("Jane Doe"));
        assert!(body.contains("jane@example.com"));
        assert!(body.contains("(419) 964-6639"));
        assert!(body.contains("Looking to move in this fall"));
    }
}
