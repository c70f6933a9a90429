use serde::Deserialize;

/// Contact form submission as posted by the site. Field names are camelCase
/// on the wire. Every field defaults to empty so an omitted field and an
/// empty one both fall through to the handler's presence check instead of
/// being rejected by the deserializer.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactRequest {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub beds_needed: String,
}

impl ContactRequest {
    /// Mirrors the truthiness check the endpoint applies before relaying:
    /// `message` is optional, the other four fields must be non-empty.
    pub fn has_required_fields(&self) -> bool {
        !self.full_name.is_empty()
            && !self.email.is_empty()
            && !self.phone.is_empty()
            && !self.beds_needed.is_empty()
    }
}
