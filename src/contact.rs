use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

pub const CONTACT_ADDRESS: &str = "info@zabahsoft.com";

/// RFC 3986 unreserved characters stay as they are, everything else in a
/// query value is escaped.
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Hands a composed URI to whatever opens `mailto:` links on this platform.
/// There is no result: the platform gives no feedback.
pub trait MailHandoff {
    fn hand_off(&mut self, uri: &str);
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MailtoRequest {
    pub to: String,
    pub subject: String,
    pub body: String,
}

impl MailtoRequest {
    pub fn build_request(name: &str, message: &str) -> Self {
        Self {
            to: CONTACT_ADDRESS.to_string(),
            subject: format!("Build Request from {name}"),
            body: format!("Name: {name}\r\n\r\nDetails:\r\n{message}"),
        }
    }

    pub fn to_uri(&self) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            self.to,
            utf8_percent_encode(&self.subject, QUERY_VALUE),
            utf8_percent_encode(&self.body, QUERY_VALUE),
        )
    }
}

/// `mailto:` link with no subject or body, used by the plain contact button.
pub fn plain_mailto() -> String {
    format!("mailto:{CONTACT_ADDRESS}")
}

#[derive(Debug, Default)]
pub struct ContactModal {
    open: bool,
    pub name: String,
    pub message: String,
}

impl ContactModal {
    pub fn open(&mut self) {
        self.open = true;
    }

    /// Field contents survive closing.
    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Both fields must hold something; whitespace counts.
    pub fn can_submit(&self) -> bool {
        !self.name.is_empty() && !self.message.is_empty()
    }

    pub fn submit<H: MailHandoff + ?Sized>(&mut self, handoff: &mut H) -> Option<MailtoRequest> {
        if !self.can_submit() {
            return None;
        }

        let request = MailtoRequest::build_request(&self.name, &self.message);
        log::info!("handing off build request from {:?}", self.name);
        handoff.hand_off(&request.to_uri());
        self.close();
        Some(request)
    }
}
