#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactChannel {
    Email,
    Phone,
    LinkedIn,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContactTarget {
    SameTab(String),
    NewTab(String),
}

impl ContactChannel {
    /// Picks the channel from an icon's class list, e.g. `"fas fa-envelope"`.
    pub fn from_icon_class(classes: &str) -> Option<Self> {
        classes.split_whitespace().find_map(|class| match class {
            "fa-envelope" => Some(ContactChannel::Email),
            "fa-phone" => Some(ContactChannel::Phone),
            "fa-linkedin" => Some(ContactChannel::LinkedIn),
            _ => None,
        })
    }

    pub fn target(self, text: &str, linkedin_base: &str) -> ContactTarget {
        let text = text.trim();
        match self {
            ContactChannel::Email => ContactTarget::SameTab(format!("mailto:{}", text)),
            ContactChannel::Phone => ContactTarget::SameTab(format!("tel:{}", text)),
            ContactChannel::LinkedIn => ContactTarget::NewTab(format!("{}{}", linkedin_base, text)),
        }
    }
}
