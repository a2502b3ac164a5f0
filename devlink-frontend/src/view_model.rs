use devlink_common::{PendingRequest, UserSummary};
use druid::im::Vector;
use druid::Data;

pub const ABOUT_PREVIEW_WORDS: usize = 15;

/// Shortens an about text to its first fifteen words. Returns the preview
/// and whether anything was cut.
pub fn about_preview(about: &str) -> (String, bool) {
    let words: Vec<&str> = about.split_whitespace().collect();
    if words.len() <= ABOUT_PREVIEW_WORDS {
        return (about.to_string(), false);
    }
    (words[..ABOUT_PREVIEW_WORDS].join(" ") + "…", true)
}

/// Display projection of a [`UserSummary`].
#[derive(Clone, Debug, Data, PartialEq)]
pub struct UserCard {
    pub id: String,
    pub full_name: String,
    pub is_verified: bool,
    pub age_gender: Option<String>,
    pub about: String,
    pub about_preview: String,
    pub about_truncated: bool,
    pub skills: Vector<String>,
}

impl UserCard {
    pub fn new(user: &UserSummary) -> Self {
        let about = user.about.clone().unwrap_or_default();
        let (preview, truncated) = about_preview(&about);
        // The age line only renders when both parts are known.
        let age_gender = match (user.age, user.gender.as_deref()) {
            (Some(age), Some(gender)) => Some(format!("{age}, {gender}")),
            _ => None,
        };
        Self {
            id: user.id.0.clone(),
            full_name: user.full_name(),
            is_verified: user.is_verified,
            age_gender,
            about,
            about_preview: preview,
            about_truncated: truncated,
            skills: user.skills.iter().cloned().collect(),
        }
    }
}

/// One entry of the pending-requests list.
#[derive(Clone, Debug, Data, PartialEq)]
pub struct RequestRow {
    pub id: String,
    pub from: UserCard,
    /// A review call for this entry is in flight; accept/reject stay
    /// disabled until it resolves.
    pub review_pending: bool,
    pub show_full_about: bool,
}

impl RequestRow {
    pub fn new(request: &PendingRequest) -> Self {
        Self {
            id: request.id.0.clone(),
            from: UserCard::new(&request.from_user_id),
            review_pending: false,
            show_full_about: false,
        }
    }
}

pub fn request_rows(list: &[PendingRequest]) -> Vector<RequestRow> {
    list.iter().map(RequestRow::new).collect()
}

pub fn user_cards(list: &[UserSummary]) -> Vector<UserCard> {
    list.iter().map(UserCard::new).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use devlink_common::UserId;

    fn user(about: &str) -> UserSummary {
        UserSummary {
            id: UserId("u1".to_string()),
            first_name: "Grace".to_string(),
            last_name: "Hopper".to_string(),
            about: Some(about.to_string()),
            ..Default::default()
        }
    }

    fn long_about() -> String {
        (1..=20)
            .map(|n| format!("w{n}"))
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[test]
    fn short_about_is_left_alone() {
        let (preview, truncated) = about_preview("Ship it");
        assert_eq!(preview, "Ship it");
        assert!(!truncated);
    }

    #[test]
    fn fifteen_word_about_is_not_truncated() {
        let about = (1..=15)
            .map(|n| format!("w{n}"))
            .collect::<Vec<_>>()
            .join(" ");
        let (preview, truncated) = about_preview(&about);
        assert_eq!(preview, about);
        assert!(!truncated);
    }

    #[test]
    fn long_about_is_cut_to_fifteen_words() {
        let (preview, truncated) = about_preview(&long_about());
        assert!(truncated);
        assert_eq!(preview.split_whitespace().count(), ABOUT_PREVIEW_WORDS);
        assert!(preview.starts_with("w1 w2"));
        assert!(preview.ends_with('…'));
    }

    #[test]
    fn card_carries_truncation_marker() {
        let card = UserCard::new(&user(&long_about()));
        assert!(card.about_truncated);
        assert_ne!(card.about_preview, card.about);
        assert_eq!(card.full_name, "Grace Hopper");
    }

    #[test]
    fn age_line_needs_both_parts() {
        let mut summary = user("hi");
        summary.age = Some(31);
        assert_eq!(UserCard::new(&summary).age_gender, None);
        summary.gender = Some("female".to_string());
        assert_eq!(
            UserCard::new(&summary).age_gender.as_deref(),
            Some("31, female")
        );
    }
}
