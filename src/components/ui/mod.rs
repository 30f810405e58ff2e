mod alert;
mod badge_card;
mod button;
mod spinner;

pub(crate) use alert::{Alert, AlertKind};
pub(crate) use badge_card::BadgeCard;
pub(crate) use button::Button;
pub(crate) use spinner::Spinner;
