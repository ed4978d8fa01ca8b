//! UI Components

pub mod card_front;
pub mod info_button;
pub mod pill;
pub mod styles;

pub use card_front::NftCardFront;
pub use info_button::InfoButton;
pub use pill::Pill;
pub use styles::CARD_STYLES;
