pub use super::campaign::Entity as Campaign;
pub use super::dac::Entity as Dac;
pub use super::donation::Entity as Donation;
pub use super::event::Entity as Event;
pub use super::milestone::Entity as Milestone;
pub use super::user::Entity as User;
