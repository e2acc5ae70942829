pub use super::booking::Entity as Booking;
pub use super::user::Entity as User;
pub use super::vehicle::Entity as Vehicle;
