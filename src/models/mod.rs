pub mod activities;
pub mod attendees;
pub mod users;

pub use activities::{Activity, NewActivity};
pub use attendees::{Attendee, NewAttendee};
pub use users::{NewUser, User, UserWithRole};
