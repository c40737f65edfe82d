pub mod contact;
pub mod home;
pub mod philosophy;
pub mod properties;
pub mod property;

pub use contact::contact_page;
pub use home::home_page;
pub use philosophy::philosophy_page;
pub use properties::properties_page;
pub use property::property_page;
