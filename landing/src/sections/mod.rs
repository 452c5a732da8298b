// Landing page sections
// Developed by the Agrahari Web Team (c)2025

mod about;
mod dock;
mod experience;
mod footer;
mod hero;
mod location;
mod motion;
mod nav;
mod reviews;

pub use about::About;
pub use dock::Dock;
pub use experience::Experiences;
pub use footer::Footer;
pub use hero::Hero;
pub use location::Location;
pub use nav::Nav;
pub use reviews::Reviews;
