//! Home Page Sections
//!
//! Each section is a self-contained block of the marketing page, listed in
//! the order the home page stacks them.

mod comparison;
mod delegate;
mod footer;
mod hero;
mod how_it_works;
mod presentation;
mod query;
mod search;
mod workspace;

pub use comparison::ComparisonSection;
pub use delegate::DelegateSection;
pub use footer::Footer;
pub use hero::HeroSection;
pub use how_it_works::HowItWorks;
pub use presentation::PresentationSection;
pub use query::QuerySection;
pub use search::SearchSection;
pub use workspace::WorkspaceSection;
