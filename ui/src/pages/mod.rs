pub mod admin_content;
pub mod home;
pub mod listing_submitted;
pub mod listing_wizard;
pub mod not_found;

pub use admin_content::AdminContentPage;
pub use home::HomePage;
pub use listing_submitted::ListingSubmittedPage;
pub use listing_wizard::ListingWizardPage;
pub use not_found::NotFoundPage;
