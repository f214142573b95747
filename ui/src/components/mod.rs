pub mod form_fields;
pub mod layout;
pub mod media_upload;
pub mod step_progress;
pub mod toast;

pub use layout::MainLayout;
pub use media_upload::CategorizedMediaUpload;
pub use step_progress::StepProgress;
pub use toast::ToastContainer;
