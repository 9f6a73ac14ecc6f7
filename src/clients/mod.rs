//! Clients for the external collaborators
//!
//! The blog CMS, the form-submission store and the mail relay. Each is
//! an opaque HTTP service; none of them is consulted by the search or
//! price engines.

pub mod cms;
pub mod forms;
pub mod mailer;

pub use cms::CmsClient;
pub use forms::FormsClient;
pub use mailer::MailRelay;
