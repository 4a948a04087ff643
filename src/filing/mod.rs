//! Filing collaborators: everything that happens after assessment.
//!
//! The assessment itself is pure and deterministic; the helpers here are
//! the explicitly separate collaborators around it. Confirmation numbers
//! are random, so generating them lives here and is invoked after the
//! calculation, never inside it. The receipt and share text are pure
//! formatting functions over a [`crate::models::FilingRecord`].

mod confirmation;
mod format;
mod receipt;
mod share;

pub use confirmation::generate_confirmation_number;
pub use format::format_cc;
pub use receipt::render_receipt;
pub use share::generate_share_text;
