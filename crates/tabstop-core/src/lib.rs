//! # tabstop Core
//!
//! Locates the elements inside a container that can receive input focus.
//!
//! ## Pipeline
//!
//! 1. **Candidate selection**: one pass over the container's descendants,
//!    matching each element against a fixed rule table ([`CandidateRule`]).
//! 2. **Visibility**: candidates without a layout box or client rects are
//!    dropped.
//! 3. **Image maps**: `area` elements are judged by the image that uses
//!    their map, not by their own box.
//! 4. **Scrollable regions** (opt-in): elements that clip overflowing
//!    content are appended after the primary list.
//!
//! The host tree is reached only through the [`ElementQueryProvider`] and
//! [`DocumentScope`] capabilities.
//!
//! [`ElementQueryProvider`]: tabstop_protocols::ElementQueryProvider
//! [`DocumentScope`]: tabstop_protocols::DocumentScope

mod area;
mod decision;
pub mod focus_outside;
mod locator;
mod scrollable;
mod selector;
mod visibility;

pub use decision::FocusDecision;
pub use focus_outside::{
    is_focus_normalized_button, BlurEvent, FocusOutsideHandler, FocusOutsideMonitor, PointerKind,
};
pub use locator::{find, FocusableLocator};
pub use selector::CandidateRule;
pub use visibility::is_visible;
