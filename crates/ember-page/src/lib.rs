//! The portfolio page: section layout, reveal animations and scrolling.
//!
//! [`Page`] stacks every [`Section`](ember_core::Section) into one
//! document, drives the scroll-triggered reveals and renders as a ratatui
//! widget on top of whatever was drawn before it.

pub mod ease;
pub mod font;
pub mod layout;
mod page;
pub mod scroll;
pub mod text;
pub mod timeline;
pub mod trigger;

pub use ease::Ease;
pub use page::Page;
pub use scroll::SmoothScroll;
pub use timeline::{Pose, Timeline, Tween};
pub use trigger::{Scrub, ScrollTrigger, Toggle, TriggerAction};
