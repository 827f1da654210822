//! Headless state machines for the page behaviors around the hero:
//! scroll reveals and the FAQ accordion. The web layer owns the DOM
//! observers and listeners and feeds events through these.

mod accordion;
mod reveal;

// Re-export public types
pub use accordion::Accordion;
pub use reveal::RevealSet;
