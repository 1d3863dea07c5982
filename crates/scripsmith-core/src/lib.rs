//! Scripsmith Core - Content model, animation timing, and relay types
//!
//! This crate provides the framework-independent pieces of the Scripsmith
//! portfolio site:
//! - Static page content (sections, projects, skills, profile copy)
//! - The neon-on-dark palette and color handling
//! - Animation timing: easing, tweens, staggered delays, looping waves
//! - One-shot reveal latches for viewport-triggered animations
//! - The decor boundary guarding optional 3D subtrees
//! - Procedural decoration geometry
//! - Email-relay request types and validation

pub mod anim;
pub mod boundary;
pub mod content;
pub mod geometry;
pub mod relay;
pub mod reveal;
pub mod theme;

pub use anim::{smooth_factor, Easing, LoopWave, Tween};
pub use boundary::{BoundaryState, DecorBoundary};
pub use content::{
    Achievement, ContactChannel, Interest, OrbitLogo, Project, Section, SectionHeading,
    ShowcasePanel, Skill, SkillCategory, SocialLink,
};
pub use geometry::{float_offset, particle_field, GeometryError};
pub use relay::{EmailPayload, RelayConfig, RelayError, RelayOutcome, SendEmailRequest};
pub use reveal::{RevealKey, RevealRegistry};
pub use theme::{palette, Rgba, ThemeError};
