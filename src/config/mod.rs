//! Profiles, render context, settings and manifest resolution.
pub mod manifest;
pub mod profiles;
pub mod render_context;
pub mod store;
pub mod toml_loader;

pub use manifest::{Manifest, ManifestFile};
pub use profiles::{ContentSource, FileEntry, Profile, ProfileRegistry};
pub use render_context::{PackageManager, RenderContext};
pub use store::Settings;
