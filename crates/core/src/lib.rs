#![deny(missing_docs)]
//! cmsview core: section data model, normalization, theme resolution,
//! snapshot validation, and the preview orchestrator state machine.
//!
//! Everything here is synchronous and side-effect-free given its
//! inputs; the single asynchronous concern (fetching the snapshot) is
//! delegated to the host through [`orchestrator::FetchRequest`].

/// Asset resolver collaborator.
pub mod assets;
/// Editor entry collaborator.
pub mod entry;
/// Error taxonomy and render diagnostics.
pub mod error;
/// Per-section normalizers.
pub mod normalize;
/// Preview orchestrator state machine.
pub mod orchestrator;
/// Three-tier field resolution primitives.
pub mod resolve;
/// Section kinds and normalized data shapes.
pub mod section;
/// Snapshot parsing and structural validation.
pub mod snapshot;
/// Theme context resolution.
pub mod theme;

pub use assets::{AssetResolver, PassthroughAssets, PrefixAssets};
pub use entry::{EmptyEntry, EntrySource, JsonEntry};
pub use error::{
    FetchError, PreviewError, RenderDiagnostics, RenderWarning, StructureError,
};
pub use normalize::{entry_section_path, normalize};
pub use orchestrator::{FETCH_TIMEOUT, FetchRequest, Orchestrator, Phase, SNAPSHOT_PATH};
pub use resolve::{resolve_asset, resolve_bool, resolve_f64, resolve_list, resolve_string};
pub use section::{
    AboutData, Background, ButtonData, CtaData, EnhancedHeroData, FeatureItem, FeaturesData,
    GradientBackground, GradientStyle, HeroData, ImageBackground, NavigationItem, PageContentData,
    SectionData, SectionKind, SiteFooterData, SiteHeaderData, StyledButtonData, TestimonialItem,
    TestimonialsData, VideoBackground,
};
pub use snapshot::Snapshot;
pub use theme::{AnalyticsSettings, ThemeContext, resolve_theme};
