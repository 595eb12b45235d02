//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuArrowUp as Parent, LuChevronRight as ChevronRight, LuFile as File,
        LuFolder as Folder, LuGlobe as Bucket, LuX as Error,
    };
}

mod bootstrap {
    pub use icondata::{
        BsArrowUp as Parent, BsChevronRight as ChevronRight, BsFileEarmark as File,
        BsFolderFill as Folder, BsGlobe as Bucket, BsXLg as Error,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(BUCKET, Bucket);
themed_icon!(CHEVRON_RIGHT, ChevronRight);
themed_icon!(ERROR, Error);
themed_icon!(FILE, File);
themed_icon!(FOLDER, Folder);
themed_icon!(PARENT, Parent);
