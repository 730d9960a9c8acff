//! Configuration section definitions.
//!
//! Each module corresponds to a key of the theme config:
//!
//! | Module     | Key              | Purpose                              |
//! |------------|------------------|--------------------------------------|
//! | `site`     | `[site]`         | Title, description, icon, template   |
//! | `nav`      | `nav`            | Top navigation links and groups      |
//! | `sidebar`  | `sidebar`        | Prefix-keyed sidebar sections        |
//! | `social`   | `social_links`   | Social icon links                    |
//! | `footer`   | `[footer]`       | Footer message and copyright         |
//! | `search`   | `[search]`       | Search provider                      |
//! | `head`     | `head`           | Extra `<head>` tags                  |
//! | `markdown` | `[markdown]`     | Code highlight themes                |
//! | `edit`     | `[edit_link]`    | "Edit this page" link pattern        |

mod edit;
mod footer;
mod head;
mod markdown;
pub mod nav;
pub mod sidebar;
mod search;
mod site;
mod social;

pub use edit::EditLinkConfig;
pub use footer::FooterConfig;
pub use head::{HeadTag, validate_head};
pub use markdown::{CodeTheme, MarkdownConfig};
pub use nav::{NavGroup, NavItem, NavLink, validate_nav};
pub use search::SearchConfig;
pub use sidebar::{AdjacentPages, SidebarMap, SidebarSection};
pub use site::{SiteMeta, check_title_template};
pub use social::{SocialIcon, SocialLink, validate_social_links};
