//! Page body rendering.
//!
//! Produces Confluence storage-format HTML from a [`PageContent`] record by
//! expanding a template file, prefixed with a creation timestamp line.
//!
//! Templates use minijinja syntax with `Title` and `ListOfData` in scope:
//!
//! ```text
//! <h1>{{ Title }}</h1>
//! <ul>{% for item in ListOfData %}<li>{{ item }}</li>{% endfor %}</ul>
//! ```
//!
//! Output is not HTML-escaped, and undefined variables are errors.

use std::fmt::Display;
use std::path::{Path, PathBuf};

use chrono::{DateTime, TimeZone, Utc};
use chrono_tz::Tz;
use minijinja::{AutoEscape, Environment, UndefinedBehavior};

use crate::error::RenderError;
use crate::source::PageContent;

/// Default template location, relative to the working directory.
pub const DEFAULT_TEMPLATE_PATH: &str = "resources/sampleHtml.txt";

/// Body representation sent to Confluence.
pub const STORAGE_REPRESENTATION: &str = "storage";

/// Timestamp layout, e.g. `Jan 2, 2024 at 3:04pm (MST)`.
const TIMESTAMP_FORMAT: &str = "%b %-d, %Y at %-I:%M%P (%Z)";

/// Current time in the local named zone, so `%Z` yields an abbreviation.
///
/// The zone comes from `TZ` when it names an IANA zone, then from the
/// system setting, and falls back to UTC.
pub fn local_now() -> DateTime<Tz> {
    let system = iana_time_zone::get_timezone().ok();
    let zone = resolve_zone(std::env::var("TZ").ok().as_deref(), system.as_deref());
    Utc::now().with_timezone(&zone)
}

fn resolve_zone(tz_env: Option<&str>, system: Option<&str>) -> Tz {
    [tz_env.map(|name| name.trim_start_matches(':')), system]
        .into_iter()
        .flatten()
        .find_map(|name| name.parse::<Tz>().ok())
        .unwrap_or(Tz::UTC)
}

/// Renders page bodies from a template file.
///
/// The template is read from disk on every call, so edits take effect
/// without restarting a long run.
#[derive(Debug, Clone)]
pub struct PageRenderer {
    template_path: PathBuf,
}

impl Default for PageRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_TEMPLATE_PATH)
    }
}

impl PageRenderer {
    /// Create a renderer for the template at `template_path`.
    #[must_use]
    pub fn new(template_path: impl Into<PathBuf>) -> Self {
        Self {
            template_path: template_path.into(),
        }
    }

    /// Path of the template file.
    pub fn template_path(&self) -> &Path {
        &self.template_path
    }

    /// Render the storage body for `content`, stamped with `created`.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Load`] if the template cannot be read and
    /// [`RenderError::Template`] if it cannot be parsed or expanded.
    pub fn render<Z>(
        &self,
        content: &PageContent,
        created: &DateTime<Z>,
    ) -> Result<String, RenderError>
    where
        Z: TimeZone,
        Z::Offset: Display,
    {
        let source =
            std::fs::read_to_string(&self.template_path).map_err(|source| RenderError::Load {
                path: self.template_path.clone(),
                source,
            })?;

        let env = template_env();
        let template = env.template_from_str(&source)?;

        let mut html = timestamp_line(created);
        html.push_str(&template.render(content)?);
        Ok(html)
    }
}

fn template_env<'source>() -> Environment<'source> {
    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env.set_auto_escape_callback(|_| AutoEscape::None);
    env
}

/// `<p>Created: ...</p>` line placed before the template output.
fn timestamp_line<Z>(created: &DateTime<Z>) -> String
where
    Z: TimeZone,
    Z::Offset: Display,
{
    format!("<p>Created: {}</p>", created.format(TIMESTAMP_FORMAT))
}
