//! Plain text messages.

use std::any::Any;

use crate::content::{
    domain::{ModelResult, PropertySpec, Schema},
    model::{ContentModel, ModelContext, ModelCore},
};
use crate::type_registry::domain::{ModelDescriptor, RegisteredModel};

/// MIME type of the text root part.
pub const TEXT_MIME_TYPE: &str = "application/vnd.layer.text+json";

/// Registered type name.
pub const TEXT_TYPE_NAME: &str = "TextModel";

const TEXT: &str = "text";
const AUTHOR: &str = "author";
const SUMMARY: &str = "summary";
const TITLE: &str = "title";
const SUBTITLE: &str = "subtitle";

static PROPERTIES: [PropertySpec; 5] = [
    PropertySpec::text(TEXT),
    PropertySpec::text(AUTHOR),
    PropertySpec::text(SUMMARY),
    PropertySpec::text(TITLE),
    PropertySpec::text(SUBTITLE),
];

static DESCRIPTOR: ModelDescriptor =
    ModelDescriptor::new(TEXT_TYPE_NAME, TEXT_MIME_TYPE, Schema::new(&PROPERTIES))
        .with_labels("Text Message", "Text Messages")
        .with_summary_template("{{ text }}")
        .with_renderers("layer-text-message-view", "layer-text-message-view");

/// A text message with optional attribution and headings.
#[derive(Debug)]
pub struct TextModel {
    core: ModelCore,
}

impl TextModel {
    /// Creates an empty local text model.
    #[must_use]
    pub fn new(context: ModelContext) -> Self {
        Self {
            core: ModelCore::new(&DESCRIPTOR, context),
        }
    }

    /// Message body.
    #[must_use]
    pub fn text(&self) -> &str {
        self.core.properties().text(TEXT)
    }

    /// Attribution line.
    #[must_use]
    pub fn author(&self) -> &str {
        self.core.properties().text(AUTHOR)
    }

    /// Short summary.
    #[must_use]
    pub fn summary(&self) -> &str {
        self.core.properties().text(SUMMARY)
    }

    /// Title property.
    #[must_use]
    pub fn title(&self) -> &str {
        self.core.properties().text(TITLE)
    }

    /// Subtitle property.
    #[must_use]
    pub fn subtitle(&self) -> &str {
        self.core.properties().text(SUBTITLE)
    }

    /// Sets the message body.
    ///
    /// # Errors
    ///
    /// Never fails for this schema; the signature mirrors
    /// [`ModelCore::set_property`].
    pub fn set_text(&mut self, text: impl Into<String>) -> ModelResult<()> {
        self.core.set_property(TEXT, text.into())
    }

    /// Sets the attribution line.
    ///
    /// # Errors
    ///
    /// As for [`TextModel::set_text`].
    pub fn set_author(&mut self, author: impl Into<String>) -> ModelResult<()> {
        self.core.set_property(AUTHOR, author.into())
    }

    /// Sets the summary.
    ///
    /// # Errors
    ///
    /// As for [`TextModel::set_text`].
    pub fn set_summary(&mut self, summary: impl Into<String>) -> ModelResult<()> {
        self.core.set_property(SUMMARY, summary.into())
    }

    /// Sets the title.
    ///
    /// # Errors
    ///
    /// As for [`TextModel::set_text`].
    pub fn set_title(&mut self, title: impl Into<String>) -> ModelResult<()> {
        self.core.set_property(TITLE, title.into())
    }

    /// Sets the subtitle.
    ///
    /// # Errors
    ///
    /// As for [`TextModel::set_text`].
    pub fn set_subtitle(&mut self, subtitle: impl Into<String>) -> ModelResult<()> {
        self.core.set_property(SUBTITLE, subtitle.into())
    }
}

impl ContentModel for TextModel {
    fn core(&self) -> &ModelCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ModelCore {
        &mut self.core
    }

    fn title_text(&self) -> String {
        if self.title().is_empty() {
            self.core.one_line_summary()
        } else {
            self.title().to_owned()
        }
    }

    fn description(&self) -> String {
        self.subtitle().to_owned()
    }

    fn footer(&self) -> String {
        self.author().to_owned()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl RegisteredModel for TextModel {
    const DESCRIPTOR: &'static ModelDescriptor = &DESCRIPTOR;

    fn create(context: ModelContext) -> Self {
        Self::new(context)
    }
}
