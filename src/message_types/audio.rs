//! Audio clips with optional preview image and transcript.

use async_trait::async_trait;
use std::any::Any;

use crate::content::{
    domain::{Blob, ContentPart, ModelResult, PropertySpec, Role, Schema},
    model::{self, ContentModel, InspectionError, ModelContext, ModelCore},
};
use crate::type_registry::domain::{ModelDescriptor, RegisteredModel};

/// MIME type of the audio root part.
pub const AUDIO_MIME_TYPE: &str = "application/vnd.layer.audio+json";

/// Registered type name.
pub const AUDIO_TYPE_NAME: &str = "AudioModel";

const SOURCE_URL: &str = "source_url";
const PREVIEW_URL: &str = "preview_url";
const ALBUM: &str = "album";
const ARTIST: &str = "artist";
const GENRE: &str = "genre";
const TITLE: &str = "title";
const MIME_TYPE: &str = "mime_type";
const DURATION: &str = "duration";
const SIZE: &str = "size";
const PREVIEW_WIDTH: &str = "preview_width";
const PREVIEW_HEIGHT: &str = "preview_height";
const CURRENT_TIME: &str = "current_time";

static PROPERTIES: [PropertySpec; 12] = [
    PropertySpec::text(SOURCE_URL),
    PropertySpec::text(PREVIEW_URL),
    PropertySpec::text(ALBUM),
    PropertySpec::text(ARTIST),
    PropertySpec::text(GENRE),
    PropertySpec::text(TITLE),
    PropertySpec::text(MIME_TYPE),
    PropertySpec::number(DURATION),
    PropertySpec::count(SIZE),
    PropertySpec::count(PREVIEW_WIDTH),
    PropertySpec::count(PREVIEW_HEIGHT),
    PropertySpec::number(CURRENT_TIME).observable().local(),
];

static SOURCES: [Role; 2] = [Role::SOURCE, Role::PREVIEW];

static CHILD_ROLES: [Role; 3] = [Role::SOURCE, Role::PREVIEW, Role::TRANSCRIPT];

static DESCRIPTOR: ModelDescriptor =
    ModelDescriptor::new(AUDIO_TYPE_NAME, AUDIO_MIME_TYPE, Schema::new(&PROPERTIES))
        .with_sources(&SOURCES)
        .with_child_roles(&CHILD_ROLES)
        .with_labels("Audio Message", "Audio Messages")
        .with_default_action("layer-show-large-message")
        .with_renderers("layer-audio-message-view", "layer-audio-message-large-view");

/// An audio clip message.
///
/// The clip itself travels as a `source` child part, or is referenced by
/// `source_url`. An optional `preview` image and `transcript` may accompany
/// it. When generated from a local blob, the clip's size, MIME type, title
/// and duration are filled in from the blob before the root part is built.
///
/// # Examples
///
/// ```
/// use tessera::content::model::{ContentModel, ModelContext};
/// use tessera::message_types::AudioModel;
///
/// let mut audio = AudioModel::new(ModelContext::detached());
/// audio.set_artist("Bad Intonation")?;
/// audio.set_duration(500.0)?;
///
/// assert_eq!(audio.description(), "Bad Intonation");
/// assert_eq!(audio.footer(), "00:08:20");
/// # Ok::<(), tessera::content::domain::ModelError>(())
/// ```
#[derive(Debug)]
pub struct AudioModel {
    core: ModelCore,
}

impl AudioModel {
    /// Creates an empty local audio model.
    #[must_use]
    pub fn new(context: ModelContext) -> Self {
        Self {
            core: ModelCore::new(&DESCRIPTOR, context),
        }
    }

    /// Explicit URL of the clip.
    #[must_use]
    pub fn explicit_source_url(&self) -> &str {
        self.core.properties().text(SOURCE_URL)
    }

    /// Explicit URL of the preview image.
    #[must_use]
    pub fn explicit_preview_url(&self) -> &str {
        self.core.properties().text(PREVIEW_URL)
    }

    /// Album name.
    #[must_use]
    pub fn album(&self) -> &str {
        self.core.properties().text(ALBUM)
    }

    /// Artist name.
    #[must_use]
    pub fn artist(&self) -> &str {
        self.core.properties().text(ARTIST)
    }

    /// Genre.
    #[must_use]
    pub fn genre(&self) -> &str {
        self.core.properties().text(GENRE)
    }

    /// Title property, without fallbacks. See [`ContentModel::title_text`].
    #[must_use]
    pub fn title(&self) -> &str {
        self.core.properties().text(TITLE)
    }

    /// MIME type of the clip (not of the root part).
    #[must_use]
    pub fn mime_type(&self) -> &str {
        self.core.properties().text(MIME_TYPE)
    }

    /// Length of the clip in seconds, if known.
    #[must_use]
    pub fn duration(&self) -> Option<f64> {
        self.core.properties().number(DURATION)
    }

    /// Size of the clip in bytes; zero when unknown.
    #[must_use]
    pub fn size(&self) -> u64 {
        self.core.properties().count(SIZE)
    }

    /// Preview width in pixels; zero when unknown.
    #[must_use]
    pub fn preview_width(&self) -> u64 {
        self.core.properties().count(PREVIEW_WIDTH)
    }

    /// Preview height in pixels; zero when unknown.
    #[must_use]
    pub fn preview_height(&self) -> u64 {
        self.core.properties().count(PREVIEW_HEIGHT)
    }

    /// Playback position in seconds. Local to this client.
    #[must_use]
    pub fn current_time(&self) -> f64 {
        self.core
            .properties()
            .number(CURRENT_TIME)
            .unwrap_or_default()
    }

    /// Sets the explicit clip URL.
    ///
    /// # Errors
    ///
    /// Never fails for this schema; the signature mirrors
    /// [`ModelCore::set_property`].
    pub fn set_source_url(&mut self, url: impl Into<String>) -> ModelResult<()> {
        self.core.set_property(SOURCE_URL, url.into())
    }

    /// Sets the explicit preview URL.
    ///
    /// # Errors
    ///
    /// As for [`AudioModel::set_source_url`].
    pub fn set_preview_url(&mut self, url: impl Into<String>) -> ModelResult<()> {
        self.core.set_property(PREVIEW_URL, url.into())
    }

    /// Sets the album name.
    ///
    /// # Errors
    ///
    /// As for [`AudioModel::set_source_url`].
    pub fn set_album(&mut self, album: impl Into<String>) -> ModelResult<()> {
        self.core.set_property(ALBUM, album.into())
    }

    /// Sets the artist name.
    ///
    /// # Errors
    ///
    /// As for [`AudioModel::set_source_url`].
    pub fn set_artist(&mut self, artist: impl Into<String>) -> ModelResult<()> {
        self.core.set_property(ARTIST, artist.into())
    }

    /// Sets the genre.
    ///
    /// # Errors
    ///
    /// As for [`AudioModel::set_source_url`].
    pub fn set_genre(&mut self, genre: impl Into<String>) -> ModelResult<()> {
        self.core.set_property(GENRE, genre.into())
    }

    /// Sets the title.
    ///
    /// # Errors
    ///
    /// As for [`AudioModel::set_source_url`].
    pub fn set_title(&mut self, title: impl Into<String>) -> ModelResult<()> {
        self.core.set_property(TITLE, title.into())
    }

    /// Sets the clip MIME type.
    ///
    /// # Errors
    ///
    /// As for [`AudioModel::set_source_url`].
    pub fn set_mime_type(&mut self, mime_type: impl Into<String>) -> ModelResult<()> {
        self.core.set_property(MIME_TYPE, mime_type.into())
    }

    /// Sets the clip length in seconds. Non-finite values clear it.
    ///
    /// # Errors
    ///
    /// As for [`AudioModel::set_source_url`].
    pub fn set_duration(&mut self, seconds: f64) -> ModelResult<()> {
        self.core.set_property(DURATION, seconds)
    }

    /// Sets the clip size in bytes.
    ///
    /// # Errors
    ///
    /// As for [`AudioModel::set_source_url`].
    pub fn set_size(&mut self, bytes: u64) -> ModelResult<()> {
        self.core.set_property(SIZE, bytes)
    }

    /// Sets the playback position and notifies observers when it changes.
    ///
    /// # Errors
    ///
    /// As for [`AudioModel::set_source_url`].
    pub fn set_current_time(&mut self, seconds: f64) -> ModelResult<()> {
        self.core.set_property(CURRENT_TIME, seconds)
    }

    /// Attaches a local clip to be sent as the `source` part.
    ///
    /// # Errors
    ///
    /// Never fails: `source` is a declared binary source.
    pub fn set_source(&mut self, blob: Blob) -> ModelResult<()> {
        self.core.set_source(Role::SOURCE, blob)
    }

    /// Attaches a local image to be sent as the `preview` part.
    ///
    /// # Errors
    ///
    /// Never fails: `preview` is a declared binary source.
    pub fn set_preview(&mut self, blob: Blob) -> ModelResult<()> {
        self.core.set_source(Role::PREVIEW, blob)
    }

    /// Part bound to the `source` role.
    #[must_use]
    pub fn source_part(&self) -> Option<&ContentPart> {
        self.core.bound(&Role::SOURCE)
    }

    /// Part bound to the `preview` role.
    #[must_use]
    pub fn preview_part(&self) -> Option<&ContentPart> {
        self.core.bound(&Role::PREVIEW)
    }

    /// Part bound to the `transcript` role.
    #[must_use]
    pub fn transcript_part(&self) -> Option<&ContentPart> {
        self.core.bound(&Role::TRANSCRIPT)
    }

    /// Resolves a playable URL for the clip.
    ///
    /// Prefers `source_url`, then the `source` part's own URL, then a
    /// fetch-stream request for that part. Yields an empty string when
    /// nothing resolves.
    pub async fn source_url(&self) -> String {
        let context = self.core.context();
        model::resolve_resource_url(
            self.explicit_source_url(),
            self.source_part(),
            context.fetcher(),
            context.config().fetch_timeout,
        )
        .await
    }

    /// Resolves a URL for the preview image, with the same precedence as
    /// [`AudioModel::source_url`].
    pub async fn preview_url(&self) -> String {
        let context = self.core.context();
        model::resolve_resource_url(
            self.explicit_preview_url(),
            self.preview_part(),
            context.fetcher(),
            context.config().fetch_timeout,
        )
        .await
    }

    /// Duration as `HH:MM:SS`, rounded to the nearest second.
    #[must_use]
    pub fn formatted_duration(&self) -> String {
        format_duration(self.duration().unwrap_or_default())
    }

    /// Size in whole kilobytes with thousands separators, e.g. `1,234K`.
    #[must_use]
    pub fn formatted_size(&self) -> String {
        format_kilobytes(self.size())
    }

    async fn inspect_clip(&mut self, blob: &Blob) -> Result<(), InspectionError> {
        if self.title().is_empty()
            && let Some(name) = blob.name()
        {
            self.set_title(name)?;
        }
        if self.mime_type().is_empty() {
            self.set_mime_type(blob.mime_type())?;
        }
        self.set_size(blob.size())?;

        let metadata = self.core.context().probe().probe_audio(blob).await?;
        self.set_duration(metadata.duration_seconds)?;
        Ok(())
    }

    async fn inspect_preview(&mut self, blob: &Blob) -> Result<(), InspectionError> {
        let dimensions = self.core.context().probe().probe_image(blob).await?;
        self.core.set_property(PREVIEW_WIDTH, dimensions.width)?;
        self.core.set_property(PREVIEW_HEIGHT, dimensions.height)?;
        Ok(())
    }
}

#[async_trait]
impl ContentModel for AudioModel {
    fn core(&self) -> &ModelCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ModelCore {
        &mut self.core
    }

    async fn inspect_source(&mut self, role: &Role, blob: &Blob) -> Result<(), InspectionError> {
        if *role == Role::SOURCE {
            self.inspect_clip(blob).await
        } else if *role == Role::PREVIEW {
            self.inspect_preview(blob).await
        } else {
            Ok(())
        }
    }

    fn resolve_derived(&mut self) {
        if !self.mime_type().is_empty() {
            return;
        }
        let Some(inferred) = self.source_part().map(|part| part.mime_type().to_owned()) else {
            return;
        };
        if let Err(err) = self.set_mime_type(inferred) {
            tracing::debug!(error = %err, "could not infer clip MIME type");
        }
    }

    fn title_text(&self) -> String {
        if !self.title().is_empty() {
            return self.title().to_owned();
        }
        let url = self.explicit_source_url();
        if !url.is_empty() {
            return file_stem(url).to_owned();
        }
        self.core.one_line_summary()
    }

    fn description(&self) -> String {
        [self.artist(), self.album(), self.genre()]
            .into_iter()
            .find(|value| !value.is_empty())
            .unwrap_or_default()
            .to_owned()
    }

    fn footer(&self) -> String {
        if self.duration().is_some_and(|seconds| seconds > 0.0) {
            return self.formatted_duration();
        }
        if self.size() == 0 {
            return String::new();
        }
        self.formatted_size()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl RegisteredModel for AudioModel {
    const DESCRIPTOR: &'static ModelDescriptor = &DESCRIPTOR;

    fn create(context: ModelContext) -> Self {
        Self::new(context)
    }
}

/// File name after the last `/`, up to its first `.`. URLs without a `/`
/// are returned unchanged.
fn file_stem(url: &str) -> &str {
    let Some((_, name)) = url.rsplit_once('/') else {
        return url;
    };
    name.split_once('.').map_or(name, |(stem, _)| stem)
}

#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "durations are clamped to non-negative whole seconds before the cast"
)]
fn format_duration(seconds: f64) -> String {
    let total = if seconds.is_finite() {
        seconds.max(0.0).round() as u64
    } else {
        0
    };
    let hours = total.div_euclid(3600);
    let minutes = total.rem_euclid(3600).div_euclid(60);
    let secs = total.rem_euclid(60);
    format!("{hours:02}:{minutes:02}:{secs:02}")
}

fn format_kilobytes(bytes: u64) -> String {
    let digits = bytes.div_euclid(1000).to_string();
    let mut grouped = String::with_capacity(digits.len().saturating_add(digits.len().div_euclid(3)));
    for (position, digit) in digits.chars().enumerate() {
        if position > 0 && digits.len().saturating_sub(position).rem_euclid(3) == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped.push('K');
    grouped
}
