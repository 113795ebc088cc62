//! Root composition state, independent of how it is painted.

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::{Config, display_host};
use crate::contact::{ContactModal, MailHandoff, MailtoRequest};
use crate::glitch::GlitchTitle;
use crate::i18n::{Language, Translations};
use crate::loading::LoadingSequence;
use crate::particles::ParticleField;
use crate::theme::Theme;

pub struct Page {
    language: Language,
    theme: Theme,
    host: String,
    loading: LoadingSequence,
    title: GlitchTitle,
    pub contact: ContactModal,
    field: ParticleField,
    rng: StdRng,
}

impl Page {
    pub fn new(config: &Config, viewport: [f32; 2], now: f64) -> Self {
        Self::with_rng(config, viewport, now, StdRng::from_entropy())
    }

    pub fn with_rng(config: &Config, viewport: [f32; 2], now: f64, mut rng: StdRng) -> Self {
        let [width, height] = viewport;
        let language = config.language;
        log::info!(
            "page starting: lang={language} theme={} host={}",
            config.theme,
            config.host
        );
        Self {
            language,
            theme: config.theme,
            host: display_host(&config.host).to_string(),
            loading: LoadingSequence::start(now),
            title: GlitchTitle::new(
                language.translations().title,
                language.direction(),
                now,
            ),
            contact: ContactModal::default(),
            field: ParticleField::with_rng(width, height, &mut rng),
            rng,
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// The whole record for the active language.
    pub fn text(&self) -> &'static Translations {
        self.language.translations()
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn is_loading(&self, now: f64) -> bool {
        self.loading.is_loading(now)
    }

    pub fn loading_progress(&self, now: f64) -> f32 {
        self.loading.progress(now)
    }

    pub fn title(&self) -> &GlitchTitle {
        &self.title
    }

    pub fn title_mut(&mut self) -> &mut GlitchTitle {
        &mut self.title
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    pub fn field_mut(&mut self) -> &mut ParticleField {
        &mut self.field
    }

    pub fn set_language(&mut self, language: Language, now: f64) {
        if language == self.language {
            return;
        }
        log::debug!("language {} -> {}", self.language, language);
        self.language = language;
        self.title
            .set_text(language.translations().title, language.direction(), now);
    }

    pub fn set_theme(&mut self, theme: Theme) {
        if theme == self.theme {
            return;
        }
        log::debug!("theme {} -> {}", self.theme, theme);
        self.theme = theme;
        self.reseed_field();
    }

    pub fn toggle_theme(&mut self) {
        self.set_theme(self.theme.toggled());
    }

    /// Replaces the particle field with a fresh random one of the same size,
    /// keeping the last known pointer.
    fn reseed_field(&mut self) {
        let pointer = self.field.pointer;
        self.field = ParticleField::with_rng(self.field.width, self.field.height, &mut self.rng);
        self.field.set_pointer(pointer);
        log::debug!("particle field reseeded with {} particles", self.field.particles.len());
    }

    /// False while the window has no area to draw the field on.
    pub fn has_surface(&self) -> bool {
        self.field.width > 0.0 && self.field.height > 0.0
    }

    /// Advances the particle field by one frame, unless there is no surface.
    pub fn step_field(&mut self) {
        if self.has_surface() {
            self.field.step();
        }
    }

    pub fn resize(&mut self, viewport: [f32; 2]) {
        let [width, height] = viewport;
        if (width, height) != (self.field.width, self.field.height) {
            self.field.resize(width, height);
        }
    }

    pub fn open_contact(&mut self) {
        self.contact.open();
    }

    pub fn submit_contact<H: MailHandoff + ?Sized>(
        &mut self,
        handoff: &mut H,
    ) -> Option<MailtoRequest> {
        self.contact.submit(handoff)
    }
}
