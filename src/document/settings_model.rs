use bezier_layout::*;
use flo_binding::*;

///
/// The display settings for a document
///
/// Settings can only be replaced by a valid set of settings: an update that fails validation leaves
/// the previous settings in place.
///
#[derive(Clone)]
pub struct SettingsModel {
    settings: Binding<DisplaySettings>
}

impl SettingsModel {
    ///
    /// Creates a settings model with the default display settings
    ///
    pub fn new() -> SettingsModel {
        SettingsModel {
            settings: bind(DisplaySettings::default())
        }
    }

    ///
    /// Creates a settings model with some initial settings
    ///
    pub fn with_settings(settings: DisplaySettings) -> Result<SettingsModel, ConfigurationError> {
        settings.validate()?;

        Ok(SettingsModel {
            settings: bind(settings)
        })
    }

    ///
    /// Reads the current settings
    ///
    pub fn get(&self) -> DisplaySettings {
        self.settings.get()
    }

    ///
    /// A read-only binding for the current settings
    ///
    pub fn binding(&self) -> BindRef<DisplaySettings> {
        BindRef::from(self.settings.clone())
    }

    ///
    /// Replaces the current settings, provided that the new settings are valid
    ///
    pub fn update(&self, new_settings: DisplaySettings) -> Result<(), ConfigurationError> {
        if let Err(err) = new_settings.validate() {
            warn!("Rejected display settings: {}", err);
            return Err(err);
        }

        self.settings.set(new_settings);
        Ok(())
    }

    ///
    /// Applies a change to the current settings, keeping the old settings if the result is invalid
    ///
    pub fn edit<EditFn: FnOnce(&mut DisplaySettings)>(&self, edit: EditFn) -> Result<(), ConfigurationError> {
        let mut settings = self.get();
        edit(&mut settings);

        self.update(settings)
    }

    ///
    /// Stretches the display bounds so that the grid is square in a viewport
    ///
    pub fn fit_to_aspect_ratio(&self, viewport: Viewport) -> Result<(), ConfigurationError> {
        let mut settings = self.get();
        settings.fit_to_aspect_ratio(viewport)?;

        debug!("Display bounds fitted to {}x{} viewport: {:?}", viewport.width, viewport.height, settings.display_bounds);
        self.update(settings)
    }
}

impl Default for SettingsModel {
    fn default() -> SettingsModel {
        SettingsModel::new()
    }
}
