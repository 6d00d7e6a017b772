// DOM element ids and browser-side timing used by the web frontend.

// Drawing surface
pub const CANVAS_ID: &str = "waveCanvas";

// Harpoon gauge
pub const ENERGY_VALUE_ID: &str = "energyValue";
pub const NEEDLE_ID: &str = "harpoonNeedle";
pub const GLOW_ID: &str = "harpoonGlow";
pub const LEVEL_ID: &str = "powerLevel";

// Lighthouse
pub const POWER_FILL_ID: &str = "lighthousePowerFill";
pub const POWER_NUMERIC_ID: &str = "lighthousePowerNumeric";
pub const INTENSITY_LABEL_ID: &str = "beamIntensityLabel";
pub const LIGHT_CORE_ID: &str = "lightCore";
pub const LIGHT_BEAM_ID: &str = "lightBeam";

// Overlay panel
pub const PANEL_ID: &str = "miniDashboard";
pub const PANEL_HEADER_ID: &str = "miniHeader";
pub const PANEL_TOGGLE_ID: &str = "miniToggle";
pub const STAGE_SELECTOR: &str = ".simulator-stage";
pub const COLLAPSED_ATTR: &str = "data-collapsed";
pub const DRAGGING_CLASS: &str = "dragging";
pub const CUSTOM_POSITION_CLASS: &str = "custom-position";

// Let the browser settle its new viewport before measuring after rotation
pub const ORIENTATION_RESIZE_DELAY_MS: i32 = 100;

pub const DEPTH_FONT_FAMILY: &str = "Arial";
