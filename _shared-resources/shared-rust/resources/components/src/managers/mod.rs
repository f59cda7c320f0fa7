// Managers module
// Configuration-driven construction of tab bars

pub mod tab_bar;

pub use tab_bar::{
    TabBarColorsYaml,
    TabBarConfig,
    TabBarConfigError,
    TabBarConfigYaml,
    TabBarDefaults,
    TabBarVariant,
    PageTransition,
    convert_tab_bar_config,
    create_tab_bar_from_config,
    validate_tab_items,
};
