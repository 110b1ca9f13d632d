mod other_settings;
mod settings;

pub use other_settings::*;
pub use settings::*;
